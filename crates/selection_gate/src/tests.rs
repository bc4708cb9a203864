use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Default)]
struct FakeSelect {
    value: Rc<RefCell<String>>,
}

impl SelectionControl for FakeSelect {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

#[derive(Clone, Default)]
struct FakeText {
    value: Rc<RefCell<String>>,
    disabled: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl FreeTextControl for FakeText {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = value.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.writes.set(self.writes.get() + 1);
        self.disabled.set(disabled);
    }
}

#[derive(Default)]
struct FakeHost {
    select: Option<FakeSelect>,
    text: Option<FakeText>,
    listeners: RefCell<Vec<ChangeListener>>,
    reject_with: Option<HostError>,
}

impl FakeHost {
    fn with_both(selected: &str, text: &str) -> Self {
        let select = FakeSelect::default();
        *select.value.borrow_mut() = selected.to_string();
        let free_text = FakeText::default();
        *free_text.value.borrow_mut() = text.to_string();
        Self {
            select: Some(select),
            text: Some(free_text),
            ..Self::default()
        }
    }

    fn choose(&self, value: &str) {
        let select = self.select.as_ref().expect("select present");
        *select.value.borrow_mut() = value.to_string();
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    fn text(&self) -> &FakeText {
        self.text.as_ref().expect("text present")
    }
}

impl ControlHost for FakeHost {
    type Selection = FakeSelect;
    type FreeText = FakeText;

    fn selection_control(&self, id: &str) -> Option<FakeSelect> {
        (id == DEFAULT_SELECTION_ID).then(|| self.select.clone()).flatten()
    }

    fn free_text_control(&self, id: &str) -> Option<FakeText> {
        (id == DEFAULT_FREE_TEXT_ID).then(|| self.text.clone()).flatten()
    }

    fn listen_change(
        &self,
        _target: &FakeSelect,
        listener: ChangeListener,
    ) -> Result<(), HostError> {
        if let Some(err) = &self.reject_with {
            return Err(err.clone());
        }
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }
}

#[test]
fn gate_state_follows_emptiness() {
    assert_eq!(GateState::for_selection(""), GateState::Enabled);
    assert_eq!(GateState::for_selection("0"), GateState::Disabled);
    assert_eq!(GateState::for_selection(" "), GateState::Disabled);
    assert!(GateState::Enabled.is_enabled());
    assert!(!GateState::Disabled.is_enabled());
}

#[test]
fn free_text_accepts_text_like_input_types() {
    for ty in ["", "text", "email", "tel", "search", "url", "number", "bogus", " Text "] {
        assert!(accepts_free_text_type(ty), "type={ty:?}");
    }
    for ty in ["hidden", "checkbox", "radio", "file", "button", "submit", "reset", "IMAGE"] {
        assert!(!accepts_free_text_type(ty), "type={ty:?}");
    }
}

#[test]
fn default_config_uses_form_identifiers() {
    let config = GateConfig::default();
    assert_eq!(config.selection_id, "existing_name");
    assert_eq!(config.free_text_id, "new_name");
    assert!(!config.sync_on_init);

    let custom = GateConfig::default()
        .with_selection_id("customer")
        .with_free_text_id("customer_new")
        .with_sync_on_init(true);
    assert_eq!(custom.selection_id, "customer");
    assert_eq!(custom.free_text_id, "customer_new");
    assert!(custom.sync_on_init);
}

#[test]
fn missing_free_text_skips_without_listener() {
    let host = FakeHost {
        select: Some(FakeSelect::default()),
        ..FakeHost::default()
    };

    let outcome = SelectionGate::initialize(&host, &GateConfig::default());

    assert_eq!(
        outcome.skip_reason(),
        Some(&SkipReason::MissingFreeTextControl)
    );
    assert!(host.listeners.borrow().is_empty());
}

#[test]
fn missing_selection_skips_and_leaves_text_untouched() {
    let text = FakeText::default();
    *text.value.borrow_mut() = "Alice".to_string();
    let host = FakeHost {
        text: Some(text.clone()),
        ..FakeHost::default()
    };

    let outcome = SelectionGate::initialize(&host, &GateConfig::default());

    assert_eq!(
        outcome.skip_reason(),
        Some(&SkipReason::MissingSelectionControl)
    );
    assert_eq!(text.writes.get(), 0);
    assert_eq!(text.value(), "Alice");
}

#[test]
fn unknown_identifiers_skip() {
    let host = FakeHost::with_both("", "");
    let config = GateConfig::default().with_free_text_id("other");

    let outcome = SelectionGate::initialize(&host, &config);

    assert!(!outcome.is_bound());
    assert!(host.listeners.borrow().is_empty());
}

#[test]
fn initialize_does_not_touch_text_by_default() {
    let host = FakeHost::with_both("7", "Bob");

    let outcome = SelectionGate::initialize(&host, &GateConfig::default());

    assert!(outcome.is_bound());
    assert_eq!(host.listeners.borrow().len(), 1);
    assert_eq!(host.text().writes.get(), 0);
    assert!(!host.text().is_disabled());
    assert_eq!(host.text().value(), "Bob");
}

#[test]
fn sync_on_init_applies_current_selection() {
    let host = FakeHost::with_both("7", "Bob");
    let config = GateConfig::default().with_sync_on_init(true);

    let outcome = SelectionGate::initialize(&host, &config);

    assert!(outcome.is_bound());
    assert!(host.text().is_disabled());
    assert_eq!(host.text().value(), "");
}

#[test]
fn rejected_listener_is_reported() {
    let mut host = FakeHost::with_both("", "");
    host.reject_with = Some(HostError::new("detached"));

    let outcome = SelectionGate::initialize(&host, &GateConfig::default());

    match outcome.skip_reason() {
        Some(SkipReason::ListenerRejected(err)) => assert_eq!(err.message(), "detached"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        outcome.skip_reason().map(ToString::to_string).as_deref(),
        Some("host rejected listener: detached")
    );
}

#[test]
fn choosing_a_name_disables_and_clears() {
    let host = FakeHost::with_both("", "Alice");
    let _ = SelectionGate::initialize(&host, &GateConfig::default());

    host.choose("42");

    assert!(host.text().is_disabled());
    assert_eq!(host.text().value(), "");
}

#[test]
fn choosing_placeholder_enables_without_restoring() {
    let host = FakeHost::with_both("", "Alice");
    let _ = SelectionGate::initialize(&host, &GateConfig::default());

    host.choose("42");
    host.choose("");

    assert!(!host.text().is_disabled());
    assert_eq!(host.text().value(), "");
}

#[test]
fn placeholder_keeps_current_text() {
    let host = FakeHost::with_both("3", "draft");
    host.text().set_disabled(true);
    let _ = SelectionGate::initialize(&host, &GateConfig::default());

    host.choose("");

    assert!(!host.text().is_disabled());
    assert_eq!(host.text().value(), "draft");
}

#[test]
fn repeated_notification_is_idempotent() {
    let host = FakeHost::with_both("", "Alice");
    let outcome = SelectionGate::initialize(&host, &GateConfig::default());
    let gate = outcome.gate().expect("bound");

    host.choose("9");
    let once = (host.text().is_disabled(), host.text().value());
    assert_eq!(gate.on_selection_changed(), GateState::Disabled);
    let twice = (host.text().is_disabled(), host.text().value());

    assert_eq!(once, twice);
}

#[test]
fn gate_exposes_bound_handles() {
    let host = FakeHost::with_both("5", "");
    let outcome = SelectionGate::initialize(&host, &GateConfig::default());
    let gate = outcome.gate().expect("bound");

    assert_eq!(gate.selection().value(), "5");
    assert_eq!(gate.free_text().value(), "");
}
