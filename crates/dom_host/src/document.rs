use crate::controls::{
    ControlKind, SelectHandle, SelectState, TextInputHandle, TextInputSnapshot, TextInputState,
    control_kind,
};
use crate::node::{Id, Node};
use selection_gate::{ChangeListener, ControlHost, HostError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

const LOG_TARGET: &str = "dom_host";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
}

#[derive(Clone, Debug)]
enum ControlSlot {
    Select(Rc<RefCell<SelectState>>),
    TextInput(Rc<RefCell<TextInputState>>),
    Other,
}

#[derive(Clone, Debug)]
struct ElementEntry {
    node: Id,
    slot: ControlSlot,
}

type ReadyCallback = Box<dyn FnOnce(&MemoryDocument)>;
type SharedListener = Rc<RefCell<ChangeListener>>;

/// Single-threaded in-memory document.
///
/// Element state lives behind `Rc<RefCell<_>>` so control handles and the
/// document observe the same values. Listeners registered through
/// [`ControlHost::listen_change`] live as long as the document.
pub struct MemoryDocument {
    by_id: HashMap<String, ElementEntry>,
    listeners: RefCell<HashMap<Id, Vec<SharedListener>>>,
    ready: Cell<ReadyState>,
    ready_callbacks: RefCell<Vec<ReadyCallback>>,
    mutations: Rc<Cell<u64>>,
}

impl MemoryDocument {
    pub fn from_tree(root: &Node) -> Self {
        fn walk(node: &Node, by_id: &mut HashMap<String, ElementEntry>) {
            if let Node::Element { .. } = node
                && let Some(id) = node.attr("id").filter(|id| !id.is_empty())
                && !by_id.contains_key(id)
            {
                // First element in tree order owns the id.
                let slot = match control_kind(node) {
                    ControlKind::Select => {
                        ControlSlot::Select(Rc::new(RefCell::new(SelectState::from_node(node))))
                    }
                    ControlKind::TextInput => ControlSlot::TextInput(Rc::new(RefCell::new(
                        TextInputState::from_node(node),
                    ))),
                    ControlKind::Other => ControlSlot::Other,
                };
                by_id.insert(
                    id.to_string(),
                    ElementEntry {
                        node: node.id(),
                        slot,
                    },
                );
            }
            for c in node.children() {
                walk(c, by_id);
            }
        }

        let mut by_id = HashMap::new();
        walk(root, &mut by_id);

        Self {
            by_id,
            listeners: RefCell::new(HashMap::new()),
            ready: Cell::new(ReadyState::Loading),
            ready_callbacks: RefCell::new(Vec::new()),
            mutations: Rc::new(Cell::new(0)),
        }
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready.get()
    }

    /// Run `callback` once the document has been parsed.
    ///
    /// If parsing already finished, the callback runs immediately.
    pub fn on_ready(&self, callback: impl FnOnce(&MemoryDocument) + 'static) {
        match self.ready.get() {
            ReadyState::Interactive => callback(self),
            ReadyState::Loading => self.ready_callbacks.borrow_mut().push(Box::new(callback)),
        }
    }

    /// Mark parsing as done and fire the ready callbacks. Later calls are no-ops.
    pub fn finish_parsing(&self) {
        if self.ready.get() == ReadyState::Interactive {
            return;
        }
        self.ready.set(ReadyState::Interactive);

        let callbacks = std::mem::take(&mut *self.ready_callbacks.borrow_mut());
        log::trace!(target: LOG_TARGET, "ready: {} callback(s)", callbacks.len());
        for callback in callbacks {
            callback(self);
        }
    }

    /// User picks the option with `value`; fires `change` if the value changed.
    ///
    /// Returns `false` when there is no such select or option, the select is
    /// disabled, or the option was already selected.
    pub fn select_option(&self, id: &str, value: &str) -> bool {
        let Some((node, state)) = self.select_state(id) else {
            return false;
        };

        {
            let mut state = state.borrow_mut();
            if state.disabled || state.value == value || !state.options.iter().any(|o| o == value)
            {
                return false;
            }
            state.value = value.to_string();
        }

        self.fire_change(node);
        true
    }

    /// Set a select's value without an event, as history restoration does.
    pub fn restore_select_value(&self, id: &str, value: &str) -> bool {
        let Some((_, state)) = self.select_state(id) else {
            return false;
        };
        let mut state = state.borrow_mut();
        if !state.options.iter().any(|o| o == value) {
            return false;
        }
        state.value = value.to_string();
        true
    }

    /// Fire `change` on the element with `id` regardless of its value.
    pub fn dispatch_change(&self, id: &str) -> bool {
        let Some(entry) = self.by_id.get(id) else {
            return false;
        };
        self.fire_change(entry.node);
        true
    }

    /// User types into a text input. Disabled inputs ignore typing.
    pub fn type_text(&self, id: &str, text: &str) -> bool {
        let Some(state) = self.text_state(id) else {
            return false;
        };
        let mut state = state.borrow_mut();
        if state.disabled {
            return false;
        }
        state.value.push_str(text);
        true
    }

    /// Script-side value write that bypasses the disabled check.
    pub fn set_text_value(&self, id: &str, value: &str) -> bool {
        let Some(state) = self.text_state(id) else {
            return false;
        };
        state.borrow_mut().value = value.to_string();
        true
    }

    pub fn set_text_disabled(&self, id: &str, disabled: bool) -> bool {
        let Some(state) = self.text_state(id) else {
            return false;
        };
        state.borrow_mut().disabled = disabled;
        true
    }

    pub fn text_input(&self, id: &str) -> Option<TextInputSnapshot> {
        let state = self.text_state(id)?;
        let state = state.borrow();
        Some(TextInputSnapshot {
            value: state.value.clone(),
            disabled: state.disabled,
        })
    }

    pub fn select_value(&self, id: &str) -> Option<String> {
        let (_, state) = self.select_state(id)?;
        let value = state.borrow().value.clone();
        Some(value)
    }

    pub fn listener_count(&self, id: &str) -> usize {
        let Some(entry) = self.by_id.get(id) else {
            return 0;
        };
        self.listeners
            .borrow()
            .get(&entry.node)
            .map_or(0, |list| list.len())
    }

    pub fn total_listener_count(&self) -> usize {
        self.listeners.borrow().values().map(Vec::len).sum()
    }

    /// Number of property writes made through control handles.
    pub fn mutation_count(&self) -> u64 {
        self.mutations.get()
    }

    fn select_state(&self, id: &str) -> Option<(Id, Rc<RefCell<SelectState>>)> {
        match self.by_id.get(id) {
            Some(ElementEntry {
                node,
                slot: ControlSlot::Select(state),
            }) => Some((*node, Rc::clone(state))),
            _ => None,
        }
    }

    fn text_state(&self, id: &str) -> Option<Rc<RefCell<TextInputState>>> {
        match self.by_id.get(id) {
            Some(ElementEntry {
                slot: ControlSlot::TextInput(state),
                ..
            }) => Some(Rc::clone(state)),
            _ => None,
        }
    }

    fn fire_change(&self, node: Id) {
        // Snapshot so listeners may register further listeners while dispatching.
        let targets: Vec<SharedListener> = self
            .listeners
            .borrow()
            .get(&node)
            .cloned()
            .unwrap_or_default();

        log::trace!(
            target: LOG_TARGET,
            "change on node {} -> {} listener(s)",
            node.0,
            targets.len()
        );

        for listener in targets {
            // A listener already on the stack is not re-entered.
            if let Ok(mut listener) = listener.try_borrow_mut() {
                let callback: &mut dyn FnMut() = &mut **listener;
                callback();
            }
        }
    }
}

impl ControlHost for MemoryDocument {
    type Selection = SelectHandle;
    type FreeText = TextInputHandle;

    fn selection_control(&self, id: &str) -> Option<SelectHandle> {
        let (node, state) = self.select_state(id)?;
        Some(SelectHandle { node, state })
    }

    fn free_text_control(&self, id: &str) -> Option<TextInputHandle> {
        let entry = self.by_id.get(id)?;
        let ControlSlot::TextInput(state) = &entry.slot else {
            return None;
        };
        Some(TextInputHandle {
            node: entry.node,
            state: Rc::clone(state),
            mutations: Rc::clone(&self.mutations),
        })
    }

    fn listen_change(
        &self,
        target: &SelectHandle,
        listener: ChangeListener,
    ) -> Result<(), HostError> {
        self.listeners
            .borrow_mut()
            .entry(target.node)
            .or_default()
            .push(Rc::new(RefCell::new(listener)));
        Ok(())
    }
}
