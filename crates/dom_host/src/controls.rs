use crate::node::{Id, Node};
use selection_gate::{FreeTextControl, SelectionControl, accepts_free_text_type};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Select,
    TextInput,
    Other,
}

pub fn control_kind(node: &Node) -> ControlKind {
    if node.is_element("select") {
        return ControlKind::Select;
    }
    if !node.is_element("input") {
        return ControlKind::Other;
    }

    if accepts_free_text_type(node.attr("type").unwrap_or("")) {
        ControlKind::TextInput
    } else {
        ControlKind::Other
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct SelectState {
    pub value: String,
    pub options: Vec<String>,
    pub disabled: bool,
}

impl SelectState {
    pub(crate) fn from_node(node: &Node) -> Self {
        struct Opt {
            value: String,
            selected: bool,
            disabled: bool,
        }

        fn walk(node: &Node, out: &mut Vec<Opt>) {
            for child in node.children() {
                if child.is_element("option") {
                    out.push(Opt {
                        value: option_value(child),
                        selected: child.has_attr("selected"),
                        disabled: child.has_attr("disabled"),
                    });
                } else if child.is_element("optgroup") {
                    walk(child, out);
                }
            }
        }

        let mut opts = Vec::new();
        walk(node, &mut opts);

        // Single-select: the last `selected` option wins, otherwise the first enabled one.
        let value = opts
            .iter()
            .rev()
            .find(|o| o.selected)
            .or_else(|| opts.iter().find(|o| !o.disabled))
            .map(|o| o.value.clone())
            .unwrap_or_default();

        Self {
            value,
            options: opts.into_iter().map(|o| o.value).collect(),
            disabled: node.has_attr("disabled"),
        }
    }
}

fn option_value(option: &Node) -> String {
    if let Some(v) = option.attr("value") {
        return v.to_string();
    }
    let mut text = String::new();
    option.collect_text(&mut text);
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Clone, Debug, Default)]
pub(crate) struct TextInputState {
    pub value: String,
    pub disabled: bool,
}

impl TextInputState {
    pub(crate) fn from_node(node: &Node) -> Self {
        Self {
            value: node.attr("value").unwrap_or("").to_string(),
            disabled: node.has_attr("disabled"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputSnapshot {
    pub value: String,
    pub disabled: bool,
}

/// Handle to a `<select>` owned by a [`MemoryDocument`](crate::MemoryDocument).
#[derive(Clone, Debug)]
pub struct SelectHandle {
    pub(crate) node: Id,
    pub(crate) state: Rc<RefCell<SelectState>>,
}

impl SelectHandle {
    pub fn node_id(&self) -> Id {
        self.node
    }
}

impl SelectionControl for SelectHandle {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }
}

/// Handle to a text `<input>` owned by a [`MemoryDocument`](crate::MemoryDocument).
///
/// Writes through the handle are counted in the document's mutation counter.
#[derive(Clone, Debug)]
pub struct TextInputHandle {
    pub(crate) node: Id,
    pub(crate) state: Rc<RefCell<TextInputState>>,
    pub(crate) mutations: Rc<Cell<u64>>,
}

impl TextInputHandle {
    pub fn node_id(&self) -> Id {
        self.node
    }

    fn bump(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

impl FreeTextControl for TextInputHandle {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.bump();
        self.state.borrow_mut().value = value.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.bump();
        self.state.borrow_mut().disabled = disabled;
    }
}
