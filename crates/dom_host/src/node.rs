#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Document {
        id: Id,
        children: Vec<Node>,
    },
    Element {
        id: Id,
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        id: Id,
        text: String,
    },
    Comment {
        id: Id,
        text: String,
    },
}

impl Node {
    pub fn document(children: Vec<Node>) -> Self {
        Node::Document {
            id: Id(0),
            children,
        }
    }

    pub fn element(
        id: u32,
        name: &str,
        attributes: Vec<(&str, Option<&str>)>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            id: Id(id),
            name: name.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                .collect(),
            children,
        }
    }

    pub fn text(id: u32, text: &str) -> Self {
        Node::Text {
            id: Id(id),
            text: text.to_string(),
        }
    }

    pub fn comment(id: u32, text: &str) -> Self {
        Node::Comment {
            id: Id(id),
            text: text.to_string(),
        }
    }

    pub fn id(&self) -> Id {
        match self {
            Node::Document { id, .. } => *id,
            Node::Element { id, .. } => *id,
            Node::Text { id, .. } => *id,
            Node::Comment { id, .. } => *id,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } | Node::Element { children, .. } => children,
            Node::Text { .. } | Node::Comment { .. } => &[],
        }
    }

    pub fn is_element(&self, tag: &str) -> bool {
        matches!(self, Node::Element { name, .. } if name.eq_ignore_ascii_case(tag))
    }

    /// Attribute value; `Some("")` for a bare boolean attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match self {
            Node::Element { attributes, .. } => {
                attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
            }
            _ => false,
        }
    }

    pub fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
            Node::Comment { .. } => {}
        }
    }
}
