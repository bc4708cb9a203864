use selection_gate::{
    ChangeListener, ControlHost, FreeTextControl, HostError, SelectionControl,
    accepts_free_text_type,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement, HtmlSelectElement};

#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }

    pub fn raw(&self) -> &Document {
        &self.document
    }
}

#[derive(Clone, Debug)]
pub struct WebSelect(pub HtmlSelectElement);

impl SelectionControl for WebSelect {
    fn value(&self) -> String {
        self.0.value()
    }
}

#[derive(Clone, Debug)]
pub struct WebTextInput(pub HtmlInputElement);

impl FreeTextControl for WebTextInput {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

impl ControlHost for WebDocument {
    type Selection = WebSelect;
    type FreeText = WebTextInput;

    fn selection_control(&self, id: &str) -> Option<WebSelect> {
        let element = self.document.get_element_by_id(id)?;
        element.dyn_into::<HtmlSelectElement>().ok().map(WebSelect)
    }

    fn free_text_control(&self, id: &str) -> Option<WebTextInput> {
        let element = self.document.get_element_by_id(id)?;
        element
            .dyn_into::<HtmlInputElement>()
            .ok()
            .filter(|input| accepts_free_text_type(&input.type_()))
            .map(WebTextInput)
    }

    fn listen_change(
        &self,
        target: &WebSelect,
        mut listener: ChangeListener,
    ) -> Result<(), HostError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| listener());
        target
            .0
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|err| HostError::new(describe_js_error(&err)))?;
        // Page-lifetime listener; the closure must outlive this call.
        closure.forget();
        Ok(())
    }
}

pub(crate) fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
