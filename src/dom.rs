use crate::constants::CAPABILITY_PROPERTY;
use crate::error::ClassError;
use crate::toggler::{ClassElement, ClassToggler};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `"classList" in document.documentElement`
pub fn class_list_supported(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|root| {
            js_sys::Reflect::has(&root, &JsValue::from_str(CAPABILITY_PROPERTY)).unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Detect the capability once and build a toggler around it.
pub fn detect_toggler(document: &web::Document) -> ClassToggler {
    let supported = class_list_supported(document);
    log::info!("[class] classList support: {}", supported);
    ClassToggler::from_capability(supported)
}

/// All elements currently matching `selector`.
pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>, ClassError> {
    let nodes = document.query_selector_all(selector).map_err(dom_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

fn dom_error(err: JsValue) -> ClassError {
    ClassError::Dom(format!("{:?}", err))
}

impl ClassElement for web::Element {
    fn class_attr(&self) -> String {
        self.class_name()
    }

    fn set_class_attr(&self, value: &str) {
        self.set_class_name(value);
    }

    fn list_add(&self, class_name: &str) -> Result<(), ClassError> {
        self.class_list().add_1(class_name).map_err(dom_error)
    }

    fn list_remove(&self, class_name: &str) -> Result<(), ClassError> {
        self.class_list().remove_1(class_name).map_err(dom_error)
    }

    fn list_contains(&self, class_name: &str) -> bool {
        self.class_list().contains(class_name)
    }
}
