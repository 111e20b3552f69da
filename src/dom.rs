use idol_core::HostError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_error(e: JsValue) -> HostError {
    HostError::Call(format!("{:?}", e))
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] listen {}: {:?}", event, e);
    }
    closure.forget();
}

/// Listener removed by the browser after its first call.
pub fn add_listener_once(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] listen once {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_| handler());
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Plain JS property read. `undefined`, `null` and failed reads are `None`.
pub fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// A-Frame's three-argument `setAttribute(component, property, value)`,
/// which `web-sys` doesn't expose.
pub fn set_component_property(
    el: &web::Element,
    component: &str,
    property: &str,
    value: &JsValue,
) -> Result<(), HostError> {
    let set = js_sys::Reflect::get(el.as_ref(), &JsValue::from_str("setAttribute"))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| HostError::Call("setAttribute is not callable".into()))?;
    set.call3(
        el.as_ref(),
        &JsValue::from_str(component),
        &JsValue::from_str(property),
        value,
    )
    .map(|_| ())
    .map_err(js_error)
}
