use crate::constants::{affordance_label, notification_class, ACTIVE_CLASS};
use crate::dom;
use idol_core::{Affordance, HostError, Notification, NotificationKind};
use web_sys as web;

pub fn set_affordance(button: &web::HtmlButtonElement, affordance: Affordance) {
    let cl = button.class_list();
    match affordance {
        Affordance::Playing => {
            button.set_text_content(Some(affordance_label(true)));
            let _ = cl.add_1(ACTIVE_CLASS);
        }
        Affordance::Paused => {
            button.set_text_content(Some(affordance_label(false)));
            let _ = cl.remove_1(ACTIVE_CLASS);
        }
        Affordance::Disabled => {
            button.set_disabled(true);
            let _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
}

/// Append a visible message element to `<body>`.
pub fn mount_notification(
    document: &web::Document,
    notification: &Notification,
) -> Result<web::Element, HostError> {
    let body = document
        .body()
        .ok_or_else(|| HostError::Call("document has no body".into()))?;
    let el = document.create_element("div").map_err(dom::js_error)?;
    el.set_class_name(notification_class(
        notification.kind == NotificationKind::Error,
    ));
    el.set_text_content(Some(&notification.message));
    body.append_child(&el).map_err(dom::js_error)?;
    dom::set_style(&el, "display", "block");
    Ok(el)
}

#[inline]
pub fn fade(el: &web::Element) {
    dom::set_style(el, "opacity", "0");
}
