use crate::api::ApiError;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::storage::window;

/// Looks up a required mount point. A missing element is reported, never
/// unwrapped.
pub fn mount_point(id: &str) -> Result<HtmlElement, ApiError> {
    window()?
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ApiError::missing_element(id))
}

pub fn navigate(path: &str) {
    match window() {
        Ok(win) => {
            let location = win.location();
            if location.pathname().ok().as_deref() == Some(path) {
                return;
            }
            if location.set_href(path).is_err() {
                log::error!("navigation to {path} failed");
            }
        }
        Err(err) => log::error!("navigation to {path} failed: {err}"),
    }
}

/// Blocking `alert` notification.
pub fn notify(message: &str) {
    if let Ok(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
