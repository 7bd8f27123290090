/// Current `window.innerWidth` in CSS pixels, if a window exists.
#[cfg(target_arch = "wasm32")]
pub fn inner_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn inner_width() -> Option<f64> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn navigate(href: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(href);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(href: &str) {
    log::debug!("navigate to {} skipped outside the browser", href);
}
