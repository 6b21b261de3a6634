//! Values read from the hosting browser. Empty outside a browser.

#[cfg(target_arch = "wasm32")]
pub fn referrer() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .map(|document| document.referrer())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn user_agent() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn referrer() -> String {
    String::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn user_agent() -> String {
    String::new()
}
