//! CSRF token lookup from `document.cookie`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::borrow::Cow;

/// Find `name` in a `document.cookie` style string and percent-decode it.
///
/// Values that do not decode to UTF-8 are returned raw.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies.split(';').map(str::trim).find_map(|pair| {
        let value = pair.strip_prefix(name)?.strip_prefix('=')?;
        Some(urlencoding::decode(value).map_or_else(|_| value.to_owned(), Cow::into_owned))
    })
}

/// Read cookie `name` from the current document.
#[cfg(feature = "csr")]
pub fn document_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    find_cookie(&cookies, name)
}
