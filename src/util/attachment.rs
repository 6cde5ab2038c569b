//! Local preview lifecycle for the pending attachment.
//!
//! Previews are object URLs (`URL.createObjectURL`), created synchronously
//! on selection and revoked when the attachment is discarded. URLs that move
//! onto a sent message stay alive for the life of the transcript.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

#[cfg(feature = "csr")]
use crate::state::chat::Attachment;

/// Whether `url` was minted by `URL.createObjectURL` and needs revoking.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Short label for a non-image attachment chip.
pub fn display_name(file_name: &str) -> String {
    const MAX_CHARS: usize = 24;
    if file_name.chars().count() <= MAX_CHARS {
        return file_name.to_owned();
    }
    let head: String = file_name.chars().take(MAX_CHARS - 1).collect();
    format!("{head}…")
}

/// First file currently selected in `input`, if any.
#[cfg(feature = "csr")]
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.get(0)
}

/// Reset the file input so the same file can be picked again.
#[cfg(feature = "csr")]
pub fn clear_input(input: &web_sys::HtmlInputElement) {
    input.set_value("");
}

/// Build the pending attachment for `file`, minting its preview URL.
///
/// # Errors
///
/// Returns the JS exception if the browser refuses to create the URL.
#[cfg(feature = "csr")]
pub fn preview(file: &web_sys::File) -> Result<Attachment, wasm_bindgen::JsValue> {
    let preview_url = web_sys::Url::create_object_url_with_blob(file)?;
    Ok(Attachment { file_name: file.name(), content_type: file.type_(), preview_url })
}

/// Release the preview URL of a discarded attachment.
#[cfg(feature = "csr")]
pub fn release(attachment: &Attachment) {
    if !is_object_url(&attachment.preview_url) {
        return;
    }
    if let Err(err) = web_sys::Url::revoke_object_url(&attachment.preview_url) {
        log::warn!("failed to revoke preview for {}: {err:?}", attachment.file_name);
    }
}
