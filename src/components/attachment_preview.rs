//! File picker, pending-attachment preview and cancel control.

use leptos::prelude::*;

use super::message_bubble::AttachmentThumb;
use crate::state::chat::ChatState;

/// Hidden file input driven by an upload button, with a preview of the
/// pending attachment and a cancel button.
///
/// Selecting a file only stages it; nothing is sent until the next submit.
/// The pending attachment always mirrors the input, so a dismissed dialog
/// that empties the input also drops the preview.
/// The input element is shared with the parent through `file_input` so the
/// submit handler can read the selected blob.
#[component]
pub fn AttachmentPreview(file_input: NodeRef<leptos::html::Input>, accept: String) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let has_pending = move || chat.with(|c| c.pending.is_some());

    let on_upload_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get_untracked() {
                input.click();
            }
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::util::attachment;

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let staged = attachment::selected_file(&input).and_then(|file| match attachment::preview(&file) {
                Ok(staged) => Some(staged),
                Err(err) => {
                    log::error!("could not preview {}: {err:?}", file.name());
                    attachment::clear_input(&input);
                    None
                }
            });
            if let Some(dropped) = chat.try_update(|c| c.sync_selection(staged)).flatten() {
                attachment::release(&dropped);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_cancel = move |_| {
        let dropped = chat.try_update(ChatState::cancel_attachment).flatten();
        #[cfg(feature = "csr")]
        {
            use crate::util::attachment;

            if let Some(dropped) = &dropped {
                attachment::release(dropped);
            }
            if let Some(input) = file_input.get_untracked() {
                attachment::clear_input(&input);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = dropped;
        }
    };

    view! {
        <div class="file-upload-wrapper" class:file-uploaded=has_pending>
            <input
                type="file"
                id="file-input"
                accept=accept
                hidden=true
                node_ref=file_input
                on:change=on_change
            />
            {move || chat.with(|c| c.pending.clone()).map(|attachment| view! { <AttachmentThumb attachment/> })}
            <button
                type="button"
                id="file-upload"
                class="material-symbols-rounded"
                title="Attach a file"
                on:click=on_upload_click
            >
                "attach_file"
            </button>
            <button
                type="button"
                id="file-cancel"
                class="material-symbols-rounded"
                title="Remove attachment"
                on:click=on_cancel
            >
                "close"
            </button>
        </div>
    }
}
