//! Chat widget: transcript, compose form and the submission workflow.

use leptos::prelude::*;

use super::attachment_preview::AttachmentPreview;
use super::emoji_picker::EmojiPicker;
use super::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

/// The chat widget root.
///
/// Submitting appends the user message at once, shows the thinking
/// placeholder and sends one request; the reply (or a fallback text) replaces
/// the placeholder when it resolves. Submits are ignored while one is in
/// flight.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = StoredValue::new(expect_context::<WidgetConfig>());

    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let do_submit = move || {
        let text = input.get_untracked();
        let submission = match chat.try_update(|c| c.begin_submit(&text)) {
            Some(Ok(submission)) => submission,
            Some(Err(reason)) => {
                log::debug!("submit ignored: {reason}");
                return;
            }
            None => return,
        };
        input.set(String::new());

        #[cfg(feature = "csr")]
        {
            use crate::net::{api, types::ChatRequest};
            use crate::util::attachment;

            let file = file_ref.get_untracked().and_then(|el| {
                let file = submission
                    .attachment
                    .as_ref()
                    .and_then(|_| attachment::selected_file(&el));
                attachment::clear_input(&el);
                file
            });
            if submission.attachment.is_some() && file.is_none() {
                log::warn!("pending attachment has no file in the input; sending text only");
            }
            let request = ChatRequest { message: submission.text, file };
            let config = config.get_value();

            leptos::task::spawn_local(async move {
                let reply = api::send_chat_message(&config, request).await;
                if let Err(err) = &reply {
                    log::error!("chat submission failed: {err}");
                }
                chat.update(|c| c.finish_submit(reply, &config.fallbacks));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            use crate::net::types::ChatError;

            let _ = submission;
            let fallbacks = config.with_value(|c| c.fallbacks.clone());
            chat.update(|c| c.finish_submit(Err(ChatError::Unavailable), &fallbacks));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    let on_emoji = Callback::new(move |emoji: String| {
        #[cfg(feature = "csr")]
        {
            match input_ref.get_untracked() {
                Some(el) => input.set(crate::util::caret::insert_into_textarea(&el, &emoji)),
                None => input.update(|v| v.push_str(&emoji)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            input.update(|v| v.push_str(&emoji));
        }
        ui.update(UiState::close_emoji_picker);
    });

    let accept = config.with_value(|c| c.accept.clone());

    view! {
        <div class="chatbot-popup" class:show-emoji-picker=move || ui.with(|u| u.emoji_picker_open)>
            <MessageList/>
            <div class="chat-footer">
                <form class="chat-form" on:submit=on_submit>
                    <textarea
                        class="message-input"
                        placeholder="Message..."
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <div class="chat-controls">
                        <EmojiPicker on_select=on_emoji/>
                        <AttachmentPreview file_input=file_ref accept/>
                        <button type="submit" id="send-message" class="material-symbols-rounded" title="Send">
                            "arrow_upward"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
