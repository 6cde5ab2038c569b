//! One transcript entry, plus the thinking placeholder.

use leptos::prelude::*;

use crate::state::chat::{Attachment, ChatMessage};
use crate::util::attachment::display_name;

/// A rendered user or bot message.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_from_user();
    let ChatMessage { text, attachment, .. } = message;

    view! {
        <div class="message" class:user-message=is_user class:bot-message=!is_user>
            {(!is_user).then(|| view! { <BotAvatar/> })}
            <div class="message-text">{text}</div>
            {attachment.map(|attachment| view! { <AttachmentThumb attachment/> })}
        </div>
    }
}

/// Transient bot entry shown while a reply is pending.
#[component]
pub fn ThinkingIndicator() -> impl IntoView {
    view! {
        <div class="message bot-message thinking" aria-live="polite">
            <BotAvatar/>
            <div class="message-text">
                <div class="thinking-indicator">
                    <div class="dot"></div>
                    <div class="dot"></div>
                    <div class="dot"></div>
                </div>
            </div>
        </div>
    }
}

/// Image preview for image attachments, a name chip for anything else.
#[component]
pub fn AttachmentThumb(attachment: Attachment) -> impl IntoView {
    if attachment.is_image() {
        view! { <img class="attachment" src=attachment.preview_url alt=attachment.file_name/> }.into_any()
    } else {
        let label = display_name(&attachment.file_name);
        view! {
            <span class="attachment attachment--file" title=attachment.file_name>
                {label}
            </span>
        }
        .into_any()
    }
}

#[component]
fn BotAvatar() -> impl IntoView {
    view! {
        <svg class="bot-avatar" width="50" height="50" viewBox="0 0 1024 1024" aria-hidden="true">
            <path d="M738.3 287.6H285.7c-59 0-106.8 47.8-106.8 106.8v303.1c0 59 47.8 106.8 106.8 106.8h81.5v111.1c0 .7.8 1.1 1.4.7l166.9-110.6 41.8-.8h117.4l43.6-.4c59 0 106.8-47.8 106.8-106.8V394.5c0-59-47.8-106.9-106.8-106.9zM351.7 448.2c0-29.5 23.9-53.5 53.5-53.5s53.5 23.9 53.5 53.5-23.9 53.5-53.5 53.5-53.5-23.9-53.5-53.5zm157.9 267.1c-67.8 0-123.8-47.5-132.3-109h264.6c-8.6 61.5-64.5 109-132.3 109zm110-213.7c-29.5 0-53.5-23.9-53.5-53.5s23.9-53.5 53.5-53.5 53.5 23.9 53.5 53.5-23.9 53.5-53.5 53.5zM867.2 644.5V453.1h26.5c19.4 0 35.1 15.7 35.1 35.1v121.1c0 19.4-15.7 35.1-35.1 35.1h-26.5zM95.2 609.4V488.2c0-19.4 15.7-35.1 35.1-35.1h26.5v191.3h-26.5c-19.4 0-35.1-15.7-35.1-35.1zM561.5 149.6c0 23.4-15.6 43.3-36.9 49.7v44.9h-30v-44.9c-21.4-6.5-36.9-26.3-36.9-49.7 0-28.6 23.3-51.9 51.9-51.9s51.9 23.3 51.9 51.9z"></path>
        </svg>
    }
}
