//! Scrolling transcript of chat messages.

use leptos::prelude::*;

use super::message_bubble::{MessageBubble, ThinkingIndicator};
use crate::state::chat::ChatState;

/// Transcript view. Scrolls to the newest entry after every append and
/// whenever the thinking placeholder appears or disappears.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let body_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = body_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-body" node_ref=body_ref>
            <For
                each=move || chat.get().messages
                key=|msg| msg.id.clone()
                children=move |message| view! { <MessageBubble message/> }
            />
            <Show when=move || chat.with(ChatState::is_thinking)>
                <ThinkingIndicator/>
            </Show>
        </div>
    }
}
