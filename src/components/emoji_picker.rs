//! Emoji picker toggle backed by the page's `EmojiMart` library.
//!
//! The picker element is created on first open and reused afterwards. The
//! instance lives in this component's container, not in a global.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Toggle button plus the container the third-party picker mounts into.
///
/// `on_select` receives the chosen emoji's native text.
#[component]
pub fn EmojiPicker(on_select: Callback<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let picker_mounted = RwSignal::new(false);

    let on_toggle = move |_| {
        let open = ui.try_update(UiState::toggle_emoji_picker).unwrap_or(false);
        if !open || picker_mounted.get_untracked() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            match emoji_mart::mount_picker(&container, on_select) {
                Ok(()) => picker_mounted.set(true),
                Err(err) => {
                    log::warn!("emoji picker unavailable: {err:?}");
                    ui.update(UiState::close_emoji_picker);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = on_select;
        }
    };

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let target = emoji_mart::classify_click(&ev, container_ref, toggle_ref);
            if ui.with_untracked(|s| s.closes_on_click(target)) {
                ui.update(UiState::close_emoji_picker);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <button
            type="button"
            id="emoji-picker"
            class="material-symbols-outlined"
            title="Insert emoji"
            node_ref=toggle_ref
            on:click=on_toggle
        >
            "sentiment_satisfied"
        </button>
        <div class="emoji-picker-container" node_ref=container_ref></div>
    }
}

#[cfg(feature = "csr")]
mod emoji_mart {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::net::types::EmojiSelection;
    use crate::state::ui::ClickTarget;

    /// Construct `new EmojiMart.Picker({ onEmojiSelect })` and append it to
    /// `container`.
    pub(super) fn mount_picker(container: &web_sys::HtmlDivElement, on_select: Callback<String>) -> Result<(), JsValue> {
        let namespace = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("EmojiMart"))?;
        let ctor: js_sys::Function = js_sys::Reflect::get(&namespace, &JsValue::from_str("Picker"))?.dyn_into()?;

        let on_emoji = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            match serde_wasm_bindgen::from_value::<EmojiSelection>(value) {
                Ok(selection) => on_select.run(selection.native),
                Err(err) => log::warn!("unexpected emoji payload: {err}"),
            }
        });
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("onEmojiSelect"), on_emoji.as_ref())?;
        // The picker keeps calling back for as long as the page lives.
        on_emoji.forget();

        let picker: web_sys::Node = js_sys::Reflect::construct(&ctor, &js_sys::Array::of1(&options))?.dyn_into()?;
        container.append_child(&picker)?;
        Ok(())
    }

    /// Locate a document click relative to the picker and its toggle.
    pub(super) fn classify_click(
        ev: &web_sys::MouseEvent,
        container: NodeRef<leptos::html::Div>,
        toggle: NodeRef<leptos::html::Button>,
    ) -> ClickTarget {
        let Some(node) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return ClickTarget::Elsewhere;
        };
        if container.get_untracked().is_some_and(|c| c.contains(Some(&node))) {
            ClickTarget::Picker
        } else if toggle.get_untracked().is_some_and(|b| b.contains(Some(&node))) {
            ClickTarget::ToggleButton
        } else {
            ClickTarget::Elsewhere
        }
    }
}
