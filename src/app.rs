//! Root component and browser entry points.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;
use crate::state::{chat::ChatState, ui::UiState};

/// Root application component.
///
/// Provides the widget's state and config contexts. Each mount gets its own
/// instance, so two widgets on one page never share a transcript.
#[component]
pub fn ChatApp(config: WidgetConfig) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(ui);
    provide_context(config);

    view! { <ChatWidget/> }
}

/// Mount a chat widget into `target`, reading config from its `data-*`
/// attributes.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_chat_widget(target: web_sys::HtmlElement) {
    let config = WidgetConfig::from_element(&target);
    init_logging(config.log_level);
    log::info!("mounting chat widget against {}", config.endpoint);

    leptos::mount::mount_to(target, move || view! { <ChatApp config/> }).forget();
}

#[cfg(feature = "csr")]
fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}
