#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the chat widget chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub emoji_picker_open: bool,
}

/// Where a document click landed relative to the emoji picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the picker container.
    Picker,
    /// On the button that toggles the picker.
    ToggleButton,
    Elsewhere,
}

impl UiState {
    /// Flip picker visibility, returning the new value.
    pub fn toggle_emoji_picker(&mut self) -> bool {
        self.emoji_picker_open = !self.emoji_picker_open;
        self.emoji_picker_open
    }

    pub fn close_emoji_picker(&mut self) {
        self.emoji_picker_open = false;
    }

    /// Whether a document click should close the picker.
    ///
    /// The toggle button handles its own clicks, so only clicks outside both
    /// the picker and the button count.
    pub fn closes_on_click(&self, target: ClickTarget) -> bool {
        self.emoji_picker_open && target == ClickTarget::Elsewhere
    }
}
