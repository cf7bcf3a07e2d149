//! Text-entry prompt contract used by the add flow.

/// Fixed texts of the add-name prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRequest {
    pub title: &'static str,
    pub message: &'static str,
    pub save_label: &'static str,
    pub cancel_label: &'static str,
}

/// Prompt shown by `ListScreen::on_add_requested`.
pub const ADD_NAME_PROMPT: PromptRequest = PromptRequest {
    title: "New Name",
    message: "Add a new name",
    save_label: "Save",
    cancel_label: "Cancel",
};

/// Choice the user made in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Entered text, possibly empty.
    Save(String),
    Cancel,
}

/// Modal one-field text prompt implemented by the host UI.
pub trait NamePrompt {
    /// Presents the prompt and blocks until the user picks a choice.
    fn ask(&mut self, request: &PromptRequest) -> PromptOutcome;
}

/// Prompt that answers with a preset outcome. Useful for scripted hosts.
#[derive(Debug, Clone)]
pub struct FixedPrompt(pub PromptOutcome);

impl NamePrompt for FixedPrompt {
    fn ask(&mut self, _request: &PromptRequest) -> PromptOutcome {
        self.0.clone()
    }
}
