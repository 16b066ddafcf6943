/// A single game generation attempt.
///
/// Built once per attempt and never mutated afterwards. Empty strings for the
/// icon or the credential are treated the same as absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    game_type: String,
    custom_icon: Option<String>,
    api_key: Option<String>,
}

impl GenerationRequest {
    /// Create a request for `game_type` with a free-text requirement.
    pub fn new(game_type: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            game_type: game_type.into(),
            custom_icon: None,
            api_key: None,
        }
    }

    /// Ask the model to use a specific icon (emoji or short description).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.custom_icon = non_empty(icon.into());
        self
    }

    /// Override the generator's credential for this attempt only.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = non_empty(api_key.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn game_type(&self) -> &str {
        &self.game_type
    }

    pub fn custom_icon(&self) -> Option<&str> {
        self.custom_icon.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
