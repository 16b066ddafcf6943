use super::chat::ChatCompletionsClient;
use crate::factory::GeneratorConfig;
use crate::provider::{GameGenerator, ProgressFn};
use crate::vendor::{VendorDescriptor, OPENAI};
use crate::{Error, GenerationRequest};

/// OpenAI chat completions adapter.
///
/// Sends presence and frequency penalties and adds a pacing constraint for
/// Flappy Bird prompts.
#[derive(Debug, Clone)]
pub struct OpenAIGenerator {
    client: ChatCompletionsClient,
}

impl OpenAIGenerator {
    /// Create a generator with a default credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(&GeneratorConfig::openai(api_key))
    }

    /// Create a generator with custom base URL.
    pub fn new_with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::from_config(&GeneratorConfig::openai(api_key).with_base_url(base_url))
    }

    /// Create a generator from explicit configuration.
    ///
    /// The credential may be left out and supplied per request instead.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, Error> {
        Ok(Self {
            client: ChatCompletionsClient::new(&OPENAI, config)?,
        })
    }

    pub fn client(&self) -> &ChatCompletionsClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl GameGenerator for OpenAIGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<String, Error> {
        self.client.generate(request, on_progress).await
    }

    fn set_credential(&mut self, api_key: String) {
        self.client.set_credential(api_key);
    }

    fn vendor(&self) -> &'static VendorDescriptor {
        &OPENAI
    }
}
