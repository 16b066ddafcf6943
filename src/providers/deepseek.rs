use super::chat::ChatCompletionsClient;
use crate::factory::GeneratorConfig;
use crate::provider::{GameGenerator, ProgressFn};
use crate::vendor::{VendorDescriptor, DEEPSEEK};
use crate::{Error, GenerationRequest};

/// Deepseek chat completions adapter.
#[derive(Debug, Clone)]
pub struct DeepseekGenerator {
    client: ChatCompletionsClient,
}

impl DeepseekGenerator {
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(&GeneratorConfig::deepseek(api_key))
    }

    pub fn new_with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::from_config(&GeneratorConfig::deepseek(api_key).with_base_url(base_url))
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, Error> {
        Ok(Self {
            client: ChatCompletionsClient::new(&DEEPSEEK, config)?,
        })
    }

    pub fn client(&self) -> &ChatCompletionsClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl GameGenerator for DeepseekGenerator {
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
        &DEEPSEEK
    }
}
