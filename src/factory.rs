use crate::provider::{GameGenerator, ProgressFn};
use crate::providers::{DeepseekGenerator, OpenAIGenerator};
use crate::vendor::{VendorDescriptor, VendorKind};
use crate::{Error, GenerationRequest};
use std::env;
use std::time::Duration;

/// Configuration for creating generators.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub vendor: VendorKind,
    /// Default credential; requests may carry their own instead.
    pub api_key: Option<String>,
    /// Overrides the catalogue base URL (proxies, mock servers).
    pub base_url: Option<String>,
    /// Overrides the catalogue default model.
    pub model: Option<String>,
    pub connect_timeout: Option<Duration>,
}

impl GeneratorConfig {
    /// Configuration for `vendor` with catalogue defaults and no credential.
    pub fn new(vendor: VendorKind) -> Self {
        Self {
            vendor,
            api_key: None,
            base_url: None,
            model: None,
            connect_timeout: None,
        }
    }

    /// Create configuration for the OpenAI vendor.
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::new(VendorKind::OpenAI).with_api_key(api_key)
    }

    /// Create configuration for the Deepseek vendor.
    pub fn deepseek(api_key: impl Into<String>) -> Self {
        Self::new(VendorKind::Deepseek).with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|k| !k.is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Create configuration from environment variables.
    ///
    /// `GAMECRAFT_VENDOR` selects the vendor (`openai` or `deepseek`). Without
    /// it the vendor is inferred from whichever of `OPENAI_API_KEY` and
    /// `DEEPSEEK_API_KEY` is set, OpenAI first. `<VENDOR>_BASE_URL` and
    /// `<VENDOR>_MODEL` override the catalogue defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let vendor = match get("GAMECRAFT_VENDOR") {
            Some(name) => name.parse::<VendorKind>().map_err(|_| {
                Error::config(format!(
                    "Invalid GAMECRAFT_VENDOR '{name}'. Valid values are: openai, deepseek"
                ))
            })?,
            None if get("OPENAI_API_KEY").is_some() => VendorKind::OpenAI,
            None if get("DEEPSEEK_API_KEY").is_some() => VendorKind::Deepseek,
            None => VendorKind::OpenAI,
        };

        let prefix = vendor.descriptor().env_prefix;
        let mut config = Self::new(vendor);
        config.api_key = get(format!("{prefix}_API_KEY").as_str());
        config.base_url = get(format!("{prefix}_BASE_URL").as_str());
        config.model = get(format!("{prefix}_MODEL").as_str());
        Ok(config)
    }
}

/// A generator for one of the supported vendors.
#[derive(Debug, Clone)]
pub enum Generator {
    OpenAI(OpenAIGenerator),
    Deepseek(DeepseekGenerator),
}

#[async_trait::async_trait]
impl GameGenerator for Generator {
    async fn generate(
        &self,
        request: &GenerationRequest,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<String, Error> {
        match self {
            Generator::OpenAI(generator) => generator.generate(request, on_progress).await,
            Generator::Deepseek(generator) => generator.generate(request, on_progress).await,
        }
    }

    fn set_credential(&mut self, api_key: String) {
        match self {
            Generator::OpenAI(generator) => generator.set_credential(api_key),
            Generator::Deepseek(generator) => generator.set_credential(api_key),
        }
    }

    fn vendor(&self) -> &'static VendorDescriptor {
        match self {
            Generator::OpenAI(generator) => generator.vendor(),
            Generator::Deepseek(generator) => generator.vendor(),
        }
    }
}

/// Factory for creating generators.
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create a generator from configuration.
    pub fn create(config: &GeneratorConfig) -> Result<Generator, Error> {
        tracing::debug!(vendor = %config.vendor, "Creating generator");
        match config.vendor {
            VendorKind::OpenAI => Ok(Generator::OpenAI(OpenAIGenerator::from_config(config)?)),
            VendorKind::Deepseek => Ok(Generator::Deepseek(DeepseekGenerator::from_config(
                config,
            )?)),
        }
    }

    /// Create a generator for `vendor` with an optional default credential.
    pub fn for_vendor(vendor: VendorKind, api_key: Option<String>) -> Result<Generator, Error> {
        let mut config = GeneratorConfig::new(vendor);
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        Self::create(&config)
    }

    /// Create a generator from environment variables.
    pub fn from_env() -> Result<Generator, Error> {
        let config = GeneratorConfig::from_env()?;
        Self::create(&config)
    }
}
