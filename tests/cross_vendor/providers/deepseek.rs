use super::{VendorTestConfig, VendorTestSetup};
use gamecraft_llm::{Generator, GeneratorConfig, GeneratorFactory, VendorKind};
use serde_json::{json, Value};

pub struct DeepseekTestSetup;

impl VendorTestSetup for DeepseekTestSetup {
    fn get_config() -> VendorTestConfig {
        VendorTestConfig {
            name: "Deepseek",
            model: "deepseek-chat",
            sends_penalties: false,
        }
    }

    fn create_generator(base_url: &str, api_key: Option<&str>) -> Generator {
        let mut config = GeneratorConfig::new(VendorKind::Deepseek).with_base_url(base_url);
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        GeneratorFactory::create(&config).expect("Failed to create Deepseek generator")
    }

    fn expected_body() -> Value {
        json!({
            "model": "deepseek-chat",
            "stream": true,
            "temperature": 0.8,
            "max_tokens": 4000
        })
    }
}
