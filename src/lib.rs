//! Streamed HTML5 game generation over OpenAI-compatible chat completion APIs.
//!
//! A [`GenerationRequest`] is turned into an instruction prompt, sent to one of
//! the supported vendors as a streaming `/chat/completions` call, and the
//! decoded deltas are reported through a progress callback as they arrive. The
//! final accumulated HTML document is returned to the caller, who can hand it
//! off with [`download::create_download_link`] or [`download::save_html`].
//!
//! ```no_run
//! use gamecraft_llm::{GameGenerator, GenerationRequest, GeneratorFactory, VendorKind};
//!
//! # async fn run() -> Result<(), gamecraft_llm::Error> {
//! let generator = GeneratorFactory::for_vendor(VendorKind::Deepseek, Some("sk-...".into()))?;
//! let request = GenerationRequest::new("贪吃蛇", "使用方向键控制，吃到食物后变长");
//! let mut on_progress = |text: &str| println!("{} bytes so far", text.len());
//! let html = generator.generate(&request, Some(&mut on_progress)).await?;
//! # let _ = html;
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod download;
pub mod error;
pub mod factory;
pub mod frame;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod sse_stream;
pub mod types;
pub mod vendor;

// Re-export core types for easy usage
pub use accumulator::TextAccumulator;
pub use download::{create_download_link, save_html};
pub use error::Error;
pub use factory::{Generator, GeneratorConfig, GeneratorFactory};
pub use prompt::{compose, compose_with, PromptQuirks};
pub use provider::{GameGenerator, ProgressFn};
pub use providers::{DeepseekGenerator, OpenAIGenerator};
pub use types::*;
pub use vendor::{VendorDescriptor, VendorKind, VENDORS};
