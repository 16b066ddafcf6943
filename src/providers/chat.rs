//! Shared request/decode loop for OpenAI-compatible `/chat/completions` vendors.

use super::types::{ChatCompletionRequest, ErrorResponse};
use crate::accumulator::TextAccumulator;
use crate::error::UNKNOWN_ERROR_MESSAGE;
use crate::factory::GeneratorConfig;
use crate::frame::{parse_frame, FrameOutcome};
use crate::prompt;
use crate::provider::ProgressFn;
use crate::sse_stream::FrameStreamExt;
use crate::vendor::VendorDescriptor;
use crate::{Error, GenerationRequest};
use futures_util::{Stream, StreamExt};
use reqwest::Client;

/// Streaming chat-completions client bound to one vendor.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    vendor: &'static VendorDescriptor,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl ChatCompletionsClient {
    /// Create a client for `vendor`, overriding catalogue defaults from `config`.
    pub fn new(vendor: &'static VendorDescriptor, config: &GeneratorConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            vendor,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| vendor.base_url.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| vendor.default_model.to_string()),
        })
    }

    pub fn vendor(&self) -> &'static VendorDescriptor {
        self.vendor
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_credential(&mut self, api_key: String) {
        self.api_key = Some(api_key).filter(|k| !k.is_empty());
    }

    /// The request's credential wins over the instance default.
    fn resolve_credential<'a>(&'a self, request: &'a GenerationRequest) -> Result<&'a str, Error> {
        request
            .api_key()
            .or(self.api_key.as_deref())
            .ok_or(Error::MissingCredential)
    }

    /// Build the JSON body for `request`.
    pub fn build_request(&self, request: &GenerationRequest) -> ChatCompletionRequest {
        let sampling = self.vendor.sampling;
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: prompt::messages(request, &self.vendor.quirks),
            stream: true,
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            presence_penalty: sampling.presence_penalty,
            frequency_penalty: sampling.frequency_penalty,
        }
    }

    /// Send one streamed request and fold the response into a single string.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<String, Error> {
        let api_key = self.resolve_credential(request).inspect_err(|_| {
            tracing::error!(vendor = self.vendor.display_name, "API key not provided");
        })?;
        let body = self.build_request(request);

        tracing::debug!(
            vendor = self.vendor.display_name,
            model = %self.model,
            game_type = request.game_type(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .inspect_err(|e| {
                tracing::error!(vendor = self.vendor.display_name, error = %e, "Request failed");
            })?;

        if !response.status().is_success() {
            return Err(self.rejection(response).await);
        }

        decode_stream(self.vendor.display_name, response.bytes_stream(), on_progress).await
    }

    /// Turn a non-success response into a user-displayable error.
    async fn rejection(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(ErrorResponse::message)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        tracing::error!(
            vendor = self.vendor.display_name,
            status,
            body = %body,
            "API error"
        );
        Error::remote(self.vendor.display_name, status, message)
    }
}

/// Decode a streamed chat-completions body into the accumulated text.
///
/// Malformed frames are logged and skipped; a transport error fails the whole
/// call and the partial text is only visible through `on_progress`.
pub async fn decode_stream<S, E>(
    vendor: &str,
    stream: S,
    mut on_progress: Option<ProgressFn<'_>>,
) -> Result<String, Error>
where
    S: Stream<Item = Result<bytes::Bytes, E>> + Unpin,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut frames = stream.frames();
    let mut accumulator = TextAccumulator::new();
    let mut malformed = 0usize;

    while let Some(frame) = frames.next().await {
        let frame = frame.inspect_err(|e| {
            tracing::error!(vendor, error = %e, "Stream read failed");
        })?;

        match parse_frame(&frame) {
            FrameOutcome::Delta(delta) => {
                let current = accumulator.push_delta(&delta);
                if let Some(callback) = on_progress.as_deref_mut() {
                    callback(current);
                }
            }
            FrameOutcome::Malformed { payload, error } => {
                malformed += 1;
                tracing::warn!(vendor, %error, payload = %payload, "Failed to parse stream frame");
            }
            FrameOutcome::Done => tracing::trace!(vendor, "Received end-of-stream sentinel"),
            FrameOutcome::Skip | FrameOutcome::Empty => {}
        }
    }

    tracing::debug!(
        vendor,
        deltas = accumulator.delta_count(),
        malformed,
        bytes = accumulator.current_content().len(),
        "Generation stream finished"
    );

    Ok(accumulator.finalize())
}
