//! Classification of individual stream frames.

use crate::providers::types::ChatCompletionChunk;

/// End-of-stream marker sent as `data: [DONE]`.
pub const DONE_SENTINEL: &str = "[DONE]";

const DATA_PREFIX: &str = "data: ";

/// What a single frame means to the decode loop.
#[derive(Debug)]
pub enum FrameOutcome {
    /// Blank line, SSE comment, or a field other than `data`.
    Skip,
    /// The `[DONE]` sentinel.
    Done,
    /// Parsed chunk without any text for us.
    Empty,
    /// A non-empty text fragment.
    Delta(String),
    /// The payload was not valid chunk JSON.
    Malformed {
        payload: String,
        error: serde_json::Error,
    },
}

/// Interpret one newline-delimited frame.
pub fn parse_frame(line: &str) -> FrameOutcome {
    if line.trim().is_empty() {
        return FrameOutcome::Skip;
    }
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return FrameOutcome::Skip;
    };
    if payload.trim() == DONE_SENTINEL {
        return FrameOutcome::Done;
    }

    match serde_json::from_str::<ChatCompletionChunk>(payload) {
        Ok(chunk) => match chunk.into_delta() {
            Some(delta) => FrameOutcome::Delta(delta),
            None => FrameOutcome::Empty,
        },
        Err(error) => FrameOutcome::Malformed {
            payload: payload.to_string(),
            error,
        },
    }
}
