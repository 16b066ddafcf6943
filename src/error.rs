use thiserror::Error;

/// Fallback message used when a vendor rejects a request without a readable reason.
pub const UNKNOWN_ERROR_MESSAGE: &str = "未知错误";

/// Errors that can occur when generating a game.
#[derive(Error, Debug)]
pub enum Error {
    /// No credential was supplied on the request or the generator.
    #[error("API密钥未提供")]
    MissingCredential,

    /// The vendor answered with a non-success status.
    #[error("API请求失败: {message}。请检查API密钥是否正确，或稍后重试。")]
    Remote {
        vendor: String,
        status: u16,
        message: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unsupported vendor: {0}")]
    UnsupportedVendor(String),

    #[error("Streaming error: {0}")]
    Streaming(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn remote(vendor: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Error::Remote {
            vendor: vendor.into(),
            status,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn streaming(message: impl Into<String>) -> Self {
        Error::Streaming(message.into())
    }

    /// True when the call failed before any network traffic happened.
    pub fn is_preflight(&self) -> bool {
        matches!(self, Error::MissingCredential)
    }
}
