//! Static catalogue of the supported chat-completion vendors.

use crate::prompt::PromptQuirks;
use crate::types::SamplingParams;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Supported vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorKind {
    OpenAI,
    Deepseek,
}

/// Everything that distinguishes one vendor from another.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorDescriptor {
    pub kind: VendorKind,
    pub display_name: &'static str,
    pub base_url: &'static str,
    pub default_model: &'static str,
    pub sampling: SamplingParams,
    pub quirks: PromptQuirks,
    /// Prefix for the vendor's environment variables (`<PREFIX>_API_KEY`, ...).
    pub env_prefix: &'static str,
}

pub static OPENAI: VendorDescriptor = VendorDescriptor {
    kind: VendorKind::OpenAI,
    display_name: "OpenAI",
    base_url: "https://api.openai.com/v1",
    default_model: "gpt-3.5-turbo",
    sampling: SamplingParams::new(0.8, 4000).with_penalties(0.2, 0.3),
    quirks: PromptQuirks {
        paced_game: Some("Flappy Bird"),
    },
    env_prefix: "OPENAI",
};

pub static DEEPSEEK: VendorDescriptor = VendorDescriptor {
    kind: VendorKind::Deepseek,
    display_name: "Deepseek",
    base_url: "https://api.deepseek.com/v1",
    default_model: "deepseek-chat",
    sampling: SamplingParams::new(0.8, 4000),
    quirks: PromptQuirks { paced_game: None },
    env_prefix: "DEEPSEEK",
};

/// All vendors, in the order they are offered to users.
pub static VENDORS: [&VendorDescriptor; 2] = [&OPENAI, &DEEPSEEK];

impl VendorKind {
    /// Look up the static descriptor for this vendor.
    pub fn descriptor(self) -> &'static VendorDescriptor {
        match self {
            VendorKind::OpenAI => &OPENAI,
            VendorKind::Deepseek => &DEEPSEEK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VendorKind::OpenAI => "openai",
            VendorKind::Deepseek => "deepseek",
        }
    }
}

impl fmt::Display for VendorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(VendorKind::OpenAI),
            "deepseek" => Ok(VendorKind::Deepseek),
            _ => Err(Error::UnsupportedVendor(s.to_string())),
        }
    }
}
