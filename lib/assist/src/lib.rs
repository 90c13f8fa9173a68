//! AI assist features for the smartstay platform.
//!
//! Two small surfaces: a chat passthrough to an OpenAI-compatible
//! completions API, and a rule-based recommendation that matches the
//! catalog against a nightly budget.

pub mod client;
pub mod error;
pub mod recommend;

pub use client::{
    ChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL, FALLBACK_REPLY, OFFLINE_REPLY, SYSTEM_PROMPT,
};
pub use error::AssistError;
pub use recommend::{Recommendation, RecommendQuery, recommend};
