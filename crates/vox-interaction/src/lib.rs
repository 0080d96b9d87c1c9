//! LLM provider boundary for VOX.
//!
//! Everything a simulation round needs from a language model lives here: the
//! chat-completion request types and the [`CompletionBackend`] trait, response
//! shape normalization, the OpenAI REST backend, the retrying
//! [`ResilientClient`], and the prompt builder.

pub mod completion;
pub mod openai_backend;
pub mod prompt;
pub mod retry;
pub mod shape;

pub use completion::{
    ChatMessage, CompletionBackend, CompletionError, CompletionRequest, ProviderError,
};
pub use openai_backend::OpenAiBackend;
pub use prompt::{ANALYST_SYSTEM_PROMPT, FACILITATOR_SYSTEM_PROMPT, build_prompt};
pub use retry::ResilientClient;
pub use shape::ResponseShape;
