//! # Postline Infrastructure
//!
//! Concrete implementations of the ports defined in `postline-core`:
//! the in-memory post store and the AI provider clients.

pub mod ai;
pub mod store;

pub use ai::{HuggingFaceImageModel, MockCompletionModel, OpenAiCompletionModel};
pub use store::InMemoryPostStore;
