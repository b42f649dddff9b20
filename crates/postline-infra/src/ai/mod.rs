//! AI provider clients implementing the ports in `postline-core`.

mod huggingface;
mod openai;

pub use huggingface::HuggingFaceImageModel;
pub use openai::{DEFAULT_MODEL, MockCompletionModel, OpenAiCompletionModel};
