mod hf_text;
mod openai_compat;

pub use hf_text::HuggingFaceTextProvider;
pub use openai_compat::OpenAiCompatProvider;
