mod error;
pub use error::AppError;

mod env;
pub use env::{
  AppEnv, DEFAULT_EMBEDDING_MODEL, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OPENAI_API_KEY,
  DEFAULT_OPENAI_BASE_URL, EmbeddingBackend,
};
