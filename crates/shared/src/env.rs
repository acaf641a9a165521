use std::env;

use anyhow::Context;
use strum::{Display, EnumString};

use crate::AppError;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OPENAI_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "qwen3-embedding:0.6b";
/// Ollama ignores the key, but the OpenAI-compatible client insists on one.
pub const DEFAULT_OPENAI_API_KEY: &str = "ollama";

/// Which wire protocol the embedding service speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EmbeddingBackend {
  /// Ollama's native `/api/embeddings` endpoint.
  #[default]
  Ollama,
  /// Any OpenAI-compatible `/embeddings` endpoint.
  OpenAi,
}

impl EmbeddingBackend {
  #[must_use]
  pub const fn default_base_url(self) -> &'static str {
    match self {
      Self::Ollama => DEFAULT_OLLAMA_BASE_URL,
      Self::OpenAi => DEFAULT_OPENAI_BASE_URL,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEnv {
  pub embedding_backend: EmbeddingBackend,
  pub embedding_base_url: String,
  pub embedding_model: String,
  pub openai_api_key: String,
}

impl Default for AppEnv {
  fn default() -> Self {
    let backend = EmbeddingBackend::default();
    Self {
      embedding_backend: backend,
      embedding_base_url: backend.default_base_url().to_owned(),
      embedding_model: DEFAULT_EMBEDDING_MODEL.to_owned(),
      openai_api_key: DEFAULT_OPENAI_API_KEY.to_owned(),
    }
  }
}

impl AppEnv {
  /// Read overrides from the process environment. Unset variables keep their defaults.
  pub fn load() -> Result<Self, AppError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let embedding_backend = match get("EMBEDDING_BACKEND") {
      Some(raw) => raw
        .trim()
        .parse::<EmbeddingBackend>()
        .with_context(|| format!("invalid EMBEDDING_BACKEND: {raw:?}"))?,
      None => EmbeddingBackend::default(),
    };

    Ok(Self {
      embedding_backend,
      embedding_base_url: get("EMBEDDING_BASE_URL")
        .unwrap_or_else(|| embedding_backend.default_base_url().to_owned()),
      embedding_model: get("EMBEDDING_MODEL")
        .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_owned()),
      openai_api_key: get("OPENAI_API_KEY").unwrap_or_else(|| DEFAULT_OPENAI_API_KEY.to_owned()),
    })
  }
}
