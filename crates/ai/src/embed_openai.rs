use std::time::Duration;

use async_openai::{Client, config::OpenAIConfig, types::embeddings::CreateEmbeddingRequestArgs};
use backoff::ExponentialBackoff;

use crate::{EmbedError, Embedder, Embedding};

/// Client for OpenAI-compatible `POST /embeddings` (Ollama serves one under `/v1`).
#[derive(Debug, Clone)]
pub struct OpenAiEmbedder {
  client: Client<OpenAIConfig>,
  model: String,
}

impl OpenAiEmbedder {
  pub fn new(base_url: &str, api_key: &str, model: impl Into<String>) -> Self {
    let config = OpenAIConfig::new()
      .with_api_key(api_key)
      .with_api_base(base_url.trim_end_matches('/'));

    // One request per call: a zero time budget turns 429/5xx into immediate errors.
    let no_retry = ExponentialBackoff {
      max_elapsed_time: Some(Duration::ZERO),
      ..Default::default()
    };

    Self {
      client: Client::with_config(config).with_backoff(no_retry),
      model: model.into(),
    }
  }

  #[must_use]
  pub fn model(&self) -> &str {
    &self.model
  }
}

impl Embedder for OpenAiEmbedder {
  async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
    let request = CreateEmbeddingRequestArgs::default()
      .model(&self.model)
      .input(text)
      .build()?;

    let embedding = self
      .client
      .embeddings()
      .create(request)
      .await
      .inspect_err(|err| tracing::warn!(model = %self.model, error = %err, "embedding request failed"))
      .map(|r| r.data.into_iter())?
      .map(|e| e.embedding)
      .next_back()
      .ok_or(EmbedError::Empty)?;

    tracing::debug!(
      model = %self.model,
      dimensions = embedding.len(),
      "received embedding"
    );

    Ok(embedding)
  }
}
