use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{EmbedError, OpenAiEmbedder};

/// One embedding vector, as returned by the service. Its length is whatever
/// the model produces.
pub type Embedding = Vec<f32>;

/// Turns a single text into an [`Embedding`]. One call, one request.
pub trait Embedder {
  fn embed(&self, text: &str) -> impl Future<Output = Result<Embedding, EmbedError>> + Send;
}

#[derive(Serialize)]
struct OllamaEmbeddingRequest<'a> {
  model: &'a str,
  prompt: &'a str,
}

#[derive(Deserialize)]
struct OllamaEmbeddingResponse {
  embedding: Embedding,
}

/// Client for Ollama's native `POST /api/embeddings`.
#[derive(Debug, Clone)]
pub struct OllamaEmbedder {
  http: Client,
  base_url: String,
  model: String,
}

impl OllamaEmbedder {
  pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      http: Client::new(),
      base_url: base_url.into(),
      model: model.into(),
    }
  }

  #[must_use]
  pub fn model(&self) -> &str {
    &self.model
  }

  fn endpoint(&self) -> String {
    format!("{}/api/embeddings", self.base_url.trim_end_matches('/'))
  }
}

impl Embedder for OllamaEmbedder {
  async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
    let url = self.endpoint();
    let request = OllamaEmbeddingRequest {
      model: &self.model,
      prompt: text,
    };

    let response = match self.http.post(&url).json(&request).send().await {
      Ok(response) => response,
      Err(err) => {
        tracing::warn!(%url, error = %err, "embedding request failed");
        return Err(EmbedError::Transport(err));
      }
    };

    let status = response.status();
    if status != StatusCode::OK {
      let body = response.text().await.unwrap_or_default();
      tracing::warn!(%url, %status, %body, "embedding service rejected request");
      return Err(EmbedError::Status { status, body });
    }

    let OllamaEmbeddingResponse { embedding } =
      response.json().await.map_err(EmbedError::Decode)?;

    tracing::debug!(
      model = %self.model,
      dimensions = embedding.len(),
      "received embedding"
    );

    Ok(embedding)
  }
}

/// Either backend, picked at startup from configuration.
#[derive(Debug, Clone)]
pub enum AnyEmbedder {
  Ollama(OllamaEmbedder),
  OpenAi(OpenAiEmbedder),
}

impl AnyEmbedder {
  #[must_use]
  pub fn model(&self) -> &str {
    match self {
      Self::Ollama(inner) => inner.model(),
      Self::OpenAi(inner) => inner.model(),
    }
  }
}

impl Embedder for AnyEmbedder {
  async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
    match self {
      Self::Ollama(inner) => inner.embed(text).await,
      Self::OpenAi(inner) => inner.embed(text).await,
    }
  }
}

impl From<OllamaEmbedder> for AnyEmbedder {
  fn from(inner: OllamaEmbedder) -> Self {
    Self::Ollama(inner)
  }
}

impl From<OpenAiEmbedder> for AnyEmbedder {
  fn from(inner: OpenAiEmbedder) -> Self {
    Self::OpenAi(inner)
  }
}
