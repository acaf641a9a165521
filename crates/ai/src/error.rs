use async_openai::error::OpenAIError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
  /// The request never got a response (connection refused, DNS, ...).
  #[error("embedding request failed")]
  Transport(#[source] reqwest::Error),

  /// The service answered with anything other than `200 OK`.
  #[error("embedding service responded with {status}: {body}")]
  Status { status: StatusCode, body: String },

  /// `200 OK`, but the body is not `{"embedding": [...]}`.
  #[error("invalid embedding response")]
  Decode(#[source] reqwest::Error),

  #[error("embedding service returned no embedding")]
  Empty,

  #[error(transparent)]
  OpenAi(#[from] OpenAIError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimilarityError {
  #[error("dimension mismatch: {left} vs {right}")]
  DimensionMismatch { left: usize, right: usize },

  #[error("degenerate vector: norm is zero")]
  DegenerateVector,
}
