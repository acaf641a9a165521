use embedsim_ai::{EmbedError, Embedder, SimilarityError, checked_cosine_similarity};

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
  #[error(transparent)]
  Embed(#[from] EmbedError),

  #[error(transparent)]
  Similarity(#[from] SimilarityError),
}

/// Embed both texts and return their cosine similarity in [-1.0, 1.0].
///
/// The two requests are independent, so they are issued together and joined.
/// The first failure wins; the other request is dropped.
pub async fn compute_similarity<E>(
  embedder: &E,
  text_a: &str,
  text_b: &str,
) -> Result<f32, CompareError>
where
  E: Embedder,
{
  let (a, b) = futures::try_join!(embedder.embed(text_a), embedder.embed(text_b))?;

  tracing::debug!(
    dimensions_a = a.len(),
    dimensions_b = b.len(),
    "embeddings ready"
  );

  let score = checked_cosine_similarity(&a, &b)?;
  tracing::info!(score, "similarity computed");

  Ok(score)
}

/// `Similarity: 97.46%`
#[must_use]
pub fn format_similarity(score: f32) -> String {
  format!("Similarity: {:.2}%", score * 100.0)
}

#[cfg(test)]
mod tests {
  use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
  };

  use embedsim_ai::{Embedding, OllamaEmbedder};
  use mockito::{Matcher, Server};
  use serde_json::json;
  use tokio::sync::Barrier;

  use super::*;

  #[derive(Default)]
  struct FakeEmbedder {
    vectors: HashMap<&'static str, Embedding>,
    calls: AtomicUsize,
  }

  impl FakeEmbedder {
    fn with(mut self, text: &'static str, vector: &[f32]) -> Self {
      self.vectors.insert(text, vector.to_vec());
      self
    }
  }

  impl Embedder for FakeEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.vectors.get(text).cloned().ok_or(EmbedError::Empty)
    }
  }

  #[tokio::test]
  async fn computes_score_from_both_embeddings() {
    let embedder = FakeEmbedder::default()
      .with("a", &[1.0, 2.0, 3.0])
      .with("b", &[4.0, 5.0, 6.0]);

    let score = compute_similarity(&embedder, "a", "b").await.unwrap();

    assert!((score - 0.974_631_8).abs() < 1e-5);
    assert_eq!(embedder.calls.load(Ordering::SeqCst), 2);
  }

  /// Each `embed` call waits until the other one has started too.
  struct RendezvousEmbedder {
    barrier: Barrier,
  }

  impl Embedder for RendezvousEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedError> {
      self.barrier.wait().await;
      Ok(if text == "a" { vec![1.0, 0.0] } else { vec![1.0, 1.0] })
    }
  }

  #[tokio::test]
  async fn fetches_run_concurrently() {
    let embedder = RendezvousEmbedder {
      barrier: Barrier::new(2),
    };

    // Awaiting one fetch before starting the other would never get past the barrier.
    let score = tokio::time::timeout(
      Duration::from_secs(2),
      compute_similarity(&embedder, "a", "b"),
    )
    .await
    .expect("both embeddings should be requested at the same time")
    .unwrap();

    assert!((score - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
  }

  #[tokio::test]
  async fn identical_texts_score_one() {
    let embedder = FakeEmbedder::default().with("same", &[0.3, 0.4]);
    let score = compute_similarity(&embedder, "same", "same").await.unwrap();
    assert!((score - 1.0).abs() < 1e-6);
  }

  #[tokio::test]
  async fn embed_failure_is_surfaced() {
    let embedder = FakeEmbedder::default().with("a", &[1.0]);
    let err = compute_similarity(&embedder, "a", "missing")
      .await
      .unwrap_err();
    assert!(matches!(err, CompareError::Embed(EmbedError::Empty)));
  }

  #[tokio::test]
  async fn dimension_mismatch_is_surfaced() {
    let embedder = FakeEmbedder::default()
      .with("short", &[1.0, 0.0])
      .with("long", &[1.0, 0.0, 0.0]);
    let err = compute_similarity(&embedder, "short", "long")
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      CompareError::Similarity(SimilarityError::DimensionMismatch { left: 2, right: 3 })
    ));
  }

  #[tokio::test]
  async fn zero_vector_is_surfaced() {
    let embedder = FakeEmbedder::default()
      .with("zero", &[0.0, 0.0])
      .with("one", &[1.0, 1.0]);
    let err = compute_similarity(&embedder, "zero", "one")
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      CompareError::Similarity(SimilarityError::DegenerateVector)
    ));
  }

  #[tokio::test]
  async fn works_against_ollama() {
    let mut server = Server::new_async().await;
    let first = server
      .mock("POST", "/api/embeddings")
      .match_body(Matcher::PartialJson(json!({ "prompt": "first" })))
      .with_status(200)
      .with_body(json!({ "embedding": [1.0, 0.0] }).to_string())
      .create_async()
      .await;
    let second = server
      .mock("POST", "/api/embeddings")
      .match_body(Matcher::PartialJson(json!({ "prompt": "second" })))
      .with_status(200)
      .with_body(json!({ "embedding": [0.0, 1.0] }).to_string())
      .create_async()
      .await;

    let embedder = OllamaEmbedder::new(server.url(), "qwen3-embedding:0.6b");
    let score = compute_similarity(&embedder, "first", "second")
      .await
      .unwrap();

    assert_eq!(score, 0.0);
    first.assert_async().await;
    second.assert_async().await;
  }

  #[test]
  fn formats_two_decimals() {
    assert_eq!(format_similarity(0.974_631_8), "Similarity: 97.46%");
    assert_eq!(format_similarity(1.0), "Similarity: 100.00%");
    assert_eq!(format_similarity(-0.5), "Similarity: -50.00%");
    assert_eq!(format_similarity(0.0), "Similarity: 0.00%");
  }

  #[test]
  fn formats_nan() {
    assert_eq!(format_similarity(f32::NAN), "Similarity: NaN%");
  }
}
