use crate::SimilarityError;

struct Sums {
  dot: f64,
  norm_a: f64,
  norm_b: f64,
}

fn accumulate(a: &[f32], b: &[f32]) -> Sums {
  let mut sums = Sums {
    dot: 0.0,
    norm_a: 0.0,
    norm_b: 0.0,
  };

  for (&x, &y) in a.iter().zip(b.iter()) {
    let x = f64::from(x);
    let y = f64::from(y);
    sums.dot = x.mul_add(y, sums.dot);
    sums.norm_a = x.mul_add(x, sums.norm_a);
    sums.norm_b = y.mul_add(y, sums.norm_b);
  }

  sums
}

/// Compute cosine similarity between two embedding vectors.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction.
///
/// Nothing is validated: a zero vector yields `NaN`, and a longer vector
/// is truncated to the length of the shorter one. Use
/// [`checked_cosine_similarity`] when the inputs come from outside.
#[allow(clippy::cast_possible_truncation)]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
  let Sums {
    dot,
    norm_a,
    norm_b,
  } = accumulate(a, b);

  (dot / (norm_a.sqrt() * norm_b.sqrt())) as f32
}

/// Like [`cosine_similarity`], but rejects inputs the formula is undefined for.
#[allow(clippy::cast_possible_truncation)]
pub fn checked_cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
  if a.len() != b.len() {
    return Err(SimilarityError::DimensionMismatch {
      left: a.len(),
      right: b.len(),
    });
  }

  let Sums {
    dot,
    norm_a,
    norm_b,
  } = accumulate(a, b);

  let denom = norm_a.sqrt() * norm_b.sqrt();
  if denom == 0.0 || !denom.is_finite() {
    return Err(SimilarityError::DegenerateVector);
  }

  // Rounding can push parallel vectors a hair past 1.
  Ok((dot / denom).clamp(-1.0, 1.0) as f32)
}
