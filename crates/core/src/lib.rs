mod similarity;
pub use similarity::{CompareError, compute_similarity, format_similarity};
