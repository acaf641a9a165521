mod cosine_similarity;
pub use cosine_similarity::{checked_cosine_similarity, cosine_similarity};

mod embed;
pub use embed::{AnyEmbedder, Embedder, Embedding, OllamaEmbedder};

mod embed_openai;
pub use embed_openai::OpenAiEmbedder;

mod error;
pub use error::{EmbedError, SimilarityError};
