use embedsim_ai::{AnyEmbedder, OllamaEmbedder, OpenAiEmbedder};
use embedsim_core::{compute_similarity, format_similarity};
use embedsim_shared::{AppEnv, AppError, EmbeddingBackend};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TEXT_A: &str = "#PredatorBadlands feels like Avatar meets the MCU, turning the Predator into a full-on antihero — think Mad Max or Wolverine — AND IT WORKS! It’s a 90s-style, non-stop action adventure the entire runtime and never pushes any pencils, easily the best modern Predator sequel.";

const TEXT_B: &str = "An effective operation demonstrating what a skilled drone operator is capable of: clearing a building of Russian infantry from the inside without putting an entire unit of our own soldiers at risk Thanks to the outstanding team of SOF drone operators for sharing their work — together, we always supported them and will continue to do so on a regular basis.";

fn build_embedder(env: &AppEnv) -> AnyEmbedder {
  match env.embedding_backend {
    EmbeddingBackend::Ollama => {
      OllamaEmbedder::new(&env.embedding_base_url, &env.embedding_model).into()
    }
    EmbeddingBackend::OpenAi => OpenAiEmbedder::new(
      &env.embedding_base_url,
      &env.openai_api_key,
      &env.embedding_model,
    )
    .into(),
  }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
          format!("{0}=debug,{0}_ai=debug,{0}_core=debug", env!("CARGO_CRATE_NAME")).into()
        }),
    )
    // stdout carries only the report line
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(tracing_error::ErrorLayer::default())
    .init();
  dotenvy::dotenv().ok();

  let env = AppEnv::load()?;
  tracing::debug!(
    backend = %env.embedding_backend,
    base_url = %env.embedding_base_url,
    "configuration loaded"
  );

  let embedder = build_embedder(&env);
  tracing::debug!(model = embedder.model(), "embedder ready");

  // An `Err` here is printed once, by the runtime, and exits non-zero.
  let similarity = compute_similarity(&embedder, TEXT_A, TEXT_B).await?;

  println!("{}", format_similarity(similarity));

  Ok(())
}
