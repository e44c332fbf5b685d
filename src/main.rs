//! credcheck CLI entrypoint.
//!
//! Usage: `credcheck <headline>`. Prints the verdict as JSON, or
//! `{"error": "..."}` with a non-zero exit when the search call fails.

use mimalloc::MiMalloc;

use credcheck::config::Config;
use credcheck::detector::Detector;
use credcheck::embedding::{Embedder, EmbedderConfig};
use credcheck::ner::{EntityExtractor, NerConfig};
use credcheck::scoring::HeadlineScorer;
use credcheck::search::{GoogleSearchClient, SearchConfig};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let headline = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if headline.trim().is_empty() {
        anyhow::bail!("usage: credcheck <headline>");
    }

    let config = Config::from_env()?;
    config.validate()?;

    let embedder_config = match &config.embed_model_path {
        Some(path) => EmbedderConfig::new(path.clone()),
        None => {
            tracing::warn!("No CREDCHECK_EMBED_MODEL_PATH configured, running embedder in stub mode");
            EmbedderConfig::stub()
        }
    };
    let embedder = Embedder::load(embedder_config)?;

    let ner_config = match &config.ner_model_path {
        Some(path) => NerConfig::new(path.clone()),
        None => {
            tracing::warn!("No CREDCHECK_NER_MODEL_PATH configured, running NER in stub mode");
            NerConfig::stub()
        }
    };
    let extractor = EntityExtractor::load(ner_config)?;

    let search_config = SearchConfig::new(
        config.api_key.clone().unwrap_or_default(),
        config.engine_id.clone().unwrap_or_default(),
    )
    .with_result_limit(config.result_limit);
    let search = GoogleSearchClient::new(search_config)?;

    let detector = Detector::new(search, HeadlineScorer::new(embedder, extractor));

    match detector.check(&headline).await {
        Ok(verdict) => {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        Err(err) => {
            println!("{}", serde_json::json!({ "error": err.to_string() }));
            std::process::exit(1);
        }
    }

    Ok(())
}
