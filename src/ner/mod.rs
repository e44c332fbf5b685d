//! Named-entity extraction.
//!
//! [`EntityExtractor`] returns the entity mention strings found in a text,
//! duplicates preserved, in document order. The model backend runs a BERT
//! token-classification head and decodes BIO tags; the stub backend keeps the
//! same output contract with a capitalized-word heuristic so scoring tests
//! run without checkpoints.

/// Token-classification model wrapper.
pub mod bert;
/// Extractor configuration.
pub mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::NerConfig;
pub use error::NerError;

use candle_core::{D, Device, Tensor};
use tracing::{debug, info, warn};

use crate::embedding::device::select_device;
use crate::embedding::utils::load_tokenizer_with_limits;

use bert::TokenClassifier;

enum NerBackend {
    Model {
        model: TokenClassifier,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Named-entity extractor over a pretrained tagger (or a stub).
pub struct EntityExtractor {
    backend: NerBackend,
    config: NerConfig,
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor")
            .field(
                "backend",
                &match &self.backend {
                    NerBackend::Model { device, .. } => format!("Model({:?})", device),
                    NerBackend::Stub => "Stub".to_string(),
                },
            )
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl EntityExtractor {
    /// Loads the extractor from a config (stub mode is supported).
    pub fn load(config: NerConfig) -> Result<Self, NerError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Entity extractor running in STUB mode (testing only)");
            return Ok(Self {
                backend: NerBackend::Stub,
                config,
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for NER");

        let model = TokenClassifier::load(&config.model_dir, &device).map_err(|e| {
            NerError::ModelLoadFailed {
                reason: format!("failed to load token classifier: {e}"),
            }
        })?;

        let tokenizer = load_tokenizer_with_limits(&config.model_dir, config.max_seq_len)
            .map_err(|e| NerError::TokenizationFailed {
                reason: format!("failed to load tokenizer: {e}"),
            })?;

        info!(
            model_dir = %config.model_dir.display(),
            num_labels = model.num_labels(),
            "NER model loaded"
        );

        Ok(Self {
            backend: NerBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Convenience constructor for the stub backend.
    pub fn stub() -> Result<Self, NerError> {
        Self::load(NerConfig::stub())
    }

    /// Extracts entity mentions from `text`.
    ///
    /// Duplicates are preserved and order follows the document.
    pub fn extract(&self, text: &str) -> Result<Vec<String>, NerError> {
        match &self.backend {
            NerBackend::Model {
                model,
                tokenizer,
                device,
            } => self.extract_with_model(text, model, tokenizer, device),
            NerBackend::Stub => Ok(extract_stub(text)),
        }
    }

    fn extract_with_model(
        &self,
        text: &str,
        model: &TokenClassifier,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<String>, NerError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| NerError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let logits = model.forward(&input_ids, &type_ids, Some(&attention_mask))?;
        let label_ids = logits.argmax(D::Minus1)?.squeeze(0)?.to_vec1::<u32>()?;

        debug!(
            token_count = label_ids.len(),
            "Decoding BIO tags into mentions"
        );

        let offsets = encoding.get_offsets();
        let special = encoding.get_special_tokens_mask();

        // Merge B-/I- token spans into surface mentions via byte offsets.
        let mut entities = Vec::new();
        let mut current: Option<(usize, usize)> = None;

        for (idx, &label_id) in label_ids.iter().enumerate() {
            let is_special = special.get(idx).copied().unwrap_or(1) == 1;
            let label = if is_special { "O" } else { model.label(label_id) };
            let (start, end) = offsets.get(idx).copied().unwrap_or((0, 0));

            if label.starts_with("B-") {
                if let Some(span) = current.take() {
                    push_span(text, span, &mut entities);
                }
                current = Some((start, end));
            } else if label.starts_with("I-") {
                match current.as_mut() {
                    Some((_, span_end)) => *span_end = end,
                    // Dangling I- tag: treat as a span start.
                    None => current = Some((start, end)),
                }
            } else if let Some(span) = current.take() {
                push_span(text, span, &mut entities);
            }
        }

        if let Some(span) = current.take() {
            push_span(text, span, &mut entities);
        }

        Ok(entities)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, NerBackend::Stub)
    }

    /// Returns the extractor configuration.
    pub fn config(&self) -> &NerConfig {
        &self.config
    }
}

fn push_span(text: &str, (start, end): (usize, usize), entities: &mut Vec<String>) {
    if let Some(mention) = text.get(start..end)
        && !mention.is_empty()
    {
        entities.push(mention.to_string());
    }
}

// Stub tagger: every capitalized word (leading/trailing punctuation trimmed)
// is one mention. Crude, but deterministic and order-preserving, which is all
// the context-score contract needs in tests.
fn extract_stub(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().next().is_some_and(|c| c.is_uppercase()))
        .map(str::to_string)
        .collect()
}
