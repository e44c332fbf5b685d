use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Device, Result, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LabelConfig {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

struct TokenClassifierImpl {
    bert: BertModel,
    classifier: Linear,
    labels: HashMap<u32, String>,
}

impl TokenClassifierImpl {
    fn load(vb: VarBuilder, config: &Config, labels: HashMap<u32, String>) -> Result<Self> {
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        let classifier = candle_nn::linear(config.hidden_size, labels.len(), vb.pp("classifier"))?;

        Ok(Self {
            bert,
            classifier,
            labels,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let hidden = self.bert.forward(input_ids, token_type_ids, attention_mask)?;
        // Per-token logits: [batch, seq, hidden] -> [batch, seq, num_labels]
        self.classifier.forward(&hidden)
    }
}

/// BERT token-classification head for named-entity tagging.
#[derive(Clone)]
pub struct TokenClassifier(Arc<TokenClassifierImpl>);

impl TokenClassifier {
    /// Loads the checkpoint and its BIO label map from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;

        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("failed to parse model config: {e}")))?;
        let label_config: LabelConfig = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("failed to parse label map: {e}")))?;

        let mut labels = HashMap::new();
        for (id, label) in label_config.id2label {
            let id: u32 = id
                .parse()
                .map_err(|_| candle_core::Error::Msg(format!("non-numeric label id: {id}")))?;
            labels.insert(id, label);
        }

        if labels.is_empty() {
            return Err(candle_core::Error::Msg(
                "model config has no id2label map".to_string(),
            ));
        }

        let weights_path = model_dir.join("model.safetensors");
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = TokenClassifierImpl::load(vb, &config, labels)?;

        Ok(Self(Arc::new(model)))
    }

    /// Forward pass producing per-token label logits.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }

    /// Label string for a class id ("O" when the id is unknown).
    pub fn label(&self, id: u32) -> &str {
        self.0.labels.get(&id).map(String::as_str).unwrap_or("O")
    }

    /// Number of labels in the classifier head.
    pub fn num_labels(&self) -> usize {
        self.0.labels.len()
    }
}
