use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};

struct BertEncoderImpl {
    bert: BertModel,
    hidden_size: usize,
}

impl BertEncoderImpl {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        // Checkpoints exported from encoder-only training carry a "bert."
        // prefix; sentence-transformer exports usually do not.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else {
            BertModel::load(vb, config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }
}

/// BERT encoder producing per-token hidden states, shareable across threads.
#[derive(Clone)]
pub struct BertEncoder(Arc<BertEncoderImpl>);

impl BertEncoder {
    /// Loads `config.json` + `model.safetensors` from `model_dir`.
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("failed to parse model config: {e}")))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = BertEncoderImpl::load(vb, &config)?;

        Ok(Self(Arc::new(model)))
    }

    /// Forward pass: `[batch, seq]` ids to `[batch, seq, hidden]` states.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.bert.forward(input_ids, token_type_ids, attention_mask)
    }

    /// Hidden state width of the loaded checkpoint.
    pub fn hidden_size(&self) -> usize {
        self.0.hidden_size
    }
}
