use std::io;
use std::path::Path;

use tokenizers::{PaddingParams, Tokenizer, TruncationParams};

/// Loads `tokenizer.json` from a model directory (or an explicit file path).
pub fn load_tokenizer(model_path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path.is_dir() {
        model_path.join("tokenizer.json")
    } else {
        model_path.to_path_buf()
    };

    Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)
}

/// Loads a tokenizer configured to truncate and pad at `max_len` tokens.
///
/// BERT checkpoints have a fixed maximum sequence length; longer inputs must
/// be truncated before the forward pass or the position embeddings run out.
pub fn load_tokenizer_with_limits(model_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = load_tokenizer(model_path)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("failed to configure truncation: {e}")))?;

    tokenizer.with_padding(Some(PaddingParams::default()));

    Ok(tokenizer)
}
