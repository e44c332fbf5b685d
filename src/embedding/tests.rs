use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = EmbedderConfig::default();

        assert_eq!(config.embedding_dim, crate::constants::DEFAULT_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, crate::constants::DEFAULT_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_new() {
        let config = EmbedderConfig::new("/models/bert-base");
        assert_eq!(config.model_dir, PathBuf::from("/models/bert-base"));
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_config_stub() {
        let config = EmbedderConfig::stub();
        assert!(config.testing_stub);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_path() {
        let config = EmbedderConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_config_validate_missing_dir() {
        let config = EmbedderConfig::new("/nonexistent/model/dir");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_config_validate_zero_dim() {
        let config = EmbedderConfig {
            embedding_dim: 0,
            testing_stub: true,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = EmbedderConfig::new(dir.path());
        assert!(config.validate().is_ok());
    }
}

mod stub_tests {
    use super::*;
    use crate::scoring::cosine_similarity;

    #[test]
    fn test_stub_dimension() {
        let embedder = Embedder::stub().unwrap();
        let embedding = embedder.embed("hello world").unwrap();

        assert_eq!(embedding.len(), embedder.embedding_dim());
    }

    #[test]
    fn test_stub_is_deterministic() {
        let embedder = Embedder::stub().unwrap();

        let a = embedder.embed("the same input text").unwrap();
        let b = embedder.embed("the same input text").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_stub_is_normalized() {
        let embedder = Embedder::stub().unwrap();
        let embedding = embedder.embed("a handful of tokens here").unwrap();

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_stub_empty_text_is_zero_vector() {
        let embedder = Embedder::stub().unwrap();
        let embedding = embedder.embed("").unwrap();

        assert!(embedding.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_stub_identical_token_multiset_embeds_identically() {
        let embedder = Embedder::stub().unwrap();

        // Punctuation and casing differences do not change the token multiset.
        let a = embedder.embed("NASA confirms water on Mars").unwrap();
        let b = embedder.embed("nasa confirms water on mars!").unwrap();

        assert!(cosine_similarity(&a, &b) > 0.999);
    }

    #[test]
    fn test_stub_disjoint_vocabulary_is_dissimilar() {
        let embedder = Embedder::stub().unwrap();

        let a = embedder.embed("quantum computing hardware milestones announced").unwrap();
        let b = embedder.embed("garden vegetables ripen slowly during autumn").unwrap();

        // At most a couple of hash-bucket collisions across 768 buckets.
        assert!(cosine_similarity(&a, &b) < 0.5);
    }

    #[test]
    fn test_stub_accessors() {
        let embedder = Embedder::stub().unwrap();

        assert!(embedder.is_stub());
        assert!(embedder.config().testing_stub);
    }

    #[test]
    fn test_stub_debug_format() {
        let embedder = Embedder::stub().unwrap();
        let debug = format!("{:?}", embedder);

        assert!(debug.contains("Embedder"));
        assert!(debug.contains("Stub"));
    }

    #[test]
    fn test_load_rejects_missing_model_dir() {
        let result = Embedder::load(EmbedderConfig::new("/nonexistent/model"));
        assert!(result.is_err());
    }
}
