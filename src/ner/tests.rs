use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = NerConfig::default();

        assert_eq!(config.max_seq_len, crate::constants::DEFAULT_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_config_new() {
        let config = NerConfig::new("/models/bert-ner");
        assert_eq!(config.model_dir, PathBuf::from("/models/bert-ner"));
    }

    #[test]
    fn test_config_stub_validates() {
        assert!(NerConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_path() {
        let err = NerConfig::default().validate().unwrap_err();
        assert!(matches!(err, NerError::InvalidConfig { .. }));
    }

    #[test]
    fn test_config_validate_missing_dir() {
        let err = NerConfig::new("/nonexistent/ner").validate().unwrap_err();
        assert!(matches!(err, NerError::ModelNotFound { .. }));
    }
}

mod stub_tests {
    use super::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::stub().unwrap()
    }

    #[test]
    fn test_extracts_capitalized_words_in_order() {
        let entities = extractor()
            .extract("NASA confirms water on Mars")
            .unwrap();

        assert_eq!(entities, vec!["NASA", "Mars"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let entities = extractor()
            .extract("Paris is Paris, after all")
            .unwrap();

        assert_eq!(entities, vec!["Paris", "Paris"]);
    }

    #[test]
    fn test_punctuation_trimmed() {
        let entities = extractor().extract("A statement from Reuters.").unwrap();

        assert_eq!(entities, vec!["A", "Reuters"]);
    }

    #[test]
    fn test_lowercase_text_has_no_entities() {
        let entities = extractor()
            .extract("nothing capitalized in here at all")
            .unwrap();

        assert!(entities.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor().extract("").unwrap().is_empty());
    }

    #[test]
    fn test_determinism() {
        let extractor = extractor();
        let a = extractor.extract("Berlin and Tokyo signed").unwrap();
        let b = extractor.extract("Berlin and Tokyo signed").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_accessors() {
        let extractor = extractor();

        assert!(extractor.is_stub());
        assert!(extractor.config().testing_stub);
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", extractor());

        assert!(debug.contains("EntityExtractor"));
        assert!(debug.contains("Stub"));
    }

    #[test]
    fn test_load_rejects_missing_model_dir() {
        assert!(EntityExtractor::load(NerConfig::new("/nonexistent/ner")).is_err());
    }
}
