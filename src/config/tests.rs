use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_credcheck_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("CREDCHECK_API_KEY");
        env::remove_var("CREDCHECK_SEARCH_ENGINE_ID");
        env::remove_var("CREDCHECK_EMBED_MODEL_PATH");
        env::remove_var("CREDCHECK_NER_MODEL_PATH");
        env::remove_var("CREDCHECK_RESULT_LIMIT");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.api_key.is_none());
    assert!(config.engine_id.is_none());
    assert!(config.embed_model_path.is_none());
    assert!(config.ner_model_path.is_none());
    assert_eq!(config.result_limit, 5);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_credcheck_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert!(config.api_key.is_none());
    assert_eq!(config.result_limit, 5);
}

#[test]
#[serial]
fn test_from_env_full() {
    clear_credcheck_env();

    with_env_vars(
        &[
            ("CREDCHECK_API_KEY", "key-abc"),
            ("CREDCHECK_SEARCH_ENGINE_ID", "cx-def"),
            ("CREDCHECK_EMBED_MODEL_PATH", "/models/bert-base"),
            ("CREDCHECK_NER_MODEL_PATH", "/models/bert-ner"),
            ("CREDCHECK_RESULT_LIMIT", "10"),
        ],
        || {
            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.api_key.as_deref(), Some("key-abc"));
            assert_eq!(config.engine_id.as_deref(), Some("cx-def"));
            assert_eq!(
                config.embed_model_path,
                Some(PathBuf::from("/models/bert-base"))
            );
            assert_eq!(
                config.ner_model_path,
                Some(PathBuf::from("/models/bert-ner"))
            );
            assert_eq!(config.result_limit, 10);
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_values_ignored() {
    clear_credcheck_env();

    with_env_vars(&[("CREDCHECK_API_KEY", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.api_key.is_none());
    });
}

#[test]
#[serial]
fn test_invalid_result_limit_zero() {
    clear_credcheck_env();

    with_env_vars(&[("CREDCHECK_RESULT_LIMIT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidResultLimit { .. }));
        assert!(err.to_string().contains("must be positive"));
    });
}

#[test]
#[serial]
fn test_invalid_result_limit_not_a_number() {
    clear_credcheck_env();

    with_env_vars(&[("CREDCHECK_RESULT_LIMIT", "many")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ResultLimitParseError { .. }));
    });
}

#[test]
fn test_validate_nonexistent_model_path() {
    let config = Config {
        embed_model_path: Some(PathBuf::from("/nonexistent/model/dir")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_model_path_is_file() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let config = Config {
        ner_model_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_success_with_directories() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config {
        embed_model_path: Some(dir.path().to_path_buf()),
        ner_model_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_success_with_defaults() {
    assert!(Config::default().validate().is_ok());
}
