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

fn clear_pairval_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PAIRVAL_PAIRS_PATH");
        env::remove_var("PAIRVAL_FEATURES_PATH");
        env::remove_var("PAIRVAL_FEATURES2_PATH");
        env::remove_var("PAIRVAL_FEATURE_DIM");
        env::remove_var("PAIRVAL_FEATURE_DTYPE");
        env::remove_var("PAIRVAL_KFOLD");
        env::remove_var("PAIRVAL_TOP_K");
        env::remove_var("PAIRVAL_ZERO_NORM");
    }
}

fn manifest_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
}

fn runnable_config() -> Config {
    Config {
        pairs_path: Some(manifest_file()),
        features_path: Some(manifest_file()),
        feature_dim: Some(128),
        ..Default::default()
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.pairs_path.is_none());
    assert!(config.features_path.is_none());
    assert!(config.features2_path.is_none());
    assert!(config.feature_dim.is_none());
    assert_eq!(config.feature_dtype, FeatureDtype::F32);
    assert_eq!(config.kfold, 10);
    assert_eq!(config.top_k, 5);
    assert_eq!(config.zero_norm, ZeroNormPolicy::Reject);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_pairval_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_full() {
    clear_pairval_env();

    with_env_vars(
        &[
            ("PAIRVAL_PAIRS_PATH", "/data/pairs.txt"),
            ("PAIRVAL_FEATURES_PATH", "/data/gallery.f16"),
            ("PAIRVAL_FEATURES2_PATH", " /data/probe.f16 "),
            ("PAIRVAL_FEATURE_DIM", "512"),
            ("PAIRVAL_FEATURE_DTYPE", "f16"),
            ("PAIRVAL_KFOLD", "5"),
            ("PAIRVAL_TOP_K", "3"),
            ("PAIRVAL_ZERO_NORM", "neutral"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.pairs_path, Some(PathBuf::from("/data/pairs.txt")));
            assert_eq!(
                config.features2_path,
                Some(PathBuf::from("/data/probe.f16"))
            );
            assert_eq!(config.feature_dim, Some(512));
            assert_eq!(config.feature_dtype, FeatureDtype::F16);
            assert_eq!(config.kfold, 5);
            assert_eq!(config.top_k, 3);
            assert_eq!(config.zero_norm, ZeroNormPolicy::Neutral);
        },
    );
}

#[test]
#[serial]
fn test_from_env_empty_values_use_defaults() {
    clear_pairval_env();

    with_env_vars(&[("PAIRVAL_KFOLD", "  "), ("PAIRVAL_PAIRS_PATH", "")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.kfold, 10);
        assert!(config.pairs_path.is_none());
    });
}

#[test]
#[serial]
fn test_from_env_invalid_kfold() {
    clear_pairval_env();

    with_env_vars(&[("PAIRVAL_KFOLD", "ten")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "PAIRVAL_KFOLD",
                ..
            }
        ));
        assert!(err.to_string().contains("ten"));
    });
}

#[test]
#[serial]
fn test_from_env_zero_top_k() {
    clear_pairval_env();

    with_env_vars(&[("PAIRVAL_TOP_K", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                name: "PAIRVAL_TOP_K",
                ..
            }
        ));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_dtype() {
    clear_pairval_env();

    with_env_vars(&[("PAIRVAL_FEATURE_DTYPE", "int8")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidChoice {
                name: "PAIRVAL_FEATURE_DTYPE",
                ..
            }
        ));
        assert!(err.to_string().contains("int8"));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_zero_norm() {
    clear_pairval_env();

    with_env_vars(&[("PAIRVAL_ZERO_NORM", "nan")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidChoice {
                name: "PAIRVAL_ZERO_NORM",
                ..
            }
        ));
    });
}

#[test]
fn test_validate_requires_pairs_path() {
    let config = Config {
        pairs_path: None,
        ..runnable_config()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingEnvVar {
            name: "PAIRVAL_PAIRS_PATH"
        })
    ));
}

#[test]
fn test_validate_requires_features_path() {
    let config = Config {
        features_path: None,
        ..runnable_config()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingEnvVar {
            name: "PAIRVAL_FEATURES_PATH"
        })
    ));
}

#[test]
fn test_validate_requires_feature_dim() {
    let config = Config {
        feature_dim: None,
        ..runnable_config()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingEnvVar {
            name: "PAIRVAL_FEATURE_DIM"
        })
    ));
}

#[test]
fn test_validate_nonexistent_path() {
    let config = Config {
        features2_path: Some(PathBuf::from("/nonexistent/probe.f32")),
        ..runnable_config()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_directory_is_not_a_file() {
    let config = Config {
        pairs_path: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")),
        ..runnable_config()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
fn test_validate_success() {
    assert!(runnable_config().validate().is_ok());
}

#[test]
fn test_evaluator_config_mirrors_settings() {
    let config = Config {
        kfold: 4,
        zero_norm: ZeroNormPolicy::Neutral,
        ..Default::default()
    };
    let evaluator = config.evaluator_config();
    assert_eq!(evaluator.kfold, 4);
    assert_eq!(evaluator.zero_norm, ZeroNormPolicy::Neutral);
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));

    let err = ConfigError::MissingEnvVar {
        name: "PAIRVAL_FEATURE_DIM",
    };
    assert!(err.to_string().contains("PAIRVAL_FEATURE_DIM"));

    let err = ConfigError::NotPositive {
        name: "PAIRVAL_KFOLD",
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("positive"));
}
