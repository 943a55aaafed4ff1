//! Configuration contracts (CONFIG-001 through CONFIG-003)
//!
//! Priority: resolver options > env vars > config file > injected defaults

use crate::assert_error_kinds;
use crate::common::*;

use fpsync::{ConfigWarning, ResolverOptions, ValidationMode};

/// CONTRACT CONFIG-001: validation mode priority order
mod mode_priority {
    use super::*;

    const STRICT_FILE: &str = r#"
mode = "strict"

[[task]]
items = ["code"]
"#;

    #[test]
    fn contract_file_mode_applies() {
        let env = TestEnv::builder().with_config(STRICT_FILE).build();
        let failure = env.resolve().unwrap_err();
        assert_error_kinds!(failure, [MissingExcludeFile]);
    }

    #[test]
    fn contract_env_mode_overrides_file_mode() {
        let env = TestEnv::builder()
            .with_config(STRICT_FILE)
            .with_env("FPSYNC_VALIDATION_MODE", "permissive")
            .build();
        assert_eq!(env.resolve().unwrap().mode, ValidationMode::Permissive);
    }

    #[test]
    fn contract_option_overrides_env_mode() {
        let env = TestEnv::builder()
            .with_config("[[task]]\nitems = [\"code\"]\n")
            .with_env("FPSYNC_VALIDATION_MODE", "permissive")
            .build();
        let failure = env
            .resolve_with(&ResolverOptions::new().strict())
            .unwrap_err();
        assert_error_kinds!(failure, [MissingExcludeFile]);
    }

    #[test]
    fn contract_invalid_env_mode_is_ignored() {
        let env = TestEnv::builder()
            .with_config(STRICT_FILE)
            .with_env("FPSYNC_VALIDATION_MODE", "strcit")
            .build();
        let failure = env.resolve().unwrap_err();
        assert_error_kinds!(failure, [MissingExcludeFile]);
    }
}

/// CONTRACT CONFIG-002: defaults priority order
mod defaults_priority {
    use super::*;

    #[test]
    fn contract_file_redefines_injected_host() {
        let env = TestEnv::builder()
            .with_config("[defaults]\nhost = \"nas\"\n\n[[task]]\nitems = [\"code\"]\n")
            .build();
        let resolution = env.resolve().unwrap();
        assert_eq!(resolution.tasks.tasks()[0].target_root, "nas:/home/me");
    }

    #[test]
    fn contract_env_overrides_file_host() {
        let env = TestEnv::builder()
            .with_config("[defaults]\nhost = \"nas\"\n\n[[task]]\nitems = [\"code\"]\n")
            .with_env("FPSYNC_HOST", "backup")
            .build();
        let resolution = env.resolve().unwrap();
        assert_eq!(resolution.tasks.tasks()[0].target_root, "backup:/home/me");
    }
}

/// CONTRACT CONFIG-003: unknown keys warn with a suggestion
#[test]
fn contract_unknown_key_warns_with_suggestion() {
    let env = TestEnv::builder()
        .with_config("[[task]]\nitems = [\"code\"]\nsubdri = \"x\"\n")
        .build();

    match env.config_warnings.as_slice() {
        [ConfigWarning::UnknownKey {
            key, suggestion, ..
        }] => {
            assert_eq!(key, "subdri");
            assert_eq!(suggestion.as_deref(), Some("subdir"));
        }
        other => panic!("expected one unknown-key warning, got {:?}", other),
    }
}
