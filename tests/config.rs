#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wraptime::api::office::OfficeConfig;
    use wraptime::libs::config::{Config, IdentityConfig, ImageConfig};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.identity.is_none());
        assert!(config.office.is_none());
        assert!(config.image.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            identity: Some(IdentityConfig {
                email: "crew@abetterset.example".to_string(),
                name: "Crew Member".to_string(),
                department: "IMAGE".to_string(),
            }),
            office: Some(OfficeConfig {
                api_url: "https://office.example.com/api".to_string(),
                project: "feature-2026".to_string(),
            }),
            image: Some(ImageConfig {
                max_dimension: 800,
                quality: 70,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.identity, config.identity);
        assert_eq!(loaded.office, config.office);
        assert_eq!(loaded.image, config.image);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_image_settings_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        let settings = config.image_settings();
        assert_eq!(settings.max_dimension, 1024);
        assert_eq!(settings.quality, 60);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_require_identity_fails_unconfigured(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.require_identity().is_err());
        assert!(config.require_office().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_is_idempotent(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        Config::delete().unwrap();
        // Deleting again must not fail
        Config::delete().unwrap();
        assert!(Config::read().unwrap().identity.is_none());
    }
}
