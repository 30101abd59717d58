//! Tests for the config module

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::config::{Config, ConfigV1};
    use crate::error::Error;

    fn load(file_name: &str, content: &str) -> ConfigV1 {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(file_name), content).unwrap();
        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        config
    }

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config, ConfigV1::default());
        assert_eq!(config.template, PathBuf::from("web/index.template.html"));
        assert_eq!(config.include, vec!["web/**", "lib/**"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_yaml_config() {
        let config = load(
            "preload.yaml",
            r#"
schemaVersion: v1
package: demo
exclude:
  - "**/*.png"
diagnostics: true
"#,
        );
        assert_eq!(config.package.as_deref(), Some("demo"));
        assert_eq!(config.exclude, vec!["**/*.png"]);
        assert!(config.diagnostics);
        assert_eq!(config.include, vec!["web/**", "lib/**"]);
    }

    #[test]
    fn loads_json_config() {
        let config = load(
            "preload.json",
            r#"{"schemaVersion": "v1", "template": "web/app.template.html", "include": ["web/**"]}"#,
        );
        assert_eq!(config.template, PathBuf::from("web/app.template.html"));
        assert_eq!(config.include, vec!["web/**"]);
        assert!(!config.diagnostics);
    }

    #[test]
    fn json_is_preferred_over_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("preload.json"), r#"{"schemaVersion": "v1", "package": "a"}"#)
            .unwrap();
        fs::write(tmp.path().join("preload.yaml"), "schemaVersion: v1\npackage: b\n").unwrap();
        let Config::V1(config) = Config::load_config(tmp.path()).unwrap();
        assert_eq!(config.package.as_deref(), Some("a"));
    }

    #[test]
    fn unknown_schema_version_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("preload.yml"), "schemaVersion: v2\n").unwrap();
        assert!(matches!(Config::load_config(tmp.path()), Err(Error::YamlParse(_))));
    }

    #[test]
    fn validate_rejects_empty_include() {
        let config = ConfigV1 { include: vec![], ..ConfigV1::default() };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn validate_rejects_blank_package() {
        let config = ConfigV1 { package: Some("  ".into()), ..ConfigV1::default() };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn validate_rejects_template_without_marker() {
        let config = ConfigV1 { template: "web/index.html".into(), ..ConfigV1::default() };
        assert!(matches!(config.validate(), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn selection_config_mirrors_fields() {
        let config = ConfigV1 {
            exclude: vec!["web/skip/**".into()],
            diagnostics: true,
            ..ConfigV1::default()
        };
        let selection = config.selection_config();
        assert_eq!(selection.include, config.include);
        assert_eq!(selection.exclude, vec!["web/skip/**"]);
        assert!(selection.diagnostics);
    }
}
