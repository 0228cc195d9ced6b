//! Persona file loading
//!
//! The format is picked from the file extension: `.yaml`/`.yml`, `.toml` or
//! `.json`. Field names use the same camelCase keys as the HTTP API.

use std::path::Path;

use autoreply_core::PersonaConfig;

use crate::ConfigError;

/// Load and validate a persona file
pub fn load_persona(path: impl AsRef<Path>) -> Result<PersonaConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("Failed to read persona file: {}", e)))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let persona: PersonaConfig = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("Invalid persona YAML: {}", e)))?,
        "toml" => toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("Invalid persona TOML: {}", e)))?,
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("Invalid persona JSON: {}", e)))?,
        other => {
            return Err(ConfigError::ParseError(format!(
                "Unsupported persona file extension '{}' for {}",
                other,
                path.display()
            )))
        },
    };

    persona.validate()?;

    tracing::debug!(
        path = %path.display(),
        alias = %persona.alias,
        tone = %persona.tone,
        "Loaded persona"
    );

    Ok(persona)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_core::TonePreset;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_persona() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "persona.yaml",
            r#"
alias: Priya
persona: Calm PM
tone: professional
availability: Mon-Fri 10:00-17:00
signature: "- Priya"
fallback: Back soon.
samplePhrases:
  - happy to help
escalateKeywords: [outage]
responseDelayMinutes: 15
autoIntro: This is my auto-responder.
"#,
        );

        let persona = load_persona(&path).unwrap();
        assert_eq!(persona.alias, "Priya");
        assert_eq!(persona.tone, TonePreset::Professional);
        assert_eq!(persona.sample_phrases, vec!["happy to help"]);
        assert_eq!(persona.response_delay_minutes, 15);
    }

    #[test]
    fn test_load_toml_persona() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "persona.toml",
            r#"
alias = "Kai"
persona = ""
tone = "playful"
availability = "evenings"
signature = "~ Kai"
fallback = "brb"
autoIntro = "auto-responder on duty"
"#,
        );

        let persona = load_persona(&path).unwrap();
        assert_eq!(persona.tone, TonePreset::Playful);
        assert!(persona.sample_phrases.is_empty());
        assert_eq!(persona.response_delay_minutes, 45);
    }

    #[test]
    fn test_unknown_tone_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "persona.json",
            r#"{"alias":"A","persona":"","tone":"moody","availability":"","signature":"","fallback":"","autoIntro":""}"#,
        );
        assert!(matches!(load_persona(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_delay_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "persona.json",
            r#"{"alias":"A","persona":"","tone":"warm","availability":"","signature":"","fallback":"","autoIntro":"","responseDelayMinutes":0}"#,
        );
        match load_persona(&path) {
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "persona.responseDelayMinutes")
            },
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_and_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_persona(dir.path().join("nope.yaml")),
            Err(ConfigError::FileNotFound(_))
        ));

        let path = write_file(&dir, "persona.ini", "alias=A");
        assert!(matches!(load_persona(&path), Err(ConfigError::ParseError(_))));
    }
}
