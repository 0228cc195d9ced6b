//! Application state
//!
//! Shared state for the HTTP handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use autoreply_agent::{ReplyEngine, Responder};
use autoreply_config::{ConfigError, Settings};
use autoreply_core::PersonaConfig;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Settings loaded at startup, read through [`AppState::get_config`]
    pub config: Arc<RwLock<Settings>>,
    /// Persona served by `GET /api/persona/default`
    pub default_persona: Arc<RwLock<PersonaConfig>>,
    /// Produces replies for `POST /api/respond`
    pub responder: Arc<dyn Responder>,
}

impl AppState {
    /// Create state with the in-process reply engine and the built-in persona
    pub fn new(config: Settings) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            default_persona: Arc::new(RwLock::new(PersonaConfig::default())),
            responder: Arc::new(ReplyEngine::new()),
        }
    }

    /// Create state, loading the default persona named by the settings
    pub fn from_settings(config: Settings) -> Result<Self, ConfigError> {
        let persona = config.default_persona()?;
        Ok(Self::new(config).with_default_persona(persona))
    }

    pub fn with_default_persona(self, persona: PersonaConfig) -> Self {
        *self.default_persona.write() = persona;
        self
    }

    /// Swap the reply backend
    pub fn with_responder(mut self, responder: Arc<dyn Responder>) -> Self {
        self.responder = responder;
        self
    }

    /// Get read access to config
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    pub fn get_default_persona(&self) -> PersonaConfig {
        self.default_persona.read().clone()
    }

    /// Reload the default persona from the configured file
    pub fn reload_persona(&self) -> Result<PersonaConfig, ConfigError> {
        let persona = self.config.read().default_persona()?;
        *self.default_persona.write() = persona.clone();
        tracing::info!(alias = %persona.alias, "Default persona reloaded");
        Ok(persona)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoreply_config::RuntimeEnvironment;

    #[test]
    fn test_reload_touches_only_persona() {
        let settings = Settings {
            environment: RuntimeEnvironment::Staging,
            ..Settings::default()
        };
        let state = AppState::new(settings).with_default_persona(PersonaConfig::new("Temp"));

        let persona = state.reload_persona().unwrap();
        assert_eq!(persona.alias, "Alex");
        assert_eq!(state.get_default_persona(), persona);

        let config = state.get_config();
        assert_eq!(config.environment, RuntimeEnvironment::Staging);
        assert!(config.persona_path.is_none());
        assert_eq!(config.server.port, 8080);
    }
}
