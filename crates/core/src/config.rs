//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! assessment service, so no environment variables or other ambient state
//! are read while handling requests.

use crate::triggers::TriggerVocabulary;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("trigger vocabulary cannot be empty")]
    EmptyVocabulary,
}

/// Engine configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    vocabulary: TriggerVocabulary,
}

impl CoreConfig {
    /// Create a new `CoreConfig` around a trigger vocabulary.
    pub fn new(vocabulary: TriggerVocabulary) -> Result<Self, ConfigError> {
        if vocabulary.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        Ok(Self { vocabulary })
    }

    pub fn vocabulary(&self) -> &TriggerVocabulary {
        &self.vocabulary
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            vocabulary: TriggerVocabulary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_vocabulary() {
        let empty = TriggerVocabulary::new(Vec::<String>::new());
        assert!(matches!(
            CoreConfig::new(empty),
            Err(ConfigError::EmptyVocabulary)
        ));
    }

    #[test]
    fn default_carries_the_default_vocabulary() {
        assert_eq!(CoreConfig::default().vocabulary().len(), 11);
    }
}
