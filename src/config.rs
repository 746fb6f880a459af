use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Board configuration
///
/// Every field has a default, so a host only needs to supply the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub name: String,
    /// Key of the single storage slot holding the serialized board
    pub storage_key: String,
    /// Title given to cards created with the "+ Card" control
    pub new_card_title: String,
    /// Title given to columns created with the "+ Column" control
    pub new_column_title: String,
    pub card_id_prefix: String,
    pub column_id_prefix: String,
    /// Debug panel text shown when no card is selected
    pub empty_selection_text: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            storage_key: "hlavi-board.state".to_string(),
            new_card_title: "New Task".to_string(),
            new_column_title: "New Column".to_string(),
            card_id_prefix: "c-".to_string(),
            column_id_prefix: "col-".to_string(),
            empty_selection_text: "(select a card)".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parses a (possibly partial) JSON document over the defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BoardError::ConfigError(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_new_card_title(mut self, title: impl Into<String>) -> Self {
        self.new_card_title = title.into();
        self
    }

    /// Checks the values the board cannot work without
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "storage key must not be empty".to_string(),
            ));
        }
        if self.new_card_title.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "new card title must not be empty".to_string(),
            ));
        }
        if self.new_column_title.trim().is_empty() {
            return Err(BoardError::ConfigError(
                "new column title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.new_card_title, "New Task");
        assert_eq!(config.empty_selection_text, "(select a card)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json_str(r#"{"storageKey": "my-board"}"#).unwrap();
        assert_eq!(config.storage_key, "my-board");
        assert_eq!(config.new_card_title, "New Task");
        assert_eq!(config.card_id_prefix, "c-");
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let err = BoardConfig::from_json_str(r#"{"storageKey": "  "}"#).unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = BoardConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, BoardError::ConfigError(_)));
    }

    #[test]
    fn test_builders() {
        let config = BoardConfig::default()
            .with_storage_key("other")
            .with_new_card_title("Untitled");
        assert_eq!(config.storage_key, "other");
        assert_eq!(config.new_card_title, "Untitled");
    }
}
