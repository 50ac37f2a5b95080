//! AdRoll adapter configuration.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use relay_core::{RelayError, RelayResult};

/// Mapping value for a single generic event name: one segment identifier,
/// or several in legacy configuration shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentMapping {
    One(String),
    Many(Vec<String>),
}

impl SegmentMapping {
    /// The mapped segment identifiers, in configuration order.
    pub fn ids(&self) -> &[String] {
        match self {
            SegmentMapping::One(id) => std::slice::from_ref(id),
            SegmentMapping::Many(ids) => ids,
        }
    }
}

/// Configuration for the AdRoll adapter. Immutable once handed to the
/// adapter; absent fields default to empty/neutral values rather than
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdRollConfig {
    /// AdRoll advertiser id (the `adroll_adv_id` global).
    #[serde(default)]
    pub advertiser_id: String,
    /// AdRoll pixel id (the `adroll_pix_id` global).
    #[serde(default)]
    pub pixel_id: String,
    /// Vendor schema version: 1 (legacy) or 2 (current, the default).
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    /// Generic event name → segment identifier(s). Keys match exactly and
    /// case-sensitively.
    #[serde(default)]
    pub events: HashMap<String, SegmentMapping>,
}

fn default_schema_version() -> u8 {
    2
}

impl Default for AdRollConfig {
    fn default() -> Self {
        Self {
            advertiser_id: String::new(),
            pixel_id: String::new(),
            schema_version: default_schema_version(),
            events: HashMap::new(),
        }
    }
}

impl AdRollConfig {
    /// Whether this configuration uses the legacy (version 1) vendor schema.
    pub fn legacy(&self) -> bool {
        self.schema_version == 1
    }

    /// The vendor key carrying the conversion value under this schema version.
    pub fn conversion_value_key(&self) -> &'static str {
        if self.legacy() {
            "adroll_conversion_value_in_dollars"
        } else {
            "adroll_conversion_value"
        }
    }

    /// Segment identifiers mapped to `event`; empty when unmapped.
    pub fn segments_for(&self, event: &str) -> Vec<String> {
        self.events
            .get(event)
            .map(|mapping| mapping.ids().to_vec())
            .unwrap_or_default()
    }

    /// Parse a configuration delivered as a JSON document.
    pub fn from_json(raw: &str) -> RelayResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load configuration from `PIXEL_RELAY__`-prefixed environment variables.
    pub fn load() -> RelayResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("PIXEL_RELAY")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))
    }

    /// Validate that the configuration is complete enough to go live. The
    /// adapter never calls this itself; hosts that want early failure do.
    pub fn validate(&self) -> Result<()> {
        if self.advertiser_id.is_empty() {
            return Err(anyhow!("AdRoll advertiser_id must not be empty"));
        }
        if self.pixel_id.is_empty() {
            return Err(anyhow!("AdRoll pixel_id must not be empty"));
        }
        if !matches!(self.schema_version, 1 | 2) {
            return Err(anyhow!(
                "AdRoll schema_version must be 1 or 2, got {}",
                self.schema_version
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdRollConfig::default();
        assert_eq!(config.advertiser_id, "");
        assert_eq!(config.pixel_id, "");
        assert_eq!(config.schema_version, 2);
        assert!(!config.legacy());
        assert!(config.events.is_empty());
    }

    #[test]
    fn test_from_json_full() {
        let config = AdRollConfig::from_json(
            r#"{
                "advertiser_id": "FSQJWMMZ2NEAZH6XWKVCNO",
                "pixel_id": "N6HGWT4ALRDRXCAO5PLTB6",
                "schema_version": 1,
                "events": {
                    "Order Created": "f21vVsxY",
                    "Signed Up": ["seg-a", "seg-b"]
                }
            }"#,
        )
        .unwrap();

        assert!(config.legacy());
        assert_eq!(config.segments_for("Order Created"), vec!["f21vVsxY"]);
        assert_eq!(config.segments_for("Signed Up"), vec!["seg-a", "seg-b"]);
        assert!(config.segments_for("Nonexistent").is_empty());
    }

    #[test]
    fn test_from_json_missing_fields_default() {
        let config = AdRollConfig::from_json("{}").unwrap();
        assert_eq!(config.schema_version, 2);
        assert_eq!(config.advertiser_id, "");
        assert_eq!(config.conversion_value_key(), "adroll_conversion_value");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = AdRollConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, RelayError::Serialization(_)));
    }

    #[test]
    fn test_conversion_value_key_by_version() {
        let mut config = AdRollConfig::default();
        assert_eq!(config.conversion_value_key(), "adroll_conversion_value");

        config.schema_version = 1;
        assert_eq!(
            config.conversion_value_key(),
            "adroll_conversion_value_in_dollars"
        );
    }

    #[test]
    fn test_event_lookup_is_case_sensitive() {
        let config = AdRollConfig {
            events: HashMap::from([(
                "Order Created".to_string(),
                SegmentMapping::One("f21vVsxY".to_string()),
            )]),
            ..Default::default()
        };

        assert!(config.segments_for("order created").is_empty());
        assert_eq!(config.segments_for("Order Created"), vec!["f21vVsxY"]);
    }

    #[test]
    fn test_validate() {
        let good = AdRollConfig {
            advertiser_id: "adv".into(),
            pixel_id: "pix".into(),
            ..Default::default()
        };
        assert!(good.validate().is_ok());

        assert!(AdRollConfig::default().validate().is_err());

        let bad_version = AdRollConfig {
            advertiser_id: "adv".into(),
            pixel_id: "pix".into(),
            schema_version: 3,
            ..Default::default()
        };
        assert!(bad_version.validate().is_err());
    }
}
