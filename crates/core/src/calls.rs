//! Generic analytics call types — the host-facing schema that vendor
//! adapters receive: track events, identify traits, and page views.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A custom event tracked against the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCall {
    /// Generic event name, matched case-sensitively against adapter mappings.
    pub event: String,
    /// Identified user id, if the host has one. Empty strings count as absent.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Free-form event properties; values pass through untyped.
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl TrackCall {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            user_id: None,
            properties: HashMap::new(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

/// An identify call carrying user traits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentifyCall {
    #[serde(default)]
    pub user_id: Option<String>,
    /// Free-form user traits (email, name, plan, ...).
    #[serde(default)]
    pub traits: HashMap<String, serde_json::Value>,
}

impl IdentifyCall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_trait(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.traits.insert(key.into(), value);
        self
    }

    /// The non-empty `email` trait, if one was supplied.
    pub fn email(&self) -> Option<&str> {
        self.traits
            .get("email")
            .and_then(serde_json::Value::as_str)
            .filter(|email| !email.is_empty())
    }
}

/// A page view. Adapters that have no native page-view concept treat it as
/// a track call named by the page's conventional full name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageCall {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Page properties (url, path, title, referrer, ...).
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl PageCall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Conventional full name for this page view, used as the track event
    /// name: `"Viewed {category} {name} Page"`, `"Viewed {name} Page"`, or
    /// `"Loaded a Page"` when the page is unnamed. A category without a name
    /// also falls back to `"Loaded a Page"`.
    pub fn full_name(&self) -> String {
        let category = self.category.as_deref().filter(|c| !c.is_empty());
        let name = self.name.as_deref().filter(|n| !n.is_empty());
        match (category, name) {
            (Some(category), Some(name)) => format!("Viewed {category} {name} Page"),
            (None, Some(name)) => format!("Viewed {name} Page"),
            _ => "Loaded a Page".to_string(),
        }
    }

    /// Re-express this page view as the equivalent track call. The page's
    /// `category` and `name` are merged into the properties unless the host
    /// already supplied those keys.
    pub fn to_track(&self) -> TrackCall {
        let mut properties = self.properties.clone();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            properties
                .entry("name".to_string())
                .or_insert_with(|| serde_json::Value::String(name.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            properties
                .entry("category".to_string())
                .or_insert_with(|| serde_json::Value::String(category.to_string()));
        }

        TrackCall {
            event: self.full_name(),
            user_id: self.user_id.clone(),
            properties,
        }
    }
}
