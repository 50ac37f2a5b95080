//! AdRoll pixel adapter.
//!
//! Translates generic analytics calls into the AdRoll retargeting pixel's
//! vendor surface: publishes identifiers as page globals, injects the
//! roundtrip script, and fans tracked events out into per-segment visitor
//! records.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use relay_core::case::snake_case;
use relay_core::{IdentifyCall, Integration, PageCall, ScriptLoader, ScriptTag, TrackCall};

use crate::config::AdRollConfig;
use crate::globals::AdRollGlobals;

const HTTP_TAG: ScriptTag = ScriptTag::new(
    "http",
    r#"<script src="http://a.adroll.com/j/roundtrip.js">"#,
);

const HTTPS_TAG: ScriptTag = ScriptTag::new(
    "https",
    r#"<script src="https://s.adroll.com/j/roundtrip.js">"#,
);

/// Adapter wiring generic analytics calls into the AdRoll pixel.
pub struct AdRollAdapter {
    config: AdRollConfig,
    globals: Arc<dyn AdRollGlobals>,
    loader: Arc<dyn ScriptLoader>,
}

impl AdRollAdapter {
    pub fn new(
        config: AdRollConfig,
        globals: Arc<dyn AdRollGlobals>,
        loader: Arc<dyn ScriptLoader>,
    ) -> Self {
        Self {
            config,
            globals,
            loader,
        }
    }

    pub fn config(&self) -> &AdRollConfig {
        &self.config
    }

    /// Rewrite call properties into the vendor's record shape: revenue and
    /// its fallbacks move to the schema-versioned conversion key, a few keys
    /// get fixed renames, and everything else is snake_cased.
    fn base_payload(&self, call: &TrackCall) -> Map<String, Value> {
        let conversion_key = self.config.conversion_value_key();
        let has_revenue = call.properties.contains_key("revenue");

        let mut payload = Map::new();
        for (key, value) in &call.properties {
            let vendor_key = match key.as_str() {
                "revenue" => conversion_key.to_string(),
                // total is only a conversion-value fallback; with revenue
                // present it stays an ordinary property.
                "total" if !has_revenue => conversion_key.to_string(),
                "orderId" => "order_id".to_string(),
                "id" => "product_id".to_string(),
                _ => snake_case(key),
            };
            payload.insert(vendor_key, value.clone());
        }

        if let Some(user_id) = call.user_id.as_deref().filter(|id| !id.is_empty()) {
            payload.insert("user_id".to_string(), Value::String(user_id.to_string()));
        }

        payload
    }

    /// Segments the event dispatches to, after version-specific fallbacks.
    fn resolve_segments(&self, event: &str) -> Vec<String> {
        let mut segments = self.config.segments_for(event);

        // Since April 2015 AdRoll segments exclusively by id; the name-based
        // fallback and segment snake_casing are frozen version-1 behavior.
        if self.config.legacy() {
            if segments.is_empty() {
                segments.push(event.to_string());
            }
            for segment in &mut segments {
                *segment = snake_case(segment);
            }
        }

        segments
    }
}

impl Integration for AdRollAdapter {
    fn name(&self) -> &'static str {
        "AdRoll"
    }

    fn initialize(&self) {
        self.globals.set_advertiser_id(&self.config.advertiser_id);
        self.globals.set_pixel_id(&self.config.pixel_id);
        self.globals.mark_loaded();

        let tag = if self.loader.secure_transport() {
            &HTTPS_TAG
        } else {
            &HTTP_TAG
        };
        self.loader.inject(tag);

        info!(
            advertiser_id = %self.config.advertiser_id,
            pixel_id = %self.config.pixel_id,
            tag = tag.name,
            "adroll pixel initialized"
        );
    }

    fn loaded(&self) -> bool {
        self.globals.is_loaded()
    }

    fn identify(&self, call: &IdentifyCall) {
        if let Some(email) = call.email() {
            self.globals.set_email(email);
            debug!("adroll email set from identify traits");
        }
    }

    fn track(&self, call: &TrackCall) {
        let segments = self.resolve_segments(&call.event);
        if segments.is_empty() {
            debug!(event = %call.event, "event not mapped to a segment, skipping");
            return;
        }

        let payload = self.base_payload(call);
        for segment in &segments {
            let mut record = payload.clone();
            record.insert(
                "adroll_segments".to_string(),
                Value::String(segment.clone()),
            );
            self.globals.record_user(Value::Object(record));
        }

        debug!(
            event = %call.event,
            segments = segments.len(),
            "adroll record_user dispatched"
        );
    }
}
