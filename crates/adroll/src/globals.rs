//! Shared page state for the AdRoll pixel.
//!
//! The vendor script reads its configuration from well-known globals
//! (`adroll_adv_id`, `adroll_pix_id`, `adroll_email`, `__adroll_loaded`)
//! and exposes a client object (`__adroll`) once it has booted. This
//! module abstracts that surface so the adapter can run against a real
//! page environment or an in-memory double.

use std::sync::{Arc, Mutex};

use serde_json::Value;

/// The global-variable surface shared between host page and vendor script.
pub trait AdRollGlobals: Send + Sync {
    /// Publish the advertiser id for the vendor script to read.
    fn set_advertiser_id(&self, id: &str);

    /// Publish the pixel id for the vendor script to read.
    fn set_pixel_id(&self, id: &str);

    /// Raise the load marker the vendor script checks on boot.
    fn mark_loaded(&self);

    /// Publish the visitor email for the vendor script to read.
    fn set_email(&self, email: &str);

    /// Forward a visitor record to the vendor client object. Behavior when
    /// the vendor has not yet installed its client is environment-defined;
    /// the adapter neither guards against nor recovers from that state.
    fn record_user(&self, payload: Value);

    /// Whether the vendor client object is present. The vendor installs it
    /// only after its script has booted, so this doubles as the ready check.
    fn is_loaded(&self) -> bool;
}

#[derive(Debug, Default)]
struct GlobalState {
    advertiser_id: Option<String>,
    pixel_id: Option<String>,
    email: Option<String>,
    load_marker: bool,
    vendor_present: bool,
    recorded: Vec<Value>,
}

/// In-memory stand-in for the page globals, used by hosts without a real
/// vendor environment and by tests.
#[derive(Debug, Default)]
pub struct InMemoryGlobals {
    state: Mutex<GlobalState>,
}

impl InMemoryGlobals {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GlobalState> {
        self.state.lock().expect("adroll globals mutex poisoned")
    }

    /// Simulate the vendor script booting and installing its client object.
    pub fn install_vendor(&self) {
        self.lock().vendor_present = true;
    }

    pub fn advertiser_id(&self) -> Option<String> {
        self.lock().advertiser_id.clone()
    }

    pub fn pixel_id(&self) -> Option<String> {
        self.lock().pixel_id.clone()
    }

    pub fn load_marker(&self) -> bool {
        self.lock().load_marker
    }

    pub fn email(&self) -> Option<String> {
        self.lock().email.clone()
    }

    /// All records forwarded so far, in dispatch order.
    pub fn recorded(&self) -> Vec<Value> {
        self.lock().recorded.clone()
    }

    pub fn record_count(&self) -> usize {
        self.lock().recorded.len()
    }

    pub fn clear_recorded(&self) {
        self.lock().recorded.clear();
    }
}

impl AdRollGlobals for InMemoryGlobals {
    fn set_advertiser_id(&self, id: &str) {
        self.lock().advertiser_id = Some(id.to_string());
    }

    fn set_pixel_id(&self, id: &str) {
        self.lock().pixel_id = Some(id.to_string());
    }

    fn mark_loaded(&self) {
        self.lock().load_marker = true;
    }

    fn set_email(&self, email: &str) {
        self.lock().email = Some(email.to_string());
    }

    fn record_user(&self, payload: Value) {
        self.lock().recorded.push(payload);
    }

    fn is_loaded(&self) -> bool {
        self.lock().vendor_present
    }
}

/// Convenience constructor for an in-memory globals surface.
pub fn in_memory_globals() -> Arc<InMemoryGlobals> {
    Arc::new(InMemoryGlobals::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_writes() {
        let globals = InMemoryGlobals::new();
        globals.set_advertiser_id("adv-1");
        globals.set_pixel_id("pix-1");
        globals.set_email("user@example.com");
        globals.mark_loaded();

        assert_eq!(globals.advertiser_id().as_deref(), Some("adv-1"));
        assert_eq!(globals.pixel_id().as_deref(), Some("pix-1"));
        assert_eq!(globals.email().as_deref(), Some("user@example.com"));
        assert!(globals.load_marker());
    }

    #[test]
    fn test_loaded_tracks_vendor_install() {
        let globals = InMemoryGlobals::new();
        assert!(!globals.is_loaded());

        globals.mark_loaded();
        assert!(!globals.is_loaded());

        globals.install_vendor();
        assert!(globals.is_loaded());
    }

    #[test]
    fn test_record_capture() {
        let globals = InMemoryGlobals::new();
        globals.install_vendor();
        globals.record_user(json!({"adroll_segments": "seg-a"}));
        globals.record_user(json!({"adroll_segments": "seg-b"}));

        assert_eq!(globals.record_count(), 2);
        assert_eq!(globals.recorded()[0], json!({"adroll_segments": "seg-a"}));

        globals.clear_recorded();
        assert_eq!(globals.record_count(), 0);
    }
}
