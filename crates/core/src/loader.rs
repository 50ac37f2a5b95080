//! Script-tag loading boundary — how adapters request injection of a
//! vendor's remote script without touching the document themselves.
//!
//! Adapters hold an `Arc<dyn ScriptLoader>`; hosts wire in a real
//! DOM-backed injector, while tests use [`RecordingLoader`].

use std::sync::{Arc, Mutex};

/// A literal script-tag template a vendor adapter asks the host to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    /// Template name, e.g. `"http"` or `"https"`.
    pub name: &'static str,
    /// The tag markup, verbatim.
    pub html: &'static str,
}

impl ScriptTag {
    pub const fn new(name: &'static str, html: &'static str) -> Self {
        Self { name, html }
    }
}

/// Host-side script injector. Loading is asynchronous and fire-and-forget;
/// completion is observed through the vendor's own globals, never through
/// this trait.
pub trait ScriptLoader: Send + Sync {
    /// Whether the current page context is served over a secure transport.
    fn secure_transport(&self) -> bool;

    /// Request injection of the given tag.
    fn inject(&self, tag: &ScriptTag);
}

/// Loader that drops every request, for adapters that should stay inert.
pub struct NoOpLoader;

impl ScriptLoader for NoOpLoader {
    fn secure_transport(&self) -> bool {
        true
    }

    fn inject(&self, _tag: &ScriptTag) {}
}

/// In-memory loader that records injected tags for testing.
pub struct RecordingLoader {
    secure: bool,
    injected: Mutex<Vec<ScriptTag>>,
}

impl RecordingLoader {
    pub fn new(secure: bool) -> Self {
        Self {
            secure,
            injected: Mutex::new(Vec::new()),
        }
    }

    /// Tags injected so far, oldest first.
    pub fn injected(&self) -> Vec<ScriptTag> {
        self.injected
            .lock()
            .expect("script loader mutex poisoned")
            .clone()
    }

    pub fn count(&self) -> usize {
        self.injected
            .lock()
            .expect("script loader mutex poisoned")
            .len()
    }
}

impl ScriptLoader for RecordingLoader {
    fn secure_transport(&self) -> bool {
        self.secure
    }

    fn inject(&self, tag: &ScriptTag) {
        self.injected
            .lock()
            .expect("script loader mutex poisoned")
            .push(tag.clone());
    }
}

/// Convenience: a loader for adapters that should never load anything.
pub fn noop_loader() -> Arc<dyn ScriptLoader> {
    Arc::new(NoOpLoader)
}

/// Convenience: a recording loader reporting the given transport security.
pub fn recording_loader(secure: bool) -> Arc<RecordingLoader> {
    Arc::new(RecordingLoader::new(secure))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_loader() {
        let loader = recording_loader(false);
        assert_eq!(loader.count(), 0);
        assert!(!loader.secure_transport());

        let tag = ScriptTag::new("http", r#"<script src="http://example.com/pixel.js">"#);
        loader.inject(&tag);

        assert_eq!(loader.count(), 1);
        assert_eq!(loader.injected()[0], tag);
    }

    #[test]
    fn test_noop_loader() {
        let loader = noop_loader();
        // Should not panic
        loader.inject(&ScriptTag::new("https", "<script>"));
        assert!(loader.secure_transport());
    }
}
