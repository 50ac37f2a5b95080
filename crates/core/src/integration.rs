//! The seam between the generic analytics dispatch layer and vendor
//! adapters.

use crate::calls::{IdentifyCall, PageCall, TrackCall};

/// A vendor integration the analytics layer routes calls into.
///
/// Hosts call [`initialize`](Integration::initialize) once, wait for the
/// external loader's ready signal, and only then route
/// `identify`/`page`/`track` traffic. Adapters do not guard against
/// out-of-order calls themselves; invoking the vendor before
/// [`loaded`](Integration::loaded) turns true is the host's bug.
pub trait Integration: Send + Sync {
    /// Vendor name, e.g. `"AdRoll"`.
    fn name(&self) -> &'static str;

    /// Set up vendor globals and request the remote script load.
    fn initialize(&self);

    /// Whether the vendor's remote script has finished loading.
    fn loaded(&self) -> bool;

    /// Announce user traits to the vendor.
    fn identify(&self, call: &IdentifyCall);

    /// Forward a custom event.
    fn track(&self, call: &TrackCall);

    /// Forward a page view. Pages are tracked as events under the page's
    /// conventional full name; the default delegates to
    /// [`track`](Integration::track).
    fn page(&self, call: &PageCall) {
        self.track(&call.to_track());
    }
}
