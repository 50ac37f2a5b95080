//! AdRoll pixel adapter — forwards generic analytics calls (page views,
//! identify traits, track events) into the AdRoll retargeting pixel's
//! global API.
//!
//! # Modules
//!
//! - [`config`] — Adapter configuration (advertiser/pixel ids, schema version, event map)
//! - [`globals`] — Vendor global-state boundary and its in-memory implementation
//! - [`adapter`] — The adapter itself: initialize / loaded / identify / page / track

pub mod adapter;
pub mod config;
pub mod globals;

pub use adapter::AdRollAdapter;
pub use config::{AdRollConfig, SegmentMapping};
pub use globals::{in_memory_globals, AdRollGlobals, InMemoryGlobals};
