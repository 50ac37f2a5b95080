pub mod calls;
pub mod case;
pub mod error;
pub mod integration;
pub mod loader;

pub use calls::{IdentifyCall, PageCall, TrackCall};
pub use error::{RelayError, RelayResult};
pub use integration::Integration;
pub use loader::{ScriptLoader, ScriptTag};
