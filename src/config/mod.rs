mod profile;

pub use profile::{load_profile, resolve_profile, save_profile};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
