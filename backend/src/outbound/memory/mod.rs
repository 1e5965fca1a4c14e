//! In-memory store adapters backed by process-local maps.
//!
//! Each adapter wraps one `HashMap` in its own `RwLock`. Individual
//! operations are therefore atomic, but nothing coordinates *across* maps:
//! a handler writing the credential map and then the user map can be
//! observed in between. That lack of cross-map atomicity is a documented
//! property of this service, not an oversight.

mod credentials;
mod engines;
mod users;

pub use credentials::MemoryCredentialStore;
pub use engines::MemoryEngineStore;
pub use users::MemoryUserStore;
