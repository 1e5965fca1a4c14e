//! Transport-agnostic domain types, errors, and store ports.

mod engine;
mod error;
pub mod ports;
mod user;

pub use engine::Engine;
pub use error::Error;
pub use user::{Credential, User, UserRole};
