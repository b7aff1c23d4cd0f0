//! Capability profiles.
//!
//! A profile lists the capability groups a container must provide, the
//! ready banner, and the hints shown once everything loads.
//!
//! # Modules
//!
//! - [`schema`] - Serde types for profile files
//! - [`builtin`] - Profiles embedded in the binary
//! - [`loader`] - Profile discovery and loading
//! - [`validator`] - Structural checks run before any probe

pub mod builtin;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{discover, load_profile, ProfileSource};
pub use schema::{Capability, CapabilityGroup, Profile};
pub use validator::{validate_profile, ValidationError};
