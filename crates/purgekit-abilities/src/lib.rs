//! Cache-management abilities for purgekit
//!
//! This crate is the action surface of purgekit: a small catalog of
//! Cloudflare cache-management abilities, each with a schema-validated input
//! type, a role-equality permission check, and an executor that normalizes
//! every result (including transport and API failures) into a uniform
//! [`Outcome`].
//!
//! # Example
//!
//! ```ignore
//! use purgekit_abilities::{AbilityService, ClearCacheInput};
//! use purgekit_config::Settings;
//!
//! let service = AbilityService::new(Settings::load()?);
//! let outcome = service.clear_cache(&ClearCacheInput::default()).await;
//! println!("{}", outcome.message);
//! ```

pub mod ability;
pub mod error;
pub mod executor;
pub mod input;
pub mod outcome;
pub mod permission;

pub use ability::{catalog, Ability, Annotations};
pub use error::AbilityError;
pub use executor::AbilityService;
pub use input::{ClearCacheInput, SetDevelopmentModeInput};
pub use outcome::Outcome;
pub use permission::PermissionPolicy;
