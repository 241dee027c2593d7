//!
//! # Dashboard core
//!
//! Policies behind the dashboard views: when a resource list refetches and
//! which fields of the create-secret form are invalid.
//!
pub mod list;
pub mod namespace;
pub mod pipeline_resources;
pub mod secret;
pub mod urls;

pub use namespace::NamespaceSelection;
