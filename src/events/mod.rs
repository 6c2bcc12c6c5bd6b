//! Event types used by the gameplay core.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies. Observers reacting to them live in [`crate::systems`].
//!
//! Submodules:
//! - [`collision`] – contact notifications reported from outside
//! - [`pool`] – requests to hand a pooled entity back
//! - [`regenerate`] – platform disappeared/regenerated notifications
//! - [`timer`] – timer completion notifications
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod collision;
pub mod pool;
pub mod regenerate;
pub mod timer;
