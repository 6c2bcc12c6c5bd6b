//! Galehollow gameplay core.
//!
//! This module exposes the ECS components, resources, systems, and events
//! behind the game's timers and object pools, for use in integration tests and
//! by the headless runtime.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
