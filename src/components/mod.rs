//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`cooldown`] – ability cooldown gate built on a timer
//! - [`lineshooter`] – hazard firing pooled projectiles along a line
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`pooled`] – marks members of an object pool
//! - [`randomspawnline`] – hazard spawning pooled objects on a segment
//! - [`regenerate`] – platform that disappears when touched and regenerates
//! - [`rotation`] – rotation angle in degrees
//! - [`shootingobject`] – straight-line projectile
//! - [`timer`] – cancelable, pausable countdown with a completion action
//! - [`windball`] – thrown wind projectile and its caster

pub mod cooldown;
pub mod lineshooter;
pub mod mapposition;
pub mod pooled;
pub mod randomspawnline;
pub mod regenerate;
pub mod rotation;
pub mod shootingobject;
pub mod timer;
pub mod windball;
