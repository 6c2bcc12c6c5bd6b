//! Gameplay systems.
//!
//! This module groups the ECS systems and observers that advance timers and
//! drive the pooled hazards.
//!
//! Submodules overview
//! - [`cooldown`] – tick ability cooldowns
//! - [`lineshooter`] – arm line shooters and fire on every loop
//! - [`pool`] – hand released entities back to the object pool
//! - [`randomspawnline`] – arm spawn lines and spawn on every loop
//! - [`regenerate`] – disappear/regenerate cycle of touched platforms
//! - [`shootingobject`] – move projectiles and release them on arrival
//! - [`time`] – update simulation time and delta
//! - [`timer`] – apply deferred starts and tick timers
//! - [`windball`] – cast windballs, fly them and release them on contact

pub mod cooldown;
pub mod lineshooter;
pub mod pool;
pub mod randomspawnline;
pub mod regenerate;
pub mod shootingobject;
pub mod time;
pub mod timer;
pub mod windball;
