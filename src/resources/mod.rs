//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `gameconfig` – runtime settings loaded from `config.ini`
//! - `objectpool` – fixed-capacity entity pools keyed by category
//! - `poolconfig` – pool table, prototype factories and configuration errors
//! - `tickscheduler` – timer starts deferred to the next frame
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod objectpool;
pub mod poolconfig;
pub mod tickscheduler;
pub mod worldtime;
