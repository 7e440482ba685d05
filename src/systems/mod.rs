//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be registered with a [World](crate::prelude::World)
//! through a [SystemRef] for its hooks to run. Each tick, the world drives
//! every enabled system over the entities matching its
//! [Filter](crate::filters::Filter).

mod system;
mod system_ref;
mod system_state;

pub use system::*;
pub use system_ref::*;
pub use system_state::*;
pub use ember_ecs_derive::System;
