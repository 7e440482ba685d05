//! [Filters](Filter) decide which [entities](crate::entities::Entity) a
//! [System](crate::systems::System) processes.
//!
//! A filter is a stateless predicate over an entity's component list. The
//! [World](crate::prelude::World) re-evaluates it whenever the list changes
//! and fires the owning system's membership hooks on transitions.

mod filter;
mod has_all_filter;

pub use filter::*;
pub use has_all_filter::*;
