//! [Entities](Entity) represent the individual "things" in your simulation or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.

mod entity;

pub use entity::*;
