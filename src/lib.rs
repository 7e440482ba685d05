extern crate self as ember_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod filters;
pub mod systems;
mod world;

pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::filters::*;
	pub use crate::components::*;
	pub use crate::entities::Entity;
	pub use crate::world::World;
}

#[cfg(test)]
mod tests;
