use crate::systems::SystemState;
use crate::entities::Entity;
use crate::world::World;
use std::any::Any;

/// Gives the [World] access to the [SystemState] embedded in a concrete
/// system. **This trait should only be implemented by #\[derive([System])].**
pub trait HasSystemState {
	fn state(&self) -> &SystemState;
	fn state_mut(&mut self) -> &mut SystemState;
}

/// Type-erased access to the concrete type behind a `dyn` [System].
/// Implemented for every `'static` type; used by
/// [SystemRef::system](crate::systems::SystemRef::system).
pub trait AsAny {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

/// It provides the logic for modifying the state of [Entities](Entity)
/// and their associated [Components](crate::components::Component).
///
/// Every hook receives the owning [World] as an explicitly injected context.
/// Per tick, an enabled system sees `pre_process` once, `process` once per
/// matched live entity, then `post_process` once; `on_add`/`on_remove` fire
/// on membership transitions whenever a component mutation (or the system's
/// own registration) changes which entities match its filter.
///
/// Hooks may freely mutate the world, including registering systems or
/// destroying entities; such changes never extend an iteration already in
/// progress. The one restriction: a hook must not cause a second hook
/// dispatch on the *same* system object (for example, removing a component
/// from inside `on_add` so that the same system's `on_remove` fires). That
/// re-entry is a contract violation and panics.
pub trait System: HasSystemState + AsAny {
	/// Initialises the [System]. Called exactly once, at registration.
	/// **This function should not be called by user code.**
	fn init(&mut self, _world: &mut World) {}

	/// Called after `entity` started matching the system's filter.
	fn on_add(&mut self, _world: &mut World, _entity: Entity) {}

	/// Called after `entity` stopped matching the system's filter.
	/// Not called when the entity itself is destroyed.
	fn on_remove(&mut self, _world: &mut World, _entity: Entity) {}

	/// Called once at the start of every tick the system runs in.
	fn pre_process(&mut self, _world: &mut World, _delta_time: f32) {}

	/// Executes the system's logic for a single matched entity.
	fn process(&mut self, _world: &mut World, _entity: Entity, _delta_time: f32) {}

	/// Called once at the end of every tick the system runs in, unless the
	/// system disabled or destroyed itself during the tick.
	fn post_process(&mut self, _world: &mut World, _delta_time: f32) {}
}
