use crate::components::{Component, ComponentInstance, ComponentRef, HasComponentId};
use crate::entities::{Entity, EntityMap};
use crate::systems::SystemRef;

/// A container for [entities](Entity), their [components](ComponentInstance)
/// and [systems](SystemRef).
///
/// The world owns the entity-id allocator, the entity → component-list
/// mapping, the registered system list and the pending-destruction queue. It
/// re-synchronizes system membership after every component mutation and
/// drives the per-tick update protocol.
///
/// Misuse against unknown or removed entities is absorbed as a silent no-op
/// (`false` or an empty list) rather than an error; entity ids carry no
/// ownership, so there is nothing to fail on.
pub struct World {
	entity_counter: u64,
	entities: EntityMap,
	destroyed_entities: Vec<Entity>,
	systems: Vec<SystemRef>,
}

impl World {
	pub fn new() -> Self {
		Self {
			entity_counter: 0,
			entities: EntityMap::default(),
			destroyed_entities: Vec::new(),
			systems: Vec::new(),
		}
	}

	/// Creates a single [entity](Entity) with no components attached.
	///
	/// Ids are strictly increasing and never reused.
	pub fn create_entity(&mut self) -> Entity {
		self.entity_counter += 1;
		let entity = Entity::new(self.entity_counter);
		self.entities.insert(entity, Vec::new());
		entity
	}

	/// Appends `component` to the entity's list and re-synchronizes the
	/// entity against every registered system's filter.
	///
	/// Attachment order is preserved and duplicate component types are
	/// permitted. Returns *false* without effect if the entity is not live.
	pub fn add_component(&mut self, entity: Entity, component: ComponentInstance) -> bool {
		match self.entities.get_mut(&entity) {
			None => false,
			Some(components) => {
				components.push(component);
				self.sync_entity(entity);
				true
			},
		}
	}

	/// Removes the first list element sharing `component`'s underlying value
	/// and re-synchronizes the entity against every registered system's
	/// filter. No-op if the entity is not live or no element matches.
	pub fn remove_component(&mut self, entity: Entity, component: &ComponentInstance) {
		let removed = match self.entities.get_mut(&entity) {
			None => false,
			Some(components) => match components.iter().position(|c| c.ptr_eq(component)) {
				None => false,
				Some(index) => {
					components.remove(index);
					true
				},
			},
		};

		if removed {
			self.sync_entity(entity);
		}
	}

	/// A snapshot of the entity's component list, in attachment order, or an
	/// empty list if the entity is not live.
	///
	/// The returned list is independent of later attachment and removal; the
	/// instances still share their underlying values with the world.
	pub fn get_components(&self, entity: Entity) -> Vec<ComponentInstance> {
		match self.entities.get(&entity) {
			None => Vec::new(),
			Some(components) => components.clone(),
		}
	}

	/// Like [get_components](World::get_components), filtered to components
	/// of type `T`, in attachment order.
	pub fn get_components_of<T: Component + HasComponentId>(&self, entity: Entity) -> Vec<ComponentRef<T>> {
		match self.entities.get(&entity) {
			None => Vec::new(),
			Some(components) => components
				.iter()
				.filter(|component| component.is::<T>())
				.map(|component| ComponentRef::new(component.clone()))
				.collect(),
		}
	}

	/// Removes the entity from the live map immediately and enqueues it for
	/// a deferred membership purge on the next [update](World::update).
	///
	/// System membership lists keep the id until then, and no `on_remove`
	/// fires for this path. No-op if the entity is not live.
	pub fn remove_entity(&mut self, entity: Entity) {
		if self.entities.remove(&entity).is_some() {
			self.destroyed_entities.push(entity);
			log::trace!("entity {entity} marked for destruction");
		}
	}

	/// True iff the entity has been removed but not yet purged from system
	/// membership lists.
	pub fn is_entity_destroyed(&self, entity: Entity) -> bool {
		self.destroyed_entities.contains(&entity)
	}

	/// The number of live entities.
	pub fn entity_count(&self) -> usize {
		self.entities.len()
	}

	/// Registers a [system](SystemRef): synchronizes it against every live
	/// entity (firing `on_add` per match), then calls its `init` hook
	/// exactly once. No-op if the handle is already registered.
	pub fn add_system(&mut self, system: &SystemRef) {
		if self.systems.iter().any(|s| s.ptr_eq(system)) {
			return;
		}

		self.systems.push(system.clone());
		log::debug!("registered system #{}", self.systems.len());

		let entities = self.entities.keys().copied().collect::<Vec<_>>();
		for entity in entities {
			self.sync_system_entity(system, entity);
		}

		system.logic_mut().init(self);
	}

	/// Unregisters a [system](SystemRef) immediately, without invoking any
	/// of its hooks. No-op if the handle is not registered.
	pub fn remove_system(&mut self, system: &SystemRef) {
		if let Some(index) = self.systems.iter().position(|s| s.ptr_eq(system)) {
			self.systems.remove(index);
		}
	}

	/// All registered systems whose membership list currently contains the
	/// entity.
	pub fn get_entity_systems(&self, entity: Entity) -> Vec<SystemRef> {
		self.systems.iter().filter(|s| s.contains(entity)).cloned().collect()
	}

	/// Advances the world by one tick.
	///
	/// First purges entities removed since the previous tick from every
	/// system's membership list (silently; see [remove_entity](World::remove_entity)),
	/// then sweeps a snapshot of the system list in registration order:
	/// destroyed systems are unregistered, disabled systems are skipped, and
	/// every other system runs `pre_process`, `process` per matched live
	/// entity and `post_process`.
	pub fn update(&mut self, delta_time: f32) {
		self.purge_destroyed_entities();

		for system in self.systems.clone() {
			if system.is_destroyed() {
				self.remove_system(&system);
				continue;
			}
			if !system.is_enabled() {
				continue;
			}

			self.run_system(&system, delta_time);
		}
	}

	fn purge_destroyed_entities(&mut self) {
		let destroyed = std::mem::take(&mut self.destroyed_entities);
		if !destroyed.is_empty() {
			log::debug!("purging {} destroyed entities", destroyed.len());
		}

		for entity in destroyed {
			self.entities.remove(&entity);
			for system in &self.systems {
				// membership purge only; on_remove is reserved for filter
				// transitions
				system.remove_entity(entity);
			}
		}
	}

	fn run_system(&mut self, system: &SystemRef, delta_time: f32) {
		system.logic_mut().pre_process(self, delta_time);

		for entity in system.entities() {
			if system.is_destroyed() || !system.is_enabled() {
				break;
			}
			if self.is_entity_destroyed(entity) {
				continue;
			}

			system.logic_mut().process(self, entity, delta_time);
		}

		if system.is_destroyed() || !system.is_enabled() {
			return;
		}

		system.logic_mut().post_process(self, delta_time);
	}

	fn sync_entity(&mut self, entity: Entity) {
		for system in self.systems.clone() {
			self.sync_system_entity(&system, entity);
		}
	}

	fn sync_system_entity(&mut self, system: &SystemRef, entity: Entity) {
		let matches = match self.entities.get(&entity) {
			None => return,
			Some(components) => system.filter().matches(components),
		};
		let contains = system.contains(entity);

		if !contains && matches {
			system.add_entity(entity);
			log::trace!("entity {entity} entered a system");
			system.logic_mut().on_add(self, entity);
		} else if contains && !matches {
			system.remove_entity(entity);
			log::trace!("entity {entity} left a system");
			system.logic_mut().on_remove(self, entity);
		}
	}
}

impl Default for World {
	fn default() -> Self {
		Self::new()
	}
}
