use crate::prelude::*;

#[derive(Default, Component)]
struct Counter {
	value: i32,
}

#[derive(Default, Component)]
struct Journal {
	entries: Vec<String>,
}

/// Records every hook invocation so tests can assert exact call order.
#[derive(Default, System)]
struct RecordingSystem {
	state: SystemState,
	calls: Vec<String>,
}

impl System for RecordingSystem {
	fn init(&mut self, _world: &mut World) {
		self.calls.push("init".to_string());
	}

	fn on_add(&mut self, _world: &mut World, entity: Entity) {
		self.calls.push(format!("on_add {entity}"));
	}

	fn on_remove(&mut self, _world: &mut World, entity: Entity) {
		self.calls.push(format!("on_remove {entity}"));
	}

	fn pre_process(&mut self, _world: &mut World, delta_time: f32) {
		self.calls.push(format!("pre_process {delta_time}"));
	}

	fn process(&mut self, world: &mut World, entity: Entity, delta_time: f32) {
		self.calls.push(format!("process {entity} {delta_time}"));
		if let Some(counter) = world.get_components_of::<Counter>(entity).first() {
			counter.borrow_mut().value = 4321;
		}
	}

	fn post_process(&mut self, _world: &mut World, delta_time: f32) {
		self.calls.push(format!("post_process {delta_time}"));
	}
}

fn recording_system() -> SystemRef {
	SystemRef::new(RecordingSystem::default(), HasAllFilter::of::<(Counter,)>())
}

fn calls(system: &SystemRef) -> Vec<String> {
	system.system::<RecordingSystem>().unwrap().calls.clone()
}

#[test]
pub fn update_drives_hooks_in_order() {
	let mut world = World::new();
	let system = recording_system();
	world.add_system(&system);

	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Counter { value: 1234 }));

	assert_eq!(
		1234,
		world.get_components_of::<Counter>(entity)[0].borrow().value
	);

	world.update(0.1);

	assert_eq!(
		4321,
		world.get_components_of::<Counter>(entity)[0].borrow().value,
		"Mutations made by process must be visible through the world"
	);
	assert_eq!(
		vec![
			"init".to_string(),
			format!("on_add {entity}"),
			"pre_process 0.1".to_string(),
			format!("process {entity} 0.1"),
			"post_process 0.1".to_string(),
		],
		calls(&system),
		"Hooks did not run in the documented order"
	);
}

#[test]
pub fn registration_syncs_existing_entities_before_init() {
	let mut world = World::new();
	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Counter::default()));

	let system = recording_system();
	world.add_system(&system);

	assert_eq!(
		vec![format!("on_add {entity}"), "init".to_string()],
		calls(&system),
		"Registration must fire on_add per existing match, then init"
	);
	assert!(system.contains(entity));

	// re-registering the same handle is a no-op
	world.add_system(&system);
	assert_eq!(2, calls(&system).len(), "init must only ever run once");
}

#[test]
pub fn component_removal_fires_on_remove() {
	let mut world = World::new();
	let system = recording_system();
	world.add_system(&system);

	let entity = world.create_entity();
	let counter = ComponentInstance::new(Counter::default());
	world.add_component(entity, counter.clone());
	world.remove_component(entity, &counter);

	assert_eq!(
		vec![
			"init".to_string(),
			format!("on_add {entity}"),
			format!("on_remove {entity}"),
		],
		calls(&system)
	);
	assert!(!system.contains(entity));
}

#[test]
pub fn entity_destruction_purges_membership_silently() {
	let mut world = World::new();
	let system = recording_system();
	world.add_system(&system);

	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Counter::default()));

	world.remove_entity(entity);
	assert!(
		system.contains(entity),
		"Membership purge must be deferred to the next update"
	);

	world.update(0.1);

	assert!(!system.contains(entity));
	assert!(
		!calls(&system).iter().any(|call| call.starts_with("on_remove")),
		"Destroying an entity must not fire on_remove"
	);
	assert!(
		!calls(&system).iter().any(|call| call.starts_with("process")),
		"A purged entity must not be processed"
	);
}

#[test]
pub fn destroyed_systems_are_unregistered_without_hooks() {
	let mut world = World::new();
	let system = recording_system();
	world.add_system(&system);

	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Counter::default()));

	system.destroy();
	let before = calls(&system);
	world.update(0.1);
	world.update(0.2);

	assert_eq!(
		before,
		calls(&system),
		"A destroyed system must see none of its hooks run"
	);
	assert!(
		world.get_entity_systems(entity).is_empty(),
		"A destroyed system must be unregistered by update"
	);
}

#[test]
pub fn disabled_systems_are_skipped_but_stay_registered() {
	let mut world = World::new();
	let system = recording_system();
	world.add_system(&system);

	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Counter::default()));

	system.set_enabled(false);
	let before = calls(&system);
	world.update(0.1);
	assert_eq!(before, calls(&system), "A disabled system must be skipped");
	assert_eq!(1, world.get_entity_systems(entity).len());

	system.set_enabled(true);
	world.update(0.1);
	assert!(
		calls(&system).iter().any(|call| call.starts_with("process")),
		"A re-enabled system must process again"
	);
}

/// Destroys itself after the first processed entity.
#[derive(Default, System)]
struct SelfStoppingSystem {
	state: SystemState,
	processed: usize,
	post_processed: bool,
}

impl System for SelfStoppingSystem {
	fn process(&mut self, _world: &mut World, _entity: Entity, _delta_time: f32) {
		self.processed += 1;
		self.state.destroy();
	}

	fn post_process(&mut self, _world: &mut World, _delta_time: f32) {
		self.post_processed = true;
	}
}

#[test]
pub fn self_destruction_stops_the_entity_loop() {
	let mut world = World::new();
	let system = SystemRef::new(
		SelfStoppingSystem::default(),
		HasAllFilter::of::<(Counter,)>(),
	);
	world.add_system(&system);

	for _ in 0..3 {
		let entity = world.create_entity();
		world.add_component(entity, ComponentInstance::new(Counter::default()));
	}

	world.update(0.1);

	let logic = system.system::<SelfStoppingSystem>().unwrap();
	assert_eq!(
		1, logic.processed,
		"Destruction mid-loop must stop the remaining entities"
	);
	assert!(
		!logic.post_processed,
		"post_process must be skipped after mid-tick destruction"
	);
}

/// Destroys every matched entity the first time it processes one.
#[derive(Default, System)]
struct ReapingSystem {
	state: SystemState,
	processed: usize,
	removed: bool,
}

impl System for ReapingSystem {
	fn process(&mut self, world: &mut World, entity: Entity, _delta_time: f32) {
		self.processed += 1;
		if !self.removed {
			self.removed = true;
			for other in world.get_entity_systems(entity)[0].entities() {
				world.remove_entity(other);
			}
		}
	}
}

#[test]
pub fn entities_removed_mid_tick_are_skipped() {
	let mut world = World::new();
	let system = SystemRef::new(ReapingSystem::default(), HasAllFilter::of::<(Counter,)>());
	world.add_system(&system);

	for _ in 0..3 {
		let entity = world.create_entity();
		world.add_component(entity, ComponentInstance::new(Counter::default()));
	}

	world.update(0.1);

	assert_eq!(
		1,
		system.system::<ReapingSystem>().unwrap().processed,
		"Entities flagged destroyed mid-tick must be skipped"
	);
	assert_eq!(
		3,
		system.entities().len(),
		"Membership purge must wait for the next update"
	);

	world.update(0.1);
	assert!(system.entities().is_empty());
}

/// Appends its name to a shared journal component each tick.
#[derive(System)]
struct NamedSystem {
	state: SystemState,
	name: &'static str,
}

impl System for NamedSystem {
	fn process(&mut self, world: &mut World, entity: Entity, _delta_time: f32) {
		let journals = world.get_components_of::<Journal>(entity);
		journals[0].borrow_mut().entries.push(self.name.to_string());
	}
}

#[test]
pub fn systems_run_in_registration_order_not_priority_order() {
	let mut world = World::new();

	let first = SystemRef::new(
		NamedSystem { state: SystemState::new(), name: "first" },
		HasAllFilter::of::<(Journal,)>(),
	);
	let second = SystemRef::new(
		NamedSystem { state: SystemState::new(), name: "second" },
		HasAllFilter::of::<(Journal,)>(),
	);
	first.set_priority(10);
	second.set_priority(-10);

	world.add_system(&first);
	world.add_system(&second);

	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Journal::default()));

	world.update(0.1);

	let journal = world.get_components_of::<Journal>(entity);
	assert_eq!(
		vec!["first".to_string(), "second".to_string()],
		journal[0].borrow().entries,
		"Priority is advisory; the sweep runs in registration order"
	);
	assert_eq!(10, first.priority());
	assert_eq!(-10, second.priority());
}

#[test]
pub fn remove_system_takes_effect_immediately() {
	let mut world = World::new();
	let system = recording_system();
	world.add_system(&system);

	let entity = world.create_entity();
	world.add_component(entity, ComponentInstance::new(Counter::default()));

	world.remove_system(&system);
	let before = calls(&system);
	world.update(0.1);

	assert_eq!(before, calls(&system), "An unregistered system must not run");
	assert!(world.get_entity_systems(entity).is_empty());
}

#[test]
pub fn handles_downcast_to_the_concrete_system() {
	let system = recording_system();
	assert!(system.system::<RecordingSystem>().is_some());
	assert!(system.system::<SelfStoppingSystem>().is_none());

	system.system_mut::<RecordingSystem>().unwrap().calls.push("probe".to_string());
	assert_eq!(vec!["probe".to_string()], calls(&system));
}
