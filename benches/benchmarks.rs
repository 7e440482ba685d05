use criterion::*;
use nalgebra_glm::Vec3;
use ember_ecs::prelude::*;

const COUNT: usize = 10000;

#[derive(Default, Component)]
struct Translation(Vec3);

#[derive(Default, Component)]
struct Velocity(Vec3);

#[derive(Default, System)]
struct MovementSystem {
    state: SystemState,
}

impl System for MovementSystem {
    fn process(&mut self, world: &mut World, entity: Entity, delta_time: f32) {
        let translations = world.get_components_of::<Translation>(entity);
        let velocities = world.get_components_of::<Velocity>(entity);

        let velocity = velocities[0].borrow().0;
        translations[0].borrow_mut().0 += velocity * delta_time;
    }
}

fn populate(world: &mut World) {
    for _ in 0..COUNT {
        let entity = world.create_entity();
        world.add_component(entity, ComponentInstance::new(Translation::default()));
        world.add_component(entity, ComponentInstance::new(Velocity(Vec3::new(1.0, 0.0, 0.0))));
    }
}

fn create_entities(c: &mut Criterion) {
    c.bench_function("Create entities", |b| {
        b.iter_batched(
            World::new,
            |mut world| {
                populate(&mut world);
                world
            },
            BatchSize::PerIteration,
        );
    });
}

fn component_churn(c: &mut Criterion) {
    c.bench_function("Component churn", |b| {
        let mut world = World::new();
        let system = SystemRef::new(
            MovementSystem::default(),
            HasAllFilter::of::<(Translation, Velocity)>(),
        );
        world.add_system(&system);

        let entity = world.create_entity();
        world.add_component(entity, ComponentInstance::new(Translation::default()));

        b.iter(|| {
            let velocity = ComponentInstance::new(Velocity::default());
            world.add_component(entity, velocity.clone());
            world.remove_component(entity, &velocity);
        });
    });
}

fn update_tick(c: &mut Criterion) {
    c.bench_function("Update tick", |b| {
        let mut world = World::new();
        let system = SystemRef::new(
            MovementSystem::default(),
            HasAllFilter::of::<(Translation, Velocity)>(),
        );
        world.add_system(&system);
        populate(&mut world);

        b.iter(|| world.update(0.016));
    });
}

criterion_group!(
    benchmarks,
    create_entities,
    component_churn,
    update_tick,
);
criterion_main!(benchmarks);
