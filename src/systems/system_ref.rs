use crate::systems::System;
use crate::entities::Entity;
use crate::filters::Filter;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A shared handle to a [System] and the core state the
/// [World](crate::prelude::World) tracks for it.
///
/// Two handles refer to the same system iff [ptr_eq](SystemRef::ptr_eq)
/// holds; registration is idempotent per handle identity. The filter and the
/// membership list live outside the logic cell, so membership
/// synchronization triggered from inside a running hook never aliases the
/// hook's own borrow.
#[derive(Clone)]
pub struct SystemRef {
	inner: Rc<SystemInner>,
}

struct SystemInner {
	filter: Box<dyn Filter>,
	entities: RefCell<Vec<Entity>>,
	logic: RefCell<Box<dyn System>>,
}

impl SystemRef {
	/// Wrap a concrete system and its filter into a registerable handle.
	pub fn new(system: impl System + 'static, filter: impl Filter + 'static) -> Self {
		Self {
			inner: Rc::new(SystemInner {
				filter: Box::new(filter),
				entities: RefCell::new(Vec::new()),
				logic: RefCell::new(Box::new(system)),
			}),
		}
	}

	/// Check whether two handles refer to the same system.
	pub fn ptr_eq(&self, other: &SystemRef) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// The filter deciding which entities this system processes.
	pub fn filter(&self) -> &dyn Filter {
		self.inner.filter.as_ref()
	}

	pub fn is_enabled(&self) -> bool {
		self.inner.logic.borrow().state().is_enabled()
	}

	pub fn set_enabled(&self, enabled: bool) {
		self.inner.logic.borrow_mut().state_mut().set_enabled(enabled);
	}

	pub fn is_destroyed(&self) -> bool {
		self.inner.logic.borrow().state().is_destroyed()
	}

	/// Mark the system for destruction; the owning world unregisters it
	/// during its next update without invoking any further hooks.
	pub fn destroy(&self) {
		self.inner.logic.borrow_mut().state_mut().destroy();
	}

	pub fn priority(&self) -> i32 {
		self.inner.logic.borrow().state().priority()
	}

	pub fn set_priority(&self, priority: i32) {
		self.inner.logic.borrow_mut().state_mut().set_priority(priority);
	}

	/// A snapshot of the entities currently matching the system's filter,
	/// in membership order.
	pub fn entities(&self) -> Vec<Entity> {
		self.inner.entities.borrow().clone()
	}

	/// Check whether `entity` is currently in the membership list.
	pub fn contains(&self, entity: Entity) -> bool {
		self.inner.entities.borrow().contains(&entity)
	}

	/// Borrow the concrete system for host-side inspection.
	/// Returns `None` if the system is not an `S`.
	pub fn system<S: System + 'static>(&self) -> Option<Ref<'_, S>> {
		Ref::filter_map(self.inner.logic.borrow(), |logic| {
			(**logic).as_any().downcast_ref::<S>()
		})
		.ok()
	}

	/// Mutably borrow the concrete system for host-side inspection.
	/// Returns `None` if the system is not an `S`.
	pub fn system_mut<S: System + 'static>(&self) -> Option<RefMut<'_, S>> {
		RefMut::filter_map(self.inner.logic.borrow_mut(), |logic| {
			(**logic).as_any_mut().downcast_mut::<S>()
		})
		.ok()
	}

	pub(crate) fn add_entity(&self, entity: Entity) {
		self.inner.entities.borrow_mut().push(entity);
	}

	pub(crate) fn remove_entity(&self, entity: Entity) {
		let mut entities = self.inner.entities.borrow_mut();
		if let Some(index) = entities.iter().position(|e| *e == entity) {
			entities.remove(index);
		}
	}

	pub(crate) fn logic_mut(&self) -> RefMut<'_, Box<dyn System>> {
		self.inner.logic.borrow_mut()
	}
}
