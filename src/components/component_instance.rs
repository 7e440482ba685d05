use crate::components::{Component, ComponentId, HasComponentId};
use std::cell::{Ref, RefCell, RefMut};
use std::marker::PhantomData;
use std::any::{type_name, Any};
use std::rc::Rc;

/// A type-tagged, shared component value.
///
/// This is the unit of storage inside a [World](crate::prelude::World):
/// cloning an instance clones the *handle*, never the value, so every clone
/// observes mutations made through any other clone. Identity is handle
/// identity ([ptr_eq](ComponentInstance::ptr_eq)), which is what
/// `remove_component` matches against.
#[derive(Clone)]
pub struct ComponentInstance {
	id: ComponentId,
	value: Rc<RefCell<dyn Any>>,
}

impl ComponentInstance {
	/// Wrap a component value into a shareable instance.
	pub fn new<T: Component + HasComponentId>(value: T) -> Self {
		Self {
			id: ComponentId::of::<T>(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// The [ComponentId] of the wrapped value's type.
	pub const fn id(&self) -> ComponentId {
		self.id
	}

	/// Check whether the wrapped value is of type `T`.
	pub fn is<T: HasComponentId>(&self) -> bool {
		self.id == ComponentId::of::<T>()
	}

	/// Check whether two instances share the same underlying value.
	pub fn ptr_eq(&self, other: &ComponentInstance) -> bool {
		Rc::ptr_eq(&self.value, &other.value)
	}

	/// Borrow the wrapped value.
	///
	/// Panics if the wrapped value is not a `T` or the value is currently
	/// borrowed mutably.
	pub fn borrow<T: Component + HasComponentId>(&self) -> Ref<'_, T> {
		Ref::map(self.value.borrow(), |value| {
			value.downcast_ref::<T>().unwrap_or_else(|| {
				panic!("Component instance does not hold a `{}`", type_name::<T>())
			})
		})
	}

	/// Mutably borrow the wrapped value.
	///
	/// Panics if the wrapped value is not a `T` or the value is already
	/// borrowed.
	pub fn borrow_mut<T: Component + HasComponentId>(&self) -> RefMut<'_, T> {
		RefMut::map(self.value.borrow_mut(), |value| {
			value.downcast_mut::<T>().unwrap_or_else(|| {
				panic!("Component instance does not hold a `{}`", type_name::<T>())
			})
		})
	}
}

/// A typed view over a [ComponentInstance].
///
/// Returned by `World::get_components_of`, so callers don't have to repeat
/// the component type on every borrow.
pub struct ComponentRef<T: Component + HasComponentId> {
	instance: ComponentInstance,
	phantom: PhantomData<T>,
}

impl<T: Component + HasComponentId> ComponentRef<T> {
	/// Wrap an instance, asserting it holds a `T`.
	pub fn new(instance: ComponentInstance) -> Self {
		assert!(
			instance.is::<T>(),
			"Component instance does not hold a `{}`",
			type_name::<T>()
		);
		Self {
			instance,
			phantom: PhantomData,
		}
	}

	/// Borrow the component value.
	pub fn borrow(&self) -> Ref<'_, T> {
		self.instance.borrow::<T>()
	}

	/// Mutably borrow the component value.
	pub fn borrow_mut(&self) -> RefMut<'_, T> {
		self.instance.borrow_mut::<T>()
	}

	/// The untyped instance backing this view.
	pub fn instance(&self) -> &ComponentInstance {
		&self.instance
	}
}

impl<T: Component + HasComponentId> Clone for ComponentRef<T> {
	fn clone(&self) -> Self {
		Self {
			instance: self.instance.clone(),
			phantom: PhantomData,
		}
	}
}
