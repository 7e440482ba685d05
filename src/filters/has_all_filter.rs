use crate::components::{ComponentId, ComponentInstance, ComponentSet};
use crate::data_structures::BitField;
use crate::filters::Filter;
use std::sync::Arc;

/// The canonical [Filter]: matches a component list iff every required
/// component type appears in it at least once.
///
/// Order, duplicates beyond the first and unrelated extra components are all
/// irrelevant. An empty requirement set matches every list.
pub struct HasAllFilter {
	required: Arc<BitField>,
}

impl HasAllFilter {
	/// Require every component type in the tuple `S`.
	pub fn of<S: ComponentSet>() -> Self {
		Self {
			required: S::get_bitfield(),
		}
	}

	/// Require every component type in the given id list.
	pub fn new(ids: &[ComponentId]) -> Self {
		Self {
			required: Arc::new(BitField::from(ids)),
		}
	}
}

impl Filter for HasAllFilter {
	fn matches(&self, components: &[ComponentInstance]) -> bool {
		let mut present = BitField::with_capacity(self.required.capacity());
		for component in components {
			present.set(component.id().value(), true);
		}

		self.required.is_subset_of(&present)
	}
}
