use crate::components::ComponentInstance;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::fmt;

/// An opaque identifier for a single entity.
///
/// Ids are allocated by [World::create_entity](crate::prelude::World::create_entity)
/// from a monotonically increasing counter starting at 1 and are never
/// reused, not even after the entity is removed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Entity {
	id: u64,
}

impl Entity {
	#[inline(always)]
	pub(crate) const fn new(id: u64) -> Self {
		Self { id }
	}

	/// The raw numeric id.
	#[inline(always)]
	pub const fn id(&self) -> u64 {
		self.id
	}
}

impl Hash for Entity {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.id);
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.id)
	}
}

pub(crate) type EntityHasher = BuildHasherDefault<NoHashHasher<u64>>;

/// The entity → component-list mapping owned by a [World](crate::prelude::World).
/// Keys are exactly the live entities; values preserve attachment order.
pub(crate) type EntityMap = HashMap<Entity, Vec<ComponentInstance>, EntityHasher>;
