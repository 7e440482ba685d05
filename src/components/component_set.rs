use crate::components::{ComponentId, HasComponentId};
use crate::data_structures::BitField;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::any::TypeId;
use std::sync::Arc;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

lazy_static! {
	static ref EMPTY_BITFIELD: Arc<BitField> = Arc::new(BitField::new());
	static ref TYPE_TO_BITFIELD: Mutex<HashMap<TypeId, Arc<BitField>, Hasher>> =
		Mutex::new(HashMap::default());
	static ref VEC_TO_BITFIELD: Mutex<HashMap<Vec<ComponentId>, Arc<BitField>>> =
		Mutex::new(HashMap::default());
}

/// Extracts a required-id [BitField] from a tuple of component types.
///
/// Used by [HasAllFilter](crate::filters::HasAllFilter) to declare which
/// component types an entity must carry. Bitfields are cached per tuple type,
/// and per id set, so equal requirement sets share one allocation.
pub trait ComponentSet {
	/// Extract a bitfield from a set of component types.
	fn get_bitfield() -> Arc<BitField>;
}

impl ComponentSet for () {
	fn get_bitfield() -> Arc<BitField> {
		EMPTY_BITFIELD.clone()
	}
}

macro_rules! impl_component_bitfield {
    ($($t: ident),*) => {
        #[allow(unused_parens)]
        impl <$($t: 'static + HasComponentId),*> ComponentSet for ($($t),*,) {
            fn get_bitfield() -> Arc<BitField> {
                let key = TypeId::of::<Self>();
                let mut ttb = TYPE_TO_BITFIELD.lock();
                if let Some(bitfield) = ttb.get(&key) {
                    return bitfield.clone()
                }

                let mut components = vec![$(<$t>::component_id()),*];
                components.sort_by_key(|a| a.value());

                let mut vtb = VEC_TO_BITFIELD.lock();
                if let Some(bitfield) = vtb.get(&components) {
                    ttb.insert(key, bitfield.clone());
                    return bitfield.clone();
                }

                let bitfield = Arc::new(BitField::from(components.as_slice()));
                vtb.insert(components, bitfield.clone());
                ttb.insert(key, bitfield.clone());
                bitfield
            }
        }
    };
}

impl_component_bitfield!(T0);
impl_component_bitfield!(T0, T1);
impl_component_bitfield!(T0, T1, T2);
impl_component_bitfield!(T0, T1, T2, T3);
impl_component_bitfield!(T0, T1, T2, T3, T4);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5, T6);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_bitfield!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
