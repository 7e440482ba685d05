use crate::components::ComponentId;

/// The marker contract for any data payload attachable to an [entity](crate::entities::Entity).
///
/// Implement it through #\[derive([Component])], which also assigns the type
/// its [ComponentId].
pub trait Component: 'static {}

/// Provides the [ComponentId] assigned to a component type.
///
/// This trait should only be implemented by #\[derive([Component])].
pub trait HasComponentId {
	fn component_id() -> ComponentId;
}
