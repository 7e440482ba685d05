use crate::components::ComponentInstance;

/// A stateless predicate over a component list.
pub trait Filter {
	/// Answer whether the given component list satisfies this filter's
	/// matching rule. Must depend on the list alone.
	fn matches(&self, components: &[ComponentInstance]) -> bool;
}
