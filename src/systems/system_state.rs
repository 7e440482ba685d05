/// Core bookkeeping embedded in every concrete [System](crate::systems::System).
///
/// Concrete systems hold one `SystemState` field; #\[derive([System](crate::systems::System))]
/// wires it up so the [World](crate::prelude::World) can reach it.
#[derive(Clone, Debug)]
pub struct SystemState {
	enabled: bool,
	destroyed: bool,
	priority: i32,
}

impl Default for SystemState {
	fn default() -> Self {
		Self {
			enabled: true,
			destroyed: false,
			priority: 0,
		}
	}
}

impl SystemState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Disabled systems stay registered but are skipped entirely by the
	/// update sweep.
	pub const fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
	}

	pub const fn is_destroyed(&self) -> bool {
		self.destroyed
	}

	/// Mark the system for destruction. One-way; the owning world
	/// unregisters the system during its next update.
	pub fn destroy(&mut self) {
		self.destroyed = true;
	}

	/// Reserved for host-defined ordering policies. The update sweep runs
	/// systems in registration order and does not consult it.
	pub const fn priority(&self) -> i32 {
		self.priority
	}

	pub fn set_priority(&mut self, priority: i32) {
		self.priority = priority;
	}
}
