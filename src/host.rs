//! Host application collaborators.
//!
//! A host (for instance a game server plugin loader) drives its components
//! through a single `setup` entry point during its own lifecycle. Command and
//! event managers implement [`Manager`] directly.

/// Component set up by the host application.
pub trait Manager {
	/// Short name used in logs.
	fn name(&self) -> &str;

	/// Registers the commands, listeners, ... this manager is responsible for.
	fn setup(&mut self);
}

/// Sets up every manager, in order.
pub fn setup_all<'a>(managers: impl IntoIterator<Item = &'a mut dyn Manager>) {
	for manager in managers {
		log::debug!("setting up {}", manager.name());
		manager.setup();
	}
}
