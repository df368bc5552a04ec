use crate::library::Library;
use crate::manager::LibraryManager;
use crate::notify::Notifier;

/// Mutable state shared by all commands of one interactive session.
///
/// - `manager`: the library manager every command operates on.
/// - `should_exit`: set by `exit` (or end of input) to stop the loop.
pub struct Session {
    pub manager: LibraryManager,
    pub should_exit: bool,
}

impl Session {
    pub fn new(manager: LibraryManager) -> Self {
        Self {
            manager,
            should_exit: false,
        }
    }

    /// Session over an empty in-memory [`Library`].
    pub fn with_notifier(notifier: Notifier) -> Self {
        Self::new(LibraryManager::new(Box::new(Library::new()), notifier))
    }

    /// Say goodbye and mark the session as finished.
    pub fn finish(&mut self) -> std::io::Result<()> {
        self.should_exit = true;
        self.manager.notifier().info("Exiting the program.")
    }
}
