//! An interactive, in-memory book library.
//!
//! Books are kept in a [`Library`] in the order they were added. A
//! [`LibraryManager`] wraps the library and reports each operation through a
//! [`Notifier`], and the [`Interpreter`] drives the whole thing from a small
//! command vocabulary: `add`, `remove`, `show` and `exit`.
//!
//! Nothing is persisted; the collection lives as long as the process.

pub mod book;
mod builtin;
pub mod command;
mod interpreter;
pub mod io_adapters;
pub mod library;
pub mod logger;
pub mod manager;
pub mod notify;
pub mod session;

pub use book::Book;
pub use interpreter::{COMMAND_PROMPT, Interpreter};
pub use io_adapters::{EditorInput, LineInput, MemWriter, ScriptInput};
pub use library::{Library, LibraryInterface};
pub use manager::LibraryManager;
pub use notify::{Level, Notifier};
pub use session::Session;
