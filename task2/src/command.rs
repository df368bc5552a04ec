use crate::io_adapters::LineInput;
use crate::session::Session;
use anyhow::Result;

/// Object-safe trait for any command the library prompt can run.
///
/// Implemented for every builtin through a blanket impl.
pub trait ExecutableCommand {
    /// Run the command, reading any follow-up answers from `input`.
    fn execute(self: Box<Self>, input: &mut dyn LineInput, session: &mut Session) -> Result<()>;
}

/// Factory that tries to create a command from the name typed at the prompt.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    fn try_create(&self, name: &str) -> Option<Box<dyn ExecutableCommand>>;
}
