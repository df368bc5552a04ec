use crate::command::CommandFactory;
use crate::io_adapters::LineInput;
use crate::notify::Notifier;
use crate::session::Session;

/// Prompt shown while the loop waits for the next command.
pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the builtin commands defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Read-eval loop of the book library.
///
/// The interpreter owns a [`Session`] and a list of [`CommandFactory`] objects
/// that are queried to create commands by name.
///
/// Example
/// ```
/// use book_library::{Interpreter, Notifier, ScriptInput};
/// let mut lib = Interpreter::new(Notifier::new(Box::new(std::io::sink()), false));
/// let mut input = ScriptInput::from_lines(["add", "Dune", "Herbert", "1965", "exit"]);
/// lib.repl(&mut input).unwrap();
/// assert_eq!(lib.session().manager.library().len(), 1);
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Interpreter over an empty library with the default command set:
    /// `add`, `remove`, `show`, `exit`.
    pub fn new(notifier: Notifier) -> Self {
        use crate::builtin::*;
        Self::with_commands(
            Session::with_notifier(notifier),
            vec![
                Box::new(Factory::<Add>::default()),
                Box::new(Factory::<Remove>::default()),
                Box::new(Factory::<Show>::default()),
                Box::new(Factory::<Exit>::default()),
            ],
        )
    }

    /// Create an interpreter with a custom session and set of command factories.
    pub fn with_commands(session: Session, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { session, commands }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a single command typed at the prompt.
    ///
    /// The command line is trimmed and lowercased before lookup. Unknown
    /// commands are reported to the user and are not an error.
    pub fn run(&mut self, line: &str, input: &mut dyn LineInput) -> anyhow::Result<()> {
        let name = line.trim().to_lowercase();
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&name) {
                tracing::debug!(command = %name, "dispatching");
                return cmd.execute(input, &mut self.session);
            }
        }
        tracing::debug!(command = %name, "unknown command");
        self.session
            .manager
            .notifier()
            .error("Invalid command. Please try again.")?;
        Ok(())
    }

    /// Keep reading commands from `input` until `exit` or end of input.
    pub fn repl(&mut self, input: &mut dyn LineInput) -> anyhow::Result<()> {
        while !self.session.should_exit {
            match input.read_line(COMMAND_PROMPT)? {
                Some(line) => self.run(&line, input)?,
                None => self.session.finish()?,
            }
        }
        Ok(())
    }
}
