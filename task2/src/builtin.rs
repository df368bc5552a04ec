use crate::command::{CommandFactory, ExecutableCommand};
use crate::interpreter::Factory;
use crate::io_adapters::LineInput;
use crate::session::Session;
use anyhow::Result;

/// Commands known to the library prompt at compile time.
pub(crate) trait BuiltinCommand: Sized + Default {
    /// Canonical name of the command, e.g. "add" or "show".
    fn name() -> &'static str;

    /// Executes the command, asking follow-up questions through `input`.
    fn execute(self, input: &mut dyn LineInput, session: &mut Session) -> Result<()>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, input: &mut dyn LineInput, session: &mut Session) -> Result<()> {
        <T as BuiltinCommand>::execute(*self, input, session)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(Box::new(T::default()))
        } else {
            None
        }
    }
}

/// Ask one question and return the trimmed answer, or `None` once input ends.
fn ask(input: &mut dyn LineInput, prompt: &str) -> Result<Option<String>> {
    Ok(input.read_line(prompt)?.map(|answer| answer.trim().to_string()))
}

/// Add a book, asking for its title, author and year.
#[derive(Default)]
pub struct Add;

impl BuiltinCommand for Add {
    fn name() -> &'static str {
        "add"
    }

    fn execute(self, input: &mut dyn LineInput, session: &mut Session) -> Result<()> {
        let Some(title) = ask(input, "Enter book title: ")? else {
            return Ok(session.finish()?);
        };
        let Some(author) = ask(input, "Enter book author: ")? else {
            return Ok(session.finish()?);
        };
        let Some(year) = ask(input, "Enter book year: ")? else {
            return Ok(session.finish()?);
        };

        match year.parse::<i64>() {
            Ok(year) => session.manager.add_book(&title, &author, year)?,
            Err(err) => {
                tracing::debug!(%err, year = %year, "rejected year");
                session.manager.notifier().error("Year must be a number.")?;
            }
        }
        Ok(())
    }
}

/// Remove the first book with the given title.
#[derive(Default)]
pub struct Remove;

impl BuiltinCommand for Remove {
    fn name() -> &'static str {
        "remove"
    }

    fn execute(self, input: &mut dyn LineInput, session: &mut Session) -> Result<()> {
        let Some(title) = ask(input, "Enter book title to remove: ")? else {
            return Ok(session.finish()?);
        };
        session.manager.remove_book(&title)?;
        Ok(())
    }
}

/// List every book in insertion order.
#[derive(Default)]
pub struct Show;

impl BuiltinCommand for Show {
    fn name() -> &'static str {
        "show"
    }

    fn execute(self, _input: &mut dyn LineInput, session: &mut Session) -> Result<()> {
        Ok(session.manager.show_books()?)
    }
}

/// Leave the prompt.
#[derive(Default)]
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _input: &mut dyn LineInput, session: &mut Session) -> Result<()> {
        Ok(session.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::{MemWriter, ScriptInput};
    use crate::notify::Notifier;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> (Session, Rc<RefCell<Vec<u8>>>) {
        let (mw, rc) = MemWriter::with_handle();
        (Session::with_notifier(Notifier::new(Box::new(mw), false)), rc)
    }

    fn output(rc: &Rc<RefCell<Vec<u8>>>) -> String {
        String::from_utf8(rc.borrow().clone()).unwrap()
    }

    #[test]
    fn test_add_trims_answers() {
        let (mut s, rc) = session();
        let mut input = ScriptInput::from_lines(["  Dune ", " Herbert", " 1965 "]);

        Add.execute(&mut input, &mut s).unwrap();

        let books = s.manager.library().books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title(), "Dune");
        assert_eq!(books[0].author(), "Herbert");
        assert_eq!(books[0].year(), 1965);
        assert_eq!(output(&rc), "[INFO] Book 'Dune' added successfully!\n");
    }

    #[test]
    fn test_add_rejects_non_numeric_year() {
        let (mut s, rc) = session();
        let mut input = ScriptInput::from_lines(["Dune", "Herbert", "nineteen sixty-five"]);

        Add.execute(&mut input, &mut s).unwrap();

        assert!(s.manager.library().is_empty());
        assert!(!s.should_exit);
        assert_eq!(output(&rc), "[ERROR] Year must be a number.\n");
    }

    #[test]
    fn test_add_accepts_year_wider_than_32_bits() {
        let (mut s, rc) = session();
        let mut input = ScriptInput::from_lines(["Dune", "Herbert", "3000000000"]);

        Add.execute(&mut input, &mut s).unwrap();

        let books = s.manager.library().books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].year(), 3_000_000_000);
        assert_eq!(output(&rc), "[INFO] Book 'Dune' added successfully!\n");
    }

    #[test]
    fn test_add_stops_session_when_input_ends() {
        let (mut s, rc) = session();
        let mut input = ScriptInput::from_lines(["Dune"]);

        Add.execute(&mut input, &mut s).unwrap();

        assert!(s.manager.library().is_empty());
        assert!(s.should_exit);
        assert_eq!(output(&rc), "[INFO] Exiting the program.\n");
    }

    #[test]
    fn test_remove_missing_title() {
        let (mut s, rc) = session();
        let mut input = ScriptInput::from_lines(["Dune"]);

        Remove.execute(&mut input, &mut s).unwrap();

        assert_eq!(output(&rc), "[ERROR] Book 'Dune' not found.\n");
    }

    #[test]
    fn test_factory_matches_only_its_name() {
        let factory = Factory::<Show>::default();
        assert!(factory.try_create("show").is_some());
        assert!(factory.try_create("list").is_none());
    }

    #[test]
    fn test_exit_sets_flag() {
        let (mut s, rc) = session();
        Exit.execute(&mut ScriptInput::from_lines(Vec::<String>::new()), &mut s)
            .unwrap();
        assert!(s.should_exit);
        assert_eq!(output(&rc), "[INFO] Exiting the program.\n");
    }
}
