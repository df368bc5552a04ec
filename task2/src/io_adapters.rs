use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Result as IoResult, Write};
use std::rc::Rc;

/// Source of input lines for the command loop.
///
/// `Ok(None)` means the input is exhausted (EOF or Ctrl-C); the loop treats
/// it the same way as an explicit `exit`.
pub trait LineInput {
    /// Show `prompt` and read one line, without its trailing newline.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Interactive terminal input backed by `rustyline`, with history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Non-interactive input: replays lines from a reader or a fixed list.
///
/// Prompts are not echoed.
pub struct ScriptInput {
    lines: VecDeque<String>,
}

impl ScriptInput {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read every line from `reader` up front.
    pub fn from_reader(reader: impl BufRead) -> IoResult<Self> {
        let lines = reader.lines().collect::<IoResult<VecDeque<String>>>()?;
        Ok(Self { lines })
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }
}

impl LineInput for ScriptInput {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Memory-backed writer for capturing notifications.
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self {
            buf: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Return inner Rc so caller can read collected bytes after the writer is moved away.
    pub fn into_inner(self) -> Rc<RefCell<Vec<u8>>> {
        self.buf
    }

    /// Convenience: create writer and return (writer, rc_handle).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let mw = MemWriter::new();
        let rc = mw.buf.clone();
        (mw, rc)
    }
}

impl Default for MemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
