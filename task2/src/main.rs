use argh::FromArgs;
use book_library::{EditorInput, Interpreter, LineInput, Notifier, ScriptInput, logger};
use std::io::IsTerminal;

#[derive(FromArgs)]
/// Manage an in-memory book library from an interactive prompt.
struct Options {
    #[argh(switch)]
    /// disable colored output.
    no_color: bool,

    #[argh(switch, short = 'v')]
    /// log diagnostics to stderr.
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts: Options = argh::from_env();
    logger::init_cli_logger(opts.verbose, !opts.no_color);

    let stdin = std::io::stdin();
    let mut input: Box<dyn LineInput> = if stdin.is_terminal() {
        Box::new(EditorInput::new()?)
    } else {
        tracing::debug!("stdin is not a terminal, reading commands as a script");
        Box::new(ScriptInput::from_reader(stdin.lock())?)
    };

    let mut library = Interpreter::new(Notifier::stdout(!opts.no_color));
    library.repl(&mut *input)
}
