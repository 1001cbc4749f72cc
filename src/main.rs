use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;
use tala::cli;

#[derive(clap::Parser, Debug)]
#[command(
    version,
    next_display_order = None,
    help_template = "\
{before-help}{name} {version}

{usage-heading} {usage}

{all-args}{after-help}",
    styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Yellow.on_default())
        .literal(AnsiColor::Green.on_default())
)]
enum Command {
    /// Lex a source file and print its token stream
    Run { file: Option<Utf8PathBuf> },
    /// Lex lines interactively
    Repl,
}

fn main() {
    cli::panic::add_handler();

    match Command::parse() {
        Command::Run { file } => cli::run::handle(file),
        Command::Repl => cli::repl::handle(),
    }
}
