use camino::Utf8PathBuf;
use termcolor::{BufferWriter, ColorChoice};

use crate::{error::Error, lex::lexer};

pub fn handle(filename: Option<Utf8PathBuf>) {
    let filename = match filename {
        Some(filename) => filename,
        None => "main.tala".into(),
    };

    let input = match std::fs::read_to_string(&filename) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("error: cannot read `{filename}`: {error}");
            std::process::exit(1);
        }
    };

    match lexer::lex(filename.as_str(), &input) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
        }
        Err(error) => {
            let error = Error::Lexing {
                src: input.into(),
                path: filename,
                error,
            };

            let buffer_writer = BufferWriter::stderr(ColorChoice::Auto);
            let mut buffer = buffer_writer.buffer();
            error.pretty(&mut buffer);
            buffer_writer.print(&buffer).expect("print diagnostic");

            std::process::exit(1);
        }
    }
}
