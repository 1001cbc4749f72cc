use camino::Utf8PathBuf;
use ecow::EcoString;
use std::io::Write;
use termcolor::Buffer;

use crate::{
    diagnostic::{Diagnostic, Location, Span},
    lex::error::LexicalError,
};

pub enum Error {
    Lexing {
        src: EcoString,
        path: Utf8PathBuf,
        error: LexicalError,
    },
}

impl Error {
    #[must_use]
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("diagnostic output is utf-8")
    }

    pub fn pretty(&self, buffer: &mut Buffer) {
        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buffer);
            writeln!(buffer).expect("write diagnostic buffer");
        }
    }

    #[must_use]
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Lexing { src, path, error } => {
                vec![Diagnostic {
                    text: error.get_description().to_owned(),
                    location: Location {
                        src: src.clone(),
                        path: path.clone(),
                        span: Span {
                            start: byte_offset(src, error.start.offset),
                            end: byte_offset(src, error.end.offset),
                        },
                    },
                }]
            }
        }
    }
}

/// The lexer tracks character offsets; codespan labels want byte offsets.
fn byte_offset(src: &str, char_offset: i32) -> u32 {
    let char_offset = usize::try_from(char_offset).unwrap_or(0);

    let byte_index = src
        .char_indices()
        .nth(char_offset)
        .map_or(src.len(), |(index, _)| index);

    u32::try_from(byte_index).expect("source text is too long")
}
