use itertools::Itertools;

use super::input;
use crate::lex::lexer;

/// Source name reported for lines typed at the prompt.
const STDIN_NAME: &str = "<stdin>";

pub fn handle() {
    while let Some(line) = input::read_source_line() {
        match lexer::lex(STDIN_NAME, &line) {
            Ok(tokens) => println!("[{}]", tokens.iter().join(", ")),
            Err(error) => println!("{error}"),
        }
    }
}
