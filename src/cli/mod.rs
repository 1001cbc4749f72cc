pub mod input;
pub mod panic;
pub mod repl;
pub mod run;
