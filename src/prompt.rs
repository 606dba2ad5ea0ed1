use crate::{
    errors::{FileOperation, IoError},
    layout::DEFAULT_PROJECT_NAME,
};
use inquire::Text;
use miette::Diagnostic;
use std::{
    io::{self, BufRead, IsTerminal},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(code(next_skeleton::prompt::inquire))]
    Inquire(#[from] inquire::InquireError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error("standard input closed before a project path was entered")]
    #[diagnostic(
        code(next_skeleton::prompt::end_of_input),
        help("Send an empty line to use the default project directory")
    )]
    EndOfInput,
}

const DESTINATION_QUESTION: &str = "Enter the directory path for your Next.js project:";

/// Strips the line terminator from a raw line of input. Other whitespace is kept.
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
/// Reads a single line from `reader`. A final line without terminator is accepted, but end
/// of input before any character is an error, not an empty answer.
fn read_destination<R: BufRead>(mut reader: R) -> Result<String, PromptError> {
    let mut line = String::new();

    let read = reader
        .read_line(&mut line)
        .map_err(|error| IoError::new(FileOperation::Read, PathBuf::from("<stdin>"), error))?;

    if read == 0 {
        return Err(PromptError::EndOfInput);
    }

    Ok(strip_line_ending(&line).to_string())
}
/// Asks for the project base path. An empty answer selects the default project directory.
///
/// On a terminal the question is asked through [`inquire`]; otherwise one line is read from
/// standard input so the tool can be driven from a pipe.
///
/// # Errors
///
/// Returns a [`PromptError`] if the prompt is canceled, standard input cannot be read, or
/// standard input is closed without a line.
pub fn get_destination() -> Result<String, PromptError> {
    if !io::stdin().is_terminal() {
        log::debug!("stdin is not a terminal, reading destination line");

        return read_destination(io::stdin().lock());
    }

    let help = format!("press Enter to use ./{}", DEFAULT_PROJECT_NAME);

    let answer = Text::new(DESTINATION_QUESTION)
        .with_help_message(&help)
        .prompt()?;

    Ok(answer)
}
