//! Line-oriented front end for the board.
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so the same
//! loop serves the terminal and the tests.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::api::TodoApi;
use crate::board::{Confirm, DeleteOutcome, SubmitOutcome, TodoBoard};
use crate::model::TodoStatus;
use crate::render::render_board;

/// Answer that abandons the form being filled in.
pub const CANCEL: &str = ":cancel";
/// Description answer that clears an existing description.
pub const CLEAR: &str = ":clear";

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  list          reload and show todos
  add           create a todo
  edit <id>     change a todo
  delete <id>   delete a todo
  help          show this summary
  quit          exit
While filling in a form, an empty answer keeps the shown value,
':clear' empties the description and ':cancel' abandons the form.
";

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reload and show the list.
    List,
    /// Create a todo.
    Add,
    /// Edit the todo with this id.
    Edit(i32),
    /// Delete the todo with this id.
    Delete(i32),
    /// Show [`HELP`].
    Help,
    /// Leave the shell.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unrecognised command word.
    #[error("unknown command: {0} (try 'help')")]
    Unknown(String),
    /// `edit` or `delete` without an id.
    #[error("usage: {0} <id>")]
    MissingId(&'static str),
    /// The id is not an integer.
    #[error("invalid id: {0}")]
    InvalidId(String),
}

fn parse_id(command: &'static str, raw: Option<&str>) -> Result<i32, CommandError> {
    let value = raw.ok_or(CommandError::MissingId(command))?;
    value
        .parse()
        .map_err(|_| CommandError::InvalidId(value.to_owned()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().unwrap_or_default();
        let argument = words.next();
        match word.to_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "add" | "new" => Ok(Self::Add),
            "edit" => parse_id("edit", argument).map(Self::Edit),
            "delete" | "rm" => parse_id("delete", argument).map(Self::Delete),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormEntry {
    Filled,
    Cancelled,
}

enum Answer {
    Keep,
    Value(String),
    Cancel,
}

/// Reads yes/no answers from the shell input.
struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for Prompter<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(read) if read > 0 => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

/// Interactive loop over a reader and a writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Shell reading commands from `input` and writing to `output`.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Load the board, then process commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading input or writing output.
    pub async fn run<A: TodoApi>(&mut self, board: &mut TodoBoard<A>) -> io::Result<()> {
        self.show(board)?;
        board.load().await;
        self.show(board)?;
        self.say("Type 'help' for commands.")?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => self.execute(board, command).await?,
                Err(err) => self.say(&err)?,
            }
        }
    }

    async fn execute<A: TodoApi>(
        &mut self,
        board: &mut TodoBoard<A>,
        command: Command,
    ) -> io::Result<()> {
        match command {
            Command::List => {
                board.load().await;
                self.show(board)
            }
            Command::Add => {
                board.cancel_edit();
                self.fill_and_submit(board).await
            }
            Command::Edit(id) => {
                if board.begin_edit(id) {
                    self.fill_and_submit(board).await
                } else {
                    self.say(&format!("No todo with id {id}"))
                }
            }
            Command::Delete(id) => {
                let mut prompter = Prompter {
                    input: &mut self.input,
                    output: &mut self.output,
                };
                match board.delete(id, &mut prompter).await {
                    DeleteOutcome::Deleted(deleted) => {
                        self.say(&format!("Deleted todo #{deleted}"))?;
                        self.show(board)
                    }
                    DeleteOutcome::Declined => self.say("Delete cancelled"),
                    DeleteOutcome::Unknown => self.say(&format!("No todo with id {id}")),
                    DeleteOutcome::Failed => self.show(board),
                }
            }
            Command::Help => self.say(HELP.trim_end()),
            Command::Quit => Ok(()),
        }
    }

    async fn fill_and_submit<A: TodoApi>(&mut self, board: &mut TodoBoard<A>) -> io::Result<()> {
        if self.fill_form(board)? == FormEntry::Cancelled {
            board.cancel_edit();
            return self.say("Cancelled");
        }
        match board.submit().await {
            SubmitOutcome::Created(id) => {
                self.say(&format!("Added todo #{id}"))?;
                self.show(board)
            }
            SubmitOutcome::Updated(id) => {
                self.say(&format!("Updated todo #{id}"))?;
                self.show(board)
            }
            SubmitOutcome::Invalid(err) => {
                board.cancel_edit();
                self.say(&err)
            }
            SubmitOutcome::Failed => {
                board.cancel_edit();
                self.show(board)
            }
        }
    }

    fn fill_form<A: TodoApi>(&mut self, board: &mut TodoBoard<A>) -> io::Result<FormEntry> {
        match self.ask("Title", &board.form().title)? {
            Answer::Cancel => return Ok(FormEntry::Cancelled),
            Answer::Value(title) => board.form_mut().title = title,
            Answer::Keep => {}
        }
        match self.ask("Description", &board.form().description)? {
            Answer::Cancel => return Ok(FormEntry::Cancelled),
            Answer::Value(text) if text.trim() == CLEAR => board.form_mut().description.clear(),
            Answer::Value(text) => board.form_mut().description = text,
            Answer::Keep => {}
        }
        loop {
            let current = board.form().status;
            match self.ask("Status (pending/in_progress/completed)", current.as_str())? {
                Answer::Cancel => return Ok(FormEntry::Cancelled),
                Answer::Keep => return Ok(FormEntry::Filled),
                Answer::Value(raw) => match raw.trim().parse::<TodoStatus>() {
                    Ok(status) => {
                        board.form_mut().status = status;
                        return Ok(FormEntry::Filled);
                    }
                    Err(err) => self.say(&err)?,
                },
            }
        }
    }

    fn ask(&mut self, label: &str, current: &str) -> io::Result<Answer> {
        if current.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{current}]: ")?;
        }
        self.output.flush()?;
        // Answers are kept as typed; only the control words ignore padding.
        Ok(match self.read_line()? {
            None => Answer::Cancel,
            Some(text) if text.trim() == CANCEL => Answer::Cancel,
            Some(text) if text.is_empty() => Answer::Keep,
            Some(text) => Answer::Value(text),
        })
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    fn say(&mut self, message: &(impl fmt::Display + ?Sized)) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn show<A: TodoApi>(&mut self, board: &TodoBoard<A>) -> io::Result<()> {
        write!(self.output, "{}", render_board(board))
    }
}
