/// Line-oriented command session over a history-backed counter.
///
/// Each input line is one command. After every command that isn't `help` or
/// `quit` the session prints the current value, pointer, and timeline.
use std::cell::{Cell, RefCell};
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};
use hookstate_core::{BoundedHistoryStore, HistoryConfig, HistoryError, Previous, Toggle};
use thiserror::Error;

const HELP: &str = "\
commands:
  set <n>     write n
  inc         add 1
  double      multiply by 2
              (inc and double stop at the i64 limits)
  back        step to the previous entry
  forward     step to the next entry
  go <index>  jump to an entry
  show        print the timeline
  toggle      show or hide the previous value
  help        print this message
  quit        leave";

const NO_ARGUMENT: &[&str] = &[
    "inc", "double", "back", "forward", "show", "toggle", "help", "quit", "exit",
];

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Set(i64),
    Increment,
    Double,
    Back,
    Forward,
    Go(usize),
    Show,
    Toggle,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{command}` takes one argument")]
    TooManyArguments { command: &'static str },
    #[error("`{0}` takes no argument")]
    UnexpectedArgument(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseCommandError::Empty)?;
        let arg = words.next();
        if words.next().is_some() {
            return Err(match name {
                "set" => ParseCommandError::TooManyArguments { command: "set" },
                "go" => ParseCommandError::TooManyArguments { command: "go" },
                other if NO_ARGUMENT.contains(&other) => {
                    ParseCommandError::UnexpectedArgument(other.to_string())
                }
                other => ParseCommandError::Unknown(other.to_string()),
            });
        }

        let command = match (name, arg) {
            ("set", Some(n)) => Command::Set(parse_number(n)?),
            ("set", None) => return Err(ParseCommandError::MissingArgument("set")),
            ("go", Some(i)) => Command::Go(parse_number(i)?),
            ("go", None) => return Err(ParseCommandError::MissingArgument("go")),
            ("inc", None) => Command::Increment,
            ("double", None) => Command::Double,
            ("back", None) => Command::Back,
            ("forward", None) => Command::Forward,
            ("show", None) => Command::Show,
            ("toggle", None) => Command::Toggle,
            ("help", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            (other, Some(_)) if NO_ARGUMENT.contains(&other) => {
                return Err(ParseCommandError::UnexpectedArgument(other.to_string()))
            }
            (other, _) => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_number<N: FromStr>(text: &str) -> Result<N, ParseCommandError> {
    text.parse()
        .map_err(|_| ParseCommandError::InvalidNumber(text.to_string()))
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    /// `inc` or `double` could not move past the i64 range.
    AtLimit,
    Help,
    Quit,
}

/// A counter with history, plus the display state around it.
pub struct Session {
    store: BoundedHistoryStore<i64>,
    previous: Rc<RefCell<Previous<i64>>>,
    changes: Rc<Cell<usize>>,
    show_previous: Toggle,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("current", self.store.current())
            .field("pointer", &self.store.pointer())
            .field("changes", &self.changes.get())
            .field("show_previous", &self.show_previous.value())
            .finish()
    }
}

impl Session {
    /// Creates a session whose counter starts at `initial`.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidCapacity` if the configured capacity is zero.
    pub fn new(
        initial: i64,
        config: &HistoryConfig,
        show_previous: bool,
    ) -> Result<Self, HistoryError> {
        let mut store = BoundedHistoryStore::with_config(initial, config)?;
        let previous = Rc::new(RefCell::new(Previous::new(initial)));
        let changes = Rc::new(Cell::new(0));

        let tracker = Rc::clone(&previous);
        let counter = Rc::clone(&changes);
        store.subscribe(move |value| {
            tracker.borrow_mut().track(*value);
            counter.set(counter.get() + 1);
        });

        Ok(Self {
            store,
            previous,
            changes,
            show_previous: Toggle::new(show_previous),
        })
    }

    pub fn store(&self) -> &BoundedHistoryStore<i64> {
        &self.store
    }

    /// Number of commands that changed the current value.
    pub fn change_count(&self) -> usize {
        self.changes.get()
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        let changed = match command {
            Command::Set(n) => self.store.set(n),
            Command::Increment => self.store.update(|v| v.saturating_add(1)),
            Command::Double => self.store.update(|v| v.saturating_mul(2)),
            Command::Back => self.store.back(),
            Command::Forward => self.store.forward(),
            Command::Go(index) => self.store.go_to(index),
            Command::Toggle => {
                self.show_previous.toggle();
                false
            }
            Command::Show => false,
            Command::Help => return Outcome::Help,
            Command::Quit => return Outcome::Quit,
        };
        tracing::debug!(?command, changed, "executed command");

        let arithmetic = matches!(command, Command::Increment | Command::Double);
        let current = *self.store.current();
        if arithmetic && !changed && (current == i64::MAX || current == i64::MIN) {
            return Outcome::AtLimit;
        }
        Outcome::Render
    }

    /// Formats the current state as one line.
    pub fn render(&self) -> String {
        let history = self
            .store
            .entries()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let mut line = format!(
            "value={} pointer={} history=[{history}]",
            self.store.current(),
            self.store.pointer()
        );
        if self.show_previous.value() {
            match self.previous.borrow().previous() {
                Some(prev) => line.push_str(&format!(" previous={prev}")),
                None => line.push_str(" previous=-"),
            }
        }
        line
    }

    /// Reads commands from `input` until it ends or `quit` is entered.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "{}", self.render()).context("Failed to write output")?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "error: {e}").context("Failed to write output")?;
                    continue;
                }
            };

            let written = match self.execute(command) {
                Outcome::Render => writeln!(output, "{}", self.render()),
                Outcome::AtLimit => writeln!(
                    output,
                    "note: value is already at the i64 limit\n{}",
                    self.render()
                ),
                Outcome::Help => writeln!(output, "{HELP}"),
                Outcome::Quit => break,
            };
            written.context("Failed to write output")?;
        }
        output.flush().context("Failed to flush output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(capacity: usize) -> Session {
        Session::new(1, &HistoryConfig::with_capacity(capacity), false).expect("session")
    }

    // --- Parsing ---

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("inc".parse::<Command>(), Ok(Command::Increment));
        assert_eq!("  double ".parse::<Command>(), Ok(Command::Double));
        assert_eq!("back".parse::<Command>(), Ok(Command::Back));
        assert_eq!("forward".parse::<Command>(), Ok(Command::Forward));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!("set -4".parse::<Command>(), Ok(Command::Set(-4)));
        assert_eq!("go 2".parse::<Command>(), Ok(Command::Go(2)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "set".parse::<Command>(),
            Err(ParseCommandError::MissingArgument("set"))
        );
        assert_eq!(
            "go -1".parse::<Command>(),
            Err(ParseCommandError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            "set 1 2".parse::<Command>(),
            Err(ParseCommandError::TooManyArguments { command: "set" })
        );
        assert_eq!(
            "inc 3".parse::<Command>(),
            Err(ParseCommandError::UnexpectedArgument("inc".to_string()))
        );
    }

    // --- Execution ---

    #[test]
    fn test_render_line() {
        let mut s = session(10);
        s.execute(Command::Double);
        s.execute(Command::Increment);
        assert_eq!(s.render(), "value=3 pointer=2 history=[1, 2, 3]");
    }

    #[test]
    fn test_previous_value_shown_after_toggle() {
        let mut s = session(10);
        s.execute(Command::Toggle);
        assert_eq!(s.render(), "value=1 pointer=0 history=[1] previous=-");

        s.execute(Command::Set(5));
        s.execute(Command::Back);
        assert_eq!(s.render(), "value=1 pointer=0 history=[1, 5] previous=5");
    }

    #[test]
    fn test_change_count_ignores_noops() {
        let mut s = session(10);
        s.execute(Command::Back);
        s.execute(Command::Set(1));
        s.execute(Command::Go(3));
        s.execute(Command::Show);
        assert_eq!(s.change_count(), 0);

        s.execute(Command::Increment);
        s.execute(Command::Back);
        assert_eq!(s.change_count(), 2);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = Session::new(0, &HistoryConfig::with_capacity(0), false).unwrap_err();
        assert_eq!(err, HistoryError::InvalidCapacity { capacity: 0 });
    }

    #[test]
    fn test_help_and_quit_outcomes() {
        let mut s = session(10);
        assert_eq!(s.execute(Command::Help), Outcome::Help);
        assert_eq!(s.execute(Command::Quit), Outcome::Quit);
        assert_eq!(s.execute(Command::Show), Outcome::Render);
    }

    #[test]
    fn test_increment_at_max_reports_limit() {
        let mut s = Session::new(i64::MAX, &HistoryConfig::default(), false).expect("session");
        assert_eq!(s.execute(Command::Increment), Outcome::AtLimit);
        assert_eq!(s.execute(Command::Double), Outcome::AtLimit);
        assert_eq!(s.store().len(), 1);
        assert_eq!(s.change_count(), 0);
    }

    #[test]
    fn test_double_at_min_reports_limit() {
        let mut s = Session::new(i64::MIN, &HistoryConfig::default(), false).expect("session");
        assert_eq!(s.execute(Command::Double), Outcome::AtLimit);
    }

    #[test]
    fn test_double_zero_is_not_a_limit() {
        let mut s = session(10);
        s.execute(Command::Set(0));
        assert_eq!(s.execute(Command::Double), Outcome::Render);
    }

    #[test]
    fn test_render_with_previous_uses_plain_formatting() {
        let mut s = session(10);
        s.execute(Command::Toggle);
        s.execute(Command::Set(-7));
        assert!(s.render().ends_with(" previous=1"));
    }
}
