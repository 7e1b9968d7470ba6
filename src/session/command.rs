// command.rs - the controls of the interactive session
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  generate | g        new random dataset, sent to the server
  step | s            run one algorithm step
  method | m <name>   set the initialization method (e.g. random, farthest_first, kmeans++)
  status              show the current view
  help                this text
  quit | exit         leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate,
    Step,
    Method(String),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        match name.to_lowercase().as_str() {
            "generate" | "g" => Ok(Command::Generate),
            "step" | "s" => Ok(Command::Step),
            "method" | "m" => words
                .next()
                .map(|m| Command::Method(m.to_string()))
                .ok_or(CommandError::MissingArgument("method")),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}
