//! Shell command parsing.

use std::str::FromStr;

use thiserror::Error;

use crate::routing::{NavigationMode, NavigationTarget};

/// Problems with a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid argument `{0}`: expected an integer")]
    InvalidDelta(String),
}

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Programmatic navigation.
    Navigate {
        target: NavigationTarget,
        mode: NavigationMode,
    },
    /// Host back/forward/go.
    Go(isize),
    /// Host or user edits the fragment.
    Hash(String),
    /// Resolve a target to its fragment.
    Href(NavigationTarget),
    /// Print the current snapshot.
    Show,
    /// List the route table.
    Routes,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();
        let arg = parts.next();

        match verb {
            "push" | "replace" => {
                let target = arg.ok_or(ShellError::MissingArgument {
                    command: if verb == "push" { "push" } else { "replace" },
                    expected: "a route name or path",
                })?;
                let mode = verb.parse().map_err(|_| ShellError::UnknownCommand(verb.into()))?;
                Ok(Command::Navigate {
                    target: NavigationTarget::parse(target),
                    mode,
                })
            }
            "back" => Ok(Command::Go(-1)),
            "forward" => Ok(Command::Go(1)),
            "go" => {
                let delta = arg.ok_or(ShellError::MissingArgument {
                    command: "go",
                    expected: "an entry offset",
                })?;
                delta
                    .parse()
                    .map(Command::Go)
                    .map_err(|_| ShellError::InvalidDelta(delta.into()))
            }
            // A bare `hash` clears the fragment.
            "hash" => Ok(Command::Hash(arg.unwrap_or_default().to_string())),
            "href" => {
                let target = arg.ok_or(ShellError::MissingArgument {
                    command: "href",
                    expected: "a route name or path",
                })?;
                Ok(Command::Href(NavigationTarget::parse(target)))
            }
            "show" => Ok(Command::Show),
            "routes" => Ok(Command::Routes),
            other => Err(ShellError::UnknownCommand(other.into())),
        }
    }
}
