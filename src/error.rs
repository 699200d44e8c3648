use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FiletreeError {
    #[error("command name cannot be empty")]
    EmptyCommandName,
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),
    #[error("{command} requires argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
}
