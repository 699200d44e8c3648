use std::fmt;
use std::io::Write;

/// Callback bound to a registered command name.
pub type Handler = fn(&mut Invocation<'_>) -> anyhow::Result<()>;

/// One row of the command table.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Everything a handler gets to see for a single call.
pub struct Invocation<'a> {
    /// Registered command names, in registration order.
    pub commands: &'a [&'static str],
    pub args: &'a [String],
    pub out: &'a mut dyn Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed,
    HandlerFailed,
    UnknownCommand,
}
