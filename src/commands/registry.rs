use crate::commands::builtin::COMMANDS;
use crate::domain::models::{CommandSpec, DispatchOutcome, Invocation};
use crate::error::FiletreeError;
use crate::services::output::{print_usage, quote_args};
use std::collections::HashMap;
use std::io::Write;

/// Read-only name → handler table, built once at startup.
#[derive(Debug)]
pub struct Registry {
    specs: Vec<CommandSpec>,
    names: Vec<&'static str>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn from_specs(
        specs: impl IntoIterator<Item = CommandSpec>,
    ) -> Result<Self, FiletreeError> {
        let mut registry = Self {
            specs: Vec::new(),
            names: Vec::new(),
            index: HashMap::new(),
        };
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    fn register(&mut self, spec: CommandSpec) -> Result<(), FiletreeError> {
        if spec.name.trim().is_empty() {
            return Err(FiletreeError::EmptyCommandName);
        }
        if self.index.contains_key(spec.name) {
            return Err(FiletreeError::DuplicateCommand(spec.name.to_string()));
        }
        self.index.insert(spec.name, self.specs.len());
        self.specs.push(spec);
        self.names.push(spec.name);
        tracing::trace!(command = spec.name, "registered command");
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&i| &self.specs[i])
    }

    /// Names in registration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}

pub fn register_commands() -> Result<Registry, FiletreeError> {
    Registry::from_specs(COMMANDS.iter().copied())
}

/// Runs `argv[0]` with `argv[1..]` as its arguments.
///
/// Unknown names and handler failures are reported on `err` and folded into
/// the returned outcome; only failures to write output come back as `Err`.
pub fn dispatch(
    registry: &Registry,
    argv: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<DispatchOutcome> {
    let (name, args) = match argv.split_first() {
        Some((name, args)) => (name.as_str(), args),
        None => ("", &[][..]),
    };

    let Some(spec) = registry.lookup(name) else {
        tracing::debug!(command = name, "unknown command");
        writeln!(err, "{name} is not a valid option.")?;
        print_usage(out, registry.names())?;
        return Ok(DispatchOutcome::UnknownCommand);
    };

    writeln!(out, "invoking {}({})", spec.name, quote_args(args))?;
    let mut invocation = Invocation {
        commands: registry.names(),
        args,
        out: &mut *out,
    };
    match (spec.handler)(&mut invocation) {
        Ok(()) => Ok(DispatchOutcome::Completed),
        Err(error) => {
            // The user-facing line below is the report; the event only adds
            // the cause chain for RUST_LOG=debug runs.
            tracing::debug!(
                command = spec.name,
                error = %format_args!("{error:#}"),
                "command failed"
            );
            writeln!(err, "error: {} failed: {error:#}", spec.name)?;
            Ok(DispatchOutcome::HandlerFailed)
        }
    }
}
