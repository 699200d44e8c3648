use crate::cli::PROGRAM_NAME;
use std::io::Write;

/// Prefix for names in the unknown-command usage block.
pub const USAGE_PREFIX: &str = "    ";
/// Prefix for names printed by `list`.
pub const LIST_PREFIX: &str = "- ";

pub fn print_out<T>(
    out: &mut dyn Write,
    data: impl IntoIterator<Item = T>,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    for d in data {
        writeln!(out, "{}", row(&d))?;
    }
    Ok(())
}

pub fn print_names(out: &mut dyn Write, prefix: &str, names: &[&str]) -> anyhow::Result<()> {
    print_out(out, names, |name| format!("{prefix}{name}"))
}

pub fn print_usage(out: &mut dyn Write, names: &[&str]) -> anyhow::Result<()> {
    writeln!(out, "Usage: {PROGRAM_NAME} <method-name>")?;
    writeln!(out, "where <method-name> is one of:")?;
    print_names(out, USAGE_PREFIX, names)
}

/// `"a", "b"` for the `invoking name(...)` trace line.
pub fn quote_args(args: &[String]) -> String {
    args.iter()
        .map(|a| format!("\"{a}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
