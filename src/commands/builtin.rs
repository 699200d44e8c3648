use crate::domain::models::{CommandSpec, Invocation};
use crate::error::FiletreeError;
use crate::services::depth::max_depth;
use crate::services::output::{print_names, LIST_PREFIX};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const LIST: &str = "list";
pub const GET_MAX_DEPTH: &str = "getMaxDepth";

/// Every command reachable from the CLI, in listing order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: LIST,
        handler: list,
    },
    CommandSpec {
        name: GET_MAX_DEPTH,
        handler: get_max_depth,
    },
];

fn list(inv: &mut Invocation<'_>) -> anyhow::Result<()> {
    writeln!(inv.out, "Listing methods that may be called:")?;
    print_names(inv.out, LIST_PREFIX, inv.commands)
}

fn get_max_depth(inv: &mut Invocation<'_>) -> anyhow::Result<()> {
    let root = inv
        .args
        .first()
        .map(PathBuf::from)
        .ok_or(FiletreeError::MissingArgument {
            command: GET_MAX_DEPTH,
            argument: "path",
        })?;
    if inv.args.len() > 1 {
        tracing::debug!(ignored = ?&inv.args[1..], "extra arguments ignored");
    }

    if let Err(err) = fs::symlink_metadata(&root) {
        if err.kind() == ErrorKind::NotFound {
            return Err(FiletreeError::PathNotFound(root).into());
        }
    }

    writeln!(inv.out, "Computing max filetree depth...")?;
    let depth = max_depth(&root)?;
    tracing::debug!(root = %root.display(), depth, "computed max depth");
    writeln!(inv.out, "{depth}")?;
    Ok(())
}
