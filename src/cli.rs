use clap::Parser;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser, Debug)]
#[command(
    name = "filetree",
    version,
    about = "Inspect filesystem trees through named commands",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    // Every token after the program name belongs to the dispatcher, flags
    // included.
    #[arg(allow_hyphen_values = true, help = "Command to run (see `filetree list`)")]
    pub command: String,
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Arguments forwarded verbatim to the command"
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Raw token vector as the dispatcher expects it: name first, then arguments.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.command.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}
