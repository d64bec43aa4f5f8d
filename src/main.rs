use std::ffi::OsString;

use clap::Parser;
use nr_shims::sync::{self, Settings};
use nr_shims::{Result, ToolError, logging};

fn main() {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(error) => exit_with(&error),
    };
    if let Err(error) = run(cli) {
        exit_with(&error);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)?;
    let settings = Settings::for_current_user(cli.profile, cli.force)?;
    sync::sync_profile(&settings)?;
    Ok(())
}

/// Parses the command line. Help and version requests print and exit here;
/// every other parse failure is a usage error.
fn parse_cli<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|error| {
        if !error.use_stderr() {
            error.exit();
        }
        let message = error.to_string();
        ToolError::Usage(message.trim_start_matches("error: ").trim_end().to_string())
    })
}

fn exit_with(error: &ToolError) -> ! {
    eprintln!("error: {error}");
    let code = match error {
        ToolError::Usage(_) => 2,
        _ => 1,
    };
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(
    name = "nr",
    author,
    version,
    about = "Generate on-demand nix shims for a profile's command aliases."
)]
struct Cli {
    /// Profile name; aliases are read from ~/.config/nr/<PROFILE>.
    profile: String,

    /// Generate shims even for commands already installed in ~/.nix-profile.
    #[arg(long)]
    force: bool,

    /// Log more detail to stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
