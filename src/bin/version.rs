use buildcfg::cli::{self, ErrorLayout};
use buildcfg::version::read_version;
use clap::Parser;
use std::path::PathBuf;

/// Print the `version` field of a project's version json
#[derive(Parser)]
#[command(name = "version-config")]
#[command(version)]
#[command(about = "Print the `version` field of a project's version json")]
struct Cli {
    /// Path to version json
    #[arg(long)]
    json: PathBuf,
}

fn main() {
    cli::init_logging();
    let args = Cli::parse();

    match read_version(&args.json) {
        Ok(version) => {
            if let Err(e) = cli::emit(&version) {
                cli::fail(&e, ErrorLayout::NewlineAfterReset);
            }
        }
        Err(e) => cli::fail(&e, ErrorLayout::NewlineAfterReset),
    }
}
