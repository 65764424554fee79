use buildcfg::cli::{self, ErrorLayout};
use buildcfg::query::{self, Action};
use clap::Parser;
use std::path::PathBuf;

/// Query compiler versions and language standards from a project's compiler json
#[derive(Parser)]
#[command(name = "compiler-config")]
#[command(version)]
#[command(about = "Query compiler versions and language standards from a project's compiler json")]
struct Cli {
    /// Path to compiler json
    #[arg(long)]
    json: PathBuf,

    /// Compiler ID (gnu, clang, clang-cl, msvc or an alias such as g++). Ignore case
    #[arg(long)]
    compiler: String,

    /// Action to perform
    #[arg(long, value_enum)]
    action: Action,

    /// Language for `project_flags` and `test_matrix` (c, cxx or an alias such as c++). Ignore case
    #[arg(long)]
    lang: Option<String>,
}

fn main() {
    cli::init_logging();
    let args = Cli::parse();

    match query::run_file(
        &args.json,
        &args.compiler,
        args.action,
        args.lang.as_deref(),
    ) {
        Ok(output) => {
            if let Err(e) = cli::emit(&output) {
                cli::fail(&e, ErrorLayout::NewlineInsideColor);
            }
        }
        Err(e) => cli::fail(&e, ErrorLayout::NewlineInsideColor),
    }
}
