//! End-to-end answers for the compiler-config tool.
//!
//! A query is: normalize the compiler spelling, bind its configuration
//! entry, normalize the language when the action needs one, then render the
//! requested value as the text printed on stdout.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::alias::{self, Domain, Language};
use crate::config::{ConfigResolver, load_document};
use crate::error::{ConfigError, ConfigResult};

/// Separator between flags in rendered `test_matrix` output.
pub const MATRIX_SEPARATOR: &str = ";";

/// What to read from a compiler entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Minimum supported compiler version
    #[value(name = "min_version")]
    MinVersion,
    /// Language standard flag used for normal builds
    #[value(name = "project_flags")]
    ProjectFlags,
    /// Language standard flags to run tests against
    #[value(name = "test_matrix")]
    TestMatrix,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MinVersion, Action::ProjectFlags, Action::TestMatrix];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::MinVersion => "min_version",
            Action::ProjectFlags => "project_flags",
            Action::TestMatrix => "test_matrix",
        }
    }

    /// Whether the action reads a per-language key.
    pub fn requires_language(self) -> bool {
        !matches!(self, Action::MinVersion)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer a query against an already loaded document.
///
/// A `language` given to [`Action::MinVersion`] is ignored without being
/// validated.
pub fn run(
    document: &Value,
    compiler: &str,
    action: Action,
    language: Option<&str>,
) -> ConfigResult<String> {
    let compiler_id = alias::normalize(compiler, Domain::Compiler)?;
    answer(document, compiler_id, action, language)
}

/// Answer a query against the document stored at `path`.
///
/// The compiler spelling is checked before the file is read, so a typo is
/// reported as such even when the path is wrong too.
pub fn run_file(
    path: &Path,
    compiler: &str,
    action: Action,
    language: Option<&str>,
) -> ConfigResult<String> {
    let compiler_id = alias::normalize(compiler, Domain::Compiler)?;
    let document = load_document(path)?;
    answer(&document, compiler_id, action, language)
}

fn answer(
    document: &Value,
    compiler_id: &str,
    action: Action,
    language: Option<&str>,
) -> ConfigResult<String> {
    let resolver = ConfigResolver::open(document, compiler_id)?;

    let language = if action.requires_language() {
        let raw = language.ok_or_else(|| ConfigError::missing_argument(action.as_str()))?;
        Some(Language::resolve(raw)?)
    } else {
        None
    };

    log::debug!(
        target: "buildcfg::query",
        "Running {} for compiler '{}' (language: {:?})",
        action,
        compiler_id,
        language
    );

    match (action, language) {
        (Action::MinVersion, _) => resolver.min_version(),
        (Action::ProjectFlags, Some(language)) => resolver.project_flag(language),
        (Action::TestMatrix, Some(language)) => {
            Ok(resolver.test_matrix(language)?.join(MATRIX_SEPARATOR))
        }
        (_, None) => Err(ConfigError::missing_argument(action.as_str())),
    }
}
