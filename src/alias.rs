//! Alias normalization for compiler and language identifiers.
//!
//! Build drivers hand us whatever spelling they use (`g++`, `CL.EXE`,
//! `clang cl`, `C++`). Each spelling is folded to one canonical name that
//! keys the configuration document. Normalization is narrow on purpose:
//! whitespace, case and a single `.exe` suffix. Anything else fails.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ConfigError, ConfigResult};

/// Canonical name mapped to its accepted spellings.
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

const EXE_SUFFIX: &str = ".exe";

/// Known compiler spellings, keyed by canonical compiler id.
pub const COMPILER_ALIASES: AliasTable = &[
    ("gnu", &["gnu", "gnuc", "gcc", "g++"]),
    ("clang", &["clang", "clang++"]),
    ("clang-cl", &["clang-cl", "clang cl"]),
    ("msvc", &["msvc", "cl", "cl.exe"]),
];

/// Known language spellings, keyed by canonical language id.
pub const LANGUAGE_ALIASES: AliasTable = &[("c", &["c"]), ("cxx", &["cxx", "c++", "cpp"])];

/// Which alias table a lookup consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Compiler,
    Language,
}

impl Domain {
    /// The static table for this domain.
    pub fn table(self) -> AliasTable {
        match self {
            Domain::Compiler => COMPILER_ALIASES,
            Domain::Language => LANGUAGE_ALIASES,
        }
    }

    fn index(self) -> &'static HashMap<&'static str, &'static str> {
        static COMPILER_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
        static LANGUAGE_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

        let cell = match self {
            Domain::Compiler => &COMPILER_INDEX,
            Domain::Language => &LANGUAGE_INDEX,
        };
        cell.get_or_init(|| {
            log::debug!(
                target: "buildcfg::alias",
                "Building {} alias index",
                self
            );
            build_index(self.table())
        })
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Compiler => f.write_str("compiler"),
            Domain::Language => f.write_str("language"),
        }
    }
}

/// Invert a table into a spelling -> canonical name index.
fn build_index(table: AliasTable) -> HashMap<&'static str, &'static str> {
    table
        .iter()
        .flat_map(|(canonical, spellings)| {
            spellings.iter().map(move |spelling| (*spelling, *canonical))
        })
        .collect()
}

/// Fold an identifier into the form stored in the alias index.
fn fold(identifier: &str) -> String {
    let folded = identifier.trim().to_lowercase();
    match folded.strip_suffix(EXE_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => folded,
    }
}

/// Resolve a user-supplied identifier to its canonical name.
///
/// # Examples
/// - `G++` -> `gnu`
/// - `CL.EXE` -> `msvc`
/// - `C++` -> `cxx`
///
/// Fails with [`ConfigError::UnsupportedIdentifier`] carrying the original,
/// unfolded input when no alias set of the domain contains it.
pub fn normalize(identifier: &str, domain: Domain) -> ConfigResult<&'static str> {
    let folded = fold(identifier);
    match domain.index().get(folded.as_str()) {
        Some(&canonical) => {
            log::debug!(
                target: "buildcfg::alias",
                "Normalized {} '{}' to '{}'",
                domain,
                identifier,
                canonical
            );
            Ok(canonical)
        }
        None => Err(ConfigError::unsupported(domain, identifier)),
    }
}

/// Canonical names of a domain, in table order.
pub fn canonical_names(domain: Domain) -> impl Iterator<Item = &'static str> {
    domain.table().iter().map(|(canonical, _)| *canonical)
}

/// Canonical language, the key under `project.standards` and `test.standards`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cxx,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::C, Language::Cxx];

    /// Normalize a language spelling and return the typed language.
    pub fn resolve(identifier: &str) -> ConfigResult<Self> {
        let canonical = normalize(identifier, Domain::Language)?;
        Language::ALL
            .into_iter()
            .find(|language| language.key() == canonical)
            .ok_or_else(|| ConfigError::unsupported(Domain::Language, identifier))
    }

    /// Key used in the configuration document.
    pub fn key(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cxx => "cxx",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
