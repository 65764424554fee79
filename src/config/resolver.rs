//! Binds a canonical compiler id to its entry in a configuration document.

use serde_json::Value;

use super::entry::{self, CompilerEntry};
use crate::alias::Language;
use crate::error::{ConfigError, ConfigResult};

/// Typed view of one compiler entry.
///
/// Construction fails when the document has no entry for the compiler or the
/// entry is not an object. Fields are checked by the accessor reading them.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    entry: CompilerEntry,
}

impl ConfigResolver {
    /// Look up `compiler` among the top-level keys of `document`.
    ///
    /// `compiler` must already be canonical; see [`crate::alias::normalize`].
    pub fn open(document: &Value, compiler: &str) -> ConfigResult<Self> {
        let raw = document
            .get(compiler)
            .ok_or_else(|| ConfigError::unknown_compiler(compiler))?;

        let entry = CompilerEntry::new(compiler, raw)?;

        log::debug!(
            target: "buildcfg::config",
            "Opened configuration entry for compiler '{}'",
            compiler
        );

        Ok(Self { entry })
    }

    /// Canonical id this resolver is bound to.
    pub fn compiler(&self) -> &str {
        self.entry.compiler()
    }

    pub fn entry(&self) -> &CompilerEntry {
        &self.entry
    }

    /// `min_version` of the bound entry.
    pub fn min_version(&self) -> ConfigResult<String> {
        self.entry.field(entry::MIN_VERSION)
    }

    /// The standard flag chosen for normal builds of `language`.
    pub fn project_flag(&self, language: Language) -> ConfigResult<String> {
        self.entry.field(&entry::project_standard_path(language))
    }

    /// Standard flags to exercise in tests for `language`, in document order.
    ///
    /// An empty list is a valid answer; only an absent key is an error.
    pub fn test_matrix(&self, language: Language) -> ConfigResult<Vec<String>> {
        self.entry.field(&entry::test_standards_path(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gnu_document() -> Value {
        json!({
            "gnu": {
                "min_version": "9.0",
                "project": { "standards": { "c": "c17", "cxx": "c++20" } },
                "test": { "standards": { "c": ["c11", "c17"], "cxx": ["c++17", "c++20"] } }
            }
        })
    }

    #[test]
    fn test_open_known_compiler() {
        let resolver = ConfigResolver::open(&gnu_document(), "gnu").unwrap();
        assert_eq!(resolver.compiler(), "gnu");
        assert_eq!(resolver.min_version().unwrap(), "9.0");
        assert_eq!(resolver.project_flag(Language::C).unwrap(), "c17");
        assert_eq!(resolver.project_flag(Language::Cxx).unwrap(), "c++20");
    }

    #[test]
    fn test_open_unknown_compiler() {
        let err = ConfigResolver::open(&gnu_document(), "clang").unwrap_err();
        assert!(
            matches!(&err, ConfigError::UnknownCompiler { compiler } if compiler == "clang"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_open_non_object_document_is_unknown_compiler() {
        for document in [json!([]), json!("gnu"), json!(null)] {
            let err = ConfigResolver::open(&document, "gnu").unwrap_err();
            assert!(matches!(err, ConfigError::UnknownCompiler { .. }));
        }
    }

    #[test]
    fn test_open_rejects_entry_of_wrong_shape() {
        let document = json!({ "msvc": ["19.20"] });
        let err = ConfigResolver::open(&document, "msvc").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedEntry { .. }));
    }

    #[test]
    fn test_test_matrix_preserves_order() {
        let document = json!({
            "clang": { "test": { "standards": { "cxx": ["c++20", "c++11", "c++17"] } } }
        });
        let resolver = ConfigResolver::open(&document, "clang").unwrap();
        assert_eq!(
            resolver.test_matrix(Language::Cxx).unwrap(),
            ["c++20", "c++11", "c++17"]
        );
    }

    #[test]
    fn test_empty_test_matrix_is_not_missing() {
        let document = json!({ "msvc": { "test": { "standards": { "c": [] } } } });
        let resolver = ConfigResolver::open(&document, "msvc").unwrap();
        assert!(resolver.test_matrix(Language::C).unwrap().is_empty());
    }

    #[test]
    fn test_missing_nested_key_with_siblings_present() {
        let document = json!({
            "gnu": {
                "project": { "standards": { "c": "c17" } },
                "test": { "standards": { "cxx": ["c++17"] } }
            }
        });
        let resolver = ConfigResolver::open(&document, "gnu").unwrap();

        let err = resolver.project_flag(Language::Cxx).unwrap_err();
        match err {
            ConfigError::MalformedEntry { compiler, detail } => {
                assert_eq!(compiler, "gnu");
                assert_eq!(detail, "missing field `project.standards.cxx`");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = resolver.test_matrix(Language::C).unwrap_err();
        assert!(
            matches!(&err, ConfigError::MalformedEntry { detail, .. } if detail.contains("test.standards.c")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_missing_min_version() {
        let document = json!({ "clang-cl": {} });
        let resolver = ConfigResolver::open(&document, "clang-cl").unwrap();
        let err = resolver.min_version().unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Malformed entry for compiler `clang-cl`: missing field `min_version`"
        );
    }

    #[test]
    fn test_wrong_type_only_fails_the_accessor_reading_it() {
        let document = json!({
            "gnu": {
                "min_version": 9,
                "project": { "standards": { "c": "c17" } }
            }
        });
        let resolver = ConfigResolver::open(&document, "gnu").unwrap();

        assert_eq!(resolver.project_flag(Language::C).unwrap(), "c17");

        let err = resolver.min_version().unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Malformed entry for compiler `gnu`: invalid type at `min_version`: invalid type: integer `9`, expected a string"
        );
    }

    #[test]
    fn test_missing_section_reports_full_path() {
        let document = json!({ "gnu": { "min_version": "9.0" } });
        let resolver = ConfigResolver::open(&document, "gnu").unwrap();
        let err = resolver.test_matrix(Language::Cxx).unwrap_err();
        assert!(err.to_string().contains("test.standards.cxx"));
    }
}
