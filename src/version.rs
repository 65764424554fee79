//! Version lookup from a project's version json.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::entry::kind;
use crate::error::{ConfigError, ConfigResult};

const VERSION_FIELD: &str = "version";

/// Read the top-level `version` field of the strict JSON file at `path`.
///
/// Strings are returned verbatim, numbers in their JSON spelling. Any other
/// type is rejected with [`ConfigError::InvalidField`].
pub fn read_version(path: &Path) -> ConfigResult<String> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&text).map_err(|e| ConfigError::parse(path, e))?;

    match data.get(VERSION_FIELD) {
        None | Some(Value::Null) => Err(ConfigError::missing_field(path, VERSION_FIELD)),
        Some(Value::String(version)) => Ok(version.clone()),
        Some(Value::Number(version)) => Ok(version.to_string()),
        Some(other) => Err(ConfigError::invalid_field(
            path,
            VERSION_FIELD,
            "a string or number",
            kind(other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn version_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_string_version() {
        let file = version_file(r#"{ "name": "sirius", "version": "1.4.2" }"#);
        assert_eq!(read_version(file.path()).unwrap(), "1.4.2");
    }

    #[test]
    fn test_read_numeric_version() {
        let file = version_file(r#"{ "version": 2 }"#);
        assert_eq!(read_version(file.path()).unwrap(), "2");
    }

    #[test]
    fn test_missing_version_field() {
        let file = version_file(r#"{ "name": "sirius" }"#);
        let err = read_version(file.path()).unwrap_err();
        assert!(
            matches!(&err, ConfigError::MissingField { field, .. } if field == "version"),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    #[case::boolean(r#"{ "version": true }"#, "boolean")]
    #[case::array(r#"{ "version": ["1", "0"] }"#, "array")]
    #[case::object(r#"{ "version": { "major": 1 } }"#, "object")]
    fn test_unusable_version_type_is_invalid_not_missing(
        #[case] content: &str,
        #[case] expected_found: &str,
    ) {
        let file = version_file(content);
        let err = read_version(file.path()).unwrap_err();
        match &err {
            ConfigError::InvalidField { field, found, .. } => {
                assert_eq!(field, "version");
                assert_eq!(*found, expected_found);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!err.to_string().contains("Missing"));
    }

    #[test]
    fn test_null_version_is_missing() {
        let file = version_file(r#"{ "version": null }"#);
        assert!(matches!(
            read_version(file.path()),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_comments_are_not_accepted() {
        let file = version_file("{ // release\n \"version\": \"1.0.0\" }");
        assert!(matches!(
            read_version(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_version(&dir.path().join("version.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
