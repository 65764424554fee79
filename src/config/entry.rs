use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::alias::Language;
use crate::error::{ConfigError, ConfigResult};

pub const MIN_VERSION: &[&str] = &["min_version"];

/// `project.standards.<language>`: one flag for normal builds.
pub fn project_standard_path(language: Language) -> [&'static str; 3] {
    ["project", "standards", language.key()]
}

/// `test.standards.<language>`: ordered flags for the test matrix.
pub fn test_standards_path(language: Language) -> [&'static str; 3] {
    ["test", "standards", language.key()]
}

/// One compiler's entry in the configuration document.
///
/// Fields are typed when they are read, so a broken field only fails the
/// query that needs it. Errors name the dotted path of the field.
#[derive(Debug, Clone)]
pub struct CompilerEntry {
    compiler: String,
    fields: Map<String, Value>,
}

impl CompilerEntry {
    /// Wrap the raw entry of `compiler`, which must be a JSON object.
    pub fn new(compiler: &str, raw: &Value) -> ConfigResult<Self> {
        match raw {
            Value::Object(fields) => Ok(Self {
                compiler: compiler.to_string(),
                fields: fields.clone(),
            }),
            other => Err(ConfigError::malformed(
                compiler,
                format!("entry must be an object, found {}", kind(other)),
            )),
        }
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Whether the entry has a value at `path`.
    pub fn contains(&self, path: &[&str]) -> bool {
        matches!(self.lookup(path), Ok(Some(_)))
    }

    /// Read the field at `path` as `T`.
    ///
    /// Absent keys and `null` are reported as missing; a value of the wrong
    /// type, or a non-object on the way down, as an invalid type at the
    /// deepest path reached.
    pub fn field<T: DeserializeOwned>(&self, path: &[&str]) -> ConfigResult<T> {
        let value = self
            .lookup(path)?
            .ok_or_else(|| self.malformed(format!("missing field `{}`", path.join("."))))?;

        T::deserialize(value).map_err(|e| {
            self.malformed(format!("invalid type at `{}`: {}", path.join("."), e))
        })
    }

    fn lookup(&self, path: &[&str]) -> ConfigResult<Option<&Value>> {
        let Some((first, rest)) = path.split_first() else {
            return Ok(None);
        };

        let mut current = match self.fields.get(*first) {
            Some(Value::Null) | None => return Ok(None),
            Some(value) => value,
        };

        for (depth, key) in rest.iter().enumerate() {
            let Value::Object(children) = current else {
                return Err(self.malformed(format!(
                    "invalid type at `{}`: expected an object, found {}",
                    path[..=depth].join("."),
                    kind(current)
                )));
            };
            current = match children.get(*key) {
                Some(Value::Null) | None => return Ok(None),
                Some(value) => value,
            };
        }

        Ok(Some(current))
    }

    fn malformed(&self, detail: String) -> ConfigError {
        ConfigError::malformed(&self.compiler, detail)
    }
}

/// JSON type name used in error details.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
