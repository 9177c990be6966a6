//! YAML / JSON rendering of a schema

use super::model::Schema;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Schema writer errors
#[derive(Error, Debug)]
pub enum WriteError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported output format
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type WriteResult<T> = Result<T, WriteError>;

/// Output format of a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = WriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(WriteError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render a schema as YAML
pub fn to_yaml(schema: &Schema) -> WriteResult<String> {
    render(schema, OutputFormat::Yaml)
}

/// Render a schema as pretty-printed JSON
pub fn to_json(schema: &Schema) -> WriteResult<String> {
    render(schema, OutputFormat::Json)
}

/// Render any serializable value in the given format
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> WriteResult<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

/// Write a rendered value to a file
pub fn write_file<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    format: OutputFormat,
) -> WriteResult<()> {
    let text = render(value, format)?;
    fs::write(path, text)?;
    debug!("Wrote {} output to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ClassDefinition, FieldDefinition};
    use tempfile::TempDir;

    fn sample() -> Schema {
        let mut schema = Schema::new("example");
        schema.add_defaults();
        let mut field = FieldDefinition::new("name");
        field.range = Some("string".to_string());
        schema.add_field(field);
        let mut class = ClassDefinition::new("Person");
        class.add_slot("name");
        schema.add_class(class);
        schema
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("toml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_yaml_output() {
        let yaml = to_yaml(&sample()).unwrap();
        assert!(yaml.starts_with("id: http://example.org/example\n"));
        assert!(yaml.contains("default_range: string"));
        assert!(yaml.contains("slots:\n  name:\n    name: name\n    range: string\n"));
        assert!(yaml.contains("Person:"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["classes"]["Person"]["slots"][0], "name");
        assert_eq!(value["prefixes"]["linkml"], "https://w3id.org/linkml/");
    }

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.yaml");
        write_file(&sample(), &path, OutputFormat::Yaml).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_yaml(&sample()).unwrap());
    }
}
