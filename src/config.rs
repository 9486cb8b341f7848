use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_POP_WIDTH: f32 = 0.4;
pub const DEFAULT_POP_HEIGHT: f32 = 0.7;

/// Smallest fraction a clamped size hint can shrink to.
const MIN_FRACTION: f32 = 0.01;

/// Popup size as fractions of the terminal, each in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeHint {
    pub width: f32,
    pub height: f32,
}

impl SizeHint {
    /// Builds a hint, clamping both fractions into `(0, 1]`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_fraction(width),
            height: clamp_fraction(height),
        }
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        Self {
            width: DEFAULT_POP_WIDTH,
            height: DEFAULT_POP_HEIGHT,
        }
    }
}

pub(crate) fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        return MIN_FRACTION;
    }
    value.clamp(MIN_FRACTION, 1.0)
}

fn is_valid_fraction(value: f32) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub text: String,
}

impl FieldConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumpadConfig {
    pub pop_width: f32,
    pub pop_height: f32,
    /// Reserved. Carried through to every field, no behavior attached.
    pub touch_switch: bool,
    pub fields: Vec<FieldConfig>,
}

impl Default for NumpadConfig {
    fn default() -> Self {
        Self {
            pop_width: DEFAULT_POP_WIDTH,
            pop_height: DEFAULT_POP_HEIGHT,
            touch_switch: false,
            fields: vec![
                FieldConfig::new("amount", "Amount"),
                FieldConfig::new("quantity", "Quantity"),
            ],
        }
    }
}

impl NumpadConfig {
    pub fn pop_size(&self) -> SizeHint {
        SizeHint::new(self.pop_width, self.pop_height)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(input).map_err(|err| ConfigError::parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| ConfigError::parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&raw)?
        } else {
            Self::from_yaml_str(&raw)?
        };
        log::info!(
            "loaded {} with {} field(s)",
            path.display(),
            config.fields.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("pop_width", self.pop_width), ("pop_height", self.pop_height)] {
            if !is_valid_fraction(value) {
                return Err(ConfigError::InvalidFraction { name, value });
            }
        }
        if self.fields.is_empty() {
            return Err(ConfigError::NoFields);
        }
        for (idx, field) in self.fields.iter().enumerate() {
            if field.id.trim().is_empty() {
                return Err(ConfigError::parse(format!("field #{idx} has an empty id")));
            }
            if self.fields[..idx].iter().any(|other| other.id == field.id) {
                return Err(ConfigError::DuplicateField(field.id.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { message: String },
    InvalidFraction { name: &'static str, value: f32 },
    NoFields,
    DuplicateField(String),
}

impl ConfigError {
    fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { message } => write!(f, "invalid config: {message}"),
            Self::InvalidFraction { name, value } => {
                write!(f, "{name} must be in (0, 1], got {value}")
            }
            Self::NoFields => f.write_str("config declares no fields"),
            Self::DuplicateField(id) => write!(f, "field id `{id}` is declared twice"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
