// Runtime card settings. Defaults come from the tuning constants; the page
// may override a few of them through `data-*` attributes on the mount.

use thiserror::Error;

use super::constants::{HEART_COUNT, TOTAL_STEPS};

/// Upper bound for `data-hearts`; each heart is one instance per frame.
pub const MAX_HEART_COUNT: usize = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("{key}={value} is out of range {min}..={max}")]
    OutOfRange {
        key: String,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("unknown setting {0}")]
    UnknownKey(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardConfig {
    pub heart_count: usize,
    /// Fixed seed for heart placement; `None` draws one from the platform.
    pub seed: Option<u64>,
    pub total_steps: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            heart_count: HEART_COUNT,
            seed: None,
            total_steps: TOTAL_STEPS,
        }
    }
}

/// Attribute names read from the mount element.
pub const OVERRIDE_KEYS: [&str; 3] = ["data-hearts", "data-seed", "data-steps"];

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn bounded(key: &str, value: u64, min: u64, max: u64) -> Result<u64, ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(value)
}

impl CardConfig {
    /// Apply one `data-*` override. On error the config is left unchanged.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data-hearts" => {
                let v = bounded(key, parse_u64(key, value)?, 0, MAX_HEART_COUNT as u64)?;
                self.heart_count = v as usize;
            }
            "data-seed" => {
                self.seed = Some(parse_u64(key, value)?);
            }
            "data-steps" => {
                let v = bounded(key, parse_u64(key, value)?, 2, 64)?;
                self.total_steps = v as u32;
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Apply every override, collecting the rejected ones.
    pub fn with_overrides<'a, I>(mut self, pairs: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let errors = pairs
            .into_iter()
            .filter_map(|(k, v)| self.apply(k, v).err())
            .collect();
        (self, errors)
    }
}
