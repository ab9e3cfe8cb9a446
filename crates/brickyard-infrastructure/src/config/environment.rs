//! Environment
//!
//! The process environment merged over an optional `.env.toml` file at the
//! install root. Process variables win over the file.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use brickyard_domain::ports::EnvironmentService;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::Value;
use figment::Figment;
use serde::Deserialize;
use tracing::debug;

use crate::constants::DOTENV_FILENAME;

/// Non-string scalar a TOML file may hold
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Figment-backed environment
#[derive(Clone)]
pub struct Environment {
    figment: Figment,
}

impl Environment {
    /// Load `.env.toml` from `install_root`, then the process environment
    ///
    /// Process values are kept verbatim.
    pub fn load(install_root: &Path) -> Self {
        let dotenv = install_root.join(DOTENV_FILENAME);
        debug!(path = %dotenv.display(), exists = dotenv.is_file(), "Loading environment");
        let process: BTreeMap<String, String> = Env::raw()
            .iter()
            .map(|(key, value)| (key.as_str().to_lowercase(), value))
            .collect();
        Self {
            figment: Figment::new()
                .merge(Toml::file(dotenv))
                .merge(Serialized::defaults(process)),
        }
    }

    /// Fixed key/value pairs, ignoring the process environment
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into().to_lowercase(), value.into()))
            .collect();
        Self {
            figment: Figment::new().merge(Serialized::defaults(values)),
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        match self.figment.find_value(key).ok()? {
            Value::String(_, value) => Some(value),
            Value::Char(_, value) => Some(value.to_string()),
            value => value
                .deserialize::<Scalar>()
                .ok()
                .map(|scalar| scalar.to_string()),
        }
    }
}

impl EnvironmentService for Environment {
    fn get(&self, key: &str) -> Option<String> {
        [key.to_lowercase(), key.to_string(), key.to_uppercase()]
            .into_iter()
            .find_map(|candidate| self.lookup(&candidate))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
