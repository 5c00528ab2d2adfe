use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::info;

/// Reads options for one command scope. Lookup order is: environment variable (`MANCALA_` + upper-cased key),
/// the key inside the command's scope, then the key at the root of the config.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        Ok(Self::with_hocon(hocon, scope))
    }

    /// Loads the config file when present, otherwise falls back to env overrides and defaults.
    pub fn new_or_default(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::new(path, scope)
        } else {
            info!("No config file at {:?}, using defaults", path);
            Self::from_str("{}", scope)
        }
    }

    pub fn from_str(config: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(config)
            .context("Failed to parse config")?
            .hocon()?;

        Ok(Self::with_hocon(hocon, scope))
    }

    fn with_hocon(hocon: Hocon, scope: String) -> Self {
        let env = std::env::vars().collect::<HashMap<_, _>>();

        Self { hocon, env, scope }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&env_key(name)) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

fn env_key(name: &str) -> String {
    format!("MANCALA_{}", name.to_uppercase())
}

#[derive(Debug)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => usize::try_from(*val).ok(),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(val) => u64::try_from(*val).ok(),
            Value::String(val) => val.parse::<u64>().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(val) => Some(*val),
            Value::Integer(val) => Some(*val as f64),
            Value::String(val) => val.parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(true) => Some("true".to_string()),
            Value::Boolean(false) => Some("false".to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONF: &str = r#"
        games_per_batch = 20
        label = "from_file"
        record {
            games_per_batch = 5
            seed = 11
        }
        match {
            results_file = "results.json"
        }
    "#;

    #[test]
    fn test_scope_takes_precedence_over_root() {
        let config = ConfigLoader::from_str(CONF, "record".to_string()).unwrap();

        assert_eq!(
            config.get("games_per_batch").and_then(|v| v.as_usize()),
            Some(5)
        );
        assert_eq!(config.get("seed").and_then(|v| v.as_u64()), Some(11));
    }

    #[test]
    fn test_falls_back_to_root() {
        let config = ConfigLoader::from_str(CONF, "match".to_string()).unwrap();

        assert_eq!(
            config.get("games_per_batch").and_then(|v| v.as_usize()),
            Some(20)
        );
        assert_eq!(
            config.get("results_file").and_then(|v| v.as_string()),
            Some("results.json".to_string())
        );
    }

    #[test]
    fn test_missing_key() {
        let config = ConfigLoader::from_str(CONF, "match".to_string()).unwrap();

        assert!(config.get("not_a_key_anywhere").is_none());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            ConfigLoader::new_or_default("./does/not/exist.conf", "record".to_string()).unwrap();

        assert!(config.get("games_per_batch_unset").is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ConfigLoader::new("./does/not/exist.conf", "record".to_string()).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        std::env::set_var("MANCALA_LABEL", "from_env");
        let config = ConfigLoader::from_str(CONF, "match".to_string()).unwrap();

        assert_eq!(
            config.get("label").and_then(|v| v.as_string()),
            Some("from_env".to_string())
        );
    }

    #[test]
    fn test_negative_integer_is_not_a_usize() {
        let config = ConfigLoader::from_str("seed = -3", "record".to_string()).unwrap();

        assert_eq!(config.get("seed").and_then(|v| v.as_u64()), None);
    }
}
