//! Filter expressions attached to list and event requests.
//!
//! A filter is a set of values per key. On the wire it is a JSON object of
//! `{"key": {"value": true}}`; the older `{"key": ["value"]}` form is still
//! accepted when decoding.

use crate::error::TypesError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    fields: BTreeMap<String, BTreeSet<String>>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, value: &str) {
        self.fields
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    /// Remove one value; the key goes away with its last value.
    pub fn del(&mut self, key: &str, value: &str) {
        if let Some(values) = self.fields.get_mut(key) {
            values.remove(value);
            if values.is_empty() {
                self.fields.remove(key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Vec<String> {
        self.fields
            .get(key)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn include(&self, key: &str) -> bool {
        self.contains(key)
    }

    /// True when `key` is not filtered on, or `source` is one of its values.
    pub fn exact_match(&self, key: &str, source: &str) -> bool {
        match self.fields.get(key) {
            Some(values) => values.contains(source),
            None => true,
        }
    }

    pub fn to_param(&self) -> Result<String, TypesError> {
        if self.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_param(param: &str) -> Result<Self, TypesError> {
        let param = param.trim();
        if param.is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_str(param).map_err(|e| TypesError::InvalidFilter(e.to_string()))
    }
}

/// Parse a `key=value` command line filter into `args`.
pub fn parse_flag(arg: &str, mut args: Args) -> Result<Args, TypesError> {
    let arg = arg.trim();
    let (key, value) = arg.split_once('=').ok_or_else(|| {
        TypesError::InvalidFilter(format!(
            "bad format of filter (expected name=value): {}",
            arg
        ))
    })?;

    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err(TypesError::InvalidFilter(format!("empty filter name: {}", arg)));
    }
    args.add(&key, value.trim());
    Ok(args)
}

impl Serialize for Args {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire: BTreeMap<&str, BTreeMap<&str, bool>> = self
            .fields
            .iter()
            .map(|(key, values)| {
                let set = values.iter().map(|v| (v.as_str(), true)).collect();
                (key.as_str(), set)
            })
            .collect();
        wire.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArgsWire {
    Current(BTreeMap<String, BTreeMap<String, bool>>),
    Legacy(BTreeMap<String, Vec<String>>),
}

impl<'de> Deserialize<'de> for Args {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = match ArgsWire::deserialize(deserializer)? {
            ArgsWire::Current(map) => map
                .into_iter()
                .map(|(key, values)| {
                    let set = values
                        .into_iter()
                        .filter_map(|(v, on)| on.then_some(v))
                        .collect();
                    (key, set)
                })
                .collect(),
            ArgsWire::Legacy(map) => map
                .into_iter()
                .map(|(key, values)| (key, values.into_iter().collect()))
                .collect(),
        };
        Ok(Self { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut args = Args::new();
        args.add("status", "running");
        args.add("status", "exited");
        args.add("label", "env=prod");

        assert_eq!(args.len(), 2);
        assert_eq!(args.get("status"), vec!["exited", "running"]);
        assert!(args.get("name").is_empty());
    }

    #[test]
    fn test_del_drops_empty_key() {
        let mut args = Args::new();
        args.add("status", "running");
        args.del("status", "running");

        assert!(!args.contains("status"));
        assert!(args.is_empty());
    }

    #[test]
    fn test_exact_match() {
        let mut args = Args::new();
        assert!(args.exact_match("status", "paused"));

        args.add("status", "running");
        assert!(args.exact_match("status", "running"));
        assert!(!args.exact_match("status", "paused"));
    }

    #[test]
    fn test_to_param() {
        let mut args = Args::new();
        assert_eq!(args.to_param().unwrap(), "");

        args.add("dangling", "true");
        assert_eq!(args.to_param().unwrap(), r#"{"dangling":{"true":true}}"#);
    }

    #[test]
    fn test_from_param_current_and_legacy() {
        let current = Args::from_param(r#"{"status":{"running":true,"exited":true}}"#).unwrap();
        let legacy = Args::from_param(r#"{"status":["running","exited"]}"#).unwrap();

        assert_eq!(current, legacy);
        assert_eq!(current.get("status"), vec!["exited", "running"]);
    }

    #[test]
    fn test_from_param_empty_and_invalid() {
        assert!(Args::from_param("  ").unwrap().is_empty());
        assert!(matches!(
            Args::from_param("not json"),
            Err(TypesError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_parse_flag() {
        let args = parse_flag("label=com.example.vendor=ACME", Args::new()).unwrap();
        let args = parse_flag("Status=running", args).unwrap();

        assert_eq!(args.get("label"), vec!["com.example.vendor=ACME"]);
        assert_eq!(args.get("status"), vec!["running"]);
    }

    #[test]
    fn test_parse_flag_rejects_missing_value() {
        assert!(parse_flag("dangling", Args::new()).is_err());
        assert!(parse_flag("=true", Args::new()).is_err());
    }
}
