use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keys written to local storage by the page that launches the session
pub mod keys {
    pub const LEARNER: &str = "learner";
    pub const TYPE: &str = "type";
    pub const IS_PEER_LEARNER: &str = "isPeerLearner";
    pub const IS_INSTANT_DEMO: &str = "isInstantDemo";
    pub const END_TIME: &str = "endTime";
}

/// Literal some writers store instead of removing the key
const NULL_SENTINEL: &str = "null";

/// Read access to persisted string flags (browser local storage, a file, ...)
pub trait FlagStore {
    /// Raw stored value, exactly as written
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Stored value with the `"null"` sentinel and empty strings mapped to `None`
    fn get(&self, key: &str) -> Option<String> {
        self.get_raw(key).and_then(normalize_flag)
    }
}

impl FlagStore for HashMap<String, String> {
    fn get_raw(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Map stored sentinel values to absence
pub fn normalize_flag(value: String) -> Option<String> {
    if value.is_empty() || value == NULL_SENTINEL {
        None
    } else {
        Some(value)
    }
}

/// Session flags read once from storage and then passed around by value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionFlags {
    pub learner: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_peer_learner: bool,
    pub is_instant_demo: bool,
    pub end_time: Option<String>,
}

impl SessionFlags {
    pub fn read(store: &impl FlagStore) -> Self {
        let flags = Self {
            learner: store.get(keys::LEARNER),
            kind: store.get(keys::TYPE),
            is_peer_learner: store.get(keys::IS_PEER_LEARNER).as_deref() == Some("true"),
            is_instant_demo: store.get(keys::IS_INSTANT_DEMO).as_deref() == Some("true"),
            end_time: store.get(keys::END_TIME),
        };
        tracing::debug!(?flags, "Session flags loaded");
        flags
    }

    /// Both identity flags required by the join form are present
    pub fn has_learner_identity(&self) -> bool {
        self.learner.is_some() && self.kind.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_null_sentinel_is_absent() {
        let s = store(&[("learner", "null"), ("type", "")]);

        assert_eq!(s.get_raw("learner"), Some("null".to_string()));
        assert_eq!(FlagStore::get(&s, "learner"), None);
        assert_eq!(FlagStore::get(&s, "type"), None);
        assert_eq!(FlagStore::get(&s, "missing"), None);
    }

    #[test]
    fn test_read_all_flags() {
        let s = store(&[
            ("learner", "abc"),
            ("type", "trial"),
            ("isPeerLearner", "true"),
            ("isInstantDemo", "false"),
            ("endTime", "10:30"),
        ]);

        let flags = SessionFlags::read(&s);

        assert_eq!(flags.learner.as_deref(), Some("abc"));
        assert_eq!(flags.kind.as_deref(), Some("trial"));
        assert!(flags.is_peer_learner);
        assert!(!flags.is_instant_demo);
        assert_eq!(flags.end_time.as_deref(), Some("10:30"));
        assert!(flags.has_learner_identity());
    }

    #[test]
    fn test_empty_store() {
        let flags = SessionFlags::read(&HashMap::new());

        assert_eq!(flags, SessionFlags::default());
        assert!(!flags.has_learner_identity());
    }

    #[test]
    fn test_learner_flag_requires_exact_true() {
        let flags = SessionFlags::read(&store(&[("isPeerLearner", "TRUE")]));
        assert!(!flags.is_peer_learner);
    }

    #[test]
    fn test_flags_deserialize_from_storage_dump() {
        let json = r#"{ "learner": "abc", "type": "demo", "isPeerLearner": true }"#;

        let flags: SessionFlags = serde_json::from_str(json).unwrap();

        assert_eq!(flags.kind.as_deref(), Some("demo"));
        assert!(flags.is_peer_learner);
        assert!(flags.end_time.is_none());
    }
}
