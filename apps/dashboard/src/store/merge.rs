use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a patch is folded into the profile record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Each top-level key in the patch replaces the record's value wholesale.
    /// `{stats: {matchScore: 99}}` drops every other stats field.
    #[default]
    Shallow,
    /// Objects present on both sides merge key by key, recursively.
    /// Arrays and scalars are still replaced.
    Deep,
}

impl MergeStrategy {
    pub fn apply(self, target: &mut Map<String, Value>, patch: Map<String, Value>) {
        match self {
            MergeStrategy::Shallow => shallow_merge(target, patch),
            MergeStrategy::Deep => deep_merge(target, patch),
        }
    }
}

pub fn shallow_merge(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

pub fn deep_merge(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                deep_merge(existing, incoming);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_shallow_replaces_nested_object() {
        let mut target = obj(json!({ "stats": { "applications": 24, "matchScore": 95 } }));
        shallow_merge(&mut target, obj(json!({ "stats": { "matchScore": 99 } })));
        assert_eq!(Value::Object(target), json!({ "stats": { "matchScore": 99 } }));
    }

    #[test]
    fn test_shallow_keeps_untouched_keys_and_adds_new_ones() {
        let mut target = obj(json!({ "a": 1, "b": 2 }));
        shallow_merge(&mut target, obj(json!({ "b": 3, "c": 4 })));
        assert_eq!(Value::Object(target), json!({ "a": 1, "b": 3, "c": 4 }));
    }

    #[test]
    fn test_deep_keeps_siblings() {
        let mut target = obj(json!({ "stats": { "applications": 24, "matchScore": 95 } }));
        deep_merge(&mut target, obj(json!({ "stats": { "matchScore": 99 } })));
        assert_eq!(
            Value::Object(target),
            json!({ "stats": { "applications": 24, "matchScore": 99 } })
        );
    }

    #[test]
    fn test_deep_replaces_arrays() {
        let mut target = obj(json!({ "skills": [{ "name": "React", "level": 75 }] }));
        deep_merge(&mut target, obj(json!({ "skills": [] })));
        assert_eq!(Value::Object(target), json!({ "skills": [] }));
    }

    #[test]
    fn test_deep_replaces_object_with_scalar() {
        let mut target = obj(json!({ "resume": { "name": "cv.pdf", "uploaded": true } }));
        deep_merge(&mut target, obj(json!({ "resume": null })));
        assert_eq!(Value::Object(target), json!({ "resume": null }));
    }

    #[test]
    fn test_default_strategy_is_shallow() {
        assert_eq!(MergeStrategy::default(), MergeStrategy::Shallow);
    }
}
