//! Workflow transitions and query matching.

use serde::Deserialize;
use serde_json::Value;

use crate::error::TrackerError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transition {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

/// Payload of the "list transitions" endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitionList {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// Pick the single transition matching `query`: an exact id, or a
/// case-insensitive prefix of the name.
pub fn match_transition<'a>(
    transitions: &'a [Transition],
    query: &str,
) -> Result<&'a Transition, TrackerError> {
    let wanted = query.trim().to_uppercase();
    let matches: Vec<&Transition> = transitions
        .iter()
        .filter(|t| t.id == query.trim() || t.name.to_uppercase().starts_with(&wanted))
        .collect();

    match matches.as_slice() {
        [] => Err(TrackerError::NoMatchingTransition(query.to_string())),
        [only] => Ok(*only),
        many => Err(TrackerError::AmbiguousTransition {
            query: query.to_string(),
            candidates: many.iter().map(|t| t.name.clone()).collect(),
        }),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("unexpected transition id: {other}"))),
    }
}
