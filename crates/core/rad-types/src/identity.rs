//! Person identities returned by the identity tool.

use serde::{Deserialize, Serialize};

use crate::Extra;

/// A user identity, addressed by URN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub urn: String,
    pub payload: PersonPayload,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Namespaced payload of a person document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonPayload {
    /// Fields under [`PERSON_NAMESPACE`](crate::PERSON_NAMESPACE).
    #[serde(rename = "https://radicle.xyz/link/identities/person/v1")]
    pub subject: PersonSubject,
    /// Other namespaces, kept as-is.
    #[serde(flatten)]
    pub extensions: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSubject {
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Person {
    /// Create a person record.
    pub fn new(urn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            urn: urn.into(),
            payload: PersonPayload {
                subject: PersonSubject {
                    name: name.into(),
                    extra: Extra::new(),
                },
                extensions: Extra::new(),
            },
            extra: Extra::new(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.payload.subject.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PERSON_NAMESPACE;
    use serde_json::json;

    #[test]
    fn test_person_namespace_key() {
        let value = serde_json::to_value(Person::new("rad:git:p1", "alice")).unwrap();
        assert_eq!(value["payload"][PERSON_NAMESPACE]["name"], "alice");
    }

    #[test]
    fn test_person_from_tool_document() {
        let value = json!({
            "urn": "rad:git:hnrkq",
            "payload": {
                PERSON_NAMESPACE: {"name": "cloudhead"},
                "https://example.com/ext": {"x": 1}
            },
            "delegations": ["key"]
        });
        let person: Person = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(person.name(), "cloudhead");
        assert_eq!(person.urn, "rad:git:hnrkq");
        assert_eq!(serde_json::to_value(&person).unwrap(), value);
    }

    #[test]
    fn test_person_missing_namespace_is_rejected() {
        let value = json!({"urn": "rad:git:x", "payload": {"name": "alice"}});
        assert!(serde_json::from_value::<Person>(value).is_err());
    }
}
