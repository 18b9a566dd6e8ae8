use serde::{Deserialize, Deserializer, Serialize};

/// Opaque user identifier issued by the authentication provider.
///
/// An identity is never empty; providers report "no active user" as `None`
/// rather than as a blank identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Build an identity, rejecting empty or whitespace-only identifiers.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identity::new(value).ok_or_else(|| "identity must not be empty".to_string())
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Profile record returned by the user-profile store.
pub struct UserProfile {
    /// Display name shown in the account dropdown.
    #[serde(default)]
    pub name: String,
    /// Contact email shown under the display name.
    #[serde(default)]
    pub email: String,
    /// Admin flag. Only a literal JSON `true` grants admin; anything else
    /// (missing, null, `"true"`, `1`) decodes as `false`.
    #[serde(default, deserialize_with = "literal_true")]
    pub is_admin: bool,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            is_admin,
        }
    }

    /// Decode a profile record from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn literal_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
