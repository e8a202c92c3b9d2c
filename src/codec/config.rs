use serde::{Deserialize, Serialize};

/// What the builder does with a composite child that converts to nothing:
/// a `null` entry in `expressions`, or a nested composite left without children.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildPolicy {
    /// Omit the child from the join and keep going.
    #[default]
    Skip,
    /// Fail the whole deserialization.
    Reject,
}

/// Serializer configuration.
///
/// - `child_policy` controls how unconvertible composite children are handled.
/// - `pretty` switches the encoded output to indented JSON.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SerializerConfig {
    pub child_policy: ChildPolicy,
    pub pretty: bool,
}

impl SerializerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            child_policy: ChildPolicy::Skip,
            ..Self::default()
        }
    }

    pub fn strict() -> Self {
        Self {
            child_policy: ChildPolicy::Reject,
            ..Self::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
