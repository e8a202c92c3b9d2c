use serde_json::Value;
use tracing::debug;

use crate::codec::{CodecError, ExpressionBuilder, SerializerConfig, SerializingVisitor};
use crate::criteria::Criteria;

/// Encode/decode boundary for [`Criteria`].
///
/// `serialize` flattens the criteria with [`SerializingVisitor`] and encodes
/// the result as JSON; `deserialize` decodes JSON and rebuilds the criteria
/// with [`ExpressionBuilder`].
#[derive(Debug, Default, Clone)]
pub struct CriteriaSerializer {
    config: SerializerConfig,
}

impl CriteriaSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// The untyped nested form, before encoding.
    pub fn to_form(&self, criteria: &Criteria) -> Result<Value, CodecError> {
        SerializingVisitor.criteria_to_form(criteria)
    }

    pub fn from_form(&self, form: &Value) -> Result<Criteria, CodecError> {
        ExpressionBuilder::new(self.config.child_policy).build_criteria(form)
    }

    pub fn serialize(&self, criteria: &Criteria) -> Result<Vec<u8>, CodecError> {
        let form = self.to_form(criteria)?;
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&form)
        } else {
            serde_json::to_vec(&form)
        }
        .map_err(CodecError::Encode)?;

        debug!(bytes = bytes.len(), has_where = criteria.where_expression().is_some(), "serialized criteria");
        Ok(bytes)
    }

    pub fn serialize_to_string(&self, criteria: &Criteria) -> Result<String, CodecError> {
        let form = self.to_form(criteria)?;
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&form)
        } else {
            serde_json::to_string(&form)
        };
        text.map_err(CodecError::Encode)
    }

    pub fn deserialize(&self, data: &[u8]) -> Result<Criteria, CodecError> {
        let form: Value = serde_json::from_slice(data).map_err(CodecError::Decode)?;
        let criteria = self.from_form(&form)?;

        debug!(bytes = data.len(), has_where = criteria.where_expression().is_some(), "deserialized criteria");
        Ok(criteria)
    }
}

/// Serializes with the default configuration.
pub fn serialize(criteria: &Criteria) -> Result<Vec<u8>, CodecError> {
    CriteriaSerializer::new().serialize(criteria)
}

/// Deserializes with the default (lenient) configuration.
pub fn deserialize(data: &[u8]) -> Result<Criteria, CodecError> {
    CriteriaSerializer::new().deserialize(data)
}
