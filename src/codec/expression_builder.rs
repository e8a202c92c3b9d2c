use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::codec::record_keys::*;
use crate::codec::{ChildPolicy, CodecError};
use crate::criteria::{Criteria, Direction};
use crate::expr::{Comparison, CompositeExpression, CompositeType, Expression, Literal, Operator, ValueNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Composite,
    Comparison,
}

/// Rebuilds typed criteria from the untyped JSON form.
///
/// A record is classified by its `kind` tag. Untagged records fall back to key
/// presence: a `type` key means composite, anything else is a comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionBuilder {
    policy: ChildPolicy,
}

impl ExpressionBuilder {
    pub fn new(policy: ChildPolicy) -> Self {
        Self { policy }
    }

    pub fn build_criteria(&self, form: &Value) -> Result<Criteria, CodecError> {
        let envelope = form
            .as_object()
            .ok_or_else(|| CodecError::malformed("criteria form must be an object"))?;

        let criteria = Criteria::create()
            .set_first_result(Self::read_bound(envelope, FIRST_RESULT)?)
            .set_max_results(Self::read_bound(envelope, MAX_RESULTS)?)
            .order_by(Self::read_orderings(envelope)?);

        match envelope.get(WHERE_EXPRESSION) {
            None | Some(Value::Null) => Ok(criteria),
            Some(structure) => self.build_expressions(criteria, structure),
        }
    }

    /// Attaches the root where-expression. A composite root is joined child by
    /// child with `and_where`/`or_where`; a comparison root is set directly.
    fn build_expressions(&self, criteria: Criteria, structure: &Value) -> Result<Criteria, CodecError> {
        let record = Self::as_record(structure)?;

        match Self::record_kind(record)? {
            RecordKind::Comparison => Ok(criteria.r#where(self.build_comparison(record)?)),
            RecordKind::Composite => {
                let composite_type = Self::read_composite_type(record)?;
                let children = self.build_children(record)?;
                if children.is_empty() {
                    self.omit(CodecError::EmptyComposite(composite_type))?;
                    return Ok(criteria);
                }

                Ok(children.into_iter().fold(criteria, |criteria, expr| match composite_type {
                    CompositeType::And => criteria.and_where(expr),
                    CompositeType::Or => criteria.or_where(expr),
                }))
            }
        }
    }

    /// Builds one node. `None` means the node was a composite that ended up
    /// without children and the lenient policy dropped it.
    pub fn build_expression(&self, structure: &Value) -> Result<Option<Expression>, CodecError> {
        let record = Self::as_record(structure)?;
        let kind = Self::record_kind(record)?;
        trace!(?kind, "building record");

        match kind {
            RecordKind::Comparison => Ok(Some(Expression::Comparison(self.build_comparison(record)?))),
            RecordKind::Composite => {
                let composite_type = Self::read_composite_type(record)?;
                let children = self.build_children(record)?;
                if children.is_empty() {
                    self.omit(CodecError::EmptyComposite(composite_type))?;
                    return Ok(None);
                }
                Ok(Some(Expression::Composite(CompositeExpression::new(composite_type, children))))
            }
        }
    }

    fn build_children(&self, record: &Map<String, Value>) -> Result<Vec<Expression>, CodecError> {
        let expressions = record
            .get(EXPRESSIONS)
            .and_then(Value::as_array)
            .ok_or_else(|| CodecError::malformed("composite record without an `expressions` array"))?;

        let mut children = Vec::with_capacity(expressions.len());
        for (index, child) in expressions.iter().enumerate() {
            if child.is_null() {
                self.omit(CodecError::NullChild { index })?;
                continue;
            }
            if let Some(expr) = self.build_expression(child)? {
                children.push(expr);
            }
        }
        Ok(children)
    }

    fn build_comparison(&self, record: &Map<String, Value>) -> Result<Comparison, CodecError> {
        let field = record
            .get(FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| CodecError::malformed("comparison record without a string `field`"))?;

        let operator = match record.get(OPERATOR) {
            Some(Value::String(op)) => Operator::try_from(op.as_str()).map_err(|_| CodecError::InvalidOperator(op.clone()))?,
            Some(other) => return Err(CodecError::InvalidOperator(other.to_string())),
            None => return Err(CodecError::malformed("comparison record without an `operator`")),
        };

        let value = record
            .get(VALUE)
            .ok_or_else(|| CodecError::malformed("comparison record without a `value`"))?;

        Ok(Comparison::new(field, operator, self.build_value(value)?))
    }

    /// An object in value position is a nested record; anything else is a literal.
    fn build_value(&self, value: &Value) -> Result<ValueNode, CodecError> {
        match value {
            Value::Object(record) => match self.build_expression(value)? {
                Some(expr) => Ok(ValueNode::from(expr)),
                // a comparison cannot lose its value, whatever the policy
                None => Err(CodecError::EmptyComposite(Self::read_composite_type(record)?)),
            },
            other => Self::json_to_literal(other).map(ValueNode::Literal),
        }
    }

    pub fn json_to_literal(value: &Value) -> Result<Literal, CodecError> {
        match value {
            Value::Null => Ok(Literal::Null),
            Value::Bool(b) => Ok(Literal::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Literal::Int(i)),
                None => n
                    .as_f64()
                    .and_then(|f| Literal::float(f).ok())
                    .ok_or_else(|| CodecError::malformed(format!("unsupported number {}", n))),
            },
            Value::String(s) => Ok(Literal::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::json_to_literal)
                .collect::<Result<Vec<_>, _>>()
                .map(Literal::List),
            Value::Object(_) => Err(CodecError::malformed("records are not allowed inside a literal list")),
        }
    }

    pub fn record_kind(record: &Map<String, Value>) -> Result<RecordKind, CodecError> {
        match record.get(KIND) {
            Some(Value::String(kind)) if kind == KIND_COMPOSITE => Ok(RecordKind::Composite),
            Some(Value::String(kind)) if kind == KIND_COMPARISON => Ok(RecordKind::Comparison),
            Some(other) => Err(CodecError::malformed(format!("unknown record kind {}", other))),
            None if record.contains_key(TYPE) => Ok(RecordKind::Composite),
            None => Ok(RecordKind::Comparison),
        }
    }

    fn read_composite_type(record: &Map<String, Value>) -> Result<CompositeType, CodecError> {
        match record.get(TYPE) {
            Some(Value::String(tag)) => CompositeType::try_from(tag.as_str()).map_err(CodecError::InvalidExpressionType),
            Some(other) => Err(CodecError::InvalidExpressionType(other.to_string())),
            None => Err(CodecError::malformed("composite record without a `type` tag")),
        }
    }

    fn read_bound(envelope: &Map<String, Value>, key: &str) -> Result<Option<usize>, CodecError> {
        match envelope.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| CodecError::malformed(format!("`{}` must be a non-negative integer, got {}", key, value))),
        }
    }

    fn read_orderings(envelope: &Map<String, Value>) -> Result<Vec<(String, Direction)>, CodecError> {
        match envelope.get(ORDERINGS) {
            None | Some(Value::Null) => Ok(vec![]),
            Some(Value::Object(orderings)) => orderings
                .iter()
                .map(|(field, direction)| {
                    direction
                        .as_str()
                        .and_then(|d| Direction::try_from(d).ok())
                        .map(|d| (field.clone(), d))
                        .ok_or_else(|| {
                            CodecError::InvalidDirection(direction.as_str().map_or_else(|| direction.to_string(), str::to_string))
                        })
                })
                .collect(),
            Some(other) => Err(CodecError::malformed(format!("`{}` must be an object, got {}", ORDERINGS, other))),
        }
    }

    fn as_record(structure: &Value) -> Result<&Map<String, Value>, CodecError> {
        structure
            .as_object()
            .ok_or_else(|| CodecError::malformed(format!("expected an expression record, got {}", structure)))
    }

    fn omit(&self, reason: CodecError) -> Result<(), CodecError> {
        match self.policy {
            ChildPolicy::Skip => {
                warn!(%reason, "omitting expression from composite");
                Ok(())
            }
            ChildPolicy::Reject => Err(reason),
        }
    }
}
