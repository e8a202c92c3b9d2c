use serde_json::{Map, Number, Value};

use crate::codec::record_keys::*;
use crate::codec::CodecError;
use crate::criteria::Criteria;
use crate::expr::{Comparison, CompositeExpression, Literal};
use crate::visitor::ExpressionVisitor;

/// Flattens an expression tree into plain JSON records.
///
/// Every record carries an explicit `kind` so the builder never has to guess
/// the node type from the keys that happen to be present.
pub struct SerializingVisitor;

impl ExpressionVisitor for SerializingVisitor {
    type Output = Result<Value, CodecError>;

    fn walk_comparison(&self, comparison: &Comparison) -> Self::Output {
        let value = self.dispatch_value(comparison.value())?;

        let mut record = Map::new();
        record.insert(KIND.to_string(), Value::from(KIND_COMPARISON));
        record.insert(FIELD.to_string(), Value::from(comparison.field()));
        record.insert(OPERATOR.to_string(), Value::from(comparison.operator().as_str()));
        record.insert(VALUE.to_string(), value);
        Ok(Value::Object(record))
    }

    fn walk_composite(&self, composite: &CompositeExpression) -> Self::Output {
        let expressions = composite
            .expressions()
            .iter()
            .map(|child| self.dispatch(child))
            .collect::<Result<Vec<_>, _>>()?;

        let mut record = Map::new();
        record.insert(KIND.to_string(), Value::from(KIND_COMPOSITE));
        record.insert(TYPE.to_string(), Value::from(composite.composite_type().as_str()));
        record.insert(EXPRESSIONS.to_string(), Value::Array(expressions));
        Ok(Value::Object(record))
    }

    fn walk_literal(&self, literal: &Literal) -> Self::Output {
        Self::literal_to_json(literal)
    }
}

impl SerializingVisitor {
    pub fn literal_to_json(literal: &Literal) -> Result<Value, CodecError> {
        match literal {
            Literal::Null => Ok(Value::Null),
            Literal::Bool(b) => Ok(Value::Bool(*b)),
            Literal::Int(i) => Ok(Value::Number(Number::from(*i))),
            Literal::Float(f) => Number::from_f64(f.into_inner())
                .map(Value::Number)
                .ok_or(CodecError::UnrepresentableLiteral(f.into_inner())),
            Literal::String(s) => Ok(Value::String(s.clone())),
            Literal::List(items) => items
                .iter()
                .map(Self::literal_to_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }

    /// Builds the criteria envelope: where-expression, pagination and orderings.
    pub fn criteria_to_form(&self, criteria: &Criteria) -> Result<Value, CodecError> {
        let where_expression = match criteria.where_expression() {
            Some(expr) => self.dispatch(expr)?,
            None => Value::Null,
        };

        let orderings: Map<String, Value> = criteria
            .orderings()
            .iter()
            .map(|(field, direction)| (field.clone(), Value::from(direction.as_str())))
            .collect();

        let mut envelope = Map::new();
        envelope.insert(WHERE_EXPRESSION.to_string(), where_expression);
        envelope.insert(FIRST_RESULT.to_string(), Value::from(criteria.first_result()));
        envelope.insert(MAX_RESULTS.to_string(), Value::from(criteria.max_results()));
        envelope.insert(ORDERINGS.to_string(), Value::Object(orderings));
        Ok(Value::Object(envelope))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::codec::{CodecError, SerializingVisitor};
    use crate::criteria::{Criteria, Direction};
    use crate::expr::{and_x, eq, gt, is_in, Literal};
    use crate::visitor::ExpressionVisitor;

    #[test]
    fn comparison_record() {
        let form = SerializingVisitor.dispatch(&eq("name", "Bob")).unwrap();

        assert_eq!(form, json!({ "kind": "comparison", "field": "name", "operator": "eq", "value": "Bob" }));
        assert!(form.get("type").is_none());
    }

    #[test]
    fn composite_record() {
        let form = SerializingVisitor.dispatch(&and_x(vec![eq("status", "active"), gt("age", 18)])).unwrap();

        assert_eq!(
            form,
            json!({
                "kind": "composite",
                "type": "AND",
                "expressions": [
                    { "kind": "comparison", "field": "status", "operator": "eq", "value": "active" },
                    { "kind": "comparison", "field": "age", "operator": "gt", "value": 18 }
                ]
            })
        );
    }

    #[test]
    fn nested_value_becomes_record() {
        let form = SerializingVisitor.dispatch(&eq("flag", gt("x", 1))).unwrap();

        assert_eq!(form["value"], json!({ "kind": "comparison", "field": "x", "operator": "gt", "value": 1 }));
    }

    #[test]
    fn list_literal_is_array() {
        let form = SerializingVisitor
            .dispatch(&is_in("id", vec![Literal::Int(1), Literal::from("two"), Literal::Null]))
            .unwrap();

        assert_eq!(form["value"], json!([1, "two", null]));
    }

    #[test]
    fn infinite_float_is_rejected() {
        let literal = Literal::float(f64::INFINITY).unwrap();
        let result = SerializingVisitor.dispatch(&eq("x", literal));

        assert!(matches!(result, Err(CodecError::UnrepresentableLiteral(f)) if f.is_infinite()));
        assert!(result.is_err_and(|err| err.is_decode_error()));
    }

    #[test]
    fn envelope() {
        let criteria = Criteria::create()
            .set_first_result(Some(5))
            .order_by([("b", Direction::Desc), ("a", Direction::Asc)]);

        let form = SerializingVisitor.criteria_to_form(&criteria).unwrap();

        assert_eq!(
            form,
            json!({ "whereExpression": null, "firstResult": 5, "maxResults": null, "orderings": { "b": "DESC", "a": "ASC" } })
        );
        let keys: Vec<&String> = form["orderings"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
