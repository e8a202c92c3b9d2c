use serde_json::{Map, Value};

use crate::expr::{Comparison, CompositeType, Expression, Operator};
use crate::matching::{Helpers, Truth};

pub struct Eval;

impl Eval {
    pub fn eval_expression(expr: &Expression, row: &Map<String, Value>) -> Truth {
        match expr {
            Expression::Comparison(comparison) => Self::eval_comparison(comparison, row),
            Expression::Composite(composite) => {
                let children = composite.expressions().iter().map(|e| Self::eval_expression(e, row));
                match composite.composite_type() {
                    CompositeType::And => children.fold(Truth::True, |acc, t| acc.and(t)),
                    CompositeType::Or => children.fold(Truth::False, |acc, t| acc.or(t)),
                }
            }
        }
    }

    /// Nested-expression values have no row-level meaning and evaluate to Unknown.
    pub fn eval_comparison(comparison: &Comparison, row: &Map<String, Value>) -> Truth {
        let Some(literal) = comparison.value().as_literal() else {
            return Truth::Unknown;
        };
        let left = Helpers::field_value(row, comparison.field()).unwrap_or(&Value::Null);
        let Some(right) = Helpers::literal_value(literal) else {
            return Truth::Unknown;
        };

        match comparison.operator() {
            // against a NULL literal EQ/NEQ are IS NULL / IS NOT NULL
            Operator::Eq if right.is_null() => Truth::from_bool(left.is_null()),
            Operator::Neq if right.is_null() => Truth::from_bool(!left.is_null()),
            _ if left.is_null() || right.is_null() => Truth::Unknown,
            Operator::Eq => Truth::from_bool(Helpers::value_equal(left, &right)),
            Operator::Neq => Truth::from_bool(!Helpers::value_equal(left, &right)),
            Operator::Lt => Self::ordered(left, &right, |o| o.is_lt()),
            Operator::Lte => Self::ordered(left, &right, |o| o.is_le()),
            Operator::Gt => Self::ordered(left, &right, |o| o.is_gt()),
            Operator::Gte => Self::ordered(left, &right, |o| o.is_ge()),
            Operator::In => Self::in_list(left, &right),
            Operator::Nin => Self::in_list(left, &right).not(),
            Operator::Contains => Self::strings(left, &right, |l, r| l.contains(r)),
            Operator::StartsWith => Self::strings(left, &right, |l, r| l.starts_with(r)),
            Operator::EndsWith => Self::strings(left, &right, |l, r| l.ends_with(r)),
            Operator::MemberOf => match left {
                Value::Array(items) => Truth::from_bool(items.iter().any(|item| Helpers::value_equal(item, &right))),
                _ => Truth::Unknown,
            },
        }
    }

    fn ordered(left: &Value, right: &Value, accept: impl Fn(std::cmp::Ordering) -> bool) -> Truth {
        match Helpers::partial_cmp(left, right) {
            Some(ord) => Truth::from_bool(accept(ord)),
            None => Truth::Unknown,
        }
    }

    fn in_list(left: &Value, right: &Value) -> Truth {
        let Value::Array(list) = right else {
            return Truth::Unknown;
        };
        let mut has_null = false;
        for item in list {
            if item.is_null() {
                has_null = true;
                continue;
            }
            if Helpers::value_equal(left, item) {
                return Truth::True;
            }
        }
        if has_null { Truth::Unknown } else { Truth::False }
    }

    fn strings(left: &Value, right: &Value, test: impl Fn(&str, &str) -> bool) -> Truth {
        match (left, right) {
            (Value::String(l), Value::String(r)) => Truth::from_bool(test(l, r)),
            _ => Truth::Unknown,
        }
    }
}
