//! Shorthand constructors for building expression trees.
//!
//! ```
//! use criteria_codec::expr::{and_x, eq, gt};
//!
//! let expr = and_x(vec![eq("status", "active"), gt("age", 18)]);
//! assert_eq!(expr.to_string(), "(status = 'active' AND age > 18)");
//! ```

use crate::expr::{Comparison, CompositeExpression, CompositeType, Expression, Literal, Operator, ValueNode};

pub fn compare(field: &str, operator: Operator, value: impl Into<ValueNode>) -> Expression {
    Expression::Comparison(Comparison::new(field, operator, value))
}

pub fn eq(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Eq, value)
}

pub fn neq(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Neq, value)
}

pub fn lt(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Lt, value)
}

pub fn lte(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Lte, value)
}

pub fn gt(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Gt, value)
}

pub fn gte(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Gte, value)
}

pub fn is_in(field: &str, values: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::In, values)
}

pub fn not_in(field: &str, values: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Nin, values)
}

pub fn contains(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::Contains, value)
}

pub fn member_of(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::MemberOf, value)
}

pub fn starts_with(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::StartsWith, value)
}

pub fn ends_with(field: &str, value: impl Into<ValueNode>) -> Expression {
    compare(field, Operator::EndsWith, value)
}

pub fn is_null(field: &str) -> Expression {
    compare(field, Operator::Eq, Literal::Null)
}

pub fn and_x(expressions: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::Composite(CompositeExpression::new(CompositeType::And, expressions))
}

pub fn or_x(expressions: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::Composite(CompositeExpression::new(CompositeType::Or, expressions))
}
