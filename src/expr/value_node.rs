use ordered_float::NotNan;

use crate::expr::{Comparison, CompositeExpression, Expression, Literal};

/// Right-hand side of a comparison: either a plain literal or a nested
/// expression used as the value (a subquery-like construct).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueNode {
    Literal(Literal),
    Nested(Box<Expression>),
}

impl ValueNode {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            ValueNode::Literal(literal) => Some(literal),
            ValueNode::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Expression> {
        match self {
            ValueNode::Literal(_) => None,
            ValueNode::Nested(expr) => Some(expr),
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, ValueNode::Nested(_))
    }
}

impl From<Literal> for ValueNode {
    fn from(value: Literal) -> Self {
        ValueNode::Literal(value)
    }
}

impl From<Expression> for ValueNode {
    fn from(value: Expression) -> Self {
        ValueNode::Nested(Box::new(value))
    }
}

impl From<Comparison> for ValueNode {
    fn from(value: Comparison) -> Self {
        ValueNode::from(Expression::Comparison(value))
    }
}

impl From<CompositeExpression> for ValueNode {
    fn from(value: CompositeExpression) -> Self {
        ValueNode::from(Expression::Composite(value))
    }
}

macro_rules! value_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ValueNode {
                fn from(value: $ty) -> Self {
                    ValueNode::Literal(Literal::from(value))
                }
            }
        )*
    };
}

value_from_literal!(bool, i64, i32, NotNan<f64>, &str, String, Vec<Literal>);
