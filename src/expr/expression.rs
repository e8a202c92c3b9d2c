use std::fmt;

use crate::expr::{Comparison, CompositeExpression};
use crate::visitor::{ExpressionPrinter, ExpressionVisitor};

/// Any node of the predicate tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Comparison(Comparison),
    Composite(CompositeExpression),
}

impl Expression {
    pub fn as_comparison(&self) -> Option<&Comparison> {
        match self {
            Expression::Comparison(comparison) => Some(comparison),
            Expression::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeExpression> {
        match self {
            Expression::Comparison(_) => None,
            Expression::Composite(composite) => Some(composite),
        }
    }

    /// Nesting depth, counting composites and nested comparison values.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Comparison(comparison) => {
                1 + comparison.value().as_nested().map_or(0, Expression::depth)
            }
            Expression::Composite(composite) => {
                1 + composite.expressions().iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }
}

impl From<Comparison> for Expression {
    fn from(value: Comparison) -> Self {
        Expression::Comparison(value)
    }
}

impl From<CompositeExpression> for Expression {
    fn from(value: CompositeExpression) -> Self {
        Expression::Composite(value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ExpressionPrinter.dispatch(self))
    }
}
