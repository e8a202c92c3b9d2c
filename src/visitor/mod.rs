//! Traversal over expression trees.
//!
//! An [`ExpressionVisitor`] supplies one walk method per node kind and gets
//! `dispatch`/`dispatch_value` for free. Both dispatchers are exhaustive
//! matches, so a comparison value holding a nested expression is routed back
//! through `dispatch` exactly like a top-level node.

use crate::expr::{Comparison, CompositeExpression, Expression, Literal, ValueNode};

pub mod expression_printer;
pub use expression_printer::*;

pub trait ExpressionVisitor {
    type Output;

    fn walk_comparison(&self, comparison: &Comparison) -> Self::Output;

    fn walk_composite(&self, composite: &CompositeExpression) -> Self::Output;

    fn walk_literal(&self, literal: &Literal) -> Self::Output;

    fn dispatch(&self, expr: &Expression) -> Self::Output {
        match expr {
            Expression::Comparison(comparison) => self.walk_comparison(comparison),
            Expression::Composite(composite) => self.walk_composite(composite),
        }
    }

    fn dispatch_value(&self, value: &ValueNode) -> Self::Output {
        match value {
            ValueNode::Literal(literal) => self.walk_literal(literal),
            ValueNode::Nested(expr) => self.dispatch(expr),
        }
    }
}
