use crate::expr::{Comparison, CompositeExpression, Literal, ValueNode};
use crate::visitor::ExpressionVisitor;

/// Renders an expression as a SQL-like string. Backs `Display for Expression`.
pub struct ExpressionPrinter;

impl ExpressionVisitor for ExpressionPrinter {
    type Output = String;

    fn walk_comparison(&self, comparison: &Comparison) -> String {
        let value = self.dispatch_value(comparison.value());
        match comparison.value() {
            ValueNode::Nested(expr) if expr.as_comparison().is_some() => {
                format!("{} {} ({})", comparison.field(), comparison.operator(), value)
            }
            _ => format!("{} {} {}", comparison.field(), comparison.operator(), value),
        }
    }

    fn walk_composite(&self, composite: &CompositeExpression) -> String {
        let separator = format!(" {} ", composite.composite_type());
        let parts: Vec<String> = composite.expressions().iter().map(|e| self.dispatch(e)).collect();
        format!("({})", parts.join(&separator))
    }

    fn walk_literal(&self, literal: &Literal) -> String {
        literal.to_string()
    }
}
