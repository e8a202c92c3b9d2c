use std::fmt;

use crate::expr::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeType {
    And,
    Or,
}

impl CompositeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeType::And => "AND",
            CompositeType::Or => "OR",
        }
    }
}

/// Only the exact upper-case tags are accepted. The error carries the offending tag.
impl TryFrom<&str> for CompositeType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "AND" => Ok(CompositeType::And),
            "OR" => Ok(CompositeType::Or),
            _ => Err(value.to_string()),
        }
    }
}

impl fmt::Display for CompositeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// AND/OR group of child expressions. Child order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeExpression {
    composite_type: CompositeType,
    expressions: Vec<Expression>,
}

impl CompositeExpression {
    pub fn new(composite_type: CompositeType, expressions: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            composite_type,
            expressions: expressions.into_iter().collect(),
        }
    }

    pub fn composite_type(&self) -> CompositeType {
        self.composite_type
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn into_expressions(self) -> Vec<Expression> {
        self.expressions
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::{eq, gt, CompositeExpression, CompositeType};

    #[test]
    fn composite_type_tags() {
        assert_eq!(CompositeType::try_from("AND"), Ok(CompositeType::And));
        assert_eq!(CompositeType::try_from("OR"), Ok(CompositeType::Or));
        assert_eq!(CompositeType::try_from("XOR"), Err("XOR".to_string()));
        assert_eq!(CompositeType::try_from("and"), Err("and".to_string()));
    }

    #[test]
    fn composite_keeps_child_order() {
        let composite = CompositeExpression::new(CompositeType::Or, vec![gt("age", 18), eq("status", "active")]);

        assert_eq!(composite.len(), 2);
        assert_eq!(composite.expressions()[0], gt("age", 18));
        assert_eq!(composite.expressions()[1], eq("status", "active"));
    }
}
