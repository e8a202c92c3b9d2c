use crate::expr::{Operator, ValueNode};

/// Leaf predicate `field <operator> value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparison {
    field: String,
    operator: Operator,
    value: ValueNode,
}

impl Comparison {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<ValueNode>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &ValueNode {
        &self.value
    }
}
