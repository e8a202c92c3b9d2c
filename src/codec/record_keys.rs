// Envelope
pub const WHERE_EXPRESSION: &str = "whereExpression";
pub const FIRST_RESULT: &str = "firstResult";
pub const MAX_RESULTS: &str = "maxResults";
pub const ORDERINGS: &str = "orderings";

// Records
pub const KIND: &str = "kind";
pub const KIND_COMPOSITE: &str = "composite";
pub const KIND_COMPARISON: &str = "comparison";

pub const TYPE: &str = "type";
pub const EXPRESSIONS: &str = "expressions";

pub const FIELD: &str = "field";
pub const OPERATOR: &str = "operator";
pub const VALUE: &str = "value";
