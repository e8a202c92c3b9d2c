use indexmap::IndexMap;

use crate::criteria::Direction;
use crate::expr::{CompositeExpression, CompositeType, Expression};

/// Root filter definition: a predicate tree plus pagination and ordering.
///
/// Built fluently:
///
/// ```
/// use criteria_codec::{Criteria, Direction};
/// use criteria_codec::expr::{eq, gt};
///
/// let criteria = Criteria::create()
///     .and_where(eq("status", "active"))
///     .and_where(gt("age", 18))
///     .order_by([("age", Direction::Desc)])
///     .set_max_results(Some(10));
///
/// assert_eq!(criteria.where_expression().unwrap().to_string(), "(status = 'active' AND age > 18)");
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Criteria {
    where_expression: Option<Expression>,
    first_result: Option<usize>,
    max_results: Option<usize>,
    orderings: IndexMap<String, Direction>,
}

impl Criteria {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn where_expression(&self) -> Option<&Expression> {
        self.where_expression.as_ref()
    }

    pub fn first_result(&self) -> Option<usize> {
        self.first_result
    }

    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    pub fn orderings(&self) -> &IndexMap<String, Direction> {
        &self.orderings
    }

    /// Replaces the where-expression.
    pub fn r#where(mut self, expr: impl Into<Expression>) -> Self {
        self.where_expression = Some(expr.into());
        self
    }

    /// Conjoins `expr` with the current where-expression.
    ///
    /// An empty criteria becomes `AND[expr]`, an existing AND group gets `expr`
    /// appended, anything else is wrapped as `AND[existing, expr]`.
    pub fn and_where(self, expr: impl Into<Expression>) -> Self {
        self.join(CompositeType::And, expr.into())
    }

    /// Disjoins `expr` with the current where-expression. Mirrors [`Criteria::and_where`].
    pub fn or_where(self, expr: impl Into<Expression>) -> Self {
        self.join(CompositeType::Or, expr.into())
    }

    fn join(mut self, composite_type: CompositeType, expr: Expression) -> Self {
        let joined = match self.where_expression.take() {
            None => CompositeExpression::new(composite_type, [expr]),
            Some(Expression::Composite(existing)) if existing.composite_type() == composite_type => {
                let mut expressions = existing.into_expressions();
                expressions.push(expr);
                CompositeExpression::new(composite_type, expressions)
            }
            Some(existing) => CompositeExpression::new(composite_type, [existing, expr]),
        };
        self.where_expression = Some(Expression::Composite(joined));
        self
    }

    pub fn set_first_result(mut self, first_result: Option<usize>) -> Self {
        self.first_result = first_result;
        self
    }

    pub fn set_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Replaces the orderings, keeping the given key order.
    pub fn order_by<K: Into<String>>(mut self, orderings: impl IntoIterator<Item = (K, Direction)>) -> Self {
        self.orderings = orderings.into_iter().map(|(k, d)| (k.into(), d)).collect();
        self
    }
}
