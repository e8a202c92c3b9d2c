use serde_json::Value;
use std::cmp::Ordering;
use tracing::debug;

use crate::criteria::Criteria;
use crate::matching::{Eval, Helpers};

/// Applies a [`Criteria`] to in-memory JSON documents: filter, sort, then page.
pub struct CriteriaMatcher<'a> {
    criteria: &'a Criteria,
}

impl<'a> CriteriaMatcher<'a> {
    pub fn new(criteria: &'a Criteria) -> Self {
        Self { criteria }
    }

    /// Rows that are not objects never match a where-expression.
    pub fn matches(&self, row: &Value) -> bool {
        match (self.criteria.where_expression(), row.as_object()) {
            (None, _) => true,
            (Some(expr), Some(obj)) => Eval::eval_expression(expr, obj).is_true(),
            (Some(_), None) => false,
        }
    }

    pub fn apply(&self, rows: &[Value]) -> Vec<Value> {
        let mut out: Vec<Value> = rows.iter().filter(|row| self.matches(row)).cloned().collect();

        if !self.criteria.orderings().is_empty() {
            // stable sort
            out.sort_by(|a, b| self.compare_rows(a, b));
        }

        let start = self.criteria.first_result().unwrap_or(0);
        let limit = self.criteria.max_results().unwrap_or(usize::MAX);
        let out: Vec<Value> = out.into_iter().skip(start).take(limit).collect();

        debug!(input = rows.len(), output = out.len(), "matched rows");
        out
    }

    fn compare_rows(&self, a: &Value, b: &Value) -> Ordering {
        for (field, direction) in self.criteria.orderings() {
            let av = a.as_object().and_then(|o| Helpers::field_value(o, field)).unwrap_or(&Value::Null);
            let bv = b.as_object().and_then(|o| Helpers::field_value(o, field)).unwrap_or(&Value::Null);
            let ord = Helpers::cmp_json_for_sort(av, bv, direction.is_ascending());
            if !ord.is_eq() {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl Criteria {
    /// Shorthand for `CriteriaMatcher::new(self).apply(rows)`.
    pub fn matching(&self, rows: &[Value]) -> Vec<Value> {
        CriteriaMatcher::new(self).apply(rows)
    }
}
