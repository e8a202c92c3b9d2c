use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

use crate::codec::SerializingVisitor;
use crate::expr::Literal;

pub struct Helpers;

impl Helpers {
    /// Reads `field` from a row, following dotted paths into nested objects.
    /// A key containing the full dotted name wins over path traversal.
    pub fn field_value<'a>(row: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
        if let Some(value) = row.get(field) {
            return Some(value);
        }

        let mut parts = field.split('.');
        let mut current = row.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// `None` when the literal has no JSON form (an infinite float, also inside a list).
    pub fn literal_value(literal: &Literal) -> Option<Value> {
        SerializingVisitor::literal_to_json(literal).ok()
    }

    pub fn value_equal(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => Self::cmp_numbers(x, y) == Some(Ordering::Equal),
            (Value::String(x), Value::String(y)) => x == y,
            (Value::Array(x), Value::Array(y)) => {
                x.len() == y.len() && x.iter().zip(y).all(|(a, b)| Self::value_equal(a, b))
            }
            _ => false,
        }
    }

    /// Ordering for numbers and strings; `None` when the pair is not comparable.
    pub fn partial_cmp(a: &Value, b: &Value) -> Option<Ordering> {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => Self::cmp_numbers(x, y),
            (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
            (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
            _ => None,
        }
    }

    /// Integer pairs compare exactly; f64 only when either side is a float.
    fn cmp_numbers(x: &Number, y: &Number) -> Option<Ordering> {
        match (x.as_i64(), y.as_i64(), x.as_u64(), y.as_u64()) {
            (Some(a), Some(b), _, _) => Some(a.cmp(&b)),
            (_, _, Some(a), Some(b)) => Some(a.cmp(&b)),
            // one side exceeds i64::MAX, the other is negative
            (Some(_), None, _, Some(_)) => Some(Ordering::Less),
            (None, Some(_), Some(_), _) => Some(Ordering::Greater),
            _ => x.as_f64()?.partial_cmp(&y.as_f64()?),
        }
    }

    // NULLS LAST comparator helper (ascending flag)
    pub fn cmp_json_for_sort(a: &Value, b: &Value, ascending: bool) -> Ordering {
        use Ordering::*;
        match (a, b) {
            (Value::Null, Value::Null) => Equal,
            (Value::Null, _) => Greater,
            (_, Value::Null) => Less,
            (lhs, rhs) => {
                let ord = Self::partial_cmp(lhs, rhs)
                    .unwrap_or_else(|| Self::type_rank(lhs).cmp(&Self::type_rank(rhs)));
                if ascending { ord } else { ord.reverse() }
            }
        }
    }

    fn type_rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Helpers;
    use serde_json::{json, Value};
    use std::cmp::Ordering::*;

    #[test]
    fn field_value_follows_dotted_path() {
        let row = json!({ "address": { "city": "Porto" }, "a.b": 1 });
        let row = row.as_object().unwrap();

        assert_eq!(Helpers::field_value(row, "address.city"), Some(&json!("Porto")));
        assert_eq!(Helpers::field_value(row, "a.b"), Some(&json!(1)));
        assert_eq!(Helpers::field_value(row, "address.zip"), None);
        assert_eq!(Helpers::field_value(row, "missing"), None);
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(Helpers::value_equal(&json!(1), &json!(1.0)));
        assert!(!Helpers::value_equal(&json!(1), &json!("1")));
        assert_eq!(Helpers::partial_cmp(&json!(2), &json!(10.5)), Some(Less));
        assert_eq!(Helpers::partial_cmp(&json!(2), &json!("x")), None);
    }

    #[test]
    fn large_integers_compare_exactly() {
        let a = json!(9007199254740992i64);
        let b = json!(9007199254740993i64);

        assert!(!Helpers::value_equal(&a, &b));
        assert_eq!(Helpers::partial_cmp(&a, &b), Some(Less));
        assert_eq!(Helpers::partial_cmp(&json!(u64::MAX), &json!(-1)), Some(Greater));
        assert_eq!(Helpers::partial_cmp(&json!(-1), &json!(u64::MAX)), Some(Less));
        assert_eq!(Helpers::partial_cmp(&json!(u64::MAX), &json!(u64::MAX - 1)), Some(Greater));
    }

    #[test]
    fn sort_nulls_last_in_ascending_and_descending() {
        let n = Value::Null;
        let z = json!(0);

        assert_eq!(Helpers::cmp_json_for_sort(&z, &n, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &z, true), Greater);
        assert_eq!(Helpers::cmp_json_for_sort(&z, &n, false), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &z, false), Greater);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &n, false), Equal);
    }

    #[test]
    fn sort_strings_is_lexicographic_and_directional() {
        let a = json!("Alice");
        let b = json!("Bob");
        assert_eq!(Helpers::cmp_json_for_sort(&a, &b, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&a, &b, false), Greater);
        assert_eq!(Helpers::cmp_json_for_sort(&a, &a, true), Equal);
    }
}
