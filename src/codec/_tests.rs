#[cfg(test)]
pub mod fixtures {
    use crate::criteria::{Criteria, Direction};
    use crate::expr::{and_x, contains, ends_with, eq, gt, gte, is_in, is_null, lt, lte, member_of, neq, not_in, or_x, starts_with, Literal};

    pub fn active_adults() -> Criteria {
        Criteria::create()
            .and_where(eq("status", "active"))
            .and_where(gt("age", 18))
    }

    pub fn single_predicate() -> Criteria {
        Criteria::create().r#where(eq("name", "Bob"))
    }

    /// A composite nested in a comparison value, itself inside another composite.
    pub fn deep_nesting() -> Criteria {
        let inner = or_x(vec![eq("role", "admin"), and_x(vec![eq("role", "editor"), gte("level", 3)])]);

        Criteria::create().r#where(and_x(vec![
            eq("status", "active"),
            member_of("groups", inner),
            or_x(vec![lt("age", 18), gt("age", 65)]),
        ]))
    }

    pub fn every_operator() -> Criteria {
        Criteria::create()
            .and_where(eq("a", "x"))
            .and_where(neq("b", true))
            .and_where(lt("c", 1))
            .and_where(lte("d", Literal::float(2.5).unwrap()))
            .and_where(gt("e", -3))
            .and_where(gte("f", i64::MAX))
            .and_where(is_in("g", vec![Literal::Int(1), Literal::Int(2)]))
            .and_where(not_in("h", vec![Literal::from("x"), Literal::Null]))
            .and_where(contains("i", "needle"))
            .and_where(member_of("j", "k"))
            .and_where(starts_with("l", "pre"))
            .and_where(ends_with("m", "post"))
            .and_where(is_null("n"))
    }

    pub fn paginated_and_ordered() -> Criteria {
        active_adults()
            .set_first_result(Some(40))
            .set_max_results(Some(20))
            .order_by([("last_name", Direction::Asc), ("age", Direction::Desc), ("id", Direction::Asc)])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::fixtures;
    use crate::codec::{deserialize, serialize, ChildPolicy, CodecError, CriteriaSerializer, SerializerConfig};
    use crate::criteria::Criteria;
    use crate::expr::{and_x, eq, gt, or_x, CompositeType, Expression};

    fn round_trip(criteria: &Criteria) -> Criteria {
        let bytes = serialize(criteria).expect("serialize");
        deserialize(&bytes).expect("deserialize")
    }

    fn form_of(criteria: &Criteria) -> Value {
        CriteriaSerializer::new().to_form(criteria).expect("to_form")
    }

    fn ordering_keys(criteria: &Criteria) -> Vec<String> {
        criteria.orderings().keys().cloned().collect()
    }

    #[test]
    fn and_where_serializes_as_and_composite() {
        let form = form_of(&fixtures::active_adults());

        assert_eq!(
            form["whereExpression"],
            json!({
                "kind": "composite",
                "type": "AND",
                "expressions": [
                    { "kind": "comparison", "field": "status", "operator": "eq", "value": "active" },
                    { "kind": "comparison", "field": "age", "operator": "gt", "value": 18 }
                ]
            })
        );
    }

    #[test]
    fn and_where_round_trips_to_same_join() {
        let criteria = fixtures::active_adults();
        let back = round_trip(&criteria);

        assert_eq!(back, criteria);
        assert_eq!(
            back.where_expression().and_then(Expression::as_composite).map(|c| c.composite_type()),
            Some(CompositeType::And)
        );
    }

    #[test]
    fn or_where_round_trips_to_same_join() {
        let criteria = Criteria::create().or_where(eq("city", "Porto")).or_where(eq("city", "Lisboa"));

        let form = form_of(&criteria);
        assert_eq!(form["whereExpression"]["type"], json!("OR"));

        let back = round_trip(&criteria);
        assert_eq!(back.where_expression(), Some(&or_x(vec![eq("city", "Porto"), eq("city", "Lisboa")])));
    }

    #[test]
    fn single_predicate_is_not_wrapped() {
        let criteria = fixtures::single_predicate();

        let form = form_of(&criteria);
        assert_eq!(
            form["whereExpression"],
            json!({ "kind": "comparison", "field": "name", "operator": "eq", "value": "Bob" })
        );
        assert!(form["whereExpression"].get("type").is_none());

        let back = round_trip(&criteria);
        assert_eq!(back.where_expression(), Some(&eq("name", "Bob")));
    }

    #[test]
    fn deep_nesting_keeps_depth_and_shape() {
        let criteria = fixtures::deep_nesting();
        let back = round_trip(&criteria);

        assert_eq!(back, criteria);
        assert_eq!(back.where_expression().map(Expression::depth), criteria.where_expression().map(Expression::depth));
        assert_eq!(back.where_expression().map(Expression::depth), Some(5));
    }

    #[test]
    fn every_operator_round_trips() {
        let criteria = fixtures::every_operator();
        assert_eq!(round_trip(&criteria), criteria);
    }

    #[test]
    fn pagination_and_orderings_round_trip_in_order() {
        let criteria = fixtures::paginated_and_ordered();
        let back = round_trip(&criteria);

        assert_eq!(back, criteria);
        assert_eq!(back.first_result(), Some(40));
        assert_eq!(back.max_results(), Some(20));
        assert_eq!(ordering_keys(&back), vec!["last_name", "age", "id"]);
    }

    #[test]
    fn empty_criteria_round_trips() {
        let criteria = Criteria::create();
        let back = round_trip(&criteria);

        assert_eq!(back, criteria);
        assert!(back.where_expression().is_none());
    }

    #[test]
    fn same_type_composite_child_is_not_flattened() {
        let tree = and_x(vec![and_x(vec![eq("a", 1), eq("b", 2)]), eq("c", 3)]);
        let criteria = Criteria::create().r#where(tree.clone());

        assert_eq!(round_trip(&criteria).where_expression(), Some(&tree));
    }

    #[test]
    fn single_child_composite_round_trips() {
        let criteria = Criteria::create().r#where(or_x(vec![eq("a", 1)]));
        assert_eq!(round_trip(&criteria), criteria);
    }

    #[test]
    fn untagged_records_deserialize() {
        let data = json!({
            "whereExpression": {
                "type": "AND",
                "expressions": [
                    { "field": "status", "operator": "eq", "value": "active" },
                    { "field": "age", "operator": "gt", "value": 18 }
                ]
            },
            "firstResult": null,
            "maxResults": null,
            "orderings": {}
        });

        let criteria = deserialize(data.to_string().as_bytes()).unwrap();

        assert_eq!(criteria, fixtures::active_adults());
    }

    #[test]
    fn xor_type_fails_instead_of_defaulting() {
        let data = json!({
            "whereExpression": {
                "kind": "composite",
                "type": "XOR",
                "expressions": [{ "kind": "comparison", "field": "a", "operator": "eq", "value": 1 }]
            }
        });

        let result = deserialize(data.to_string().as_bytes());

        match result {
            Err(CodecError::InvalidExpressionType(tag)) => assert_eq!(tag, "XOR"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn xor_type_fails_even_without_children() {
        let empty = json!({ "whereExpression": { "kind": "composite", "type": "XOR", "expressions": [] } }).to_string();
        let only_nulls = json!({ "whereExpression": { "type": "XOR", "expressions": [null, null] } }).to_string();
        let lenient = CriteriaSerializer::with_config(SerializerConfig::lenient());

        for data in [empty, only_nulls] {
            let err = lenient.deserialize(data.as_bytes()).unwrap_err();

            assert!(matches!(err, CodecError::InvalidExpressionType(ref tag) if tag == "XOR"));
            assert!(!err.is_decode_error());
        }
    }

    #[test]
    fn top_level_null_children_follow_policy() {
        let data = json!({
            "whereExpression": { "type": "OR", "expressions": [null, { "field": "a", "operator": "eq", "value": 1 }, null] }
        })
        .to_string();

        let lenient = CriteriaSerializer::with_config(SerializerConfig::lenient()).deserialize(data.as_bytes()).unwrap();
        assert_eq!(lenient.where_expression(), Some(&or_x(vec![eq("a", 1)])));

        let strict = CriteriaSerializer::with_config(SerializerConfig::strict()).deserialize(data.as_bytes());
        assert!(matches!(strict, Err(CodecError::NullChild { index: 0 })));
    }

    #[test]
    fn top_level_empty_composite_follows_policy() {
        let data = json!({ "whereExpression": { "type": "AND", "expressions": [] } }).to_string();

        let lenient = CriteriaSerializer::new().deserialize(data.as_bytes()).unwrap();
        assert!(lenient.where_expression().is_none());

        let strict = CriteriaSerializer::with_config(SerializerConfig { child_policy: ChildPolicy::Reject, pretty: false })
            .deserialize(data.as_bytes());
        assert!(matches!(strict, Err(CodecError::EmptyComposite(CompositeType::And))));
    }

    #[test]
    fn negative_pagination_is_a_decode_error() {
        let data = json!({ "whereExpression": null, "firstResult": -1 }).to_string();

        let err = deserialize(data.as_bytes()).unwrap_err();

        assert!(matches!(err, CodecError::MalformedRecord(_)));
        assert!(err.is_decode_error());
    }

    #[test]
    fn invalid_direction_is_reported() {
        let data = json!({ "orderings": { "name": "SIDEWAYS" } }).to_string();

        let err = deserialize(data.as_bytes()).unwrap_err();

        assert!(matches!(err, CodecError::InvalidDirection(ref d) if d == "SIDEWAYS"));
    }

    #[test]
    fn lowercase_directions_are_accepted() {
        let data = json!({ "orderings": { "name": "desc" } }).to_string();

        let criteria = deserialize(data.as_bytes()).unwrap();

        assert_eq!(criteria.orderings()["name"], crate::criteria::Direction::Desc);
    }

    #[test]
    fn mixed_joins_round_trip() {
        let criteria = Criteria::create()
            .and_where(eq("a", 1))
            .or_where(gt("b", 2))
            .and_where(eq("c", 3));

        assert_eq!(
            criteria.where_expression(),
            Some(&and_x(vec![or_x(vec![and_x(vec![eq("a", 1)]), gt("b", 2)]), eq("c", 3)]))
        );
        assert_eq!(round_trip(&criteria), criteria);
    }
}
