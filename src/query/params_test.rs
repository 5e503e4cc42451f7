#[cfg(test)]
mod tests {
    use super::super::params::*;
    use serde_json::{Map, Value, json};

    fn map_of(entries: Vec<(&str, Value)>) -> Map<String, Value> {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key.to_string(), value);
        }
        map
    }

    fn decode_pairs(rendered: &str) -> Vec<(String, String)> {
        if rendered.is_empty() {
            return Vec::new();
        }
        rendered
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_converts_all_value_shapes_to_strings() {
        let data = map_of(vec![
            ("name", json!("John")),
            ("age", json!(30)),
            ("isActive", json!(true)),
            ("someArray", json!([1, 2, 3])),
            ("someObject", json!({"a": 1, "b": 2})),
        ]);

        let pairs = serialize_query_params(Some(&data)).unwrap();

        let expected: Vec<(String, String)> = vec![
            ("name".into(), "John".into()),
            ("age".into(), "30".into()),
            ("isActive".into(), "true".into()),
            ("someArray".into(), "1".into()),
            ("someArray".into(), "2".into()),
            ("someArray".into(), "3".into()),
            ("someObject".into(), r#"{"a":1,"b":2}"#.into()),
        ];
        assert_eq!(pairs.pairs(), expected.as_slice());
    }

    #[test]
    fn test_null_entries_are_dropped() {
        let data = map_of(vec![
            ("name", Value::Null),
            ("age", Value::Null),
            ("isActive", Value::Null),
            ("someArray", Value::Null),
            ("someObject", Value::Null),
        ]);

        let pairs = serialize_query_params(Some(&data)).unwrap();

        assert!(pairs.is_empty());
        assert_eq!(pairs.to_string(), "");
    }

    #[test]
    fn test_absent_input_returns_none() {
        assert!(serialize_query_params(None).is_none());
    }

    #[test]
    fn test_empty_map_serializes_to_empty_query() {
        let data = Map::new();
        let pairs = serialize_query_params(Some(&data)).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_scalars_round_trip_through_parsing() {
        let data = map_of(vec![
            ("Keywords", json!("rock & roll")),
            ("PageNumber", json!(2)),
            ("IncludeDrafts", json!(false)),
            ("Score", json!(1.5)),
        ]);

        let rendered = serialize_query_params(Some(&data)).unwrap().to_string();
        let decoded = decode_pairs(&rendered);

        let expected: Vec<(String, String)> = vec![
            ("Keywords".into(), "rock & roll".into()),
            ("PageNumber".into(), "2".into()),
            ("IncludeDrafts".into(), "false".into()),
            ("Score".into(), "1.5".into()),
        ];
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_array_values_preserve_multiplicity_and_order() {
        let data = map_of(vec![("tag", json!(["b", "a", "b"]))]);

        let pairs = serialize_query_params(Some(&data)).unwrap();

        assert_eq!(
            pairs.pairs(),
            [
                ("tag".to_string(), "b".to_string()),
                ("tag".to_string(), "a".to_string()),
                ("tag".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_structured_array_elements_degrade_to_json_text() {
        let data = map_of(vec![("filters", json!([{"field": "name"}, null]))]);

        let pairs = serialize_query_params(Some(&data)).unwrap();

        assert_eq!(
            pairs.pairs(),
            [
                ("filters".to_string(), r#"{"field":"name"}"#.to_string()),
                ("filters".to_string(), "null".to_string()),
            ]
        );
    }

    #[test]
    fn test_rendered_output_is_percent_encoded() {
        let data = map_of(vec![
            ("q", json!("rock & roll")),
            ("someObject", json!({"a": 1})),
        ]);

        let rendered = serialize_query_params(Some(&data)).unwrap().to_string();

        assert_eq!(rendered, "q=rock%20%26%20roll&someObject=%7B%22a%22%3A1%7D");
    }

    #[test]
    fn test_set_replaces_every_pair_for_the_key() {
        let mut pairs = QueryPairs::new();
        pairs.append("a", "1");
        pairs.append("k", "x");
        pairs.append("b", "2");
        pairs.append("k", "y");

        pairs.set("k", "z");

        assert_eq!(
            pairs.pairs(),
            [
                ("a".to_string(), "1".to_string()),
                ("k".to_string(), "z".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_on_missing_key_appends() {
        let mut pairs = QueryPairs::new();
        pairs.set("k", "v");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.to_string(), "k=v");
    }

    #[test]
    fn test_negative_and_float_numbers_use_canonical_form() {
        let data = map_of(vec![("offset", json!(-3)), ("ratio", json!(0.25))]);

        let rendered = serialize_query_params(Some(&data)).unwrap().to_string();

        assert_eq!(rendered, "offset=-3&ratio=0.25");
    }
}
