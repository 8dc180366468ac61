use movie_treemap::api::{FetchError, parse_dataset};
use movie_treemap::models::{DatasetError, DatasetNode};

#[test]
fn parse_sample_json() {
    let sample = r#"
    {
      "name": "Movies",
      "children": [
        {
          "name": "Action",
          "children": [
            {"name": "Avatar ", "category": "Action", "value": "760505847"},
            {"name": "The Avengers", "category": "Action", "value": 623279547}
          ]
        },
        {
          "name": "Family",
          "children": [
            {"name": "Frozen", "category": "Family", "value": 400738009.5}
          ]
        }
      ]
    }
    "#;

    let root = parse_dataset(sample).unwrap();
    assert_eq!(root.name, "Movies");
    assert_eq!(root.children.len(), 2);
    let action = &root.children[0];
    assert!(action.category.is_none());
    assert_eq!(action.children[0].value, Some(760_505_847.0));
    assert_eq!(action.children[1].value, Some(623_279_547.0));
    assert_eq!(action.children[0].category.as_deref(), Some("Action"));
}

#[test]
fn empty_group_without_value_is_a_missing_value() {
    // An empty `children` list makes a leaf, and leaves need a value.
    let err = parse_dataset(r#"{"name":"root","children":[{"name":"Family","children":[]}]}"#)
        .unwrap_err();
    match err {
        FetchError::Invalid(DatasetError::MissingValue { name }) => assert_eq!(name, "Family"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn non_numeric_value_is_a_decode_error() {
    let err = parse_dataset(r#"{"name":"X","category":"Drama","value":"lots"}"#).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn serialization_omits_absent_fields() {
    let root = DatasetNode::group("root", vec![DatasetNode::leaf("Up", "Animation", 5.0)]);
    let json = serde_json::to_value(&root).unwrap();
    assert!(json.get("value").is_none());
    assert!(json.get("category").is_none());
    assert_eq!(json["children"][0]["value"], 5.0);
}
