use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_axon::{
    from_slice, from_str, from_str_block, from_str_dynamic, from_str_one, parse,
    parse_with_options, AxonType, AxonValue, Delimiter, Error, ParseOptions,
};

const USERS: &str = r#"
Sample user fixture.

@schema User
id:I
name:S
email:S
active:B
age:I?
@end

@data User[2]
1|Alice|alice@example.com|1|28
2|Bob|bob@example.com|0|_
@end
"#;

#[test]
fn test_user_scenario() {
    let result = parse(USERS).unwrap();

    let schema = &result.schemas[0];
    assert_eq!(schema.name, "User");
    let types: Vec<_> = schema.fields.iter().map(|f| f.field_type.clone()).collect();
    assert_eq!(
        types,
        vec![
            AxonType::Integer,
            AxonType::String,
            AxonType::String,
            AxonType::Boolean,
            AxonType::Integer,
        ]
    );
    assert!(schema.field("age").unwrap().nullable);
    assert!(!schema.field("id").unwrap().nullable);

    let rows = &result.data_blocks[0].rows;
    assert_eq!(rows[0].get("id"), Some(&AxonValue::Integer(1)));
    assert_eq!(rows[0].get("name"), Some(&AxonValue::from("Alice")));
    assert_eq!(rows[0].get("email"), Some(&AxonValue::from("alice@example.com")));
    assert_eq!(rows[0].get("active"), Some(&AxonValue::Boolean(true)));
    assert_eq!(rows[0].get("age"), Some(&AxonValue::Integer(28)));

    assert_eq!(rows[1].get("active"), Some(&AxonValue::Boolean(false)));
    assert_eq!(rows[1].get("age"), Some(&AxonValue::Null));
}

#[derive(Debug, PartialEq, Deserialize)]
struct User {
    id: i64,
    name: String,
    email: String,
    active: bool,
    age: Option<u32>,
}

#[test]
fn test_users_deserialize_into_structs() {
    let users: Vec<User> = from_str(USERS).unwrap();
    assert_eq!(
        users,
        vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                active: true,
                age: Some(28),
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                active: false,
                age: None,
            },
        ]
    );
}

#[test]
fn test_deserialize_named_block_case_insensitive() {
    let doc = "@schema Tag\nid:I\nname:S\nemail:S\nactive:B\n@end\n@data Tag[1]\n9|x|y|0\n@end\n";
    let doc = format!("{}{}", doc, USERS);

    let users: Vec<User> = from_str_block(&doc, "user").unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Alice");

    let none: Vec<User> = from_str_block(&doc, "Order").unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_deserialize_one() {
    let first: Option<User> = from_str_one(USERS).unwrap();
    assert_eq!(first.map(|u| u.email), Some("alice@example.com".to_string()));
}

#[test]
fn test_deserialize_short_row_and_timestamp() {
    #[derive(Debug, Deserialize)]
    struct Event {
        at: DateTime<FixedOffset>,
        note: Option<String>,
    }

    let doc = "@schema Event\nat:T\nnote:S?\n@end\n@data Event[1]\n2024-01-15T10:30:00+02:00\n@end";
    let events: Vec<Event> = from_str(doc).unwrap();
    assert_eq!(events[0].at.timestamp(), 1_705_307_400);
    assert_eq!(events[0].note, None);
}

#[test]
fn test_deserialize_type_mismatch_is_an_error() {
    #[derive(Debug, Deserialize)]
    struct Wrong {
        #[allow(dead_code)]
        name: i64,
    }

    assert!(matches!(from_str::<Wrong>(USERS), Err(Error::Custom(_))));
}

#[test]
fn test_dynamic_rows() {
    let rows = from_str_dynamic(USERS).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("name"), Some(&AxonValue::from("Bob")));
    assert_eq!(rows[1].get("age"), Some(&AxonValue::Null));
}

#[test]
fn test_row_keys_follow_schema_order() {
    let result = parse(USERS).unwrap();
    let keys: Vec<_> = result.data_blocks[0].rows[0].keys().cloned().collect();
    assert_eq!(keys, vec!["id", "name", "email", "active", "age"]);
}

#[test]
fn test_undeclared_schema_fails() {
    let doc = "@schema User\nid:I\n@end\n@data Order[1]\n1\n@end";
    match parse(doc) {
        Err(Error::SchemaNotFound { name, line }) => {
            assert_eq!(name, "Order");
            assert_eq!(line, 4);
        }
        other => panic!("expected SchemaNotFound, got {:?}", other),
    }
}

#[test]
fn test_schema_must_be_declared_before_data() {
    let doc = "@data User[1]\n1\n@end\n@schema User\nid:I\n@end";
    assert!(matches!(parse(doc), Err(Error::SchemaNotFound { .. })));
}

#[test]
fn test_declared_count_is_not_validated() {
    let doc = "@schema User\nid:I\n@end\n@data User[3]\n1\n2\n@end";
    let result = parse(doc).unwrap();
    let block = &result.data_blocks[0];
    // Header says 3, only 2 rows follow: accepted as-is
    assert_eq!(block.declared_count, 3);
    assert_eq!(block.rows.len(), 2);
}

#[test]
fn test_declared_count_validated_when_enabled() {
    let doc = "@schema User\nid:I\n@end\n@data User[3]\n1\n2\n@end";
    let options = ParseOptions::new().with_validate_counts(true);
    assert_eq!(
        parse_with_options(doc, options),
        Err(Error::count_mismatch(4, "User", 3, 2))
    );
}

#[test]
fn test_integer_field_rejects_text() {
    let doc = "@schema User\nid:I\n@end\n@data User[1]\nnotanumber\n@end";
    match parse(doc) {
        Err(Error::ValueFormat {
            token,
            field,
            expected,
            line,
            ..
        }) => {
            assert_eq!(token, "notanumber");
            assert_eq!(field, "id");
            assert_eq!(expected, AxonType::Integer);
            assert_eq!(line, 5);
        }
        other => panic!("expected ValueFormat, got {:?}", other),
    }
}

#[test]
fn test_value_error_discards_earlier_blocks() {
    let doc = "@schema P\nx:I\n@end\n@data P[1]\n1\n@end\n@data P[1]\noops\n@end";
    assert!(parse(doc).is_err());
}

#[test]
fn test_invalid_header() {
    let doc = "@schema User\nid:I\n@end\n@data User\n1\n@end";
    match parse(doc) {
        Err(Error::HeaderFormat { header, line }) => {
            assert_eq!(header, "@data User");
            assert_eq!(line, 4);
        }
        other => panic!("expected HeaderFormat, got {:?}", other),
    }
}

#[test]
fn test_data_prefix_triggers_header_check() {
    // Any line starting with "@data" is a data header, even "@database"
    assert!(matches!(
        parse("@database settings"),
        Err(Error::HeaderFormat { .. })
    ));
}

#[test]
fn test_malformed_field_lines_are_skipped() {
    let doc = "@schema Loose\nid:I\njust words\nurl:S:extra\n\nname:S\n@end";
    let result = parse(doc).unwrap();
    let names: Vec<_> = result.schemas[0]
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "name"]);
}

#[test]
fn test_unknown_type_passes_raw_token() {
    let doc = "@schema Money\namount:D\n@end\n@data Money[1]\n12.50\n@end";
    let result = parse(doc).unwrap();
    assert_eq!(
        result.schemas[0].fields[0].field_type,
        AxonType::Unknown("D".to_string())
    );
    assert_eq!(
        result.data_blocks[0].rows[0].get("amount"),
        Some(&AxonValue::from("12.50"))
    );
}

#[test]
fn test_null_sentinel_on_non_nullable_field() {
    let doc = "@schema P\nx:I\ny:T\n@end\n@data P[1]\n_|_\n@end";
    let result = parse(doc).unwrap();
    let row = &result.data_blocks[0].rows[0];
    assert!(row.get("x").unwrap().is_null());
    assert!(row.get("y").unwrap().is_null());
}

#[test]
fn test_short_and_long_rows() {
    let doc = "@schema P\na:I\nb:S\nc:B\n@end\n@data P[2]\n1|x\n2|y|1|surplus|more\n@end";
    let result = parse(doc).unwrap();
    let rows = &result.data_blocks[0].rows;

    assert_eq!(rows[0].len(), 2);
    assert!(!rows[0].contains_key("c"));
    assert_eq!(rows[1].len(), 3);
    assert_eq!(rows[1].get("c"), Some(&AxonValue::Boolean(true)));
}

#[test]
fn test_timestamps_and_floats() {
    let doc = "@schema Event\nat:T\nscore:F\n@end\n@data Event[2]\n2024-01-15T10:30:00Z|0.5\n2024-03-01T08:00:00+02:00|-1e2\n@end";
    let result = parse(doc).unwrap();
    let rows = &result.data_blocks[0].rows;

    let first = rows[0].get("at").and_then(|v| v.as_timestamp()).unwrap();
    assert_eq!(first.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    let second = rows[1].get("at").and_then(|v| v.as_timestamp()).unwrap();
    assert_eq!(second.offset().local_minus_utc(), 7200);
    assert_eq!(rows[1].get("score").and_then(|v| v.as_f64()), Some(-100.0));
}

#[test]
fn test_bad_timestamp_fails() {
    let doc = "@schema Event\nat:T\n@end\n@data Event[1]\n15/01/2024\n@end";
    assert!(matches!(parse(doc), Err(Error::ValueFormat { .. })));
}

#[test]
fn test_multiple_schemas_and_blocks() {
    let doc = "
@schema User
id:I
@end
@schema Tag
label:S
@end
@data Tag[1]
rust
@end
@data User[1]
7
@end
@data Tag[1]
serde
@end
";
    let result = parse(doc).unwrap();
    assert_eq!(result.schemas.len(), 2);
    assert_eq!(result.data_blocks.len(), 3);
    assert_eq!(result.data_blocks_for("Tag").count(), 2);
    assert_eq!(result.schema("User").map(|s| s.fields.len()), Some(1));
}

#[test]
fn test_duplicate_schema_first_wins() {
    let doc = "@schema P\nx:I\n@end\n@schema P\nx:S\n@end\n@data P[1]\n5\n@end";
    let result = parse(doc).unwrap();
    assert_eq!(result.schemas.len(), 2);
    assert_eq!(
        result.data_blocks[0].rows[0].get("x"),
        Some(&AxonValue::Integer(5))
    );
}

#[test]
fn test_unterminated_data_block_runs_to_end() {
    let doc = "@schema P\nx:I\n@end\n@data P[2]\n1\n2";
    let result = parse(doc).unwrap();
    assert_eq!(result.data_blocks[0].rows.len(), 2);
}

#[test]
fn test_unterminated_block_strict() {
    let doc = "@schema P\nx:I\n@end\n@data P[2]\n1\n2";
    let options = ParseOptions::new().with_strict_terminators(true);
    assert_eq!(
        parse_with_options(doc, options),
        Err(Error::unterminated_block(4, "data"))
    );
}

#[test]
fn test_strict_preset_accepts_well_formed_document() {
    let doc = "@schema P\nx:I\nok:B\n@end\n@data P[2]\n1|1\n2|0\n@end";
    assert!(parse_with_options(doc, ParseOptions::strict()).is_ok());
}

#[test]
fn test_comma_delimiter_option() {
    let doc = "@schema P\nx:I\ny:S\n@end\n@data P[1]\n1,\"a,b\"\n@end";
    let options = ParseOptions::new().with_delimiter(Delimiter::Comma);
    let result = parse_with_options(doc, options).unwrap();
    assert_eq!(
        result.data_blocks[0].rows[0].get("y"),
        Some(&AxonValue::from("a,b"))
    );
}

#[test]
fn test_tab_delimiter_keeps_empty_edge_fields() {
    let options = ParseOptions::new().with_delimiter(Delimiter::Tab);

    let doc = "@schema P\na:S\nb:I\n@end\n@data P[1]\n\t42\n@end";
    let result = parse_with_options(doc, options.clone()).unwrap();
    let row = &result.data_blocks[0].rows[0];
    assert_eq!(row.get("a"), Some(&AxonValue::from("")));
    assert_eq!(row.get("b"), Some(&AxonValue::Integer(42)));

    let doc = "@schema P\na:S\nb:S\n@end\n@data P[1]\nx\t\n@end";
    let result = parse_with_options(doc, options).unwrap();
    let row = &result.data_blocks[0].rows[0];
    assert_eq!(row.get("a"), Some(&AxonValue::from("x")));
    assert_eq!(row.get("b"), Some(&AxonValue::from("")));
}

#[test]
fn test_windows_line_endings() {
    let doc = "@schema P\r\nx:I\r\n@end\r\n@data P[1]\r\n42\r\n@end\r\n";
    let result = parse(doc).unwrap();
    assert_eq!(
        result.data_blocks[0].rows[0].get("x"),
        Some(&AxonValue::Integer(42))
    );
}

#[test]
fn test_result_serializes_to_json() {
    let result = from_slice(USERS.as_bytes()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["schemas"][0]["fields"][4]["type"], "I");
    assert_eq!(json["schemas"][0]["fields"][4]["nullable"], true);
    assert_eq!(json["data_blocks"][0]["declared_count"], 2);
    assert_eq!(json["data_blocks"][0]["rows"][1]["age"], serde_json::Value::Null);
    assert_eq!(json["data_blocks"][0]["rows"][0]["name"], "Alice");
}
