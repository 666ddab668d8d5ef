// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the concrete scenarios and boundary behaviors of the SDL grammar.

use sdl::{parse_document_str, Value};

#[test]
fn greeting_with_string_value() {
    let tags = parse_document_str("greeting \"hello\"").unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].namespace(), "");
    assert_eq!(tags[0].name(), "greeting");
    assert_eq!(tags[0].values(), &[Value::Str("hello".to_string())]);
}

#[test]
fn size_with_value_and_attribute() {
    let tags = parse_document_str("size 5 name=\"joe\"").unwrap();
    assert_eq!(tags[0].values(), &[Value::Int32(5)]);
    assert_eq!(tags[0].attribute("name"), Some(&Value::Str("joe".to_string())));
}

#[test]
fn nested_parent_with_two_children() {
    let tags = parse_document_str(
        "parent {\n    son \"John\"\n    daughter \"Mary\"\n}",
    )
    .unwrap();
    let parent = &tags[0];
    assert_eq!(parent.children().len(), 2);
    assert_eq!(parent.children()[1].name(), "daughter");
    assert_eq!(
        parent.children()[1].values(),
        &[Value::Str("Mary".to_string())]
    );
}

#[test]
fn date_time_value_with_zone() {
    let tags = parse_document_str("date 2005/12/31 12:30:00.120-JST").unwrap();
    match &tags[0].values()[0] {
        Value::DateTime(dt) => {
            assert_eq!(dt.date.year, 2005);
            assert_eq!(dt.date.month, 12);
            assert_eq!(dt.date.day, 31);
            assert_eq!(dt.hour, 12);
            assert_eq!(dt.minute, 30);
            assert_eq!(dt.millis, 120);
            assert_eq!(dt.timezone.as_deref(), Some("JST"));
        }
        other => panic!("expected DateTime, got {other:?}"),
    }
}

#[test]
fn negative_time_span_round_trips_through_serialization() {
    let tags = parse_document_str("span -00:30:00").unwrap();
    assert_eq!(tags[0].serialize(0), "span -00:30:00");
}

#[test]
fn anonymous_content_tag_has_no_name_prefix() {
    let tags = parse_document_str("\"foo\"").unwrap();
    assert_eq!(tags[0].name(), "content");
    assert_eq!(tags[0].namespace(), "");
    assert_eq!(tags[0].serialize(0), "\"foo\"");
}

#[test]
fn time_span_with_timezone_as_attribute_is_a_parse_error() {
    let err = parse_document_str("foo bar=5d:12:30:23.123-JST").unwrap_err();
    assert!(err.message.to_lowercase().contains("timezone"));
}

#[test]
fn multiline_double_quoted_string_drops_continuation_whitespace() {
    let tags = parse_document_str("s \"line one\\\n    line two\"").unwrap();
    assert_eq!(tags[0].values(), &[Value::Str("line oneline two".to_string())]);
}

#[test]
fn back_quoted_string_preserves_raw_newlines() {
    let tags = parse_document_str("s `line one\nline two`").unwrap();
    assert_eq!(
        tags[0].values(),
        &[Value::Str("line one\nline two".to_string())]
    );
}

#[test]
fn binary_literal_decodes_to_expected_bytes() {
    let tags = parse_document_str("b [aGk=]").unwrap();
    assert_eq!(tags[0].values(), &[Value::Binary(vec![0x68, 0x69])]);
}

#[test]
fn single_digit_date_components() {
    let tags = parse_document_str("d 1/2/3").unwrap();
    match &tags[0].values()[0] {
        Value::Date(d) => {
            assert_eq!(d.year, 1);
            assert_eq!(d.month, 2);
            assert_eq!(d.day, 3);
        }
        other => panic!("expected Date, got {other:?}"),
    }
}

#[test]
fn leading_dot_number_literals() {
    let tags = parse_document_str("n -.5").unwrap();
    assert_eq!(tags[0].values(), &[Value::Float64(-0.5)]);

    let tags = parse_document_str("n -.5BD").unwrap();
    match &tags[0].values()[0] {
        Value::Decimal(d) => assert_eq!(d.to_string(), "-0.5"),
        other => panic!("expected Decimal, got {other:?}"),
    }
}

#[test]
fn character_escapes() {
    let tags = parse_document_str("c '\\n' '\\t' '\\\\' '\\''").unwrap();
    assert_eq!(
        tags[0].values(),
        &[
            Value::Char('\n'),
            Value::Char('\t'),
            Value::Char('\\'),
            Value::Char('\''),
        ]
    );
}

#[test]
fn namespaced_tag_and_attribute() {
    let tags = parse_document_str("ns:widget ns:color=\"red\"").unwrap();
    assert_eq!(tags[0].namespace(), "ns");
    assert_eq!(tags[0].name(), "widget");
    assert_eq!(
        tags[0].attribute_namespaced("ns", "color"),
        Some(&Value::Str("red".to_string()))
    );
}

#[test]
fn line_comments_are_ignored() {
    let tags = parse_document_str("foo 1 # trailing comment\nbar 2 // also a comment\nbaz 3 -- dash comment").unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[2].values(), &[Value::Int32(3)]);
}

#[test]
fn block_comment_can_span_lines() {
    let tags = parse_document_str("foo /* spans\nmultiple\nlines */ 1").unwrap();
    assert_eq!(tags[0].values(), &[Value::Int32(1)]);
}

#[test]
fn missing_closing_brace_is_a_parse_error() {
    let err = parse_document_str("parent {\n    child 1\n").unwrap_err();
    assert!(err.message.contains('}'));
}

#[test]
fn stray_closing_brace_is_a_parse_error() {
    assert!(parse_document_str("}").is_err());
}
