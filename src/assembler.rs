// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tag assembler: consumes token-lines from the tokenizer and builds the tag tree.

use crate::error::ParseError;
use crate::keyword::CONTENT_TAG_NAME;
use crate::tag::Tag;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::value::timespan::TimeSpan;
use crate::value::{DateTime, Value};

pub(crate) struct Assembler<I> {
    tokenizer: Tokenizer<I>,
}

impl<I: Iterator<Item = String>> Assembler<I> {
    pub(crate) fn new(tokenizer: Tokenizer<I>) -> Self {
        Assembler { tokenizer }
    }

    /// Parses the whole source into the document's top-level tags (the synthetic root's
    /// children).
    pub(crate) fn parse_forest(&mut self) -> Result<Vec<Tag>, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.tokenizer.next_token_line()? {
                None => return Ok(children),
                Some((line_no, tokens)) => {
                    if matches!(tokens.first(), Some(Token::EndBlock)) {
                        return Err(ParseError::new(
                            "No opening block for close block",
                            line_no,
                            1,
                        ));
                    }
                    children.push(self.build_tag(line_no, tokens)?);
                }
            }
        }
    }

    fn build_tag(&mut self, line_no: usize, tokens: Vec<Token>) -> Result<Tag, ParseError> {
        let has_block = matches!(tokens.last(), Some(Token::StartBlock));
        let body = if has_block {
            &tokens[..tokens.len() - 1]
        } else {
            &tokens[..]
        };
        let mut tag = construct_tag_from_tokens(body, line_no)?;
        if has_block {
            for child in self.collect_children(line_no)? {
                tag.push_child(child);
            }
        }
        Ok(tag)
    }

    fn collect_children(&mut self, open_line: usize) -> Result<Vec<Tag>, ParseError> {
        let mut children = Vec::new();
        loop {
            match self.tokenizer.next_token_line()? {
                None => {
                    return Err(ParseError::new(
                        "missing closing '}' for block opened here",
                        open_line,
                        1,
                    ));
                }
                Some((line_no, tokens)) => {
                    if matches!(tokens.first(), Some(Token::EndBlock)) {
                        if tokens.len() == 1 {
                            return Ok(children);
                        }
                        return Err(ParseError::new(
                            "unexpected tokens after closing '}'",
                            line_no,
                            1,
                        ));
                    }
                    children.push(self.build_tag(line_no, tokens)?);
                }
            }
        }
    }
}

fn expect_identifier(tokens: &[Token], idx: usize, line_no: usize) -> Result<String, ParseError> {
    match tokens.get(idx) {
        Some(Token::Identifier(s)) => Ok(s.clone()),
        other => Err(ParseError::new(
            format!("expecting an identifier but got {other:?}"),
            line_no,
            idx + 1,
        )),
    }
}

/// Combines a `Date` token with the `TimeOrSpan` token immediately following it into a
/// `DateTime`, or returns `None` if the lookahead token isn't a `TimeOrSpan`. A non-zero day
/// component on the span half is a parse error (§4.3's disambiguation rule).
fn try_combine_date_time(
    tokens: &[Token],
    idx: usize,
    line_no: usize,
) -> Result<Option<(Value, usize)>, ParseError> {
    let Some(Token::Literal(Value::Date(date))) = tokens.get(idx) else {
        return Ok(None);
    };
    let Some(Token::TimeOrSpan(ts)) = tokens.get(idx + 1) else {
        return Ok(None);
    };
    if ts.days != 0 {
        return Err(ParseError::new(
            "a DateTime's time portion cannot have a day component",
            line_no,
            idx + 1,
        ));
    }
    let dt = DateTime::new(*date, ts.hours, ts.minutes, ts.seconds, ts.millis, ts.timezone.clone());
    Ok(Some((Value::DateTime(dt), idx + 2)))
}

fn read_value(tokens: &[Token], idx: usize, line_no: usize) -> Result<(Value, usize), ParseError> {
    if let Some((value, next)) = try_combine_date_time(tokens, idx, line_no)? {
        return Ok((value, next));
    }
    match tokens.get(idx) {
        Some(Token::Literal(v)) => Ok((v.clone(), idx + 1)),
        Some(Token::TimeOrSpan(ts)) => {
            if ts.timezone.is_some() {
                return Err(ParseError::new(
                    "TimeSpan cannot have a timezone",
                    line_no,
                    idx + 1,
                ));
            }
            Ok((Value::TimeSpan(TimeSpan::from_with_zone(ts)), idx + 1))
        }
        other => Err(ParseError::new(
            format!("expecting a value but got {other:?}"),
            line_no,
            idx + 1,
        )),
    }
}

/// Builds a [`Tag`] from one token-line's tokens (with any trailing `StartBlock` already
/// stripped), per §4.4's four-step construction.
fn construct_tag_from_tokens(tokens: &[Token], line_no: usize) -> Result<Tag, ParseError> {
    let mut i;
    let (namespace, name) = match tokens.first() {
        Some(Token::Identifier(first)) => {
            let first = first.clone();
            i = 1;
            if matches!(tokens.get(1), Some(Token::Colon)) {
                let second = expect_identifier(tokens, 2, line_no)?;
                i = 3;
                (first, second)
            } else {
                (String::new(), first)
            }
        }
        _ => {
            i = 0;
            (String::new(), CONTENT_TAG_NAME.to_string())
        }
    };

    let mut tag =
        Tag::with_namespace(&namespace, &name).map_err(|e| ParseError::new(e.to_string(), line_no, 1))?;

    // Value phase: consume literal/time-or-span tokens until the first Identifier.
    while i < tokens.len() {
        match tokens.get(i) {
            Some(Token::Identifier(_)) => break,
            Some(Token::Literal(_)) | Some(Token::TimeOrSpan(_)) => {
                let (value, next) = read_value(tokens, i, line_no)?;
                tag.push_value(value)
                    .map_err(|e| ParseError::new(e.to_string(), line_no, i + 1))?;
                i = next;
            }
            other => {
                return Err(ParseError::new(
                    format!("unexpected token {other:?} in value list"),
                    line_no,
                    i + 1,
                ));
            }
        }
    }

    // Attribute phase: Identifier (Colon Identifier)? Equals value, repeated.
    while i < tokens.len() {
        let attr_first = expect_identifier(tokens, i, line_no)?;
        i += 1;
        let (attr_ns, attr_name) = if matches!(tokens.get(i), Some(Token::Colon)) {
            let second = expect_identifier(tokens, i + 1, line_no)?;
            i += 2;
            (attr_first, second)
        } else {
            (String::new(), attr_first)
        };

        match tokens.get(i) {
            Some(Token::Equals) => i += 1,
            other => {
                return Err(ParseError::new(
                    format!("expecting '=' but got {other:?}"),
                    line_no,
                    i + 1,
                ));
            }
        }

        let (value, next) = read_value(tokens, i, line_no)?;
        i = next;
        tag.set_attribute(&attr_ns, &attr_name, value)
            .map_err(|e| ParseError::new(e.to_string(), line_no, i))?;
    }

    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_source::{lines_from_str, LineSource};

    fn parse(text: &str) -> Result<Vec<Tag>, ParseError> {
        let tokenizer = Tokenizer::new(LineSource::new(lines_from_str(text)));
        Assembler::new(tokenizer).parse_forest()
    }

    #[test]
    fn scenario_1_values_only() {
        let tags = parse("greeting \"hello\"").unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name(), "greeting");
        assert_eq!(tags[0].namespace(), "");
        assert_eq!(tags[0].values(), &[Value::Str("hello".to_string())]);
    }

    #[test]
    fn scenario_2_value_and_attribute() {
        let tags = parse("size 5 name=\"joe\"").unwrap();
        assert_eq!(tags[0].values(), &[Value::Int32(5)]);
        assert_eq!(
            tags[0].attribute("name"),
            Some(&Value::Str("joe".to_string()))
        );
    }

    #[test]
    fn scenario_3_nested_children() {
        let tags = parse("parent {\n    son \"John\"\n    daughter \"Mary\"\n}").unwrap();
        assert_eq!(tags.len(), 1);
        let parent = &tags[0];
        assert_eq!(parent.children().len(), 2);
        assert_eq!(parent.children()[1].name(), "daughter");
        assert_eq!(
            parent.children()[1].values(),
            &[Value::Str("Mary".to_string())]
        );
    }

    #[test]
    fn scenario_4_date_time_value() {
        let tags = parse("date 2005/12/31 12:30:00.120-JST").unwrap();
        match &tags[0].values()[0] {
            Value::DateTime(dt) => {
                assert_eq!(dt.date.year, 2005);
                assert_eq!(dt.hour, 12);
                assert_eq!(dt.minute, 30);
                assert_eq!(dt.millis, 120);
                assert_eq!(dt.timezone.as_deref(), Some("JST"));
            }
            other => panic!("expected DateTime, got {other:?}"),
        }
    }

    #[test]
    fn scenario_5_negative_time_span() {
        let tags = parse("span -00:30:00").unwrap();
        match tags[0].values()[0] {
            Value::TimeSpan(ts) => {
                assert!(ts.negative);
                assert_eq!(ts.minutes, 30);
            }
            ref other => panic!("expected TimeSpan, got {other:?}"),
        }
    }

    #[test]
    fn scenario_6_anonymous_content_tag() {
        let tags = parse("\"foo\"").unwrap();
        assert_eq!(tags[0].name(), CONTENT_TAG_NAME);
        assert_eq!(tags[0].namespace(), "");
        assert_eq!(tags[0].values(), &[Value::Str("foo".to_string())]);
    }

    #[test]
    fn scenario_7_time_span_with_timezone_is_an_error() {
        let err = parse("foo bar=5d:12:30:23.123-JST").unwrap_err();
        assert!(err.message.contains("timezone"));
    }

    #[test]
    fn namespaced_tag_and_attribute() {
        let tags = parse("ns:foo ns:attr=1").unwrap();
        assert_eq!(tags[0].namespace(), "ns");
        assert_eq!(tags[0].name(), "foo");
        assert_eq!(tags[0].attribute("attr"), Some(&Value::Int32(1)));
    }

    #[test]
    fn unmatched_close_block_is_an_error() {
        assert!(parse("}").is_err());
    }

    #[test]
    fn missing_close_block_is_an_error() {
        assert!(parse("parent {\n    child 1\n").is_err());
    }
}
