// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Per-line tokenizer: a dispatch table on the current character, with stateful handling of
//! multi-line continuations for strings, back-quoted strings, binary literals, and block
//! comments.

use crate::error::ParseError;
use crate::line_source::LineSource;
use crate::token::Token;
use crate::value::binary::scan_binary;
use crate::value::char::scan_char;
use crate::value::date::scan_date;
use crate::value::string::{count_trailing_backslashes, scan_back_quoted, scan_double_quoted};
use crate::value::timespan::scan_time_or_span;
use crate::value::number::scan_number;
use crate::value::Value;
use crate::keyword::{KW_FALSE, KW_NULL, KW_OFF, KW_ON, KW_TRUE};

pub(crate) struct Tokenizer<I> {
    source: LineSource<I>,
}

impl<I: Iterator<Item = String>> Tokenizer<I> {
    pub(crate) fn new(source: LineSource<I>) -> Self {
        Tokenizer { source }
    }

    /// Returns the next non-empty token-line along with the 1-based line number it started on,
    /// or `None` at end of source. Blank/comment-only lines are skipped by tail recursion.
    pub(crate) fn next_token_line(&mut self) -> Result<Option<(usize, Vec<Token>)>, ParseError> {
        loop {
            let Some((line_no, text)) = self.source.next_cooked() else {
                return Ok(None);
            };
            let tokens = self.scan_line(line_no, text)?;
            if !tokens.is_empty() {
                return Ok(Some((line_no, tokens)));
            }
        }
    }

    fn scan_line(&mut self, start_line: usize, text: String) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut line_no = start_line;
        let mut chars: Vec<char> = text.chars().collect();
        let mut i = 0usize;

        loop {
            while i < chars.len() && (chars[i] == ' ' || chars[i] == '\t') {
                i += 1;
            }
            if i >= chars.len() {
                break;
            }

            let c = chars[i];
            let col = i + 1;

            match c {
                '#' => break,
                '-' if chars.get(i + 1) == Some(&'-') => break,
                '/' if chars.get(i + 1) == Some(&'/') => break,
                '/' if chars.get(i + 1) == Some(&'*') => {
                    let (new_line_no, new_chars, new_i) =
                        self.skip_block_comment(line_no, &chars, i + 2)?;
                    line_no = new_line_no;
                    chars = new_chars;
                    i = new_i;
                }
                '\\' if Self::is_trailing_backslash(&chars, i) => match self.source.next_cooked() {
                    Some((n, t)) => {
                        line_no = n;
                        chars = t.chars().collect();
                        i = 0;
                    }
                    None => {
                        return Err(ParseError::new(
                            "unexpected end of input after line continuation",
                            line_no,
                            col,
                        ));
                    }
                },
                '{' => {
                    tokens.push(Token::StartBlock);
                    i += 1;
                }
                '}' => {
                    tokens.push(Token::EndBlock);
                    i += 1;
                }
                '=' => {
                    tokens.push(Token::Equals);
                    i += 1;
                }
                ':' => {
                    tokens.push(Token::Colon);
                    i += 1;
                }
                '"' => {
                    let (value, new_line_no, new_chars, new_i) =
                        self.scan_double_quoted(line_no, chars, i)?;
                    tokens.push(Token::Literal(value));
                    line_no = new_line_no;
                    chars = new_chars;
                    i = new_i;
                }
                '`' => {
                    let (value, new_line_no, new_chars, new_i) =
                        self.scan_back_quoted(line_no, chars, i)?;
                    tokens.push(Token::Literal(value));
                    line_no = new_line_no;
                    chars = new_chars;
                    i = new_i;
                }
                '\'' => {
                    let (value, new_i) = Self::scan_char_literal(&chars, i, line_no)?;
                    tokens.push(Token::Literal(value));
                    i = new_i;
                }
                '[' => {
                    let (value, new_line_no, new_chars, new_i) =
                        self.scan_binary_literal(line_no, chars, i)?;
                    tokens.push(Token::Literal(value));
                    line_no = new_line_no;
                    chars = new_chars;
                    i = new_i;
                }
                c if c.is_ascii_digit() || c == '-' || c == '.' => {
                    let (token, new_i) = Self::scan_number_date_span(&chars, i, line_no)?;
                    tokens.push(token);
                    i = new_i;
                }
                c if c == '_' || c.is_alphabetic() => {
                    let (word, new_i) = Self::scan_word(&chars, i);
                    i = new_i;
                    tokens.push(Self::classify_word(word));
                }
                other => {
                    return Err(ParseError::new(
                        format!("unexpected character '{other}'"),
                        line_no,
                        col,
                    ));
                }
            }
        }

        Ok(tokens)
    }

    fn is_trailing_backslash(chars: &[char], i: usize) -> bool {
        chars[i] == '\\' && chars[i + 1..].iter().all(|c| c.is_whitespace())
    }

    fn scan_word(chars: &[char], start: usize) -> (String, usize) {
        let mut i = start;
        while i < chars.len() {
            let c = chars[i];
            if c == '_' || c == '-' || c == '.' || c.is_alphanumeric() {
                i += 1;
            } else {
                break;
            }
        }
        (chars[start..i].iter().collect(), i)
    }

    fn classify_word(word: String) -> Token {
        match word.as_str() {
            KW_NULL => Token::Literal(Value::Null),
            KW_TRUE | KW_ON => Token::Literal(Value::Bool(true)),
            KW_FALSE | KW_OFF => Token::Literal(Value::Bool(false)),
            _ => Token::Identifier(word),
        }
    }

    fn scan_number_date_span(
        chars: &[char],
        start: usize,
        line_no: usize,
    ) -> Result<(Token, usize), ParseError> {
        let mut i = start;
        while i < chars.len() {
            let c = chars[i];
            let accept = c.is_ascii_digit()
                || c.is_ascii_alphabetic()
                || c == '.'
                || c == '-'
                || c == '+'
                || c == ':'
                || (c == '/' && chars.get(i + 1) != Some(&'*'));
            if !accept {
                break;
            }
            i += 1;
        }
        let text: String = chars[start..i].iter().collect();
        let col = start + 1;
        let token = if text.contains('/') {
            let date = scan_date(&text).map_err(|e| e.into_parse_error(line_no, col))?;
            Token::Literal(Value::Date(date))
        } else if text.contains(':') {
            let ts = scan_time_or_span(&text).map_err(|e| e.into_parse_error(line_no, col))?;
            Token::TimeOrSpan(ts)
        } else {
            let value = scan_number(&text).map_err(|e| e.into_parse_error(line_no, col))?;
            Token::Literal(value)
        };
        Ok((token, i))
    }

    fn scan_char_literal(
        chars: &[char],
        start: usize,
        line_no: usize,
    ) -> Result<(Value, usize), ParseError> {
        let fail = || ParseError::new("unterminated character literal", line_no, start + 1);
        let mut i = start + 1;
        if i >= chars.len() {
            return Err(fail());
        }
        let first = chars[i];
        i += 1;
        if first == '\\' {
            if i >= chars.len() {
                return Err(fail());
            }
            i += 1;
        }
        if i >= chars.len() || chars[i] != '\'' {
            return Err(fail());
        }
        let text: String = chars[start..=i].iter().collect();
        let value = scan_char(&text).map_err(|e| e.into_parse_error(line_no, start + 1))?;
        Ok((value, i + 1))
    }

    fn scan_double_quoted(
        &mut self,
        mut line_no: usize,
        first_line: Vec<char>,
        start: usize,
    ) -> Result<(Value, usize, Vec<char>, usize), ParseError> {
        let mut buf = String::new();
        buf.push('"');
        let mut cur_chars = first_line;
        let mut i = start + 1;
        loop {
            if i >= cur_chars.len() {
                match self.source.next_raw() {
                    Some((n, text)) => {
                        buf.push('\n');
                        line_no = n;
                        cur_chars = text.chars().collect();
                        i = 0;
                        continue;
                    }
                    None => {
                        return Err(ParseError::new("unterminated string literal", line_no, i + 1));
                    }
                }
            }
            let c = cur_chars[i];
            if c == '"' {
                let escaped = count_trailing_backslashes(&buf) % 2 == 1;
                buf.push(c);
                i += 1;
                if !escaped {
                    let value = scan_double_quoted(&buf).map_err(|e| e.into_parse_error(line_no, i))?;
                    return Ok((value, line_no, cur_chars, i));
                }
            } else {
                buf.push(c);
                i += 1;
            }
        }
    }

    fn scan_back_quoted(
        &mut self,
        mut line_no: usize,
        first_line: Vec<char>,
        start: usize,
    ) -> Result<(Value, usize, Vec<char>, usize), ParseError> {
        let mut buf = String::new();
        buf.push('`');
        let mut cur_chars = first_line;
        let mut i = start + 1;
        loop {
            if i >= cur_chars.len() {
                match self.source.next_raw() {
                    Some((n, text)) => {
                        buf.push('\n');
                        line_no = n;
                        cur_chars = text.chars().collect();
                        i = 0;
                        continue;
                    }
                    None => {
                        return Err(ParseError::new(
                            "unterminated raw string literal",
                            line_no,
                            i + 1,
                        ));
                    }
                }
            }
            let c = cur_chars[i];
            buf.push(c);
            i += 1;
            if c == '`' {
                let value = scan_back_quoted(&buf).map_err(|e| e.into_parse_error(line_no, i))?;
                return Ok((value, line_no, cur_chars, i));
            }
        }
    }

    fn scan_binary_literal(
        &mut self,
        mut line_no: usize,
        first_line: Vec<char>,
        start: usize,
    ) -> Result<(Value, usize, Vec<char>, usize), ParseError> {
        let mut buf = String::new();
        buf.push('[');
        let mut cur_chars = first_line;
        let mut i = start + 1;
        loop {
            if i >= cur_chars.len() {
                match self.source.next_raw() {
                    Some((n, text)) => {
                        buf.push('\n');
                        line_no = n;
                        cur_chars = text.chars().collect();
                        i = 0;
                        continue;
                    }
                    None => {
                        return Err(ParseError::new("unterminated binary literal", line_no, i + 1));
                    }
                }
            }
            let c = cur_chars[i];
            buf.push(c);
            i += 1;
            if c == ']' {
                let value = scan_binary(&buf).map_err(|e| e.into_parse_error(line_no, i))?;
                return Ok((value, line_no, cur_chars, i));
            }
        }
    }

    fn skip_block_comment(
        &mut self,
        mut line_no: usize,
        first_line: &[char],
        start: usize,
    ) -> Result<(usize, Vec<char>, usize), ParseError> {
        let mut cur_chars = first_line.to_vec();
        let mut i = start;
        loop {
            if i + 1 < cur_chars.len() && cur_chars[i] == '*' && cur_chars[i + 1] == '/' {
                return Ok((line_no, cur_chars, i + 2));
            }
            if i >= cur_chars.len() {
                match self.source.next_raw() {
                    Some((n, text)) => {
                        line_no = n;
                        cur_chars = text.chars().collect();
                        i = 0;
                        continue;
                    }
                    None => {
                        return Err(ParseError::new("unterminated block comment", line_no, i + 1));
                    }
                }
            }
            i += 1;
        }
    }
}
