//! Command template rendering.
//!
//! Templates use a small Jinja-like syntax. Literal text is copied through,
//! `{{ expr }}` substitutes an expression and `{# ... #}` is a comment.
//! Expressions see exactly four bindings:
//!
//! - `argc`: number of positional arguments
//! - `args`: the positional arguments, indexable as `args[0]`
//! - `name`: the name of the crumb being rendered
//! - `combined`: every argument quoted and joined with single spaces
//!
//! and may be piped through filters: `quote`, `join`, `join(sep)`,
//! `length`, `upper`, `lower`, `trim`.
//!
//! ```
//! use crumbs_core::template::{render, Bindings};
//!
//! let args = vec!["a b".to_string(), "c\"d".to_string()];
//! let out = render("echo {{combined}}", &Bindings::new("demo", &args)).unwrap();
//! assert_eq!(out, r#"echo "a b" "c\"d""#);
//! ```

use crate::error::{CrumbsError, Result};

/// Values available to a single render call.
#[derive(Debug, Clone, Copy)]
pub struct Bindings<'a> {
    name: &'a str,
    args: &'a [String],
}

impl<'a> Bindings<'a> {
    pub fn new(name: &'a str, args: &'a [String]) -> Self {
        Self { name, args }
    }

    fn lookup(&self, ident: &str) -> Option<Value> {
        match ident {
            "argc" => Some(Value::Int(self.args.len() as i64)),
            "args" => Some(Value::List(self.args.to_vec())),
            "name" => Some(Value::Str(self.name.to_string())),
            "combined" => Some(Value::Str(
                self.args
                    .iter()
                    .map(|arg| quote(arg))
                    .collect::<Vec<_>>()
                    .join(" "),
            )),
            _ => None,
        }
    }
}

/// Wrap `value` in double quotes, escaping embedded double quotes.
///
/// No other shell metacharacter is touched.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Render `template` against `bindings`.
///
/// # Errors
///
/// Returns `CrumbsError::Template` on malformed syntax, unknown variables or
/// filters, and out-of-range argument references.
pub fn render(template: &str, bindings: &Bindings<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    while let Some(rel) = template[cursor..].find('{') {
        let start = cursor + rel;
        match template[start + 1..].chars().next() {
            Some('{') => {
                out.push_str(&template[cursor..start]);
                let mut parser = ExprParser::new(template, start + 2, start);
                let value = parser.expression(bindings)?;
                cursor = parser.close()?;
                out.push_str(&value.into_output());
            }
            Some('#') => {
                out.push_str(&template[cursor..start]);
                let end = template[start + 2..].find("#}").ok_or_else(|| {
                    template_error(format!("unterminated comment at offset {}", start))
                })?;
                cursor = start + 2 + end + 2;
            }
            Some('%') => {
                return Err(template_error(format!(
                    "block tags ({{% ... %}}) are not supported (offset {})",
                    start
                )));
            }
            _ => {
                out.push_str(&template[cursor..=start]);
                cursor = start + 1;
            }
        }
    }

    out.push_str(&template[cursor..]);
    Ok(out)
}

fn template_error(message: impl Into<String>) -> CrumbsError {
    CrumbsError::Template(message.into())
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::List(_) => "list",
        }
    }

    fn into_output(self) -> String {
        match self {
            Value::Str(s) => s,
            Value::Int(n) => n.to_string(),
            Value::List(items) => items.join(" "),
        }
    }
}

/// Parses and evaluates one `{{ ... }}` expression in place.
struct ExprParser<'t> {
    src: &'t str,
    pos: usize,
    open: usize,
}

impl<'t> ExprParser<'t> {
    fn new(src: &'t str, pos: usize, open: usize) -> Self {
        Self { src, pos, open }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn unterminated(&self) -> CrumbsError {
        template_error(format!(
            "unterminated expression starting at offset {}",
            self.open
        ))
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_ws();
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(template_error(format!(
                "expected '{}' but found '{}' at offset {}",
                expected,
                c,
                self.pos - c.len_utf8()
            ))),
            None => Err(self.unterminated()),
        }
    }

    /// Consume the closing `}}` and return the offset just past it.
    fn close(&mut self) -> Result<usize> {
        self.skip_ws();
        if self.src[self.pos..].starts_with("}}") {
            return Ok(self.pos + 2);
        }
        match self.peek() {
            None => Err(self.unterminated()),
            Some(c) => Err(template_error(format!(
                "unexpected '{}' at offset {}",
                c, self.pos
            ))),
        }
    }

    fn expression(&mut self, bindings: &Bindings<'_>) -> Result<Value> {
        let mut value = self.primary(bindings)?;
        loop {
            self.skip_ws();
            if self.peek() != Some('|') {
                return Ok(value);
            }
            self.bump();
            value = self.filter(value)?;
        }
    }

    fn primary(&mut self, bindings: &Bindings<'_>) -> Result<Value> {
        self.skip_ws();
        let value = match self.peek() {
            None => return Err(self.unterminated()),
            Some('}') => {
                return Err(template_error(format!(
                    "empty expression at offset {}",
                    self.open
                )))
            }
            Some(c) if c == '"' || c == '\'' => Value::Str(self.string_literal()?),
            Some(c) if c.is_ascii_digit() || c == '-' => Value::Int(self.integer()?),
            Some(c) if c.is_alphabetic() || c == '_' => {
                let ident = self.ident();
                bindings
                    .lookup(&ident)
                    .ok_or_else(|| template_error(format!("'{}' is undefined", ident)))?
            }
            Some(c) => {
                return Err(template_error(format!(
                    "unexpected '{}' at offset {}",
                    c, self.pos
                )))
            }
        };

        self.skip_ws();
        if self.peek() == Some('[') {
            self.bump();
            self.skip_ws();
            let index = self.integer()?;
            self.expect(']')?;
            return index_into(value, index);
        }
        Ok(value)
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn integer(&mut self) -> Result<i64> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        let text = &self.src[start..self.pos];
        text.parse::<i64>().map_err(|_| {
            template_error(format!("expected an integer at offset {}", start))
        })
    }

    fn string_literal(&mut self) -> Result<String> {
        let start = self.pos;
        let delimiter = self.bump().ok_or_else(|| self.unterminated())?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(template_error(format!(
                        "unterminated string literal at offset {}",
                        start
                    )))
                }
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c) => out.push(c),
                    None => {
                        return Err(template_error(format!(
                            "unterminated string literal at offset {}",
                            start
                        )))
                    }
                },
                Some(c) if c == delimiter => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }

    fn filter_args(&mut self) -> Result<Vec<Value>> {
        let mut args = Vec::new();
        self.skip_ws();
        if self.peek() != Some('(') {
            return Ok(args);
        }
        self.bump();
        self.skip_ws();
        if self.peek() == Some(')') {
            self.bump();
            return Ok(args);
        }
        loop {
            self.skip_ws();
            let arg = match self.peek() {
                Some(c) if c == '"' || c == '\'' => Value::Str(self.string_literal()?),
                Some(c) if c.is_ascii_digit() || c == '-' => Value::Int(self.integer()?),
                Some(_) => {
                    return Err(template_error(format!(
                        "filter arguments must be literals (offset {})",
                        self.pos
                    )))
                }
                None => return Err(self.unterminated()),
            };
            args.push(arg);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(')') => return Ok(args),
                Some(c) => {
                    return Err(template_error(format!(
                        "unexpected '{}' in filter arguments at offset {}",
                        c,
                        self.pos - c.len_utf8()
                    )))
                }
                None => return Err(self.unterminated()),
            }
        }
    }

    fn filter(&mut self, value: Value) -> Result<Value> {
        self.skip_ws();
        let name = self.ident();
        if name.is_empty() {
            return Err(template_error(format!(
                "expected a filter name at offset {}",
                self.pos
            )));
        }
        let args = self.filter_args()?;
        apply_filter(&name, value, &args)
    }
}

fn index_into(value: Value, index: i64) -> Result<Value> {
    let items = match value {
        Value::List(items) => items,
        other => {
            return Err(template_error(format!(
                "cannot index into a {}",
                other.kind()
            )))
        }
    };
    let len = items.len();
    usize::try_from(index)
        .ok()
        .and_then(|i| items.into_iter().nth(i))
        .map(Value::Str)
        .ok_or_else(|| {
            template_error(format!(
                "argument index {} is out of range ({} argument{} given)",
                index,
                len,
                if len == 1 { "" } else { "s" }
            ))
        })
}

fn apply_filter(name: &str, value: Value, args: &[Value]) -> Result<Value> {
    let arity = |max: usize| -> Result<()> {
        if args.len() > max {
            return Err(template_error(format!(
                "filter '{}' takes at most {} argument{}",
                name,
                max,
                if max == 1 { "" } else { "s" }
            )));
        }
        Ok(())
    };

    match name {
        "quote" => {
            arity(0)?;
            Ok(match value {
                Value::List(items) => Value::List(items.iter().map(|s| quote(s)).collect()),
                other => Value::Str(quote(&other.into_output())),
            })
        }
        "join" => {
            arity(1)?;
            let separator = match args.first() {
                None => String::new(),
                Some(Value::Str(s)) => s.clone(),
                Some(other) => {
                    return Err(template_error(format!(
                        "join separator must be a string, got {}",
                        other.kind()
                    )))
                }
            };
            match value {
                Value::List(items) => Ok(Value::Str(items.join(&separator))),
                other => Err(template_error(format!(
                    "join expects a list, got {}",
                    other.kind()
                ))),
            }
        }
        "length" => {
            arity(0)?;
            match value {
                Value::List(items) => Ok(Value::Int(items.len() as i64)),
                Value::Str(s) => Ok(Value::Int(s.chars().count() as i64)),
                other => Err(template_error(format!(
                    "length expects a string or list, got {}",
                    other.kind()
                ))),
            }
        }
        "upper" | "lower" | "trim" => {
            arity(0)?;
            let s = match value {
                Value::Str(s) => s,
                other => {
                    return Err(template_error(format!(
                        "{} expects a string, got {}",
                        name,
                        other.kind()
                    )))
                }
            };
            Ok(Value::Str(match name {
                "upper" => s.to_uppercase(),
                "lower" => s.to_lowercase(),
                _ => s.trim().to_string(),
            }))
        }
        _ => Err(template_error(format!("unknown filter '{}'", name))),
    }
}
