//! SQL identifier quoting.
//!
//! This module provides [`Ident`], a dotted SQL name (`schema.table.column`)
//! split into parts, and [`Quoter`], which renders it for a [`Dialect`].
//!
//! - Every part except `*` is wrapped in the dialect's quote character
//! - An embedded quote character is escaped by doubling it
//! - `*` passes through unquoted (select-all)
//!
//! Quoting is escaping, not injection filtering: identifiers are expected to
//! be static names chosen by the program, never raw user input.
//!
//! # Example
//! ```
//! use sqlrpn::{Dialect, QuoteStyle, Quoter};
//!
//! let q = Quoter::new(Dialect::Sqlite, QuoteStyle::Always);
//! assert_eq!(q.quote("main.users"), r#""main"."users""#);
//! assert_eq!(q.quote("u.*"), r#""u".*"#);
//! ```

use crate::error::{SqlError, SqlResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL dialect, which decides the identifier quote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dialect {
    /// SQLite / ANSI: `"name"`
    #[default]
    #[serde(rename = "sqlite")]
    Sqlite,
    /// MySQL / MariaDB: `` `name` ``
    #[serde(rename = "mysql")]
    MySql,
}

impl Dialect {
    /// The character used to open and close a quoted identifier.
    pub fn quote_char(self) -> char {
        match self {
            Dialect::Sqlite => '"',
            Dialect::MySql => '`',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::MySql => "mysql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        match s {
            "sqlite" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::MySql),
            other => Err(SqlError::config(format!("unsupported dialect: {other}"))),
        }
    }
}

/// When identifier parts get quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// Quote every part except `*`.
    #[default]
    Always,
    /// Leave parts matching `[A-Za-z_][A-Za-z0-9_$]*` bare, quote the rest.
    Minimal,
}

impl FromStr for QuoteStyle {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        match s {
            "always" => Ok(QuoteStyle::Always),
            "minimal" => Ok(QuoteStyle::Minimal),
            other => Err(SqlError::config(format!("unsupported quote style: {other}"))),
        }
    }
}

/// A part of a dotted SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// `*`, never quoted.
    Star,
    /// A name segment, stored unescaped.
    Name(String),
}

/// A SQL identifier (column, table, or schema name), split on `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Split a dotted name into parts.
    ///
    /// No validation happens here: `a..b` yields an empty middle part, which
    /// renders as an empty quoted identifier.
    pub fn split(name: &str) -> Self {
        let parts = name
            .split('.')
            .map(|segment| {
                if segment == "*" {
                    IdentPart::Star
                } else {
                    IdentPart::Name(segment.to_string())
                }
            })
            .collect();
        Self { parts }
    }

    /// Render the identifier with the given quoter.
    pub fn to_sql(&self, quoter: Quoter) -> String {
        let mut cap = self.parts.len().saturating_sub(1); // dots
        for part in &self.parts {
            match part {
                IdentPart::Star => cap += 1,
                IdentPart::Name(s) => cap += s.len() + 2, // surrounding quotes (escapes may add more)
            }
        }
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out, quoter);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String, quoter: Quoter) {
        let q = quoter.dialect.quote_char();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Star => out.push('*'),
                IdentPart::Name(s) if quoter.style == QuoteStyle::Minimal && is_bare(s) => {
                    out.push_str(s);
                }
                IdentPart::Name(s) => {
                    out.push(q);
                    for ch in s.chars() {
                        if ch == q {
                            out.push(q);
                            out.push(q);
                        } else {
                            out.push(ch);
                        }
                    }
                    out.push(q);
                }
            }
        }
    }
}

/// Whether a segment can be emitted without quotes: `[A-Za-z_][A-Za-z0-9_$]*`.
fn is_bare(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

/// Identifier renderer for one dialect and quote style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quoter {
    pub dialect: Dialect,
    pub style: QuoteStyle,
}

impl Quoter {
    pub fn new(dialect: Dialect, style: QuoteStyle) -> Self {
        Self { dialect, style }
    }

    /// Quote a dotted name: `a.b` → `"a"."b"`, `t.*` → `"t".*`.
    pub fn quote(&self, name: &str) -> String {
        Ident::split(name).to_sql(*self)
    }

    /// Quote each name and join them with `sep`.
    pub(crate) fn quote_list<S: AsRef<str>>(&self, names: &[S], sep: &str) -> String {
        let mut out = String::new();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            Ident::split(name.as_ref()).write_sql(&mut out, *self);
        }
        out
    }
}

/// Quote `name` with the default dialect (SQLite, always quoted).
pub fn quote(name: &str) -> String {
    Quoter::default().quote(name)
}
