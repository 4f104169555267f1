//! Grammar for a single attribute line inside a class box.
//!
//! The accepted shape is
//!
//! ```text
//! [visibility] name[*] [: type] [= default] [{flag, flag, ...}]
//! ```
//!
//! for example `+id*: UUID {pk}`, `nickname: string?`,
//! `tags: List<Tag>[]` or `status: Status = ACTIVE {unique}`.
//!
//! Lines that look like method signatures (`area(): double`) are rejected
//! before the grammar runs. Anything that does not fit is rejected as well;
//! rejection is never an error.

use std::sync::LazyLock;

use regex::Regex;
use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, delimited, eof, opt, preceded},
    error::{ContextError, ErrMode},
    token::{one_of, take_while},
};

use classdraft_core::{Attribute, document::attribute::UNTYPED};

type Input<'a> = &'a str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// An identifier directly followed by a parenthesized list, anywhere on the line.
static METHOD_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z_][A-Za-z0-9_]*\s*\(.*\)").expect("method pattern is valid")
});

/// UML visibility marker preceding an attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// `+`
    Public,
    /// `-`
    Private,
    /// `#`
    Protected,
    /// `~`
    Package,
}

impl Visibility {
    fn from_marker(marker: char) -> Self {
        match marker {
            '+' => Self::Public,
            '-' => Self::Private,
            '#' => Self::Protected,
            '~' => Self::Package,
            _ => unreachable!("visibility parser only accepts + - # ~"),
        }
    }
}

/// An attribute line as recognized, before the visibility marker is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAttribute {
    visibility: Option<Visibility>,
    attribute: Attribute,
}

impl ParsedAttribute {
    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn into_attribute(self) -> Attribute {
        self.attribute
    }
}

/// Parse one attribute line into a document [`Attribute`].
///
/// Returns `None` for method signatures and for lines that do not fit the
/// attribute shape.
pub fn parse_attribute_line(line: &str) -> Option<Attribute> {
    parse_attribute(line).map(ParsedAttribute::into_attribute)
}

/// Parse one attribute line, keeping its visibility marker.
pub fn parse_attribute(line: &str) -> Option<ParsedAttribute> {
    let line = collapse_whitespace(line);
    if line.is_empty() || looks_like_method(&line) {
        return None;
    }

    let mut input = line.as_str();
    attribute_line(&mut input).ok()
}

/// Returns `true` if the line contains `identifier(...)`.
pub fn looks_like_method(line: &str) -> bool {
    METHOD_CALL.is_match(line.trim())
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// =============================================================================
// Grammar
// =============================================================================

/// Raw pieces of a matched line.
struct RawAttribute<'a> {
    visibility: Option<char>,
    name: &'a str,
    starred: bool,
    ty: Option<&'a str>,
    flags: Option<&'a str>,
}

fn attribute_line(input: &mut Input<'_>) -> IResult<ParsedAttribute> {
    let raw = raw_attribute.parse_next(input)?;

    let mut ty = raw.ty.map(str::trim).unwrap_or_default();
    let nullable_suffix = ty.ends_with('?');
    if nullable_suffix {
        ty = &ty[..ty.len() - 1];
    }
    let ty = collapse_whitespace(ty);
    let ty = if ty.is_empty() { UNTYPED.to_string() } else { ty };

    let flags = raw.flags.unwrap_or_default();
    let attribute = Attribute::new(raw.name, ty)
        .with_pk(raw.starred || has_flag(flags, &["pk"]))
        .with_unique(has_flag(flags, &["unique"]))
        .with_nullable(nullable_suffix || has_flag(flags, &["null", "nullable"]));

    Ok(ParsedAttribute {
        visibility: raw.visibility.map(Visibility::from_marker),
        attribute,
    })
}

fn raw_attribute<'a>(input: &mut Input<'a>) -> IResult<RawAttribute<'a>> {
    let (visibility, _, name, star) =
        (opt(one_of(['+', '-', '#', '~'])), space0, attribute_name, opt('*')).parse_next(input)?;

    let (ty, flags) = alt((
        preceded((space0, ':'), typed_tail).map(|(ty, flags)| (Some(ty), flags)),
        tail.map(|flags| (None, flags)),
    ))
    .parse_next(input)?;

    Ok(RawAttribute {
        visibility,
        name,
        starred: star.is_some(),
        ty,
        flags,
    })
}

/// Attribute name: a letter or `_`, then letters, digits, `_` or `$`.
fn attribute_name<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    )
        .take()
        .parse_next(input)
}

/// The type text after `:` together with the rest of the line.
///
/// The type normally runs up to the first `=`, `<` or `{`, optionally
/// followed by one `<...>` generic and a `[]` suffix. When the rest of the
/// line does not fit after that, a single whitespace-free run is tried
/// instead (e.g. `Map<K,List<V>>`).
fn typed_tail<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Option<&'a str>)> {
    alt((
        (bounded_type, tail),
        preceded(space0, (take_while(1.., |c: char| c != ' '), tail)),
    ))
    .parse_next(input)
}

fn bounded_type<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    (
        take_while(1.., |c: char| !matches!(c, '=' | '<' | '{')),
        opt(delimited('<', take_while(1.., |c: char| c != '>'), '>')),
        opt("[]"),
    )
        .take()
        .parse_next(input)
}

/// Optional `= default` (discarded) and `{flags}`, then end of line.
fn tail<'a>(input: &mut Input<'a>) -> IResult<Option<&'a str>> {
    (
        space0,
        opt(preceded(
            ('=', space0),
            take_while(1.., |c: char| c != '{' && c != '}'),
        )),
        space0,
        opt(delimited('{', take_while(0.., |c: char| c != '}'), '}')),
        eof,
    )
        .map(|(_, _, _, flags, _)| flags)
        .parse_next(input)
}

/// Returns `true` if any of `words` appears as a whole word in the flag list.
fn has_flag(flags: &str, words: &[&str]) -> bool {
    flags
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|flag| words.iter().any(|word| flag.eq_ignore_ascii_case(word)))
}
