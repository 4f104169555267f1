//! Canonicalization of raw multiplicity tokens.
//!
//! | raw | canonical |
//! |-----|-----------|
//! | `*`, `n`, `N` | `N` |
//! | `1` | `1` |
//! | `0..1` | `0..1` |
//! | `1..*`, `1..n` | `1..N` |
//! | `*..3` | `N..3` |
//!
//! Whitespace inside the token is ignored. Anything else is not a
//! cardinality and is dropped.

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, eof, separated_pair, terminated},
    error::{ContextError, ErrMode},
    token::one_of,
};

use classdraft_core::Cardinality;

type Input<'a> = &'a str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Canonicalize a raw cardinality token.
///
/// Returns `None` for absent, empty or unrecognized tokens.
pub fn normalize_cardinality(raw: Option<&str>) -> Option<Cardinality> {
    let token: String = raw?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if token.is_empty() {
        return None;
    }

    let mut input = token.as_str();
    terminated(cardinality, eof).parse_next(&mut input).ok()
}

fn cardinality(input: &mut Input<'_>) -> IResult<Cardinality> {
    alt((
        separated_pair(digit1, "..", digit1).map(|(lo, hi)| Cardinality::range(lo, hi)),
        separated_pair(digit1, "..", many).map(|(lo, _)| Cardinality::range(lo, Cardinality::MANY)),
        separated_pair(many, "..", digit1).map(|(_, hi)| Cardinality::range(Cardinality::MANY, hi)),
        digit1.map(Cardinality::new),
        many.map(|_| Cardinality::many()),
    ))
    .parse_next(input)
}

fn many(input: &mut Input<'_>) -> IResult<char> {
    one_of(['*', 'n']).parse_next(input)
}
