//! Entity recognition from a single block of text.
//!
//! A block describing a class looks like
//!
//! ```text
//! <<interface>>        optional stereotype line, `<<...>>` or `«...»`
//! Shape                class name
//! -----                layout noise, dropped
//! Attributes           section header, dropped
//! | name: string |     attribute lines
//! ```
//!
//! Separators and section headers are only recognized below the name line,
//! so a class may itself be called `Properties`. A block whose name line is
//! not a plausible class name is dropped whole.
//! [`EntityParser`] accumulates entities over the blocks of one text and
//! folds repeated class names into a single entity.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use winnow::{
    Parser as _,
    combinator::{alt, delimited, eof, terminated},
    error::{ContextError, ErrMode},
    token::take_while,
};

use classdraft_core::Entity;

use crate::attribute::{collapse_whitespace, parse_attribute_line};

type Input<'a> = &'a str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Longest accepted class name, after whitespace collapsing.
pub const MAX_NAME_LEN: usize = 80;

/// Words that open an attribute compartment header, in English and Spanish.
const SECTION_HEADERS: [&str; 4] = ["attributes", "properties", "atributos", "propiedades"];

/// Letter or underscore, then word characters and spaces.
static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_ ]*$").expect("class name pattern is valid")
});

/// Horizontal rules drawn between compartments.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{2,}|={2,}|_+)$").expect("separator pattern is valid"));

/// Box borders picked up as vertical bars.
static BOX_BORDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[│┃|]+").expect("box border pattern is valid"));

/// Parse one block into an [`Entity`].
///
/// Returns `None` when the block has no usable class name line.
pub fn parse_block(block: &str) -> Option<Entity> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let first = lines.first()?;

    let stereotype = parse_stereotype(first);
    let name_idx = usize::from(stereotype.is_some());
    let Some(name_line) = lines.get(name_idx) else {
        trace!(block; "Block has a stereotype but no class name");
        return None;
    };

    let name = collapse_whitespace(name_line);
    if name.len() > MAX_NAME_LEN || !CLASS_NAME.is_match(&name) {
        trace!(name; "Rejecting block with malformed class name");
        return None;
    }

    let mut heading = Vec::with_capacity(name_idx + 2);
    heading.extend(stereotype.as_deref());
    heading.extend(&lines[..=name_idx]);
    let heading = heading.join(" ");

    let mut entity = Entity::new(name)
        .with_interface(has_word(&heading, "interface"))
        .with_abstract(has_word(&heading, "abstract"))
        .with_stereotype(stereotype);

    for line in &lines[name_idx + 1..] {
        // Borders go first so that a boxed header still reads as a header
        let line = BOX_BORDER.replace_all(line, " ");
        let line = line.trim();
        if line.is_empty() || is_layout_noise(line) {
            continue;
        }
        match parse_attribute_line(line) {
            Some(attr) => {
                let name = attr.name().to_string();
                if !entity.add_attr(attr) {
                    trace!(entity = entity.name(), attr = name; "Dropping repeated attribute");
                }
            }
            None => trace!(line; "Skipping non-attribute line"),
        }
    }

    Some(entity)
}

/// Collects entities over the blocks of one text.
///
/// A block naming an already seen class (ignoring case) is folded into the
/// earlier entity: missing stereotype and flags are filled in and new
/// attributes appended, while attributes already present are kept.
#[derive(Debug, Default)]
pub struct EntityParser {
    entities: Vec<Entity>,
}

impl EntityParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `block` and record the entity it describes, if any.
    ///
    /// Returns `true` if the block described an entity.
    pub fn push_block(&mut self, block: &str) -> bool {
        let Some(entity) = parse_block(block) else {
            return false;
        };

        match self.entities.iter_mut().find(|e| e.has_name(entity.name())) {
            Some(existing) => {
                let added = existing.absorb(entity);
                trace!(entity = existing.name(), added; "Folded repeated class block");
            }
            None => self.entities.push(entity),
        }
        true
    }

    /// Entities seen so far, in order of first appearance.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn finish(self) -> Vec<Entity> {
        self.entities
    }
}

/// Compartment separators and section headers carry no data.
fn is_layout_noise(line: &str) -> bool {
    SEPARATOR.is_match(line) || is_section_header(line)
}

fn is_section_header(line: &str) -> bool {
    let word_end = line
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    let word = &line[..word_end];
    SECTION_HEADERS
        .iter()
        .any(|header| word.eq_ignore_ascii_case(header))
}

/// Returns `true` if `word` occurs in `text` as a whole word, ignoring case.
fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|token| token.eq_ignore_ascii_case(word))
}

/// The stereotype text of a `<<...>>` or `«...»` line.
fn parse_stereotype(line: &str) -> Option<String> {
    let mut input = line.trim();
    let text = terminated(stereotype, eof).parse_next(&mut input).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn stereotype<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    alt((
        delimited("<<", take_while(1.., |c: char| c != '>'), ">>"),
        delimited('«', take_while(1.., |c: char| c != '»'), '»'),
    ))
    .parse_next(input)
}
