//! Typed relations between entities.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// The kind of edge a [`Relation`] models.
///
/// The names match the stored document format (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Plain line: `A -- B`
    Association,
    /// Hollow diamond: `A o-- B`
    Aggregation,
    /// Filled diamond: `A *-- B`
    Composition,
    /// Inheritance: `A --|> B`
    Generalization,
    /// Interface implementation: `A ..|> B`
    Realization,
    /// Dashed usage arrow: `A ..> B`
    Dependency,
}

impl RelationKind {
    /// All kinds, in the order the relation grammars are evaluated.
    pub const ALL: [RelationKind; 6] = [
        Self::Generalization,
        Self::Realization,
        Self::Aggregation,
        Self::Composition,
        Self::Dependency,
        Self::Association,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Association => "association",
            Self::Aggregation => "aggregation",
            Self::Composition => "composition",
            Self::Generalization => "generalization",
            Self::Realization => "realization",
            Self::Dependency => "dependency",
        }
    }
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "association" => Ok(Self::Association),
            "aggregation" => Ok(Self::Aggregation),
            "composition" => Ok(Self::Composition),
            "generalization" => Ok(Self::Generalization),
            "realization" => Ok(Self::Realization),
            "dependency" => Ok(Self::Dependency),
            _ => Err("Unsupported relation kind"),
        }
    }
}

/// A multiplicity marker on a relation endpoint.
///
/// Canonical values are `N` (many), a digit string such as `1`, or a range
/// such as `0..1`, `1..N` or `N..3`. Canonicalization of raw recognized
/// tokens happens in the parser; this type only carries the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cardinality(String);

impl Cardinality {
    /// The canonical spelling of "many".
    pub const MANY: &'static str = "N";

    /// Wraps an already canonical cardinality string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The `N` (many) cardinality.
    pub fn many() -> Self {
        Self(Self::MANY.to_string())
    }

    /// Builds the range `lower..upper`.
    pub fn range(lower: &str, upper: &str) -> Self {
        Self(format!("{lower}..{upper}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the bare `N` cardinality.
    pub fn is_many(&self) -> bool {
        self.0 == Self::MANY
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed edge between two entities.
///
/// `from` and `to` name entities of the owning document. `via`, when set,
/// names an association-class entity standing between the two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    from: String,

    to: String,

    kind: RelationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    from_card: Option<Cardinality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    to_card: Option<Cardinality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    via: Option<String>,
}

impl Relation {
    /// Creates a relation without cardinalities or association class.
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            from_card: None,
            to_card: None,
            via: None,
        }
    }

    pub fn with_from_card(mut self, card: impl Into<Option<Cardinality>>) -> Self {
        self.from_card = card.into();
        self
    }

    pub fn with_to_card(mut self, card: impl Into<Option<Cardinality>>) -> Self {
        self.to_card = card.into();
        self
    }

    /// Routes the relation through an association-class entity.
    pub fn with_via(mut self, via: impl Into<String>) -> Self {
        self.via = Some(via.into());
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn from_card(&self) -> Option<&Cardinality> {
        self.from_card.as_ref()
    }

    pub fn to_card(&self) -> Option<&Cardinality> {
        self.to_card.as_ref()
    }

    pub fn via(&self) -> Option<&str> {
        self.via.as_deref()
    }

    /// Returns `true` if both relations join the same endpoints with the same
    /// kind, regardless of cardinalities and association class.
    ///
    /// This is the identity used when merging documents.
    pub fn same_edge(&self, other: &Relation) -> bool {
        self.from == other.from && self.to == other.to && self.kind == other.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kind_round_trips_through_str() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.as_str().parse::<RelationKind>(), Ok(kind));
        }
        assert!("inheritance".parse::<RelationKind>().is_err());
    }

    #[test]
    fn test_cardinality_constructors() {
        assert!(Cardinality::many().is_many());
        assert_eq!(Cardinality::range("1", Cardinality::MANY).as_str(), "1..N");
        assert_eq!(Cardinality::new("0..1").to_string(), "0..1");
    }

    #[test]
    fn test_same_edge_ignores_cardinality_and_via() {
        let plain = Relation::new("A", "B", RelationKind::Association);
        let annotated = Relation::new("A", "B", RelationKind::Association)
            .with_from_card(Cardinality::new("1"))
            .with_via("X");

        assert_ne!(plain, annotated);
        assert!(plain.same_edge(&annotated));
        assert!(!plain.same_edge(&Relation::new("B", "A", RelationKind::Association)));
        assert!(!plain.same_edge(&Relation::new("A", "B", RelationKind::Dependency)));
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_string(&Relation::new("A", "B", RelationKind::Realization))
            .unwrap();
        assert_eq!(json, r#"{"from":"A","to":"B","kind":"realization"}"#);
    }
}
