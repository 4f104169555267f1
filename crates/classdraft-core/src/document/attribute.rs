//! Entity attributes.

use serde::{Deserialize, Serialize};

/// The type recorded for an attribute whose declaration carries no type.
pub const UNTYPED: &str = "any";

/// A typed attribute of an [`Entity`](super::Entity).
///
/// Attribute names are compared without regard to ASCII case when checking
/// for duplicates inside an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,

    #[serde(rename = "type", default = "untyped")]
    ty: String,

    #[serde(default)]
    pk: bool,

    #[serde(default)]
    unique: bool,

    #[serde(default)]
    nullable: bool,
}

fn untyped() -> String {
    UNTYPED.to_string()
}

impl Attribute {
    /// Creates a new attribute with all flags cleared.
    ///
    /// # Arguments
    ///
    /// * `name` - Attribute name, as written in the diagram.
    /// * `ty` - Declared type text, e.g. `"string"` or `"List<Item>"`.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            pk: false,
            unique: false,
            nullable: false,
        }
    }

    /// Sets the primary-key flag.
    pub fn with_pk(mut self, pk: bool) -> Self {
        self.pk = pk;
        self
    }

    /// Sets the unique flag.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Sets the nullable flag.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type, or [`UNTYPED`] when none was declared.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn is_pk(&self) -> bool {
        self.pk
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns `true` if this attribute is named `name`, ignoring ASCII case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_builders() {
        let attr = Attribute::new("email", "string")
            .with_unique(true)
            .with_nullable(true);

        assert_eq!(attr.name(), "email");
        assert_eq!(attr.ty(), "string");
        assert!(!attr.is_pk());
        assert!(attr.is_unique());
        assert!(attr.is_nullable());
    }

    #[test]
    fn test_missing_type_deserializes_as_untyped() {
        let attr: Attribute = serde_json::from_str(r#"{"name": "payload"}"#).unwrap();
        assert_eq!(attr.ty(), UNTYPED);
    }

    #[test]
    fn test_has_name_ignores_case() {
        let attr = Attribute::new("createdAt", "DateTime");
        assert!(attr.has_name("CREATEDAT"));
        assert!(!attr.has_name("created"));
    }
}
