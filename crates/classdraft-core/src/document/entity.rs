//! Diagram entities (classes, interfaces, abstract classes).

use serde::{Deserialize, Serialize};

use super::Attribute;

/// A modeled class with its stereotype, classifier flags and attributes.
///
/// Attribute names are unique within an entity, ignoring ASCII case. All
/// mutation goes through [`Entity::add_attr`] and [`Entity::absorb`], which
/// keep the first attribute seen for a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    stereotype: Option<String>,

    #[serde(default)]
    is_interface: bool,

    #[serde(default)]
    is_abstract: bool,

    #[serde(default)]
    attrs: Vec<Attribute>,
}

impl Entity {
    /// Creates a plain entity with no stereotype, flags or attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stereotype: None,
            is_interface: false,
            is_abstract: false,
            attrs: Vec::new(),
        }
    }

    /// Sets the stereotype text (the content between `<<` and `>>`).
    pub fn with_stereotype(mut self, stereotype: Option<String>) -> Self {
        self.stereotype = stereotype;
        self
    }

    /// Marks the entity as an interface.
    pub fn with_interface(mut self, is_interface: bool) -> Self {
        self.is_interface = is_interface;
        self
    }

    /// Marks the entity as abstract.
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stereotype(&self) -> Option<&str> {
        self.stereotype.as_deref()
    }

    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Borrow the attributes in declaration order.
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Find an attribute by name, ignoring ASCII case.
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|attr| attr.has_name(name))
    }

    /// Returns `true` if this entity is named `name`, ignoring ASCII case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Appends `attr` unless an attribute with the same name already exists.
    ///
    /// Returns `true` if the attribute was added.
    pub fn add_attr(&mut self, attr: Attribute) -> bool {
        if self.attr(attr.name()).is_some() {
            return false;
        }
        self.attrs.push(attr);
        true
    }

    /// Folds another description of the same entity into this one.
    ///
    /// Values already present on `self` are never overwritten: the stereotype
    /// is only taken from `other` when absent or empty here (stored documents
    /// carry `""` for "no stereotype"), classifier flags are only
    /// ever raised, and attributes from `other` are appended only when their
    /// name is new.
    ///
    /// Returns the number of attributes added.
    pub fn absorb(&mut self, other: Entity) -> usize {
        if self.stereotype.as_deref().is_none_or(str::is_empty) && other.stereotype.is_some() {
            self.stereotype = other.stereotype;
        }
        self.is_interface |= other.is_interface;
        self.is_abstract |= other.is_abstract;

        let mut added = 0;
        for attr in other.attrs {
            if self.add_attr(attr) {
                added += 1;
            }
        }
        added
    }
}
