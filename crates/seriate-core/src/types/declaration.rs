//! The declaration model consumed by the ordering engine.
//!
//! A `Declaration` is a fully-materialized bundle of facts about one
//! class-like unit, produced upstream by a syntax/semantic walker. The
//! engine only reads these facts; it never resolves names on demand and
//! never mutates a declaration.

use serde::{Deserialize, Serialize};

/// One class-like declaration, identified by a unique name within its batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Unique name within the input batch.
    pub name: String,
    /// Direct base types (classes and interfaces), in declaration order.
    #[serde(default)]
    pub base_type_names: Vec<String>,
    /// Names referenced elsewhere in the unit (import/using-style
    /// directives), in the order supplied.
    #[serde(default)]
    pub referenced_names: Vec<String>,
    /// Names referenced from member bodies. Extractors that do not
    /// analyze bodies leave this empty.
    #[serde(default)]
    pub body_referenced_names: Vec<String>,
    /// Containing namespace, when the extractor supplies one.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Declaration modifiers (e.g. `public abstract`), verbatim.
    #[serde(default)]
    pub modifiers: Option<String>,
}

impl Declaration {
    /// Create a declaration with the given name and no recorded facts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type_names: Vec::new(),
            referenced_names: Vec::new(),
            body_referenced_names: Vec::new(),
            namespace: None,
            modifiers: None,
        }
    }

    /// Set the direct base-type names.
    pub fn with_base_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_type_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the referenced names.
    pub fn with_references<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.referenced_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the member-body referenced names.
    pub fn with_body_references<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body_referenced_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the containing namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the modifier string.
    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }
}
