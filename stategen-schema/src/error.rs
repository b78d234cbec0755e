//! Error types for corpus parsing and model validation.

use thiserror::Error;

/// Error type for corpus and document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record with a recognized tag that does not match the record shape.
    #[error("malformed record at line {line}: '{content}'")]
    MalformedRecord {
        /// 1-based line number in the corpus.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// Property pair without a name/value separator.
    #[error("property pair '{pair}' for entity '{entity}' lacks a separator")]
    MissingSeparator {
        /// Entity owning the pair.
        entity: String,
        /// The offending pair text.
        pair: String,
    },

    /// Empty type descriptor in the auxiliary entity document.
    #[error("empty type descriptor for property '{property}' of entity '{entity}'")]
    EmptyDescriptor {
        /// Entity owning the property.
        entity: String,
        /// Property name.
        property: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for model validation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Duplicate entity definition.
    #[error("duplicate entity definition: '{name}'")]
    DuplicateEntity {
        /// Entity name.
        name: String,
    },

    /// Duplicate property within one entity.
    #[error("duplicate property '{name}' on entity '{entity}'")]
    DuplicateProperty {
        /// Entity name.
        entity: String,
        /// Property name.
        name: String,
    },

    /// Duplicate catalog definition.
    #[error("duplicate catalog definition: '{name}'")]
    DuplicateCatalog {
        /// Catalog name.
        name: String,
    },

    /// Duplicate variant within one catalog.
    #[error("duplicate variant '{name}' in catalog '{catalog}'")]
    DuplicateVariant {
        /// Catalog name.
        catalog: String,
        /// Variant string.
        name: String,
    },

    /// Catalog with no variants.
    #[error("catalog '{name}' has no variants")]
    EmptyCatalog {
        /// Catalog name.
        name: String,
    },

    /// Clarity entry referencing a catalog absent from the model.
    #[error("clarity entry references unknown catalog '{name}'")]
    UnknownCatalog {
        /// Catalog name.
        name: String,
    },

    /// Clarity entry referencing an entity absent from the model.
    #[error("clarity entry for catalog '{catalog}' references unknown entity '{name}'")]
    UnknownEntity {
        /// Catalog name.
        catalog: String,
        /// Entity name.
        name: String,
    },

    /// Two distinct names normalizing to the same identifier.
    #[error("{kind} names '{first}' and '{second}' both normalize to identifier '{ident}'")]
    IdentCollision {
        /// Kind of name (entity, catalog, variant, property).
        kind: String,
        /// First colliding name.
        first: String,
        /// Second colliding name.
        second: String,
        /// The shared identifier.
        ident: String,
    },

    /// Name that does not normalize to a usable identifier.
    #[error("{kind} name '{name}' does not normalize to a valid identifier ('{ident}')")]
    InvalidIdent {
        /// Kind of name (entity, catalog, variant, property).
        kind: String,
        /// The offending name.
        name: String,
        /// The rejected identifier.
        ident: String,
    },
}

impl ParseError {
    /// Creates a malformed record error.
    pub fn malformed(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            content: content.into(),
        }
    }

    /// Creates a missing separator error.
    pub fn missing_separator(entity: impl Into<String>, pair: impl Into<String>) -> Self {
        Self::MissingSeparator {
            entity: entity.into(),
            pair: pair.into(),
        }
    }

    /// Creates an empty descriptor error.
    pub fn empty_descriptor(entity: impl Into<String>, property: impl Into<String>) -> Self {
        Self::EmptyDescriptor {
            entity: entity.into(),
            property: property.into(),
        }
    }
}

impl ModelError {
    /// Creates an identifier collision error.
    pub fn ident_collision(
        kind: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        ident: impl Into<String>,
    ) -> Self {
        Self::IdentCollision {
            kind: kind.into(),
            first: first.into(),
            second: second.into(),
            ident: ident.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_ident(
        kind: impl Into<String>,
        name: impl Into<String>,
        ident: impl Into<String>,
    ) -> Self {
        Self::InvalidIdent {
            kind: kind.into(),
            name: name.into(),
            ident: ident.into(),
        }
    }
}
