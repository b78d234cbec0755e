//! Intermediate representation for code generation.
//!
//! This module provides a flattened, resolved representation of the state
//! model that is easier to use for code generation: every name is paired
//! with its generated identifier and every property with its resolved Rust
//! type, so the emitters never normalize or resolve anything themselves.

use crate::resolve::{ResolvedType, resolve};
use crate::types::StateModel;

/// Rust keywords that need raw-identifier escaping when used as field names.
///
/// `crate`, `self`, `Self` and `super` cannot be raw identifiers; corpus
/// property names are lowercase snake words, so they do not occur.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Converts a snake-cased domain name into a type identifier.
///
/// Splits on underscore, upper-cases the first character of each segment and
/// leaves the rest untouched, so names already in title form pass through
/// unchanged. The original string stays recoverable because every emitter
/// also retains it verbatim as data.
#[must_use]
pub fn to_type_ident(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts a property name into a field identifier.
///
/// Property names are used verbatim except for reserved words, which are
/// escaped to raw-identifier form (`type` becomes `r#type`). The unescaped
/// string is what appears in generated property-bag lookups.
#[must_use]
pub fn escape_field_ident(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Intermediate representation of a state model for code generation.
#[derive(Debug, Clone)]
pub struct ModelIr {
    /// Entities in corpus order, with resolved properties.
    pub entities: Vec<ResolvedEntity>,
    /// Catalogs in declaration order, with variant identifiers.
    pub catalogs: Vec<ResolvedCatalog>,
}

impl ModelIr {
    /// Creates an intermediate representation from a parsed state model.
    ///
    /// Runs the type resolver over every property; unresolved outcomes are
    /// reported at warn level and carried through as placeholders.
    #[must_use]
    pub fn from_model(model: &StateModel) -> Self {
        let catalogs = model
            .catalogs
            .iter()
            .map(|catalog| ResolvedCatalog {
                name: catalog.name.clone(),
                ident: to_type_ident(&catalog.name),
                variants: catalog
                    .variants
                    .iter()
                    .map(|variant| ResolvedVariant {
                        name: variant.clone(),
                        ident: to_type_ident(variant),
                    })
                    .collect(),
            })
            .collect();

        let entities = model
            .entities
            .iter()
            .map(|entity| {
                let properties = entity
                    .properties
                    .iter()
                    .map(|property| {
                        let resolved = resolve(
                            &property.raw_value,
                            &entity.name,
                            &model.catalogs,
                            &model.clarity,
                        );
                        if let ResolvedType::Unresolved(value) = &resolved {
                            tracing::warn!(
                                entity = %entity.name,
                                property = %property.name,
                                value = %value,
                                "property type left unresolved, emitting placeholder"
                            );
                        }
                        ResolvedProperty {
                            field_ident: escape_field_ident(&property.name),
                            rust_type: rust_type(&resolved),
                            name: property.name.clone(),
                            resolved,
                        }
                    })
                    .collect();
                ResolvedEntity {
                    name: entity.name.clone(),
                    ident: to_type_ident(&entity.name),
                    properties,
                }
            })
            .collect();

        Self { entities, catalogs }
    }
}

/// Renders the Rust type a resolved property is emitted with.
fn rust_type(resolved: &ResolvedType) -> String {
    match resolved {
        ResolvedType::Bool => "bool".to_string(),
        ResolvedType::SmallInt => "u8".to_string(),
        ResolvedType::Catalog(name) => to_type_ident(name),
        ResolvedType::Unresolved(_) => "()".to_string(),
    }
}

/// An entity with its generated identifier and resolved properties.
#[derive(Debug, Clone)]
pub struct ResolvedEntity {
    /// Entity name as it appears in the corpus.
    pub name: String,
    /// Generated constructor identifier.
    pub ident: String,
    /// Properties in corpus order.
    pub properties: Vec<ResolvedProperty>,
}

impl ResolvedEntity {
    /// Returns true if the entity's constructor carries no fields.
    #[must_use]
    pub fn is_nullary(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A property with its field identifier and resolved Rust type.
#[derive(Debug, Clone)]
pub struct ResolvedProperty {
    /// Property name as it appears in the corpus (the property-bag key).
    pub name: String,
    /// Field identifier, reserved words escaped.
    pub field_ident: String,
    /// Resolution outcome.
    pub resolved: ResolvedType,
    /// Rendered Rust type (`bool`, `u8`, a catalog identifier, or `()`).
    pub rust_type: String,
}

/// A catalog with its generated identifier and variant identifiers.
#[derive(Debug, Clone)]
pub struct ResolvedCatalog {
    /// Catalog name as declared in the corpus.
    pub name: String,
    /// Generated enum identifier.
    pub ident: String,
    /// Variants in declaration order.
    pub variants: Vec<ResolvedVariant>,
}

/// A catalog variant with its generated identifier.
#[derive(Debug, Clone)]
pub struct ResolvedVariant {
    /// Variant string as declared in the corpus, retained verbatim.
    pub name: String,
    /// Generated variant identifier.
    pub ident: String,
}
