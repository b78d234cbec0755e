//! Property type resolution.
//!
//! This module determines the semantic type of a raw property value: a
//! boolean literal, a small integer literal, or one of the declared enum
//! catalogs. A value contained in several catalogs is disambiguated through
//! the clarity table; a value no catalog can claim stays unresolved and is
//! surfaced as a placeholder in the emitted source.

use crate::types::{CatalogDef, ClarityTable};

/// Semantic type of one property value.
///
/// `Unresolved` is not an error: it marks a position the generator cannot
/// type on its own and a human has to annotate in the emitted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// Literal `true` or `false`.
    Bool,
    /// Unsigned decimal literal.
    SmallInt,
    /// A declared enum catalog, by catalog name.
    Catalog(String),
    /// No catalog claimed the value, or the claim stayed ambiguous.
    /// Carries the raw value for the placeholder marker.
    Unresolved(String),
}

impl ResolvedType {
    /// Returns true if resolution failed and a placeholder will be emitted.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved(_))
    }
}

/// Resolves the semantic type of a raw property value.
///
/// Literals take priority over catalogs: `"true"`/`"false"` resolve to
/// `Bool` and all-digit values to `SmallInt` even when some catalog carries
/// the same string as a variant. Otherwise every catalog containing the
/// value is a candidate; a single candidate wins outright, several are
/// disambiguated per entity through the clarity table.
///
/// # Arguments
/// * `raw_value` - The raw string value from the corpus
/// * `owning_entity` - Entity the property belongs to
/// * `catalogs` - Declared catalogs, in declaration order
/// * `clarity` - Per-entity overrides for values shared between catalogs
#[must_use]
pub fn resolve(
    raw_value: &str,
    owning_entity: &str,
    catalogs: &[CatalogDef],
    clarity: &ClarityTable,
) -> ResolvedType {
    if raw_value == "true" || raw_value == "false" {
        return ResolvedType::Bool;
    }
    if !raw_value.is_empty() && raw_value.bytes().all(|b| b.is_ascii_digit()) {
        return ResolvedType::SmallInt;
    }

    let candidates: Vec<&CatalogDef> = catalogs.iter().filter(|c| c.contains(raw_value)).collect();

    match candidates.as_slice() {
        [] => ResolvedType::Unresolved(raw_value.to_string()),
        [claimed] => ResolvedType::Catalog(claimed.name.clone()),
        _ => disambiguate(raw_value, owning_entity, &candidates, clarity),
    }
}

/// Picks one catalog out of several candidates through the clarity table.
///
/// One pass over the fixed candidate list, in catalog declaration order.
/// The first clarity-bearing candidate that lists the owning entity wins; a
/// clarity-bearing candidate that does not list it is out of consideration.
/// If exactly one candidate without a clarity entry survives the pass, it
/// wins by elimination. Every other outcome is an explicit ambiguous result.
fn disambiguate(
    raw_value: &str,
    owning_entity: &str,
    candidates: &[&CatalogDef],
    clarity: &ClarityTable,
) -> ResolvedType {
    let mut survivors = Vec::new();
    for candidate in candidates {
        if clarity.has_entry(&candidate.name) {
            if clarity.allows(&candidate.name, owning_entity) {
                return ResolvedType::Catalog(candidate.name.clone());
            }
        } else {
            survivors.push(candidate.name.as_str());
        }
    }

    if let [lone] = survivors.as_slice() {
        return ResolvedType::Catalog((*lone).to_string());
    }

    tracing::warn!(
        value = raw_value,
        entity = owning_entity,
        candidates = ?candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        "ambiguous property value, no clarity entry decided"
    );
    ResolvedType::Unresolved(raw_value.to_string())
}
