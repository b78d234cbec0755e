//! Model validation utilities.
//!
//! This module checks a parsed state model for the content errors the
//! parsers deliberately let through: duplicate definitions, empty catalogs,
//! dangling clarity references, identifier collisions and names that do not
//! normalize to usable identifiers. Validation runs before emission; any
//! failure aborts the run with no partial output.

use std::collections::{HashMap, HashSet};

use crate::error::ModelError;
use crate::ir::{escape_field_ident, to_type_ident};
use crate::types::StateModel;

/// Validates a parsed state model for correctness.
///
/// # Arguments
/// * `model` - The model to validate
///
/// # Returns
/// Ok(()) if valid, or ModelError describing the issue.
///
/// # Errors
/// Returns `ModelError` if validation fails.
pub fn validate_model(model: &StateModel) -> Result<(), ModelError> {
    validate_entities(model)?;
    validate_catalogs(model)?;
    validate_clarity(model)?;
    Ok(())
}

/// Validates entity definitions: duplicates, usable identifiers and
/// identifier collisions, for both entity names and their field names.
fn validate_entities(model: &StateModel) -> Result<(), ModelError> {
    let mut seen_names = HashSet::new();
    let mut seen_idents: HashMap<String, &str> = HashMap::new();

    for entity in &model.entities {
        if !seen_names.insert(entity.name.as_str()) {
            return Err(ModelError::DuplicateEntity {
                name: entity.name.clone(),
            });
        }

        let ident = to_type_ident(&entity.name);
        if !is_valid_ident(&ident) {
            return Err(ModelError::invalid_ident("entity", &entity.name, ident));
        }
        if let Some(first) = seen_idents.insert(ident.clone(), &entity.name) {
            return Err(ModelError::ident_collision(
                "entity", first, &entity.name, ident,
            ));
        }

        let mut seen_properties = HashSet::new();
        let mut seen_field_idents: HashMap<String, &str> = HashMap::new();
        for property in &entity.properties {
            if !seen_properties.insert(property.name.as_str()) {
                return Err(ModelError::DuplicateProperty {
                    entity: entity.name.clone(),
                    name: property.name.clone(),
                });
            }

            let field_ident = escape_field_ident(&property.name);
            if !is_valid_ident(&field_ident) {
                return Err(ModelError::invalid_ident(
                    "property",
                    &property.name,
                    field_ident,
                ));
            }
            if let Some(first) = seen_field_idents.insert(field_ident.clone(), &property.name) {
                return Err(ModelError::ident_collision(
                    "property",
                    first,
                    &property.name,
                    field_ident,
                ));
            }
        }
    }

    Ok(())
}

/// Validates catalog definitions: duplicates, empty catalogs, usable
/// identifiers and identifier collisions.
fn validate_catalogs(model: &StateModel) -> Result<(), ModelError> {
    let mut seen_names = HashSet::new();
    let mut seen_idents: HashMap<String, &str> = HashMap::new();

    for catalog in &model.catalogs {
        if !seen_names.insert(catalog.name.as_str()) {
            return Err(ModelError::DuplicateCatalog {
                name: catalog.name.clone(),
            });
        }

        let ident = to_type_ident(&catalog.name);
        if !is_valid_ident(&ident) {
            return Err(ModelError::invalid_ident("catalog", &catalog.name, ident));
        }
        if let Some(first) = seen_idents.insert(ident.clone(), &catalog.name) {
            return Err(ModelError::ident_collision(
                "catalog", first, &catalog.name, ident,
            ));
        }

        if catalog.variants.is_empty() {
            return Err(ModelError::EmptyCatalog {
                name: catalog.name.clone(),
            });
        }

        let mut seen_variants = HashSet::new();
        let mut seen_variant_idents: HashMap<String, &str> = HashMap::new();
        for variant in &catalog.variants {
            if !seen_variants.insert(variant.as_str()) {
                return Err(ModelError::DuplicateVariant {
                    catalog: catalog.name.clone(),
                    name: variant.clone(),
                });
            }

            let variant_ident = to_type_ident(variant);
            if !is_valid_ident(&variant_ident) {
                return Err(ModelError::invalid_ident("variant", variant, variant_ident));
            }
            if let Some(first) = seen_variant_idents.insert(variant_ident.clone(), variant) {
                return Err(ModelError::ident_collision(
                    "variant",
                    first,
                    variant,
                    variant_ident,
                ));
            }
        }
    }

    Ok(())
}

/// Validates that clarity entries reference catalogs and entities that
/// exist in the model.
fn validate_clarity(model: &StateModel) -> Result<(), ModelError> {
    for (catalog, entities) in model.clarity.iter() {
        if !model.has_catalog(catalog) {
            return Err(ModelError::UnknownCatalog {
                name: catalog.to_string(),
            });
        }

        for entity in entities {
            if !model.has_entity(entity) {
                return Err(ModelError::UnknownEntity {
                    catalog: catalog.to_string(),
                    name: entity.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Returns true if a rendered identifier is usable in emitted source.
///
/// Accepts a non-empty word with no leading digit, optionally behind a
/// raw-identifier escape. The lone underscore and the path keywords that
/// raw identifiers cannot express (`crate`, `self`, `Self`, `super`) are
/// not usable.
fn is_valid_ident(ident: &str) -> bool {
    let word = ident.strip_prefix("r#").unwrap_or(ident);
    if word.is_empty() || word == "_" || matches!(word, "crate" | "self" | "Self" | "super") {
        return false;
    }
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogDef, ClarityTable, EntityDef, PropertyDef};

    fn valid_model() -> StateModel {
        let mut model = StateModel::new();
        model.add_entity(EntityDef::new("stone".to_string()));

        let mut lever = EntityDef::new("lever".to_string());
        lever.add_property(PropertyDef::new("facing".to_string(), "north".to_string()));
        model.add_entity(lever);

        let mut direction = CatalogDef::new("Direction".to_string());
        direction.add_variant("north".to_string());
        direction.add_variant("south".to_string());
        model.add_catalog(direction);

        let mut clarity = ClarityTable::new();
        clarity.allow("Direction".to_string(), "lever".to_string());
        model.set_clarity(clarity);

        model
    }

    #[test]
    fn test_valid_model_passes() {
        assert!(validate_model(&valid_model()).is_ok());
    }

    #[test]
    fn test_duplicate_entity() {
        let mut model = valid_model();
        model.add_entity(EntityDef::new("stone".to_string()));
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::DuplicateEntity { .. })
        ));
    }

    #[test]
    fn test_duplicate_property() {
        let mut model = valid_model();
        let mut anvil = EntityDef::new("anvil".to_string());
        anvil.add_property(PropertyDef::new("facing".to_string(), "north".to_string()));
        anvil.add_property(PropertyDef::new("facing".to_string(), "south".to_string()));
        model.add_entity(anvil);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::DuplicateProperty { .. })
        ));
    }

    #[test]
    fn test_duplicate_catalog() {
        let mut model = valid_model();
        let mut direction = CatalogDef::new("Direction".to_string());
        direction.add_variant("up".to_string());
        model.add_catalog(direction);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::DuplicateCatalog { .. })
        ));
    }

    #[test]
    fn test_duplicate_variant() {
        let mut model = valid_model();
        let mut axis = CatalogDef::new("Axis".to_string());
        axis.add_variant("x".to_string());
        axis.add_variant("x".to_string());
        model.add_catalog(axis);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::DuplicateVariant { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let mut model = valid_model();
        model.add_catalog(CatalogDef::new("Hollow".to_string()));
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn test_clarity_unknown_catalog() {
        let mut model = valid_model();
        let mut clarity = ClarityTable::new();
        clarity.allow("Color".to_string(), "lever".to_string());
        model.set_clarity(clarity);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::UnknownCatalog { .. })
        ));
    }

    #[test]
    fn test_clarity_unknown_entity() {
        let mut model = valid_model();
        let mut clarity = ClarityTable::new();
        clarity.allow("Direction".to_string(), "ghost_block".to_string());
        model.set_clarity(clarity);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::UnknownEntity { .. })
        ));
    }

    #[test]
    fn test_entity_ident_collision() {
        let mut model = valid_model();
        model.add_entity(EntityDef::new("oak_log".to_string()));
        model.add_entity(EntityDef::new("oakLog".to_string()));
        let error = validate_model(&model);
        assert!(matches!(error, Err(ModelError::IdentCollision { .. })));
        let message = error.unwrap_err().to_string();
        assert!(message.contains("OakLog"));
    }

    #[test]
    fn test_variant_ident_collision() {
        let mut model = valid_model();
        let mut shape = CatalogDef::new("Shape".to_string());
        shape.add_variant("north_south".to_string());
        shape.add_variant("northSouth".to_string());
        model.add_catalog(shape);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::IdentCollision { .. })
        ));
    }

    #[test]
    fn test_property_ident_collision() {
        let mut model = valid_model();
        let mut slab = EntityDef::new("oak_slab".to_string());
        slab.add_property(PropertyDef::new("type".to_string(), "true".to_string()));
        slab.add_property(PropertyDef::new("r#type".to_string(), "false".to_string()));
        model.add_entity(slab);
        let error = validate_model(&model);
        assert!(matches!(error, Err(ModelError::IdentCollision { .. })));
        let message = error.unwrap_err().to_string();
        assert!(message.contains("r#type"));
    }

    #[test]
    fn test_empty_entity_name_rejected() {
        let mut model = valid_model();
        model.add_entity(EntityDef::new(String::new()));
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::InvalidIdent { .. })
        ));
    }

    #[test]
    fn test_punctuated_entity_name_rejected() {
        let mut model = valid_model();
        model.add_entity(EntityDef::new("foo-bar".to_string()));
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::InvalidIdent { .. })
        ));
    }

    #[test]
    fn test_punctuated_property_name_rejected() {
        let mut model = valid_model();
        let mut beacon = EntityDef::new("beacon".to_string());
        beacon.add_property(PropertyDef::new("max-level".to_string(), "3".to_string()));
        model.add_entity(beacon);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::InvalidIdent { .. })
        ));
    }

    #[test]
    fn test_numeric_variant_rejected() {
        let mut model = valid_model();
        let mut level = CatalogDef::new("Level".to_string());
        level.add_variant("7".to_string());
        model.add_catalog(level);
        assert!(matches!(
            validate_model(&model),
            Err(ModelError::InvalidIdent { .. })
        ));
    }
}
