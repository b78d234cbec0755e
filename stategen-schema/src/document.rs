//! JSON document front-ends.
//!
//! This module parses the two structured documents the generator consumes:
//! the state override document (default states, catalog definitions and
//! clarity overrides) and the auxiliary entity-data document. Both are JSON
//! objects whose key order is semantically significant, so object entries
//! are deserialized into ordered vectors rather than maps.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::ParseError;
use crate::types::{
    AuxEntityDef, AuxPropertyDef, CatalogDef, ClarityTable, EntityDef, PropertyDef, StateModel,
};

/// Parsed form of the state override document.
///
/// `default_states` maps entity name to a `"prop=value,..."` assignment
/// string (empty for nullary entities); `enum_properties` carries catalog
/// definitions; `property_clarity` carries the clarity table. The latter two
/// may be absent when the catalogs or overrides come from a line corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct StateDocument {
    /// Default property assignments per entity, in document order.
    #[serde(deserialize_with = "ordered_entries")]
    pub default_states: Vec<(String, String)>,
    /// Catalog definitions, in document order.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub enum_properties: Vec<(String, Vec<String>)>,
    /// Allowed entities per catalog for ambiguous values.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub property_clarity: Vec<(String, Vec<String>)>,
}

impl StateDocument {
    /// Parses the document from JSON text.
    ///
    /// # Errors
    /// Returns `ParseError` if the JSON is malformed or missing
    /// `default_states`.
    pub fn parse(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the intermediate model from the document.
    ///
    /// # Errors
    /// Returns `ParseError` if a property assignment lacks its `=` separator.
    pub fn into_model(self) -> Result<StateModel, ParseError> {
        let mut model = StateModel::new();

        for (name, variants) in self.enum_properties {
            let mut catalog = CatalogDef::new(name);
            for variant in variants {
                catalog.add_variant(variant);
            }
            model.add_catalog(catalog);
        }

        for (name, assignments) in self.default_states {
            let mut entity = EntityDef::new(name);
            if !assignments.is_empty() {
                for pair in assignments.split(',') {
                    let Some((prop, value)) = pair.split_once('=') else {
                        return Err(ParseError::missing_separator(entity.name, pair));
                    };
                    entity.add_property(PropertyDef::new(prop.to_string(), value.to_string()));
                }
            }
            model.add_entity(entity);
        }

        let mut clarity = ClarityTable::new();
        for (catalog, entities) in self.property_clarity {
            for entity in entities {
                clarity.allow(catalog.clone(), entity);
            }
        }
        model.set_clarity(clarity);

        tracing::debug!(
            entities = model.entities.len(),
            catalogs = model.catalogs.len(),
            "parsed state document"
        );

        Ok(model)
    }
}

/// Top-level shape of the auxiliary entity-data document.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct EntityDataDocument {
    #[serde(deserialize_with = "ordered_entries")]
    entries: Vec<(String, Vec<(String, String)>)>,
}

/// Parses the auxiliary entity-data document.
///
/// Each entry maps an entity name to ordered `[propertyName, typeDescriptor]`
/// pairs; a trailing `?` on a descriptor marks the property optional.
///
/// # Arguments
/// * `json` - Entity-data document text
///
/// # Returns
/// Auxiliary entity definitions in document order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a descriptor is empty.
pub fn parse_entity_data(json: &str) -> Result<Vec<AuxEntityDef>, ParseError> {
    let doc: EntityDataDocument = serde_json::from_str(json)?;

    let mut entities = Vec::with_capacity(doc.entries.len());
    for (name, props) in doc.entries {
        let mut entity = AuxEntityDef::new(name);
        for (prop_name, descriptor) in props {
            let (descriptor, optional) = match descriptor.strip_suffix('?') {
                Some(base) => (base.to_string(), true),
                None => (descriptor, false),
            };
            if descriptor.is_empty() {
                return Err(ParseError::empty_descriptor(entity.name, prop_name));
            }
            entity.add_property(AuxPropertyDef::new(prop_name, descriptor, optional));
        }
        entities.push(entity);
    }

    tracing::debug!(entities = entities.len(), "parsed entity data document");

    Ok(entities)
}

/// Deserializes a JSON object into a vector of entries, preserving key order.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct Entries<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for Entries<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::new();
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(Entries(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE_DOCUMENT: &str = r#"{
        "default_states": {
            "lever": "face=wall,facing=north,powered=false",
            "anvil": "facing=north",
            "stone": ""
        },
        "enum_properties": {
            "AttachFace": ["ceiling", "floor", "wall"],
            "Direction": ["north", "south", "west", "east"]
        },
        "property_clarity": {
            "Direction": ["anvil", "lever"]
        }
    }"#;

    const ENTITY_DATA: &str = r#"{
        "allay": [["CanDuplicate", "boolean"], ["DuplicationCooldown", "long?"]],
        "cow": [["Age", "int"]]
    }"#;

    #[test]
    fn test_parse_state_document() {
        let doc = StateDocument::parse(STATE_DOCUMENT).expect("Failed to parse");
        let model = doc.into_model().expect("Failed to build model");

        let names: Vec<&str> = model.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["lever", "anvil", "stone"]);

        let lever = model.get_entity("lever").unwrap();
        assert_eq!(lever.properties.len(), 3);
        assert_eq!(lever.properties[0].name, "face");
        assert_eq!(lever.properties[0].raw_value, "wall");

        assert!(model.get_entity("stone").unwrap().is_nullary());
        assert_eq!(model.catalogs.len(), 2);
        assert!(model.get_catalog("Direction").unwrap().contains("east"));
        assert!(model.clarity.allows("Direction", "anvil"));
        assert!(!model.clarity.allows("Direction", "stone"));
    }

    #[test]
    fn test_document_order_preserved() {
        // Keys are deliberately not alphabetical; document order must win.
        let doc = StateDocument::parse(STATE_DOCUMENT).expect("Failed to parse");
        assert_eq!(doc.default_states[0].0, "lever");
        assert_eq!(doc.default_states[2].0, "stone");
        assert_eq!(doc.enum_properties[1].0, "Direction");
    }

    #[test]
    fn test_assignment_without_separator_is_fatal() {
        let json = r#"{"default_states": {"lever": "face:wall"}}"#;
        let doc = StateDocument::parse(json).expect("Failed to parse");
        let result = doc.into_model();
        assert!(matches!(
            result,
            Err(ParseError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_missing_default_states_is_fatal() {
        let json = r#"{"enum_properties": {}}"#;
        assert!(matches!(
            StateDocument::parse(json),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_optional_sections_default_empty() {
        let json = r#"{"default_states": {"stone": ""}}"#;
        let doc = StateDocument::parse(json).expect("Failed to parse");
        let model = doc.into_model().expect("Failed to build model");
        assert!(model.catalogs.is_empty());
        assert!(model.clarity.is_empty());
    }

    #[test]
    fn test_parse_entity_data() {
        let entities = parse_entity_data(ENTITY_DATA).expect("Failed to parse");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "allay");

        let cooldown = &entities[0].properties[1];
        assert_eq!(cooldown.name, "DuplicationCooldown");
        assert_eq!(cooldown.descriptor, "long");
        assert!(cooldown.optional);

        let age = &entities[1].properties[0];
        assert_eq!(age.descriptor, "int");
        assert!(!age.optional);
    }

    #[test]
    fn test_empty_descriptor_is_fatal() {
        let json = r#"{"allay": [["CanDuplicate", "?"]]}"#;
        assert!(matches!(
            parse_entity_data(json),
            Err(ParseError::EmptyDescriptor { .. })
        ));
    }
}
