//! Intermediate model definitions.
//!
//! This module contains the data structures representing the ingested state
//! space: entities with raw-valued properties, enum catalogs, the clarity
//! table, and auxiliary entity data.

use std::collections::{HashMap, HashSet};

/// One observed property: a name paired with the raw string value from the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    /// Property name as it appears in the corpus.
    pub name: String,
    /// Raw string value (e.g. "north", "true", "3").
    pub raw_value: String,
}

impl PropertyDef {
    /// Creates a new property definition.
    #[must_use]
    pub fn new(name: String, raw_value: String) -> Self {
        Self { name, raw_value }
    }
}

/// An entity (block or game object) with its ordered property list.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Entity name, unqualified (no namespace prefix).
    pub name: String,
    /// Properties in corpus order. This order becomes field order in emitted code.
    pub properties: Vec<PropertyDef>,
}

impl EntityDef {
    /// Creates a new entity definition with no properties.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the entity.
    pub fn add_property(&mut self, property: PropertyDef) {
        self.properties.push(property);
    }

    /// Returns true if the entity declares no properties.
    #[must_use]
    pub fn is_nullary(&self) -> bool {
        self.properties.is_empty()
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A named, closed set of string variants representing one enumerated type.
#[derive(Debug, Clone)]
pub struct CatalogDef {
    /// Catalog name as declared in the corpus.
    pub name: String,
    /// Variant strings in declaration order.
    pub variants: Vec<String>,
}

impl CatalogDef {
    /// Creates a new catalog definition with no variants.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            variants: Vec::new(),
        }
    }

    /// Adds a variant to the catalog.
    pub fn add_variant(&mut self, variant: String) {
        self.variants.push(variant);
    }

    /// Returns true if the catalog contains the given variant string.
    #[must_use]
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.iter().any(|v| v == variant)
    }
}

/// Per-entity override data deciding which catalog may claim a value shared
/// between several catalogs.
#[derive(Debug, Clone, Default)]
pub struct ClarityTable {
    entries: HashMap<String, HashSet<String>>,
}

impl ClarityTable {
    /// Creates an empty clarity table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Allows `entity` to claim `catalog` when a value is ambiguous.
    pub fn allow(&mut self, catalog: String, entity: String) {
        self.entries.entry(catalog).or_default().insert(entity);
    }

    /// Returns true if the catalog has a clarity entry.
    #[must_use]
    pub fn has_entry(&self, catalog: &str) -> bool {
        self.entries.contains_key(catalog)
    }

    /// Returns true if the entity may claim the catalog.
    #[must_use]
    pub fn allows(&self, catalog: &str, entity: &str) -> bool {
        self.entries.get(catalog).is_some_and(|s| s.contains(entity))
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over catalog entries and their allowed entity sets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Complete intermediate model for one generation run.
///
/// Built once from the corpora, then read-only for every downstream pass.
/// Duplicate definitions are kept as-is here and rejected by validation.
#[derive(Debug, Clone)]
pub struct StateModel {
    /// Entities in corpus order.
    pub entities: Vec<EntityDef>,
    /// Enum catalogs in declaration order.
    pub catalogs: Vec<CatalogDef>,
    /// Clarity overrides for ambiguous values.
    pub clarity: ClarityTable,
    /// Entity lookup map (built during parsing).
    entity_map: HashMap<String, usize>,
    /// Catalog lookup map (built during parsing).
    catalog_map: HashMap<String, usize>,
}

impl StateModel {
    /// Creates a new empty model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            catalogs: Vec::new(),
            clarity: ClarityTable::new(),
            entity_map: HashMap::new(),
            catalog_map: HashMap::new(),
        }
    }

    /// Adds an entity to the model.
    pub fn add_entity(&mut self, entity: EntityDef) {
        let name = entity.name.clone();
        let index = self.entities.len();
        self.entities.push(entity);
        self.entity_map.insert(name, index);
    }

    /// Adds a catalog to the model.
    pub fn add_catalog(&mut self, catalog: CatalogDef) {
        let name = catalog.name.clone();
        let index = self.catalogs.len();
        self.catalogs.push(catalog);
        self.catalog_map.insert(name, index);
    }

    /// Looks up an entity by name.
    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&EntityDef> {
        self.entity_map.get(name).map(|&idx| &self.entities[idx])
    }

    /// Returns true if an entity with the given name exists.
    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.entity_map.contains_key(name)
    }

    /// Looks up a catalog by name.
    #[must_use]
    pub fn get_catalog(&self, name: &str) -> Option<&CatalogDef> {
        self.catalog_map.get(name).map(|&idx| &self.catalogs[idx])
    }

    /// Returns true if a catalog with the given name exists.
    #[must_use]
    pub fn has_catalog(&self, name: &str) -> bool {
        self.catalog_map.contains_key(name)
    }

    /// Replaces the clarity table.
    pub fn set_clarity(&mut self, clarity: ClarityTable) {
        self.clarity = clarity;
    }
}

impl Default for StateModel {
    fn default() -> Self {
        Self::new()
    }
}

/// A property of an auxiliary entity: a typed descriptor rather than a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxPropertyDef {
    /// Property name (a storage key, used verbatim as a field identifier).
    pub name: String,
    /// Source type descriptor (e.g. "int", "UUID", "NbtIntArray").
    pub descriptor: String,
    /// Whether the property may be absent.
    pub optional: bool,
}

impl AuxPropertyDef {
    /// Creates a new auxiliary property definition.
    #[must_use]
    pub fn new(name: String, descriptor: String, optional: bool) -> Self {
        Self {
            name,
            descriptor,
            optional,
        }
    }
}

/// An entity from the auxiliary entity-data document.
#[derive(Debug, Clone)]
pub struct AuxEntityDef {
    /// Entity name, unqualified.
    pub name: String,
    /// Properties in document order.
    pub properties: Vec<AuxPropertyDef>,
}

impl AuxEntityDef {
    /// Creates a new auxiliary entity definition with no properties.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the entity.
    pub fn add_property(&mut self, property: AuxPropertyDef) {
        self.properties.push(property);
    }
}
