//! # Stategen Schema
//!
//! State-space corpus parsing and type resolution.
//!
//! This crate provides:
//! - Line-corpus and JSON document parsing into the intermediate model
//! - Property type resolution with clarity-table disambiguation
//! - Identifier normalization for generated code
//! - Model validation
//! - Intermediate representation for code generation

pub mod corpus;
pub mod document;
pub mod error;
pub mod ir;
pub mod resolve;
pub mod types;
pub mod validation;

pub use corpus::{CorpusFormat, parse_corpus};
pub use document::{StateDocument, parse_entity_data};
pub use error::{ModelError, ParseError};
pub use ir::{ModelIr, ResolvedCatalog, ResolvedEntity, ResolvedProperty, ResolvedVariant};
pub use resolve::{ResolvedType, resolve};
pub use types::{
    AuxEntityDef, AuxPropertyDef, CatalogDef, ClarityTable, EntityDef, PropertyDef, StateModel,
};
pub use validation::validate_model;
