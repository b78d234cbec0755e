//! Line-corpus parser.
//!
//! This module parses the tagged line records produced by the upstream data
//! extractor into the intermediate model. A corpus is a log-style capture:
//! lines carrying one of the configured record tags are records, everything
//! else is ignored.

use crate::error::ParseError;
use crate::types::{CatalogDef, EntityDef, PropertyDef, StateModel};

/// Separator between a record tag and the record name.
const TAG_SEPARATOR: &str = "--- ";

/// Separator between the record name and its payload.
const PAYLOAD_SEPARATOR: &str = " - ";

/// Record tag configuration for a line corpus.
///
/// The two record shapes are fixed; the tag spellings vary per corpus.
#[derive(Debug, Clone)]
pub struct CorpusFormat {
    /// Tag introducing an entity record.
    pub entity_tag: String,
    /// Tag introducing a catalog record.
    pub catalog_tag: String,
    /// Namespace prefix stripped from entity names on ingest, if declared.
    pub namespace: Option<String>,
}

impl CorpusFormat {
    /// Creates a format with the given record tags.
    #[must_use]
    pub fn new(entity_tag: impl Into<String>, catalog_tag: impl Into<String>) -> Self {
        Self {
            entity_tag: entity_tag.into(),
            catalog_tag: catalog_tag.into(),
            namespace: None,
        }
    }

    /// Tags used by the block-state corpus.
    #[must_use]
    pub fn blocks() -> Self {
        Self::new("BLOCKINFO", "ENUMINFO")
    }

    /// Tags used by the entity corpus, whose records qualify entity names
    /// with the `minecraft` namespace.
    #[must_use]
    pub fn entities() -> Self {
        Self::new("ENTITYINFO", "ENUMINFO").with_namespace("minecraft")
    }

    /// Declares the namespace prefix stripped from entity names.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Strips the declared namespace prefix from an entity name.
    fn strip_entity_namespace<'a>(&self, name: &'a str) -> &'a str {
        match &self.namespace {
            Some(ns) => name
                .strip_prefix(ns)
                .and_then(|n| n.strip_prefix(':'))
                .unwrap_or(name),
            None => name,
        }
    }
}

impl Default for CorpusFormat {
    fn default() -> Self {
        Self::entities()
    }
}

/// Parses a line corpus into the intermediate model.
///
/// # Arguments
/// * `text` - Raw corpus text
/// * `format` - Record tag configuration
///
/// # Returns
/// The parsed model, with an empty clarity table.
///
/// # Errors
/// Returns `ParseError` if a tagged line fails the record shape or a
/// property pair lacks its separator.
pub fn parse_corpus(text: &str, format: &CorpusFormat) -> Result<StateModel, ParseError> {
    let mut model = StateModel::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let Some((tag, rest)) = line.split_once(' ') else {
            if line == format.entity_tag || line == format.catalog_tag {
                return Err(ParseError::malformed(line_no, line));
            }
            continue;
        };

        if tag == format.entity_tag {
            let (name, payload) = split_record(rest, line, line_no)?;
            let name = format.strip_entity_namespace(name);
            check_record_name(name, line, line_no)?;
            model.add_entity(parse_entity(name, payload)?);
        } else if tag == format.catalog_tag {
            let (name, payload) = split_record(rest, line, line_no)?;
            check_record_name(name, line, line_no)?;
            model.add_catalog(parse_catalog(name, payload));
        }
    }

    tracing::debug!(
        entities = model.entities.len(),
        catalogs = model.catalogs.len(),
        "parsed corpus"
    );

    Ok(model)
}

/// Splits the part after the tag into record name and payload.
fn split_record<'a>(
    rest: &'a str,
    line: &str,
    line_no: usize,
) -> Result<(&'a str, &'a str), ParseError> {
    let body = rest
        .strip_prefix(TAG_SEPARATOR)
        .ok_or_else(|| ParseError::malformed(line_no, line))?;
    body.split_once(PAYLOAD_SEPARATOR)
        .ok_or_else(|| ParseError::malformed(line_no, line))
}

/// Rejects record names outside the word-token shape.
///
/// Record names feed identifier generation, so a name must be a non-empty
/// run of word characters. For namespaced corpora the check runs on the
/// name left after the prefix is stripped.
fn check_record_name(name: &str, line: &str, line_no: usize) -> Result<(), ParseError> {
    let word = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if word {
        Ok(())
    } else {
        Err(ParseError::malformed(line_no, line))
    }
}

/// Parses an entity record payload into an entity definition.
fn parse_entity(name: &str, payload: &str) -> Result<EntityDef, ParseError> {
    let mut entity = EntityDef::new(name.to_string());
    for pair in payload.split_whitespace() {
        let Some((prop, value)) = pair.split_once(':') else {
            return Err(ParseError::missing_separator(name, pair));
        };
        entity.add_property(PropertyDef::new(prop.to_string(), value.to_string()));
    }

    Ok(entity)
}

/// Parses a catalog record payload into a catalog definition.
fn parse_catalog(name: &str, payload: &str) -> CatalogDef {
    let mut catalog = CatalogDef::new(name.to_string());
    for variant in payload.split(',') {
        let variant = variant.trim();
        if !variant.is_empty() {
            catalog.add_variant(variant.to_string());
        }
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "BLOCKINFO --- stone - \n\
BLOCKINFO --- lever - face:floor facing:north powered:false \n\
ENUMINFO --- AttachFace - ceiling,floor,wall\n\
[12:03:44] [Server thread/INFO]: unrelated log output\n\
BLOCKINFO --- oak_log - axis:y \n";

    #[test]
    fn test_parse_corpus() {
        let model = parse_corpus(CORPUS, &CorpusFormat::blocks()).expect("Failed to parse");

        let names: Vec<&str> = model.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["stone", "lever", "oak_log"]);

        let lever = model.get_entity("lever").unwrap();
        let props: Vec<(&str, &str)> = lever
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.raw_value.as_str()))
            .collect();
        assert_eq!(
            props,
            vec![("face", "floor"), ("facing", "north"), ("powered", "false")]
        );

        let catalog = model.get_catalog("AttachFace").unwrap();
        assert_eq!(catalog.variants, vec!["ceiling", "floor", "wall"]);
    }

    #[test]
    fn test_nullary_entity() {
        let model = parse_corpus(CORPUS, &CorpusFormat::blocks()).expect("Failed to parse");
        assert!(model.get_entity("stone").unwrap().is_nullary());
    }

    #[test]
    fn test_unrelated_lines_skipped() {
        let model = parse_corpus(CORPUS, &CorpusFormat::blocks()).expect("Failed to parse");
        assert_eq!(model.entities.len(), 3);
        assert_eq!(model.catalogs.len(), 1);
        assert!(model.clarity.is_empty());
    }

    #[test]
    fn test_namespace_stripped() {
        let corpus = "ENTITYINFO --- minecraft:allay - \nENTITYINFO --- cow - \n";
        let model = parse_corpus(corpus, &CorpusFormat::entities()).expect("Failed to parse");
        assert!(model.has_entity("allay"));
        assert!(model.has_entity("cow"));
        assert!(!model.has_entity("minecraft:allay"));
    }

    #[test]
    fn test_malformed_record_is_fatal() {
        let corpus = "BLOCKINFO --- stone\n";
        let result = parse_corpus(corpus, &CorpusFormat::blocks());
        assert!(matches!(
            result,
            Err(ParseError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_tag_separator_is_fatal() {
        let corpus = "BLOCKINFO -- stone - \n";
        let result = parse_corpus(corpus, &CorpusFormat::blocks());
        assert!(matches!(result, Err(ParseError::MalformedRecord { .. })));
    }

    #[test]
    fn test_empty_record_name_is_fatal() {
        for corpus in ["BLOCKINFO ---  - \n", "ENUMINFO ---  - a,b\n"] {
            let result = parse_corpus(corpus, &CorpusFormat::blocks());
            assert!(matches!(
                result,
                Err(ParseError::MalformedRecord { line: 1, .. })
            ));
        }
    }

    #[test]
    fn test_punctuated_record_name_is_fatal() {
        let corpus = "BLOCKINFO --- foo-bar - lit:true \n";
        let result = parse_corpus(corpus, &CorpusFormat::blocks());
        assert!(matches!(result, Err(ParseError::MalformedRecord { .. })));
    }

    #[test]
    fn test_namespace_only_name_is_fatal() {
        let corpus = "ENTITYINFO --- minecraft: - \n";
        let result = parse_corpus(corpus, &CorpusFormat::entities());
        assert!(matches!(result, Err(ParseError::MalformedRecord { .. })));
    }

    #[test]
    fn test_bare_tag_line_is_fatal() {
        let result = parse_corpus("BLOCKINFO\n", &CorpusFormat::blocks());
        assert!(matches!(
            result,
            Err(ParseError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_pair_without_separator_is_fatal() {
        let corpus = "BLOCKINFO --- lever - facing=north \n";
        let result = parse_corpus(corpus, &CorpusFormat::blocks());
        assert!(matches!(
            result,
            Err(ParseError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_trailing_comma_tolerated() {
        let corpus = "ENUMINFO --- Axis - x,y,z,\n";
        let model = parse_corpus(corpus, &CorpusFormat::blocks()).expect("Failed to parse");
        assert_eq!(model.get_catalog("Axis").unwrap().variants, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_catalog_accepted_at_parse() {
        let corpus = "ENUMINFO --- Hollow - \n";
        let model = parse_corpus(corpus, &CorpusFormat::blocks()).expect("Failed to parse");
        assert!(model.get_catalog("Hollow").unwrap().variants.is_empty());
    }
}
