//! Typed state enum code generation.

use stategen_schema::ir::{ModelIr, ResolvedEntity, ResolvedProperty};
use stategen_schema::resolve::ResolvedType;

use crate::generator::GeneratorConfig;

/// Generator for the typed state enum definition.
///
/// Emits one constructor per entity in corpus order plus the `Other`
/// catch-all carrying the raw name and property bag of anything the model
/// does not recognize.
pub struct ListGenerator<'a> {
    ir: &'a ModelIr,
    config: &'a GeneratorConfig,
}

impl<'a> ListGenerator<'a> {
    /// Creates a new list generator.
    #[must_use]
    pub fn new(ir: &'a ModelIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the state enum definition.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("use std::{borrow::Cow, collections::HashMap};\n\n");
        output.push_str("use super::types::*;\n\n");
        output.push_str("#[derive(Debug, Clone)]\n");
        output.push_str(&format!("pub enum {}<'a> {{\n", self.config.type_name));
        for entity in &self.ir.entities {
            output.push_str(&format!("    {},\n", Self::constructor(entity)));
        }
        output.push_str(
            "    Other { name: Cow<'a, str>, properties: Option<HashMap<Cow<'a, str>, Cow<'a, str>>> },\n",
        );
        output.push_str("}\n");

        output
    }

    /// Renders one entity constructor, nullary or field-bearing.
    fn constructor(entity: &ResolvedEntity) -> String {
        if entity.is_nullary() {
            return entity.ident.clone();
        }

        let fields: Vec<String> = entity.properties.iter().map(Self::field).collect();
        format!("{} {{ {} }}", entity.ident, fields.join(", "))
    }

    /// Renders one field declaration.
    ///
    /// An unresolved property keeps the raw corpus value in a marker comment
    /// next to the unit placeholder, so the generated source fails downstream
    /// compilation at exactly that position until a human supplies the type.
    fn field(property: &ResolvedProperty) -> String {
        match &property.resolved {
            ResolvedType::Unresolved(raw) => {
                format!("{}: () /* TODO: {} */", property.field_ident, raw)
            }
            _ => format!("{}: {}", property.field_ident, property.rust_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stategen_schema::corpus::{CorpusFormat, parse_corpus};

    const CORPUS: &str = "BLOCKINFO --- stone - \n\
BLOCKINFO --- lever - facing:north powered:false \n\
BLOCKINFO --- cake - bites:3 \n\
BLOCKINFO --- mystery - shape:dodecahedron \n\
BLOCKINFO --- oak_slab - type:true \n\
ENUMINFO --- Direction - north,south,east,west\n";

    fn create_test_ir() -> ModelIr {
        let model = parse_corpus(CORPUS, &CorpusFormat::blocks()).expect("Failed to parse");
        ModelIr::from_model(&model)
    }

    #[test]
    fn test_generate_enum_shape() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = ListGenerator::new(&ir, &config).generate();

        assert!(output.contains("pub enum BlockState<'a> {"));
        assert!(output.contains("    Stone,\n"));
        assert!(output.contains("    Lever { facing: Direction, powered: bool },\n"));
        assert!(output.contains("    Cake { bites: u8 },\n"));
    }

    #[test]
    fn test_catch_all_constructor_is_last() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = ListGenerator::new(&ir, &config).generate();

        let other = output
            .find("Other { name: Cow<'a, str>, properties: Option<HashMap<Cow<'a, str>, Cow<'a, str>>> },")
            .unwrap();
        let last_entity = output.find("OakSlab").unwrap();
        assert!(last_entity < other);
    }

    #[test]
    fn test_unresolved_property_placeholder() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = ListGenerator::new(&ir, &config).generate();

        assert!(output.contains("    Mystery { shape: () /* TODO: dodecahedron */ },\n"));
    }

    #[test]
    fn test_keyword_field_escaped() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = ListGenerator::new(&ir, &config).generate();

        assert!(output.contains("    OakSlab { r#type: bool },\n"));
    }

    #[test]
    fn test_custom_type_name() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default().with_type_name("FluidState");
        let output = ListGenerator::new(&ir, &config).generate();

        assert!(output.contains("pub enum FluidState<'a> {"));
        assert!(!output.contains("BlockState"));
    }
}
