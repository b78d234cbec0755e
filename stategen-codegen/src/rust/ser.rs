//! Typed-to-generic conversion code generation.

use stategen_schema::ir::{ModelIr, ResolvedEntity};

use crate::chunk::{dispatch_chain, partition, unit_name};
use crate::generator::GeneratorConfig;

/// Generator for the typed-to-generic conversion source.
///
/// Mirrors the dispatch layout of the opposite direction: numbered units of
/// at most `config.chunk_size` entities chained at the emitted `From`
/// implementation. The catch-all constructor is copied through before the
/// chain, so the chain itself is total over the remaining constructors and
/// its tail is unreachable.
pub struct SerGenerator<'a> {
    ir: &'a ModelIr,
    config: &'a GeneratorConfig,
}

impl<'a> SerGenerator<'a> {
    /// Creates a new serialization generator.
    #[must_use]
    pub fn new(ir: &'a ModelIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the typed-to-generic conversion source.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("use std::{borrow::Cow, collections::HashMap};\n\n");
        output.push_str("use crate::schema;\n");
        output.push_str(&format!("use super::list::{};\n\n", self.config.type_name));
        output.push_str(&format!(
            "type _Self<'a> = schema::{}<'a>;\n\n",
            self.config.type_name
        ));

        let ranges = partition(self.ir.entities.len(), self.config.chunk_size);
        let units = ranges.len();
        for (index, range) in ranges.into_iter().enumerate() {
            output.push_str(&self.generate_unit(index, &self.ir.entities[range]));
        }
        output.push_str(&self.generate_from_impl(units));

        output
    }

    /// Generates one dispatch unit over a slice of the entity list.
    fn generate_unit(&self, index: usize, entities: &[ResolvedEntity]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "fn {}<'a>(state: &{}<'a>) -> Option<_Self<'a>> {{\n",
            unit_name("into_chunk", index),
            self.config.type_name
        ));
        output.push_str("    Some(match state {\n");
        for entity in entities {
            output.push_str(&self.arm(entity));
        }
        output.push_str("        _ => return None,\n");
        output.push_str("    })\n");
        output.push_str("}\n\n");

        output
    }

    /// Renders one match arm rebuilding the generic name and property bag.
    ///
    /// Bag entries borrow the verbatim property key and render the typed
    /// field through its string form, in declared field order.
    fn arm(&self, entity: &ResolvedEntity) -> String {
        let type_name = &self.config.type_name;
        let qualified = format!("\"{}:{}\"", self.config.namespace, entity.name);
        if entity.is_nullary() {
            return format!(
                "        {type_name}::{} => _Self {{ name: Cow::Borrowed({qualified}), properties: None }},\n",
                entity.ident
            );
        }

        let fields: Vec<&str> = entity
            .properties
            .iter()
            .map(|property| property.field_ident.as_str())
            .collect();
        let mut output = format!(
            "        {type_name}::{} {{ {} }} => _Self {{\n",
            entity.ident,
            fields.join(", ")
        );
        output.push_str(&format!("            name: Cow::Borrowed({qualified}),\n"));
        output.push_str("            properties: Some(HashMap::from([\n");
        for property in &entity.properties {
            output.push_str(&format!(
                "                (Cow::Borrowed(\"{}\"), Cow::Owned({}.to_string())),\n",
                property.name, property.field_ident
            ));
        }
        output.push_str("            ])),\n");
        output.push_str("        },\n");

        output
    }

    /// Generates the `From` implementation chaining every dispatch unit.
    fn generate_from_impl(&self, units: usize) -> String {
        let mut output = String::new();
        let type_name = &self.config.type_name;

        output.push_str(&format!(
            "impl<'a> From<&{type_name}<'a>> for schema::{type_name}<'a> {{\n"
        ));
        output.push_str(&format!("    fn from(state: &{type_name}<'a>) -> Self {{\n"));
        output.push_str(&format!(
            "        if let {type_name}::Other {{ name, properties }} = state {{\n"
        ));
        output.push_str("            return Self {\n");
        output.push_str("                name: name.to_owned(),\n");
        output.push_str("                properties: properties.to_owned(),\n");
        output.push_str("            };\n");
        output.push_str("        }\n");
        output.push_str(&format!(
            "        {}\n",
            dispatch_chain("into_chunk", units, "state")
        ));
        output.push_str("            .unwrap_or_else(|| unreachable!())\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stategen_schema::corpus::{CorpusFormat, parse_corpus};

    const CORPUS: &str = "BLOCKINFO --- stone - \n\
BLOCKINFO --- lever - facing:north powered:false \n\
BLOCKINFO --- cake - bites:3 \n\
BLOCKINFO --- oak_slab - type:true \n\
BLOCKINFO --- air - \n\
ENUMINFO --- Direction - north,south,east,west\n";

    fn create_test_ir() -> ModelIr {
        let model = parse_corpus(CORPUS, &CorpusFormat::blocks()).expect("Failed to parse");
        ModelIr::from_model(&model)
    }

    #[test]
    fn test_nullary_arm() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = SerGenerator::new(&ir, &config).generate();

        assert!(output.contains(
            "        BlockState::Stone => _Self { name: Cow::Borrowed(\"minecraft:stone\"), properties: None },\n"
        ));
    }

    #[test]
    fn test_property_arm_rebuilds_bag_in_field_order() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = SerGenerator::new(&ir, &config).generate();

        assert!(output.contains("        BlockState::Lever { facing, powered } => _Self {\n"));
        let facing = output
            .find("(Cow::Borrowed(\"facing\"), Cow::Owned(facing.to_string())),")
            .unwrap();
        let powered = output
            .find("(Cow::Borrowed(\"powered\"), Cow::Owned(powered.to_string())),")
            .unwrap();
        assert!(facing < powered);
    }

    #[test]
    fn test_keyword_field_binds_raw_but_emits_verbatim_key() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = SerGenerator::new(&ir, &config).generate();

        assert!(output.contains("BlockState::OakSlab { r#type } => _Self {"));
        assert!(output.contains("(Cow::Borrowed(\"type\"), Cow::Owned(r#type.to_string())),"));
    }

    #[test]
    fn test_catch_all_copied_through_before_chain() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = SerGenerator::new(&ir, &config).generate();

        let passthrough = output
            .find("if let BlockState::Other { name, properties } = state {")
            .unwrap();
        let chain = output.find("into_chunk_0(state)").unwrap();
        assert!(passthrough < chain);
        assert!(output.contains(".unwrap_or_else(|| unreachable!())"));
    }

    #[test]
    fn test_chunked_units_chain_in_order() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default().with_chunk_size(2);
        let output = SerGenerator::new(&ir, &config).generate();

        assert!(output.contains("fn into_chunk_0<'a>"));
        assert!(output.contains("fn into_chunk_1<'a>"));
        assert!(output.contains("fn into_chunk_2<'a>"));

        let first = output.find(".or_else(|| into_chunk_1(state))").unwrap();
        let second = output.find(".or_else(|| into_chunk_2(state))").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_partitioning_keeps_arm_order() {
        let ir = create_test_ir();
        let small = GeneratorConfig::default().with_chunk_size(2);
        let large = GeneratorConfig::default().with_chunk_size(200);

        let arms = |output: &str| -> Vec<String> {
            output
                .lines()
                .filter(|line| line.contains("Cow::Borrowed(\"minecraft:"))
                .map(str::to_string)
                .collect()
        };
        let chunked = SerGenerator::new(&ir, &small).generate();
        let flat = SerGenerator::new(&ir, &large).generate();

        assert_eq!(arms(&chunked), arms(&flat));
    }

    #[test]
    fn test_unit_signature_matches_opposite_direction() {
        let ir = create_test_ir();
        let config = GeneratorConfig::default();
        let output = SerGenerator::new(&ir, &config).generate();

        assert!(output.contains("fn into_chunk_0<'a>(state: &BlockState<'a>) -> Option<_Self<'a>> {"));
        assert!(output.contains("type _Self<'a> = schema::BlockState<'a>;"));
    }
}
