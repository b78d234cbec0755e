//! Generic-to-typed conversion code generation.

use stategen_schema::ir::{ModelIr, ResolvedEntity};

use crate::chunk::{dispatch_chain, partition, unit_name};
use crate::generator::GeneratorConfig;

/// Property extraction macro emitted ahead of the dispatch units.
///
/// Field identifiers and bag keys are passed as separate arguments, so a
/// raw-identifier field (`r#type`) still looks up its verbatim key
/// (`"type"`). Any missing key or failed parse escapes the enclosing unit
/// with the catch-all constructor; conversion never returns an error.
const TRY_MAKE: &str = r"macro_rules! try_make {
    ($entity:ident, $state:ident; $($field:ident: $key:literal),+) => {
        match $state.properties.as_ref() {
            Some(props) => _Self::$entity {
                $(
                    $field: match props.get($key) {
                        Some(val) => match <_>::from_str(val).ok() {
                            Some(val) => val,
                            None => return Some(_Self::Other { name: $state.name.to_owned(), properties: $state.properties.to_owned() }),
                        },
                        None => return Some(_Self::Other { name: $state.name.to_owned(), properties: $state.properties.to_owned() }),
                    }
                ),+
            },
            None => _Self::Other { name: $state.name.to_owned(), properties: $state.properties.to_owned() },
        }
    };
}
";

/// Generator for the generic-to-typed conversion source.
///
/// Entity dispatch is split into numbered units of at most
/// `config.chunk_size` entities; each unit matches the namespaced entity
/// name over its own slice and returns `None` otherwise. The emitted `From`
/// implementation evaluates the units as one linear chain ending in the
/// catch-all constructor, which behaves exactly like a single flat match.
pub struct DeGenerator<'a> {
    ir: &'a ModelIr,
    config: &'a GeneratorConfig,
}

impl<'a> DeGenerator<'a> {
    /// Creates a new deserialization generator.
    #[must_use]
    pub fn new(ir: &'a ModelIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the generic-to-typed conversion source.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("use std::str::FromStr;\n\n");
        output.push_str("use crate::schema;\n");
        output.push_str(&format!("use super::list::{};\n\n", self.config.type_name));
        output.push_str(TRY_MAKE);
        output.push_str(&format!(
            "\ntype _Self<'a> = {}<'a>;\n\n",
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
            "fn {}<'a>(state: &schema::{}<'a>) -> Option<_Self<'a>> {{\n",
            unit_name("from_chunk", index),
            self.config.type_name
        ));
        output.push_str("    Some(match state.name.as_ref() {\n");
        for entity in entities {
            output.push_str(&format!("        {},\n", self.arm(entity)));
        }
        output.push_str("        _ => return None,\n");
        output.push_str("    })\n");
        output.push_str("}\n\n");

        output
    }

    /// Renders one match arm, nullary or through the extraction macro.
    fn arm(&self, entity: &ResolvedEntity) -> String {
        let name = format!("\"{}:{}\"", self.config.namespace, entity.name);
        if entity.is_nullary() {
            return format!("{name} => _Self::{}", entity.ident);
        }

        let pairs: Vec<String> = entity
            .properties
            .iter()
            .map(|property| format!("{}: \"{}\"", property.field_ident, property.name))
            .collect();
        format!(
            "{name} => try_make!({}, state; {})",
            entity.ident,
            pairs.join(", ")
        )
    }

    /// Generates the `From` implementation chaining every dispatch unit.
    fn generate_from_impl(&self, units: usize) -> String {
        let mut output = String::new();
        let type_name = &self.config.type_name;

        output.push_str(&format!(
            "impl<'a> From<&schema::{type_name}<'a>> for {type_name}<'a> {{\n"
        ));
        output.push_str(&format!(
            "    fn from(state: &schema::{type_name}<'a>) -> Self {{\n"
        ));
        output.push_str(&format!(
            "        {}\n",
            dispatch_chain("from_chunk", units, "state")
        ));
        output.push_str(&format!(
            "            .unwrap_or_else(|| {type_name}::Other {{\n"
        ));
        output.push_str("                name: state.name.to_owned(),\n");
        output.push_str("                properties: state.properties.to_owned(),\n");
        output.push_str("            })\n");
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}
