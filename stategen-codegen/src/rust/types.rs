//! Property value enum code generation.

use stategen_schema::ir::{ModelIr, ResolvedCatalog};

/// Generator for property value enum definitions.
pub struct TypeGenerator<'a> {
    ir: &'a ModelIr,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(ir: &'a ModelIr) -> Self {
        Self { ir }
    }

    /// Generates every property value enum definition.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for catalog in &self.ir.catalogs {
            output.push_str(&self.generate_catalog(catalog));
        }

        output
    }

    /// Generates one enum definition.
    ///
    /// Each variant carries its original corpus string in a serialize
    /// attribute, so `Display` and `FromStr` round-trip the exact input
    /// spelling regardless of how the identifier was normalized.
    fn generate_catalog(&self, catalog: &ResolvedCatalog) -> String {
        let mut output = String::new();

        output.push_str("#[derive(Debug, strum::Display, strum::EnumString, Clone, PartialEq, Eq)]\n");
        output.push_str(&format!("pub enum {} {{\n", catalog.ident));
        for variant in &catalog.variants {
            output.push_str(&format!(
                "    #[strum(serialize = \"{}\")]\n",
                variant.name
            ));
            output.push_str(&format!("    {},\n", variant.ident));
        }
        output.push_str("}\n\n");

        output
    }
}
