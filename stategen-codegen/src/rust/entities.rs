//! Declarative entity list code generation.

use stategen_schema::ir::{escape_field_ident, to_type_ident};
use stategen_schema::types::{AuxEntityDef, AuxPropertyDef};
use tracing::warn;

use crate::generator::GeneratorConfig;

/// Maps a source type descriptor to the Rust type it is declared with.
fn descriptor_type(descriptor: &str) -> Option<&'static str> {
    match descriptor {
        "byte" => Some("i8"),
        "short" => Some("i16"),
        "int" => Some("i32"),
        "long" => Some("i64"),
        "float" => Some("f32"),
        "double" => Some("f64"),
        "boolean" => Some("bool"),
        "String" => Some("String"),
        "UUID" => Some("u128"),
        "NbtByteArray" => Some("Vec<i8>"),
        "NbtIntArray" => Some("Vec<i32>"),
        "NbtLongArray" => Some("Vec<i64>"),
        "NBTElement" => Some("fastnbt::Value"),
        _ => None,
    }
}

/// Generator for the declarative entity list.
///
/// Emits one `entities!` invocation with a line per entity, consumed by the
/// downstream macro layer. Property names are storage keys and appear
/// verbatim as field identifiers, reserved words excepted.
pub struct EntitiesGenerator<'a> {
    entities: &'a [AuxEntityDef],
    config: &'a GeneratorConfig,
}

impl<'a> EntitiesGenerator<'a> {
    /// Creates a new entity declarations generator.
    #[must_use]
    pub fn new(entities: &'a [AuxEntityDef], config: &'a GeneratorConfig) -> Self {
        Self { entities, config }
    }

    /// Generates the `entities!` invocation listing every entity.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("entities! {\n");
        for entity in self.entities {
            output.push_str(&format!("    {}\n", self.declaration(entity)));
        }
        output.push_str("}\n");

        output
    }

    /// Renders one entity declaration line.
    fn declaration(&self, entity: &AuxEntityDef) -> String {
        let mut line = format!(
            "\"{}:{}\", {}",
            self.config.namespace,
            entity.name,
            to_type_ident(&entity.name)
        );
        if !entity.properties.is_empty() {
            let pairs: Vec<String> = entity
                .properties
                .iter()
                .map(|property| Self::pair(&entity.name, property))
                .collect();
            line.push_str(" - ");
            line.push_str(&pairs.join(", "));
        }
        line.push(';');
        line
    }

    /// Renders one property pair, marking optional properties with `as opt`.
    fn pair(entity: &str, property: &AuxPropertyDef) -> String {
        let rust_type = match descriptor_type(&property.descriptor) {
            Some(rust_type) => rust_type.to_string(),
            None => {
                warn!(
                    entity = %entity,
                    property = %property.name,
                    descriptor = %property.descriptor,
                    "unknown type descriptor, emitting placeholder"
                );
                format!("() /* TODO: {} */", property.descriptor)
            }
        };

        let mut pair = format!("{}: {}", escape_field_ident(&property.name), rust_type);
        if property.optional {
            pair.push_str(" as opt");
        }
        pair
    }
}
