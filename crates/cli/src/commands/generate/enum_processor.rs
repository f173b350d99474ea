use anyhow::Result;
use zero_model::{datamodel::Enum, schema::ZeroSchema};

use super::{
    EmitContext, SchemaProcessor,
    processor::{INDENT, property_key, quote},
};

impl SchemaProcessor<ZeroSchema> for Enum {
    fn process(
        &self,
        _parent: &ZeroSchema,
        context: &EmitContext,
        writer: &mut (dyn std::io::Write + Send),
    ) -> Result<()> {
        if context.enum_as_union {
            let variants = self
                .values
                .iter()
                .map(|value| quote(value.stored_value()))
                .collect::<Result<Vec<_>>>()?;

            // An enum without values has no inhabitants
            let variants = if variants.is_empty() {
                "never".to_string()
            } else {
                variants.join(" | ")
            };

            writeln!(writer, "export type {} = {variants};", self.name)?;
        } else {
            writeln!(writer, "export enum {} {{", self.name)?;
            for value in &self.values {
                writeln!(
                    writer,
                    "{INDENT}{} = {},",
                    property_key(&value.name)?,
                    quote(value.stored_value())?
                )?;
            }
            writeln!(writer, "}}")?;
        }

        Ok(())
    }
}
