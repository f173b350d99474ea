use anyhow::Result;
use zero_model::schema::ZeroSchema;

use super::{
    EmitContext, SchemaProcessor,
    context::relationships_variable_name,
    processor::INDENT,
    relationship_processor::TableRelationships,
};

pub(super) const HEADER: &str =
    "// This file was generated by zero-schema. Do not edit it by hand; rerun the generator instead.";

impl SchemaProcessor<()> for ZeroSchema {
    fn process(
        &self,
        _parent: &(),
        context: &EmitContext,
        writer: &mut (dyn std::io::Write + Send),
    ) -> Result<()> {
        writeln!(writer, "{HEADER}")?;
        writeln!(writer)?;

        let builders = context.builders(self).into_iter().collect::<Vec<_>>();
        writeln!(
            writer,
            "import {{ {} }} from \"{}\";",
            builders.join(", "),
            context.package()
        )?;

        for enum_ in &self.enums {
            writeln!(writer)?;
            enum_.process(self, context, writer)?;
        }

        for table in &self.tables {
            writeln!(writer)?;
            table.process(self, context, writer)?;
        }

        let related_tables = self
            .tables
            .iter()
            .filter(|table| table.has_relationships())
            .collect::<Vec<_>>();

        for table in &related_tables {
            writeln!(writer)?;
            TableRelationships(table).process(self, context, writer)?;
        }

        let table_variables = self
            .tables
            .iter()
            .map(|table| table.variable_name.as_str())
            .collect::<Vec<_>>();
        let relationship_variables = related_tables
            .iter()
            .map(|table| relationships_variable_name(&table.variable_name))
            .collect::<Vec<_>>();

        writeln!(writer)?;
        writeln!(writer, "export const schema = createSchema({{")?;
        writeln!(writer, "{INDENT}tables: [{}],", table_variables.join(", "))?;
        writeln!(
            writer,
            "{INDENT}relationships: [{}],",
            relationship_variables.join(", ")
        )?;
        writeln!(writer, "}});")?;
        writeln!(writer)?;
        writeln!(writer, "export type Schema = typeof schema;")?;

        Ok(())
    }
}
