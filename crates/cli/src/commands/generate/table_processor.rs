use anyhow::Result;
use zero_model::{
    schema::ZeroSchema,
    table::{ColumnMapping, ZeroTable},
};

use super::{
    EmitContext, SchemaProcessor,
    processor::{INDENT, property_key, quote, quoted_list},
};

impl SchemaProcessor<ZeroSchema> for ZeroTable {
    fn process(
        &self,
        _parent: &ZeroSchema,
        context: &EmitContext,
        writer: &mut (dyn std::io::Write + Send),
    ) -> Result<()> {
        writeln!(
            writer,
            "export const {} = table({})",
            self.variable_name,
            quote(&self.table_name)?
        )?;

        if let Some(original_table_name) = &self.original_table_name {
            writeln!(writer, "{INDENT}.from({})", quote(original_table_name)?)?;
        }

        writeln!(writer, "{INDENT}.columns({{")?;
        for (key, column) in &self.columns {
            write!(writer, "{INDENT}{INDENT}{}: ", property_key(key)?)?;
            column.process(self, context, writer)?;
            writeln!(writer, ",")?;
        }
        writeln!(writer, "{INDENT}}})")?;

        writeln!(
            writer,
            "{INDENT}.primaryKey({});",
            quoted_list(&self.primary_key)?
        )?;

        Ok(())
    }
}

impl SchemaProcessor<ZeroTable> for ColumnMapping {
    fn process(
        &self,
        _parent: &ZeroTable,
        _context: &EmitContext,
        writer: &mut (dyn std::io::Write + Send),
    ) -> Result<()> {
        write!(writer, "{}", self.typ)?;

        if self.is_optional {
            write!(writer, ".optional()")?;
        }

        if let Some(original_column_name) = &self.original_column_name {
            write!(writer, ".from({})", quote(original_column_name)?)?;
        }

        Ok(())
    }
}
