use anyhow::Result;
use zero_model::{
    relation::{Cardinality, RelationLink, RelationPath},
    schema::ZeroSchema,
    table::ZeroTable,
};

use super::{
    EmitContext, SchemaProcessor,
    context::relationships_variable_name,
    processor::{INDENT, property_key, quoted_list},
};

/// Writes the `relationships(...)` declaration of a table. Callers skip tables without
/// relationships.
pub(super) struct TableRelationships<'a>(pub(super) &'a ZeroTable);

impl SchemaProcessor<ZeroSchema> for TableRelationships<'_> {
    fn process(
        &self,
        _parent: &ZeroSchema,
        _context: &EmitContext,
        writer: &mut (dyn std::io::Write + Send),
    ) -> Result<()> {
        let table = self.0;

        let helpers = [Cardinality::One, Cardinality::Many]
            .into_iter()
            .filter(|cardinality| {
                table
                    .relationships
                    .values()
                    .any(|relationship| relationship.cardinality == *cardinality)
            })
            .map(|cardinality| cardinality.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(
            writer,
            "export const {} = relationships({}, ({{ {helpers} }}) => ({{",
            relationships_variable_name(&table.variable_name),
            table.variable_name
        )?;

        for (name, relationship) in &table.relationships {
            let helper = relationship.cardinality.as_str();
            let name = property_key(name)?;

            match &relationship.path {
                RelationPath::Direct(link) => {
                    writeln!(writer, "{INDENT}{name}: {helper}({{")?;
                    write_link_fields(writer, link, 2)?;
                    writeln!(writer, "{INDENT}}}),")?;
                }
                RelationPath::Chained(first, second) => {
                    writeln!(writer, "{INDENT}{name}: {helper}(")?;
                    for link in [first, second] {
                        writeln!(writer, "{INDENT}{INDENT}{{")?;
                        write_link_fields(writer, link, 3)?;
                        writeln!(writer, "{INDENT}{INDENT}}},")?;
                    }
                    writeln!(writer, "{INDENT}),")?;
                }
            }
        }

        writeln!(writer, "}}));")?;

        Ok(())
    }
}

fn write_link_fields(
    writer: &mut (dyn std::io::Write + Send),
    link: &RelationLink,
    depth: usize,
) -> Result<()> {
    let indent = INDENT.repeat(depth);

    writeln!(
        writer,
        "{indent}sourceField: [{}],",
        quoted_list(&link.source_fields)?
    )?;
    writeln!(
        writer,
        "{indent}destField: [{}],",
        quoted_list(&link.dest_fields)?
    )?;
    writeln!(writer, "{indent}destSchema: {},", link.dest_table)?;

    Ok(())
}
