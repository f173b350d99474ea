use std::collections::BTreeSet;

use zero_model::schema::ZeroSchema;

const ZERO_PACKAGE: &str = "@rocicorp/zero";

pub(super) struct EmitContext {
    pub(super) enum_as_union: bool,
}

impl EmitContext {
    pub(super) fn new(enum_as_union: bool) -> Self {
        Self { enum_as_union }
    }

    pub(super) fn package(&self) -> &'static str {
        ZERO_PACKAGE
    }

    /// Builder functions the rendered module refers to, in import order.
    pub(super) fn builders(&self, schema: &ZeroSchema) -> BTreeSet<&'static str> {
        let mut builders = BTreeSet::from(["createSchema", "table"]);

        for table in &schema.tables {
            builders.extend(table.columns.values().map(|column| column.typ.builder_name()));

            if table.has_relationships() {
                builders.insert("relationships");
            }
        }

        builders
    }
}

/// Identifier for the relationships declared on a table bound to `variable_name`.
pub(super) fn relationships_variable_name(variable_name: &str) -> String {
    let base = variable_name
        .strip_suffix("Table")
        .unwrap_or(variable_name);
    format!("{base}Relationships")
}
