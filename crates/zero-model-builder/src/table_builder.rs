// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;
use tracing::debug;

use zero_model::{
    datamodel::Model,
    table::{ColumnMapping, ZeroTable},
};

use crate::{context::BuildContext, error::SchemaBuildingError, relation_builder, type_mapper};

/// Build the table for a (non-excluded) model of the document.
pub fn build_table(model: &Model, context: &BuildContext) -> Result<ZeroTable, SchemaBuildingError> {
    let columns = build_columns(model, context)?;
    let primary_key = context.primary_key_columns(model)?;
    let table_name = context.table_name(&model.name, model.db_name.as_deref());
    let relationships = relation_builder::build_relationships(model, context)?;

    Ok(ZeroTable {
        table_name: table_name.name,
        original_table_name: table_name.original,
        model_name: model.name.clone(),
        variable_name: context.variable_name(&model.name),
        columns,
        relationships,
        primary_key,
    })
}

fn build_columns(
    model: &Model,
    context: &BuildContext,
) -> Result<IndexMap<String, ColumnMapping>, SchemaBuildingError> {
    let mut columns = IndexMap::new();

    for field in model.fields.iter().filter(|field| !field.is_relation()) {
        if field.is_list {
            // The client schema has no array columns
            debug!(
                "Omitting list field '{}.{}' from the generated columns",
                model.name, field.name
            );
            continue;
        }

        let column_name = context.column_name(field);

        let mapping = ColumnMapping {
            original_column_name: column_name.original,
            ..type_mapper::column_mapping(field)
        };

        if columns.insert(column_name.name.clone(), mapping).is_some() {
            return Err(SchemaBuildingError::DuplicateColumn {
                model: model.name.clone(),
                column: column_name.name,
            });
        }
    }

    Ok(columns)
}
