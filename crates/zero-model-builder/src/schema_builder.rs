// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use tracing::debug;

use zero_model::{datamodel::Document, schema::ZeroSchema, table::ZeroTable};

use crate::{
    context::BuildContext,
    error::SchemaBuildingError,
    join_table_builder,
    naming::{CamelCasePolicy, NamePolicy},
    options::BuildOptions,
    table_builder,
};

/// Build the client schema for a document using the camelCase naming policy.
pub fn build(document: &Document, options: &BuildOptions) -> Result<ZeroSchema, SchemaBuildingError> {
    build_with_policy(document, options, &CamelCasePolicy)
}

/// Build the client schema for a document.
///
/// Either the whole schema is built or the first error is returned; there is no partial result.
pub fn build_with_policy(
    document: &Document,
    options: &BuildOptions,
    naming: &dyn NamePolicy,
) -> Result<ZeroSchema, SchemaBuildingError> {
    let context = BuildContext::new(document, options, naming);

    let mut tables = context
        .models
        .iter()
        .map(|model| table_builder::build_table(model, &context))
        .collect::<Result<Vec<_>, _>>()?;

    tables.extend(join_table_builder::build_join_tables(&context)?);

    check_unique_variables(&tables)?;

    debug!(
        "Built {} tables ({} models in the document)",
        tables.len(),
        document.models.len()
    );

    Ok(ZeroSchema {
        tables,
        enums: document.enums.clone(),
    })
}

/// Emitted code binds every table to its variable name, so no two tables may share one.
fn check_unique_variables(tables: &[ZeroTable]) -> Result<(), SchemaBuildingError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for table in tables {
        if let Some(first) = seen.insert(&table.variable_name, &table.model_name) {
            return Err(SchemaBuildingError::DuplicateTable {
                first: first.to_string(),
                second: table.model_name.clone(),
                variable: table.variable_name.clone(),
            });
        }
    }

    Ok(())
}
