// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Synthesize the hidden tables behind implicit many-to-many relations.
//!
//! A join table `_<relation>` has two columns: `A` referring to the model whose name sorts
//! first, and `B` referring to the other one. Each relation is synthesized once, from the side
//! that takes column `A`.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use zero_model::{
    datamodel::{Field, Model},
    relation::{Cardinality, RelationLink, Relationship},
    table::{ColumnMapping, ZeroTable},
};

use crate::{
    context::BuildContext,
    error::SchemaBuildingError,
    relation_builder::{
        JOIN_COLUMN_A, JOIN_COLUMN_B, find_back_reference, is_first_side, join_table_name,
        relation_name, relation_target,
    },
    type_mapper,
};

pub fn build_join_tables(context: &BuildContext) -> Result<Vec<ZeroTable>, SchemaBuildingError> {
    let mut synthesized = HashSet::new();
    let mut join_tables = Vec::new();

    for model in context.models.iter() {
        for field in model.relation_fields().filter(|field| field.is_list) {
            if context.options.is_excluded(&field.typ) {
                continue;
            }

            let target = relation_target(model, field, context)?;

            let Some(back_reference) = find_back_reference(model, field, target) else {
                continue;
            };

            if !back_reference.is_list || !is_first_side(model, field, target, back_reference) {
                continue;
            }

            let relation = relation_name(model, field);
            let join_name = join_table_name(&relation);

            if synthesized.insert(join_name.clone()) {
                debug!(
                    "Synthesizing join table '{join_name}' for '{}' and '{}'",
                    model.name, target.name
                );
                join_tables.push(build_join_table(
                    &join_name, &relation, model, target, context,
                )?);
            }
        }
    }

    Ok(join_tables)
}

fn build_join_table(
    join_name: &str,
    relation: &str,
    first: &Model,
    second: &Model,
    context: &BuildContext,
) -> Result<ZeroTable, SchemaBuildingError> {
    let first_identity = context.join_identity(first, relation)?;
    let second_identity = context.join_identity(second, relation)?;

    // The join columns reference the identities, so they share their type but are never optional
    let join_column = |typ| ColumnMapping {
        typ,
        is_optional: false,
        original_column_name: None,
    };

    let columns = IndexMap::from([
        (
            JOIN_COLUMN_A.to_string(),
            join_column(type_mapper::column_type(first_identity)),
        ),
        (
            JOIN_COLUMN_B.to_string(),
            join_column(type_mapper::column_type(second_identity)),
        ),
    ]);

    let (first_relationship, second_relationship) = {
        let first_name = context.naming.to_target_case(&first.name);
        let second_name = context.naming.to_target_case(&second.name);

        if first_name == second_name {
            (format!("{first_name}A"), format!("{second_name}B"))
        } else {
            (first_name, second_name)
        }
    };

    let back_link = |column: &str, model: &Model, identity: &Field| {
        Relationship::direct(
            Cardinality::One,
            RelationLink {
                source_fields: vec![column.to_string()],
                dest_fields: vec![context.column_name(identity).name],
                dest_table: context.variable_name(&model.name),
            },
        )
    };

    let relationships = IndexMap::from([
        (
            first_relationship,
            back_link(JOIN_COLUMN_A, first, first_identity),
        ),
        (
            second_relationship,
            back_link(JOIN_COLUMN_B, second, second_identity),
        ),
    ]);

    let table_name = context.table_name(join_name, None);

    Ok(ZeroTable {
        table_name: table_name.name,
        original_table_name: table_name.original,
        model_name: join_name.to_string(),
        variable_name: context.variable_name(join_name),
        columns,
        relationships,
        primary_key: vec![JOIN_COLUMN_A.to_string(), JOIN_COLUMN_B.to_string()],
    })
}
