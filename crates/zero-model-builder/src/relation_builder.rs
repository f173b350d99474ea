// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolve relation fields into relationships between tables.
//!
//! Each relation field of a model is paired with its back-reference on the target model (the
//! field with the same relation name whose type is the enclosing model). The pair determines the
//! shape of the relationship:
//!
//! | field    | back-reference | result                                                  |
//! |----------|----------------|---------------------------------------------------------|
//! | list     | scalar         | `many`, keys are the back-reference's referenced/local keys |
//! | list     | list           | `many`, chained through the implicit join table         |
//! | scalar   | any            | `one`, keys taken from whichever side declares `fields` |
//!
//! Every key is run through the owning model's column name resolution, so the relationship
//! refers to the final column keys.

use indexmap::IndexMap;
use tracing::debug;

use zero_model::{
    datamodel::{Field, Model},
    relation::{Cardinality, RelationLink, Relationship},
};

use crate::{context::BuildContext, error::SchemaBuildingError};

/// Fixed column of a join table that refers to the model sorting first.
pub const JOIN_COLUMN_A: &str = "A";
/// Fixed column of a join table that refers to the model sorting second.
pub const JOIN_COLUMN_B: &str = "B";

pub fn build_relationships(
    model: &Model,
    context: &BuildContext,
) -> Result<IndexMap<String, Relationship>, SchemaBuildingError> {
    let mut relationships = IndexMap::new();

    for field in model.relation_fields() {
        if context.options.is_excluded(&field.typ) {
            debug!(
                "Dropping relationship '{}.{}': model '{}' is excluded",
                model.name, field.name, field.typ
            );
            continue;
        }

        let target = relation_target(model, field, context)?;
        let relationship = build_relationship(model, field, target, context)?;

        relationships.insert(field.name.clone(), relationship);
    }

    Ok(relationships)
}

pub(crate) fn relation_target<'a>(
    model: &Model,
    field: &Field,
    context: &BuildContext<'a>,
) -> Result<&'a Model, SchemaBuildingError> {
    context
        .models
        .get(&field.typ)
        .ok_or_else(|| SchemaBuildingError::UnknownRelationTarget {
            model: model.name.clone(),
            field: field.name.clone(),
            target: field.typ.clone(),
        })
}

fn build_relationship(
    model: &Model,
    field: &Field,
    target: &Model,
    context: &BuildContext,
) -> Result<Relationship, SchemaBuildingError> {
    let back_reference = find_back_reference(model, field, target);

    let missing_back_reference = || SchemaBuildingError::MissingBackReference {
        model: model.name.clone(),
        field: field.name.clone(),
        target: target.name.clone(),
        relation: relation_name(model, field),
    };
    let missing_foreign_key = || SchemaBuildingError::MissingForeignKey {
        model: model.name.clone(),
        field: field.name.clone(),
        relation: relation_name(model, field),
    };

    if field.is_list {
        let back_reference = back_reference.ok_or_else(missing_back_reference)?;

        if back_reference.is_list {
            return many_to_many(model, field, target, back_reference, context);
        }

        // One-to-many: the foreign key lives on the target, declared by the back-reference
        if back_reference.relation_from_fields.is_empty() {
            return Err(missing_foreign_key());
        }
        let source_fields = referenced_keys(back_reference, model, context)?;
        let dest_fields = context.column_keys(target, &back_reference.relation_from_fields)?;

        return direct_link(
            model,
            field,
            Cardinality::Many,
            source_fields,
            dest_fields,
            target,
            context,
        );
    }

    if !field.relation_from_fields.is_empty() {
        // The foreign key lives on this model
        let source_fields = context.column_keys(model, &field.relation_from_fields)?;
        let dest_fields = referenced_keys(field, target, context)?;

        return direct_link(
            model,
            field,
            Cardinality::One,
            source_fields,
            dest_fields,
            target,
            context,
        );
    }

    match back_reference {
        Some(back_reference) if !back_reference.relation_from_fields.is_empty() => {
            let source_fields = referenced_keys(back_reference, model, context)?;
            let dest_fields = context.column_keys(target, &back_reference.relation_from_fields)?;

            direct_link(
                model,
                field,
                Cardinality::One,
                source_fields,
                dest_fields,
                target,
                context,
            )
        }
        Some(_) => Err(missing_foreign_key()),
        None => Err(missing_back_reference()),
    }
}

/// Column keys of `referenced` that `field` points at: its declared `references`, defaulting to
/// the primary key of `referenced`.
fn referenced_keys(
    field: &Field,
    referenced: &Model,
    context: &BuildContext,
) -> Result<Vec<String>, SchemaBuildingError> {
    if field.relation_to_fields.is_empty() {
        context.primary_key_columns(referenced)
    } else {
        context.column_keys(referenced, &field.relation_to_fields)
    }
}

fn direct_link(
    model: &Model,
    field: &Field,
    cardinality: Cardinality,
    source_fields: Vec<String>,
    dest_fields: Vec<String>,
    target: &Model,
    context: &BuildContext,
) -> Result<Relationship, SchemaBuildingError> {
    if source_fields.len() != dest_fields.len() || source_fields.is_empty() {
        return Err(SchemaBuildingError::MismatchedRelationKeys {
            model: model.name.clone(),
            field: field.name.clone(),
            local: source_fields.len(),
            target: dest_fields.len(),
        });
    }

    Ok(Relationship::direct(
        cardinality,
        RelationLink {
            source_fields,
            dest_fields,
            dest_table: context.variable_name(&target.name),
        },
    ))
}

fn many_to_many(
    model: &Model,
    field: &Field,
    target: &Model,
    back_reference: &Field,
    context: &BuildContext,
) -> Result<Relationship, SchemaBuildingError> {
    let relation = relation_name(model, field);
    let join_name = join_table_name(&relation);
    let join_variable = context.variable_name(&join_name);

    let (own_column, other_column) = if is_first_side(model, field, target, back_reference) {
        (JOIN_COLUMN_A, JOIN_COLUMN_B)
    } else {
        (JOIN_COLUMN_B, JOIN_COLUMN_A)
    };

    let own_identity = context.join_identity(model, &relation)?;
    let target_identity = context.join_identity(target, &relation)?;

    Ok(Relationship::chained(
        RelationLink {
            source_fields: vec![context.column_name(own_identity).name],
            dest_fields: vec![own_column.to_string()],
            dest_table: join_variable,
        },
        RelationLink {
            source_fields: vec![other_column.to_string()],
            dest_fields: vec![context.column_name(target_identity).name],
            dest_table: context.variable_name(&target.name),
        },
    ))
}

/// The relation name of a field. Relation fields without an explicit name get the default
/// `<First>To<Second>` name, with the two model names in ordinal order.
pub(crate) fn relation_name(model: &Model, field: &Field) -> String {
    match &field.relation_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => {
            let (first, second) = if model.name.as_str() <= field.typ.as_str() {
                (&model.name, &field.typ)
            } else {
                (&field.typ, &model.name)
            };
            format!("{first}To{second}")
        }
    }
}

pub(crate) fn join_table_name(relation_name: &str) -> String {
    format!("_{relation_name}")
}

/// Find the field of `target` completing the relation of `field` (declared on `model`).
///
/// For self-relations the field itself is never its own back-reference, so a `parent`/`children`
/// pair on one model resolves to each other.
pub(crate) fn find_back_reference<'a>(
    model: &Model,
    field: &Field,
    target: &'a Model,
) -> Option<&'a Field> {
    let relation = relation_name(model, field);

    target.relation_fields().find(|candidate| {
        let type_matches = candidate.typ == model.name;
        let is_same_field = model.name == target.name && candidate.name == field.name;

        type_matches && !is_same_field && relation_name(target, candidate) == relation
    })
}

/// Whether `model` takes the `A` side of a join table: the model whose name sorts first (ordinal
/// comparison), or for a self-relation, the field whose name sorts first.
pub(crate) fn is_first_side(
    model: &Model,
    field: &Field,
    target: &Model,
    back_reference: &Field,
) -> bool {
    if model.name == target.name {
        field.name < back_reference.name
    } else {
        model.name < target.name
    }
}
