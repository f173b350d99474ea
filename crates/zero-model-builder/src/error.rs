// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaBuildingError {
    #[error(
        "Model '{model}' has no primary key. Mark a field with @id or declare a composite key with @@id"
    )]
    MissingPrimaryKey { model: String },

    #[error("Field '{model}.{field}' refers to '{target}', which is not a model in the document")]
    UnknownRelationTarget {
        model: String,
        field: String,
        target: String,
    },

    #[error(
        "Cannot synthesize the join table for relation '{relation}': model '{model}' must have exactly one identity field"
    )]
    MissingJoinIdentity { model: String, relation: String },

    #[error(
        "Could not find the matching field of '{model}.{field}' in model '{target}' for relation '{relation}'"
    )]
    MissingBackReference {
        model: String,
        field: String,
        target: String,
        relation: String,
    },

    #[error(
        "Relation '{relation}' of '{model}.{field}' declares its key fields on neither side of the relation"
    )]
    MissingForeignKey {
        model: String,
        field: String,
        relation: String,
    },

    #[error(
        "Relation field '{model}.{field}' has {local} local key field(s) but {target} referenced key field(s)"
    )]
    MismatchedRelationKeys {
        model: String,
        field: String,
        local: usize,
        target: usize,
    },

    #[error("Model '{model}' maps more than one field to the column '{column}'")]
    DuplicateColumn { model: String, column: String },

    #[error("Key field '{field}' is not a scalar field of model '{model}'")]
    UnknownKeyField { model: String, field: String },

    #[error("Models '{first}' and '{second}' would both be bound to '{variable}'")]
    DuplicateTable {
        first: String,
        second: String,
        variable: String,
    },
}
