// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::LazyLock;

use zero_model::{
    datamodel::{Field, FieldKind},
    table::{ColumnMapping, ColumnType},
};

/// Column types for the primitive types of the data model. Anything not listed maps to a string.
pub static PRIMITIVE_COLUMN_TYPES: LazyLock<HashMap<&'static str, ColumnType>> =
    LazyLock::new(|| {
        HashMap::from([
            ("String", ColumnType::String),
            ("Boolean", ColumnType::Boolean),
            ("Int", ColumnType::Number),
            ("BigInt", ColumnType::Number),
            ("Float", ColumnType::Number),
            ("Decimal", ColumnType::Number),
            // Timestamps travel as epoch milliseconds
            ("DateTime", ColumnType::Number),
            ("Json", ColumnType::Json),
        ])
    });

pub fn column_type(field: &Field) -> ColumnType {
    match field.kind {
        FieldKind::Enum => ColumnType::Enumeration(field.typ.clone()),
        _ => PRIMITIVE_COLUMN_TYPES
            .get(field.typ.as_str())
            .cloned()
            .unwrap_or(ColumnType::String),
    }
}

/// Map a scalar or enum field to its column. The column name override is left for the caller,
/// which owns name resolution.
///
/// List fields are never passed here: the client schema has no array columns.
pub fn column_mapping(field: &Field) -> ColumnMapping {
    ColumnMapping {
        typ: column_type(field),
        is_optional: !field.is_required,
        original_column_name: None,
    }
}
