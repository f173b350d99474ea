// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::relation::Relationship;

/// Column types supported by the client schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    String,
    Boolean,
    Number,
    Json,
    /// An enumeration parameterized by the name of the enum type
    Enumeration(String),
}

impl ColumnType {
    /// Name of the schema builder function that declares this type.
    pub fn builder_name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::Number => "number",
            ColumnType::Json => "json",
            ColumnType::Enumeration(_) => "enumeration",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Enumeration(enum_name) => write!(f, "enumeration<{enum_name}>()"),
            _ => write!(f, "{}()", self.builder_name()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    #[serde(rename = "type")]
    pub typ: ColumnType,
    pub is_optional: bool,
    /// The true database column name, present only when it differs from the column key.
    pub original_column_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZeroTable {
    pub table_name: String,
    /// The true database table name, present only when it differs from `table_name`.
    pub original_table_name: Option<String>,
    /// Name of the model this table was built from (the join name for synthesized tables)
    pub model_name: String,
    /// Identifier under which the emitted code binds this table
    pub variable_name: String,
    pub columns: IndexMap<String, ColumnMapping>,
    pub relationships: IndexMap<String, Relationship>,
    pub primary_key: Vec<String>,
}

impl ZeroTable {
    pub fn column(&self, key: &str) -> Option<&ColumnMapping> {
        self.columns.get(key)
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    pub fn has_relationships(&self) -> bool {
        !self.relationships.is_empty()
    }
}
