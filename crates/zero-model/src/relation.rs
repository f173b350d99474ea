// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    One,
    Many,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::One => "one",
            Cardinality::Many => "many",
        }
    }
}

/// A single hop from one table to another.
///
/// For the `User.posts` field (assuming User -> [Post] through `Post.authorId`), we will have:
/// - source_fields: ["id"] (columns of `User`)
/// - dest_fields: ["authorId"] (columns of `Post`)
/// - dest_table: "postTable"
///
/// Both field lists hold final (possibly remapped) column keys and always have the same length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationLink {
    pub source_fields: Vec<String>,
    pub dest_fields: Vec<String>,
    /// Target-variable identifier of the destination table
    pub dest_table: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RelationPath {
    Direct(RelationLink),
    /// Traversal through a synthesized join table. Only used for many-to-many relations.
    Chained(RelationLink, RelationLink),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub cardinality: Cardinality,
    pub path: RelationPath,
}

impl Relationship {
    pub fn direct(cardinality: Cardinality, link: RelationLink) -> Self {
        Self {
            cardinality,
            path: RelationPath::Direct(link),
        }
    }

    pub fn chained(first: RelationLink, second: RelationLink) -> Self {
        Self {
            cardinality: Cardinality::Many,
            path: RelationPath::Chained(first, second),
        }
    }

    pub fn links(&self) -> Vec<&RelationLink> {
        match &self.path {
            RelationPath::Direct(link) => vec![link],
            RelationPath::Chained(first, second) => vec![first, second],
        }
    }
}
