// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use zero_model::datamodel::{Document, Field, FieldKind, Model, PrimaryKey};

pub fn document(models: Vec<Model>) -> Document {
    Document {
        models,
        enums: vec![],
    }
}

pub fn model(name: &str, fields: Vec<Field>) -> Model {
    Model {
        name: name.to_string(),
        db_name: None,
        fields,
        primary_key: None,
        unique_fields: vec![],
    }
}

pub fn scalar(name: &str, typ: &str, is_required: bool) -> Field {
    Field {
        name: name.to_string(),
        db_name: None,
        kind: FieldKind::Scalar,
        typ: typ.to_string(),
        is_required,
        is_list: false,
        relation_name: None,
        relation_from_fields: vec![],
        relation_to_fields: vec![],
        is_id: false,
    }
}

pub fn id(name: &str, typ: &str) -> Field {
    Field {
        is_id: true,
        ..scalar(name, typ, true)
    }
}

pub fn relation(
    name: &str,
    target: &str,
    is_required: bool,
    is_list: bool,
    relation_name: &str,
) -> Field {
    Field {
        kind: FieldKind::Object,
        is_list,
        relation_name: (!relation_name.is_empty()).then(|| relation_name.to_string()),
        ..scalar(name, target, is_required)
    }
}

pub trait FieldExt {
    fn with_keys(self, from: &[&str], to: &[&str]) -> Field;
    fn with_db_name(self, db_name: &str) -> Field;
}

impl FieldExt for Field {
    fn with_keys(self, from: &[&str], to: &[&str]) -> Field {
        Field {
            relation_from_fields: from.iter().map(|s| s.to_string()).collect(),
            relation_to_fields: to.iter().map(|s| s.to_string()).collect(),
            ..self
        }
    }

    fn with_db_name(self, db_name: &str) -> Field {
        Field {
            db_name: Some(db_name.to_string()),
            ..self
        }
    }
}

pub fn with_primary_key(model: Model, fields: &[&str]) -> Model {
    Model {
        primary_key: Some(PrimaryKey {
            name: None,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }),
        ..model
    }
}

/// User -> [Post] through `Post.authorId`
pub fn user_post_document() -> Document {
    document(vec![
        model(
            "User",
            vec![
                id("id", "String"),
                scalar("name", "String", false),
                relation("posts", "Post", true, true, "PostToUser"),
            ],
        ),
        model(
            "Post",
            vec![
                id("id", "String"),
                scalar("title", "String", true),
                scalar("authorId", "String", true),
                relation("author", "User", true, false, "PostToUser")
                    .with_keys(&["authorId"], &["id"]),
            ],
        ),
    ])
}

/// Parent (composite key `[a, b]`) -> [Child] through `Child.fk1, Child.fk2`
pub fn composite_key_document() -> Document {
    document(vec![
        with_primary_key(
            model(
                "Parent",
                vec![
                    scalar("a", "String", true),
                    scalar("b", "Int", true),
                    relation("children", "Child", true, true, "ChildToParent"),
                ],
            ),
            &["a", "b"],
        ),
        model(
            "Child",
            vec![
                id("id", "Int"),
                scalar("fk1", "String", true),
                scalar("fk2", "Int", true),
                relation("parent", "Parent", true, false, "ChildToParent")
                    .with_keys(&["fk1", "fk2"], &["a", "b"]),
            ],
        ),
    ])
}

/// A tree: Node.parent / Node.children
pub fn self_relation_document() -> Document {
    document(vec![model(
        "Node",
        vec![
            id("id", "String"),
            scalar("parentId", "String", false),
            relation("parent", "Node", false, false, "tree").with_keys(&["parentId"], &["id"]),
            relation("children", "Node", true, true, "tree"),
        ],
    )])
}

/// Implicit many-to-many: [Post] <-> [Category]
pub fn post_category_document() -> Document {
    document(vec![
        model(
            "Post",
            vec![
                id("id", "Int"),
                scalar("title", "String", true),
                relation("categories", "Category", true, true, "CategoryToPost"),
            ],
        ),
        model(
            "Category",
            vec![
                id("id", "Int"),
                scalar("name", "String", true),
                relation("posts", "Post", true, true, "CategoryToPost"),
            ],
        ),
    ])
}
