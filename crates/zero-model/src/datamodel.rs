// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Descriptors of the relational data model the generator consumes.
//!
//! The shape follows the datamodel section of Prisma's DMMF: models with ordered fields, each
//! field carrying its relation metadata (relation name, local key fields, referenced key
//! fields). The descriptors are read-only inputs; nothing in the builder mutates them.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl Document {
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }
}

/// Accepts both a bare datamodel and one wrapped in a `datamodel` key (as a full DMMF dump has it).
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentSer {
    Wrapped { datamodel: Document },
    Bare(Document),
}

impl Document {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let document: DocumentSer = serde_json::from_str(json)?;
        Ok(match document {
            DocumentSer::Wrapped { datamodel } => datamodel,
            DocumentSer::Bare(document) => document,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    pub fields: Vec<Field>,
    #[serde(default)]
    pub primary_key: Option<PrimaryKey>,
    /// Passed through untouched; the builder does not interpret uniqueness constraints.
    #[serde(default)]
    pub unique_fields: Vec<Vec<String>>,
}

impl Model {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The single field flagged as the identity (`@id`), if any.
    pub fn identity_field(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.is_id)
    }

    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_relation())
    }
}

/// A declared composite primary key (`@@id([a, b])`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryKey {
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    pub kind: FieldKind,
    /// Primitive type name (`String`, `Int`, ...), enum name, or target model name
    /// depending on `kind`.
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub relation_name: Option<String>,
    /// Local key fields of the relation (`@relation(fields: [...])`).
    #[serde(default)]
    pub relation_from_fields: Vec<String>,
    /// Referenced key fields on the target (`@relation(references: [...])`).
    #[serde(default)]
    pub relation_to_fields: Vec<String>,
    #[serde(default)]
    pub is_id: bool,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub db_name: Option<String>,
}

impl EnumValue {
    /// The value as stored in the database.
    pub fn stored_value(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiplatform_test::multiplatform_test;

    #[multiplatform_test]
    fn parse_bare_and_wrapped_documents() {
        let bare = r#"{
            "models": [
                {
                    "name": "User",
                    "dbName": "users",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "String", "isRequired": true, "isId": true },
                        { "name": "posts", "kind": "object", "type": "Post", "isList": true, "relationName": "PostToUser" }
                    ]
                }
            ],
            "enums": [
                { "name": "Role", "values": [ { "name": "ADMIN", "dbName": "admin" }, { "name": "USER" } ] }
            ]
        }"#;

        let document = Document::from_json_str(bare).unwrap();
        let user = document.model("User").unwrap();
        assert_eq!(user.db_name.as_deref(), Some("users"));
        assert_eq!(user.identity_field().map(|f| f.name.as_str()), Some("id"));
        assert_eq!(user.relation_fields().count(), 1);
        assert!(user.fields[1].relation_from_fields.is_empty());

        let role = &document.enums[0];
        assert_eq!(role.values[0].stored_value(), "admin");
        assert_eq!(role.values[1].stored_value(), "USER");

        let wrapped = format!(r#"{{ "datamodel": {bare} }}"#);
        assert_eq!(Document::from_json_str(&wrapped).unwrap(), document);
    }

    #[multiplatform_test]
    fn enums_are_optional() {
        let document = Document::from_json_str(r#"{ "models": [] }"#).unwrap();
        assert!(document.models.is_empty());
        assert!(document.enums.is_empty());
    }
}
