// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;
use tracing::warn;

use zero_model::datamodel::{Document, Field, Model};

use crate::{
    error::SchemaBuildingError,
    naming::{NamePolicy, ResolvedName},
    options::BuildOptions,
};

/// Lookup of the models that survive exclusion, in document order.
///
/// Built once per build so that relationship resolution does not scan the document by name.
pub struct ModelIndex<'a> {
    models: IndexMap<&'a str, &'a Model>,
}

impl<'a> ModelIndex<'a> {
    pub fn new(document: &'a Document, options: &BuildOptions) -> Self {
        for excluded in &options.exclude_tables {
            if document.model(excluded).is_none() {
                warn!("Excluded model '{excluded}' does not exist in the document");
            }
        }

        let models = document
            .models
            .iter()
            .filter(|model| !options.is_excluded(&model.name))
            .map(|model| (model.name.as_str(), model))
            .collect();

        Self { models }
    }

    pub fn get(&self, name: &str) -> Option<&'a Model> {
        self.models.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Model> + '_ {
        self.models.values().copied()
    }
}

/// Everything a builder needs besides the model it is working on.
pub struct BuildContext<'a> {
    pub models: ModelIndex<'a>,
    pub options: &'a BuildOptions,
    pub naming: &'a dyn NamePolicy,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        document: &'a Document,
        options: &'a BuildOptions,
        naming: &'a dyn NamePolicy,
    ) -> Self {
        Self {
            models: ModelIndex::new(document, options),
            options,
            naming,
        }
    }

    pub fn column_name(&self, field: &Field) -> ResolvedName {
        ResolvedName::resolve(
            &field.name,
            field.db_name.as_deref(),
            self.options.remap_columns_to_camel_case,
            self.naming,
        )
    }

    /// The final column key for a field of `model`, as referenced from primary keys and relations.
    pub fn column_key(
        &self,
        model: &Model,
        field_name: &str,
    ) -> Result<String, SchemaBuildingError> {
        model
            .field(field_name)
            .filter(|field| !field.is_relation())
            .map(|field| self.column_name(field).name)
            .ok_or_else(|| SchemaBuildingError::UnknownKeyField {
                model: model.name.clone(),
                field: field_name.to_string(),
            })
    }

    pub fn column_keys<S: AsRef<str>>(
        &self,
        model: &Model,
        field_names: &[S],
    ) -> Result<Vec<String>, SchemaBuildingError> {
        field_names
            .iter()
            .map(|field_name| self.column_key(model, field_name.as_ref()))
            .collect()
    }

    pub fn table_name(&self, model_name: &str, db_name: Option<&str>) -> ResolvedName {
        ResolvedName::resolve(
            model_name,
            db_name,
            self.options.remap_tables_to_camel_case,
            self.naming,
        )
    }

    /// Identifier binding the table of `model_name` in the emitted code.
    pub fn variable_name(&self, model_name: &str) -> String {
        format!("{}Table", self.naming.to_target_case(model_name))
    }

    /// Primary key field names: the declared composite key if any, else the identity field.
    pub fn primary_key_fields<'m>(
        &self,
        model: &'m Model,
    ) -> Result<Vec<&'m str>, SchemaBuildingError> {
        match &model.primary_key {
            Some(primary_key) if !primary_key.fields.is_empty() => {
                Ok(primary_key.fields.iter().map(String::as_str).collect())
            }
            _ => model
                .identity_field()
                .map(|field| vec![field.name.as_str()])
                .ok_or_else(|| SchemaBuildingError::MissingPrimaryKey {
                    model: model.name.clone(),
                }),
        }
    }

    pub fn primary_key_columns(&self, model: &Model) -> Result<Vec<String>, SchemaBuildingError> {
        let fields = self.primary_key_fields(model)?;
        self.column_keys(model, &fields)
    }

    /// The single column identifying a row of `model`, required to take part in a join table.
    pub fn join_identity<'m>(
        &self,
        model: &'m Model,
        relation: &str,
    ) -> Result<&'m Field, SchemaBuildingError> {
        let missing = || SchemaBuildingError::MissingJoinIdentity {
            model: model.name.clone(),
            relation: relation.to_string(),
        };

        match &model.primary_key {
            Some(primary_key) if !primary_key.fields.is_empty() => match &primary_key.fields[..] {
                [single] => model.field(single).ok_or_else(missing),
                _ => Err(missing()),
            },
            _ => model.identity_field().ok_or_else(missing),
        }
    }
}
