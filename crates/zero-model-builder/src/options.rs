// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Deserialize;

/// Options consumed by the schema builder. Emission-only options live with the emitter.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    /// Models removed before any transformation, along with every relationship pointing at them
    pub exclude_tables: Vec<String>,
    pub remap_tables_to_camel_case: bool,
    pub remap_columns_to_camel_case: bool,
}

impl BuildOptions {
    pub fn is_excluded(&self, model_name: &str) -> bool {
        self.exclude_tables.iter().any(|name| name == model_name)
    }
}
