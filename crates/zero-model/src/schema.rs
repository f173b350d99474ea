// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{datamodel::Enum, table::ZeroTable};

/// The fully resolved schema handed to the emitter.
///
/// Tables appear in source model order, followed by the synthesized join tables. Enums are the
/// document's enums, unmodified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZeroSchema {
    pub tables: Vec<ZeroTable>,
    pub enums: Vec<Enum>,
}

impl ZeroSchema {
    pub fn table(&self, model_name: &str) -> Option<&ZeroTable> {
        self.tables
            .iter()
            .find(|table| table.model_name == model_name)
    }
}
