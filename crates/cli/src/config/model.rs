// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use zero_model_builder::BuildOptions;

#[derive(Debug, PartialEq, Default)]
pub struct Config {
    pub build: BuildOptions,
    /// Emit enums as string-literal unions instead of TypeScript enums
    pub enum_as_union: bool,
    pub output: Option<PathBuf>,
    pub formatter: Option<FormatterCommand>,
}

/// Command run on the generated file (with its path appended) after it is written.
#[derive(Debug, PartialEq, Clone)]
pub struct FormatterCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl FormatterCommand {
    pub fn parse(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);

        let program = parts
            .next()
            .ok_or_else(|| anyhow!("The `formatter` setting must not be empty"))?;

        Ok(FormatterCommand {
            program,
            args: parts.collect(),
        })
    }
}

impl Default for FormatterCommand {
    fn default() -> Self {
        FormatterCommand {
            program: "prettier".to_string(),
            args: vec!["--write".to_string()],
        }
    }
}
