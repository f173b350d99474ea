// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::{Result, anyhow};
use std::{
    fs::{self, File},
    io::{Write, stdout},
    path::Path,
    process::Command,
};

use crate::config::FormatterCommand;

pub fn open_file_for_output(output: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    if let Some(output) = output {
        if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                anyhow!("Failed to create directory '{}': {}", parent.display(), e)
            })?;
        }

        let file = File::create(output)
            .map_err(|e| anyhow!("Failed to create file '{}': {}", output.display(), e))?;
        Ok(Box::new(file))
    } else {
        Ok(Box::new(stdout()))
    }
}

/// Write fully rendered contents to `output` (or stdout).
pub fn write_output(output: Option<&Path>, contents: &[u8]) -> Result<()> {
    let mut writer = open_file_for_output(output)?;
    writer.write_all(contents)?;
    writer.flush()?;
    Ok(())
}

/// Run the formatter with `path` appended to its arguments.
pub fn run_formatter(formatter: &FormatterCommand, path: &Path) -> Result<()> {
    let program = which::which(&formatter.program).map_err(|_| {
        anyhow!(
            "Formatter `{}` not found. Please install it or change the `formatter` setting.",
            formatter.program
        )
    })?;

    tracing::debug!("Running formatter {:?} on {}", program, path.display());

    let status = Command::new(program)
        .args(&formatter.args)
        .arg(path)
        .status()?;

    if !status.success() {
        return Err(anyhow!(
            "Formatter `{}` failed on '{}' ({})",
            formatter.program,
            path.display(),
            status
        ));
    }

    Ok(())
}
