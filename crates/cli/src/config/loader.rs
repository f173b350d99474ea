use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Deserialize;
use zero_model_builder::BuildOptions;

use crate::config::model::{Config, FormatterCommand};

pub const DEFAULT_CONFIG_FILE: &str = "zero-schema.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ConfigSer {
    pub exclude_tables: Option<Vec<String>>,
    pub remap_tables_to_camel_case: Option<bool>,
    pub remap_columns_to_camel_case: Option<bool>,
    pub enum_as_union: Option<bool>,
    pub output: Option<PathBuf>,
    pub formatter: Option<String>,
}

impl TryFrom<ConfigSer> for Config {
    type Error = anyhow::Error;

    fn try_from(config: ConfigSer) -> Result<Self, Self::Error> {
        Ok(Config {
            build: BuildOptions {
                exclude_tables: config.exclude_tables.unwrap_or_default(),
                remap_tables_to_camel_case: config.remap_tables_to_camel_case.unwrap_or(false),
                remap_columns_to_camel_case: config.remap_columns_to_camel_case.unwrap_or(false),
            },
            enum_as_union: config.enum_as_union.unwrap_or(false),
            output: config.output,
            formatter: config
                .formatter
                .as_deref()
                .map(FormatterCommand::parse)
                .transpose()?,
        })
    }
}

fn load_config_from_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", path.display(), e))?;
    let config: ConfigSer = toml::from_str(&toml_str)
        .map_err(|e| anyhow!("Failed to parse TOML file '{}': {}", path.display(), e))?;

    config.try_into()
}

/// Load the configuration from `path`, or from `zero-schema.toml` in the working directory if
/// no path is given. A missing default file yields the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config_from_file(path),
        None => {
            let config_path = Path::new(DEFAULT_CONFIG_FILE);

            if !config_path.exists() {
                return Ok(Config::default());
            }

            load_config_from_file(config_path)
        }
    }
}
