use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub trait CommandDefinition {
    fn command(&self) -> Command;

    fn execute(&self, matches: &ArgMatches) -> Result<()>;
}
pub struct SubcommandDefinition {
    pub name: &'static str,
    pub about: &'static str,
    pub command_definitions: Vec<Box<dyn CommandDefinition>>,
}

impl SubcommandDefinition {
    pub fn new(
        name: &'static str,
        about: &'static str,
        command_definitions: Vec<Box<dyn CommandDefinition>>,
    ) -> Self {
        Self {
            name,
            about,
            command_definitions,
        }
    }
}

impl CommandDefinition for SubcommandDefinition {
    fn command(&self) -> Command {
        Command::new(self.name)
            .about(self.about)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .disable_help_subcommand(true)
            .subcommands(
                self.command_definitions
                    .iter()
                    .map(|command_definition| command_definition.command()),
            )
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| anyhow!("No subcommand given"))?;

        for command_definition in &self.command_definitions {
            if command_definition.command().get_name() == name {
                return command_definition.execute(sub_matches);
            }
        }

        Err(anyhow!("Unknown subcommand: {}", name))
    }
}

pub fn get_required<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    arg_id: &str,
) -> Result<T> {
    get(matches, arg_id).ok_or_else(|| anyhow!("Required argument `{}` is not present", arg_id))
}

pub fn get<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, arg_id: &str) -> Option<T> {
    matches.get_one::<T>(arg_id).cloned()
}

pub fn get_flag(matches: &ArgMatches, arg_id: &str) -> bool {
    matches.get_flag(arg_id)
}

pub fn get_many<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, arg_id: &str) -> Vec<T> {
    matches
        .get_many::<T>(arg_id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

pub fn input_arg() -> Arg {
    Arg::new("input")
        .help("The path to the data model JSON file.")
        .long_help("The path to the data model JSON file, either a bare `{ models, enums }` document or one wrapped in a `datamodel` key.")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .index(1)
}

pub fn config_arg() -> Arg {
    Arg::new("config")
        .help("Configuration file")
        .long_help("The path to the configuration file. If not specified, `zero-schema.toml` in the current directory is used when present.")
        .long("config")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .num_args(1)
}

pub fn output_arg() -> Arg {
    Arg::new("output")
        .help("Output file path")
        .long_help("If specified, the output will be written to this file path instead of stdout.")
        .short('o')
        .long("output")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .num_args(1)
}

pub fn flag_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .long(long)
        .required(false)
        .action(ArgAction::SetTrue)
}
