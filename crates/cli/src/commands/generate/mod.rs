// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::{Result, anyhow};
use clap::{ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::warn;

use zero_model::{datamodel::Document, schema::ZeroSchema};

use crate::commands::command::{
    CommandDefinition, config_arg, flag_arg, get, get_flag, get_many, get_required, input_arg,
    output_arg,
};
use crate::config::{Config, FormatterCommand, load_config};
use crate::util::{run_formatter, write_output};

mod context;
mod processor;

mod enum_processor;
mod relationship_processor;
mod schema_processor;
mod table_processor;

use context::EmitContext;
use processor::SchemaProcessor;

pub struct GenerateCommandDefinition {}

impl CommandDefinition for GenerateCommandDefinition {
    fn command(&self) -> Command {
        Command::new("generate")
            .about("Generate a Zero schema from a data model")
            .arg(input_arg())
            .arg(config_arg())
            .arg(output_arg())
            .arg(
                clap::Arg::new("exclude-table")
                    .help("Model to leave out of the generated schema (may be repeated)")
                    .long("exclude-table")
                    .required(false)
                    .action(clap::ArgAction::Append)
                    .num_args(1),
            )
            .arg(flag_arg(
                "remap-tables",
                "remap-tables",
                "Convert table names to camelCase",
            ))
            .arg(flag_arg(
                "remap-columns",
                "remap-columns",
                "Convert column names to camelCase",
            ))
            .arg(flag_arg(
                "enum-as-union",
                "enum-as-union",
                "Emit enums as string-literal union types",
            ))
            .arg(flag_arg(
                "format",
                "format",
                "Run the formatter on the written file (default: `prettier --write`)",
            ))
            .arg(flag_arg(
                "ir",
                "ir",
                "Print the resolved intermediate representation as JSON instead of TypeScript",
            ))
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let input: PathBuf = get_required(matches, "input")?;
        let config_path: Option<PathBuf> = get(matches, "config");

        let config = apply_overrides(load_config(config_path.as_deref())?, matches);

        let document = read_document(&input)?;
        let schema = zero_model_builder::build(&document, &config.build)?;

        let contents = if get_flag(matches, "ir") {
            let mut json = serde_json::to_vec_pretty(&schema)?;
            json.push(b'\n');
            json
        } else {
            render(&schema, &EmitContext::new(config.enum_as_union))?
        };

        let output = config.output.as_deref();
        write_output(output, &contents)?;

        match (output, &config.formatter) {
            (Some(output), Some(formatter)) => {
                eprintln!("Zero schema written to `{}`", output.display());
                run_formatter(formatter, output)?;
            }
            (Some(output), None) => {
                eprintln!("Zero schema written to `{}`", output.display());
            }
            (None, Some(formatter)) => {
                warn!(
                    "Not running formatter `{}` since the schema was written to stdout",
                    formatter.program
                );
            }
            (None, None) => {}
        }

        Ok(())
    }
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(mut config: Config, matches: &ArgMatches) -> Config {
    config
        .build
        .exclude_tables
        .extend(get_many::<String>(matches, "exclude-table"));

    config.build.remap_tables_to_camel_case |= get_flag(matches, "remap-tables");
    config.build.remap_columns_to_camel_case |= get_flag(matches, "remap-columns");
    config.enum_as_union |= get_flag(matches, "enum-as-union");

    if let Some(output) = get::<PathBuf>(matches, "output") {
        config.output = Some(output);
    }

    if get_flag(matches, "format") && config.formatter.is_none() {
        config.formatter = Some(FormatterCommand::default());
    }

    config
}

fn read_document(input: &Path) -> Result<Document> {
    let json = std::fs::read_to_string(input)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", input.display(), e))?;

    Document::from_json_str(&json)
        .map_err(|e| anyhow!("Failed to parse data model '{}': {}", input.display(), e))
}

fn render(schema: &ZeroSchema, context: &EmitContext) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::new();
    schema.process(&(), context, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zero_model_builder::BuildOptions;

    fn render_document(json: serde_json::Value, options: &BuildOptions, enum_as_union: bool) -> String {
        let document = Document::from_json_str(&json.to_string()).unwrap();
        let schema = zero_model_builder::build(&document, options).unwrap();
        let rendered = render(&schema, &EmitContext::new(enum_as_union)).unwrap();
        String::from_utf8(rendered).unwrap()
    }

    fn blog_document() -> serde_json::Value {
        serde_json::json!({
            "models": [
                {
                    "name": "User",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "String", "isRequired": true, "isId": true },
                        { "name": "role", "kind": "enum", "type": "Role", "isRequired": true },
                        { "name": "name", "kind": "scalar", "type": "String" },
                        { "name": "posts", "kind": "object", "type": "Post", "isRequired": true, "isList": true, "relationName": "PostToUser" }
                    ]
                },
                {
                    "name": "Post",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "String", "isRequired": true, "isId": true },
                        { "name": "authorId", "kind": "scalar", "type": "String", "isRequired": true },
                        {
                            "name": "author", "kind": "object", "type": "User", "isRequired": true,
                            "relationName": "PostToUser", "relationFromFields": ["authorId"], "relationToFields": ["id"]
                        }
                    ]
                }
            ],
            "enums": [
                { "name": "Role", "values": [{ "name": "ADMIN", "dbName": "admin" }, { "name": "USER" }] }
            ]
        })
    }

    #[test]
    fn renders_tables_enums_and_relationships() {
        let rendered = render_document(blog_document(), &BuildOptions::default(), false);

        let expected = format!(
            r#"{}

import {{ createSchema, enumeration, relationships, string, table }} from "@rocicorp/zero";

export enum Role {{
  ADMIN = "admin",
  USER = "USER",
}}

export const userTable = table("User")
  .columns({{
    id: string(),
    role: enumeration<Role>(),
    name: string().optional(),
  }})
  .primaryKey("id");

export const postTable = table("Post")
  .columns({{
    id: string(),
    authorId: string(),
  }})
  .primaryKey("id");

export const userRelationships = relationships(userTable, ({{ many }}) => ({{
  posts: many({{
    sourceField: ["id"],
    destField: ["authorId"],
    destSchema: postTable,
  }}),
}}));

export const postRelationships = relationships(postTable, ({{ one }}) => ({{
  author: one({{
    sourceField: ["authorId"],
    destField: ["id"],
    destSchema: userTable,
  }}),
}}));

export const schema = createSchema({{
  tables: [userTable, postTable],
  relationships: [userRelationships, postRelationships],
}});

export type Schema = typeof schema;
"#,
            schema_processor::HEADER
        );

        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_enums_as_unions() {
        let rendered = render_document(blog_document(), &BuildOptions::default(), true);

        assert!(rendered.contains("export type Role = \"admin\" | \"USER\";\n"));
        assert!(!rendered.contains("export enum"));
    }

    #[test]
    fn renders_remapped_names_with_from() {
        let json = serde_json::json!({
            "models": [{
                "name": "user_profile",
                "dbName": null,
                "fields": [
                    { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true, "isId": true },
                    { "name": "display_name", "kind": "scalar", "type": "String" },
                    { "name": "senderID", "dbName": "sender_id", "kind": "scalar", "type": "String" },
                    { "name": "tags", "kind": "scalar", "type": "String", "isRequired": true, "isList": true }
                ]
            }]
        });

        let options = BuildOptions {
            remap_tables_to_camel_case: true,
            remap_columns_to_camel_case: true,
            ..Default::default()
        };

        let rendered = render_document(json, &options, false);

        assert!(rendered.contains(
            r#"export const userProfileTable = table("userProfile")
  .from("user_profile")
  .columns({
    id: number(),
    displayName: string().optional().from("display_name"),
    senderID: string().optional().from("sender_id"),
  })
  .primaryKey("id");
"#
        ));
        assert!(rendered.contains("import { createSchema, number, string, table } from \"@rocicorp/zero\";"));
        assert!(rendered.contains("  relationships: [],\n"));
        assert!(!rendered.contains("tags"));
    }

    #[test]
    fn renders_many_to_many_as_chained_links() {
        let json = serde_json::json!({
            "models": [
                {
                    "name": "Post",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true, "isId": true },
                        { "name": "categories", "kind": "object", "type": "Category", "isRequired": true, "isList": true }
                    ]
                },
                {
                    "name": "Category",
                    "fields": [
                        { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true, "isId": true },
                        { "name": "posts", "kind": "object", "type": "Post", "isRequired": true, "isList": true }
                    ]
                }
            ]
        });

        let rendered = render_document(json, &BuildOptions::default(), false);

        assert!(rendered.contains(
            r#"export const postRelationships = relationships(postTable, ({ many }) => ({
  categories: many(
    {
      sourceField: ["id"],
      destField: ["B"],
      destSchema: _categoryToPostTable,
    },
    {
      sourceField: ["A"],
      destField: ["id"],
      destSchema: categoryTable,
    },
  ),
}));
"#
        ));
        assert!(rendered.contains("export const _categoryToPostTable = table(\"_CategoryToPost\")"));
        assert!(rendered.contains("  tables: [postTable, categoryTable, _categoryToPostTable],\n"));
    }
}
