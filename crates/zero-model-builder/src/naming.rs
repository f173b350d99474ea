// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use heck::ToLowerCamelCase;

/// Converts identifiers from the source naming convention to the one used by the client schema.
///
/// Builders receive the policy explicitly so that tests (or other generators) can substitute
/// their own convention.
pub trait NamePolicy: Send + Sync {
    fn to_target_case(&self, identifier: &str) -> String;
}

/// snake_case (or PascalCase) to camelCase, keeping any leading underscores.
///
/// `_user_profile` becomes `_userProfile`; word boundaries follow `heck` (underscores and
/// lower-to-upper transitions; digits stay attached to the preceding word).
#[derive(Debug, Default, Clone, Copy)]
pub struct CamelCasePolicy;

impl NamePolicy for CamelCasePolicy {
    fn to_target_case(&self, identifier: &str) -> String {
        let rest = identifier.trim_start_matches('_');
        let prefix = &identifier[..identifier.len() - rest.len()];

        // A single pass is not always stable ("aB_c" -> "aBC" -> "aBc"), so convert until it is.
        // Each further pass only lowercases, which bounds the number of passes.
        let mut converted = rest.to_lower_camel_case();
        for _ in 0..rest.len() {
            let next = converted.to_lower_camel_case();
            if next == converted {
                break;
            }
            converted = next;
        }

        format!("{prefix}{converted}")
    }
}

/// Result of resolving a table or column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// The name used as the key in the generated schema
    pub name: String,
    /// The true database name, when it differs from `name`
    pub original: Option<String>,
}

impl ResolvedName {
    /// Apply the precedence shared by tables and columns: an explicit database name wins (and
    /// bypasses case conversion entirely), then case conversion if enabled, then the name as is.
    pub fn resolve(
        name: &str,
        db_name: Option<&str>,
        remap: bool,
        naming: &dyn NamePolicy,
    ) -> Self {
        let unchanged = || ResolvedName {
            name: name.to_string(),
            original: None,
        };

        match db_name {
            Some(db_name) if db_name != name => ResolvedName {
                name: name.to_string(),
                original: Some(db_name.to_string()),
            },
            Some(_) => unchanged(),
            None if remap => {
                let converted = naming.to_target_case(name);
                if converted != name {
                    ResolvedName {
                        name: converted,
                        original: Some(name.to_string()),
                    }
                } else {
                    unchanged()
                }
            }
            None => unchanged(),
        }
    }
}
