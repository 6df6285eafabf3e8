//! Per-model query and mutation hook files.
//!
//! Every model of the registry becomes `models/<kebab name>.ts`, a module of
//! React Query hooks that wrap the fixed CRUD calls of `api.apis.<Name>`.

mod mutation;
mod query;

use crate::{Error, ModelNames, OutputFile, WriterOutput, writer::write_doc_comment};
use crudgen::{CoreFunction, ModelRegistry};
use itertools::Itertools;
use tracing::info;

use mutation::*;
use query::*;

/// Directory of the hook files, relative to the queries root
pub const HOOK_DIR: &str = "models";

#[derive(Clone, Debug)]
pub struct HookWriter {
    pub(crate) models: Vec<ModelNames>,
}

impl HookWriter {
    /// Resolve the names of every registered model up front, so a bad name
    /// fails the run before any file is rendered
    pub fn new(registry: &ModelRegistry) -> Result<Self, Error> {
        let models = registry
            .iter()
            .map(ModelNames::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { models })
    }

    pub fn generate(self) -> WriterOutput {
        WriterOutput {
            files: self.write_hook_files(),
        }
    }

    pub fn write_hook_files(&self) -> Vec<OutputFile> {
        self.models
            .iter()
            .map(|names| {
                let name = format!("{}/{}.ts", HOOK_DIR, names.file_stem);
                info!("Generating {}", name);
                OutputFile {
                    name,
                    content: Self::gen_hook_file(names),
                }
            })
            .collect()
    }

    pub fn gen_hook_file(names: &ModelNames) -> String {
        let mut lines = Vec::new();
        write_doc_comment(&mut lines);
        lines.push(Self::gen_import());
        lines.push(gen_query_keys(names));
        lines.extend(gen_query_hooks(names));
        lines.extend(gen_mutation_hooks(names));
        let mut content = lines.join("\n\n");
        content.push('\n');
        content
    }

    pub fn gen_import() -> String {
        [
            "import { useMutation, useQuery, useQueryClient } from '@tanstack/react-query';",
            "import { useApi } from '@src/api';",
            "import { useTableFetchProps } from '@hooks/use-table-fetch-props';",
            "import { getQueryOptions, QueryOptions, QuerySecondaryOptions } from '@src/queries';",
            "import { useCallback } from 'react';",
        ]
        .join("\n")
    }
}

/// `// POST /api/order/count (Aggregation)`
pub(crate) fn route_comment(function: CoreFunction, names: &ModelNames) -> String {
    format!(
        "// {} {} ({})",
        function.http_method(),
        function.route(&names.route_segment),
        function.permission()
    )
}

/// Render `return { ...res, a: b };` the way every hook ends
pub(crate) fn gen_return(entries: &[String]) -> String {
    let body = entries.iter().map(|entry| format!("    {entry},")).join("\n");
    format!("  return {{\n    ...res,\n{body}\n  }};")
}
