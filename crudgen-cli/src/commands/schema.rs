use crudgen::{ImportPlan, JsonFileStore, PageCatalog, StateStore, schema::parse_schema};
use std::{error::Error, fs, path::PathBuf};
use tracing::{debug, info, warn};

use crate::{LoadedConfig, SchemaSubcommands};

pub fn run_schema_command(
    command: SchemaSubcommands,
    config: &LoadedConfig,
    state: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    match command {
        SchemaSubcommands::Import { file } => {
            let schema = read_schema(&file)?;
            let mut store = JsonFileStore::open(config.state_path(state))?;
            run_schema_import(&schema, &mut store)?;
        }
        SchemaSubcommands::Split { file } => {
            let schema = read_schema(&file)?;
            print!("{}", split_schema(&schema));
        }
    }
    Ok(())
}

/// Contents of every file matching `pattern`, in path order
pub fn read_schema(pattern: &str) -> Result<String, Box<dyn Error>> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    if paths.is_empty() {
        return Err(format!("No schema file matches `{pattern}`").into());
    }
    paths.sort();

    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        debug!("Reading schema {}", path.display());
        texts.push(fs::read_to_string(&path)?);
    }
    Ok(texts.join("\n"))
}

/// Sync the page catalog with the schema; `None` when the schema was empty
pub fn run_schema_import<S: StateStore>(
    schema: &str,
    store: &mut S,
) -> Result<Option<ImportPlan>, Box<dyn Error>> {
    let mut catalog = PageCatalog::load(store)?;
    let plan = match catalog.plan_import(schema) {
        Ok(plan) => plan,
        Err(crudgen::Error::EmptySchema) => {
            warn!("Schema is empty, nothing to import");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    if plan.is_empty() {
        println!("No Changes");
        return Ok(Some(plan));
    }
    for draft in plan.create.iter() {
        info!("Creating page {} ({})", draft.name_singular, draft.name_plural);
    }
    for (id, draft) in plan.update.iter() {
        info!("Updating page #{} {}", id, draft.name_singular);
    }
    println!(
        "Created: {}, Updated: {}",
        plan.create.len(),
        plan.update.len()
    );

    catalog.apply(plan.clone());
    catalog.save(store)?;
    Ok(Some(plan))
}

/// Every model block on its own, separated by a blank line
pub fn split_schema(schema: &str) -> String {
    let blocks = parse_schema(schema);
    info!("Found {} models", blocks.len());
    blocks
        .into_iter()
        .map(|block| format!("{}\n", block.text))
        .collect::<Vec<_>>()
        .join("\n")
}
