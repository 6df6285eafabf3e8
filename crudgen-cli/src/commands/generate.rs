use crudgen::{
    GeneratorFormState, JsonFileStore, ModelBlock, ModelForm, ModelRegistry, PageCatalog,
    StateStore,
    naming::pluralize,
    schema::{find_model, parse_schema},
};
use crudgen_codegen::{HookWriter, PageWriter, WriteReport, write_file};
use std::{
    collections::BTreeMap,
    error::Error,
    fs,
    path::{Path, PathBuf},
};
use tracing::{error, info, warn};

use crate::{GenerateSubcommands, LoadedConfig, PageArgs};

pub fn run_generate_command(
    command: GenerateSubcommands,
    config: &LoadedConfig,
    state: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    match command {
        GenerateSubcommands::Hooks { output_dir } => {
            let registry = config.config.registry()?;
            let output_dir = config.queries_dir(output_dir);
            run_generate_hooks(&registry, &output_dir)?;
        }
        GenerateSubcommands::Page(args) => {
            let mut store = JsonFileStore::open(config.state_path(state))?;
            run_generate_page(args, &mut store)?;
        }
    }
    Ok(())
}

/// Write every hook file, then fail if any of them could not be written
pub fn run_generate_hooks(
    registry: &ModelRegistry,
    output_dir: &Path,
) -> Result<WriteReport, Box<dyn Error>> {
    let output = HookWriter::new(registry)?.generate();
    let report = output.write_to(output_dir);

    println!("Total Files: {}", report.attempted());
    println!("Finished");

    if report.is_complete() {
        Ok(report)
    } else {
        Err(format!(
            "{} of {} files could not be written",
            report.failed.len(),
            report.attempted()
        )
        .into())
    }
}

/// Build the form state, save it, then emit the page.
///
/// A page that cannot be written to `--output` is logged, the run still
/// succeeds since the form state is already saved.
pub fn run_generate_page<S: StateStore>(
    args: PageArgs,
    store: &mut S,
) -> Result<(), Box<dyn Error>> {
    let state = page_form_state(&args, store)?;
    let page = PageWriter::from_form_state(&state)?.generate();
    state.save(store)?;

    match args.output {
        Some(path) => match write_file(&path, &page.content) {
            Ok(()) => info!("Writing {}", path.display()),
            Err(err) => error!("Failed to write {}: {}", path.display(), err),
        },
        None => print!("{}", page.content),
    }
    Ok(())
}

/// The form state described by the command line, or the saved one for `--restore`
pub fn page_form_state<S: StateStore>(
    args: &PageArgs,
    store: &S,
) -> Result<GeneratorFormState, Box<dyn Error>> {
    if args.restore {
        return GeneratorFormState::load(store)?
            .ok_or_else(|| "No saved page form, generate a page with --schema or --page first".into());
    }

    let (block, stored_plural) = match (&args.schema, &args.page) {
        (Some(schema), _) => {
            let text = fs::read_to_string(schema)
                .map_err(|err| format!("Cannot read schema {}: {}", schema.display(), err))?;
            let block = match &args.model {
                Some(name) => find_model(&text, name)?,
                None => parse_schema(&text)
                    .into_iter()
                    .next()
                    .ok_or(crudgen::Error::EmptySchema)?,
            };
            (block, None)
        }
        (None, Some(page)) => {
            let catalog = PageCatalog::load(store)?;
            let record = catalog
                .find(page)
                .ok_or_else(|| crudgen::Error::MissingModel(page.clone()))?;
            let block = ModelBlock {
                name: record.name_singular.clone(),
                text: record.model.clone(),
            };
            (block, Some(record.name_plural.clone()))
        }
        (None, None) => return Err("One of --schema, --page or --restore is required".into()),
    };

    let singular = args.singular.clone().unwrap_or_else(|| block.name.clone());
    let plural = args
        .plural
        .clone()
        .or(stored_plural)
        .unwrap_or_else(|| pluralize(&singular));

    let mut form = ModelForm::new(&singular, &plural, &block.text);
    form.add = !args.no_add;
    form.edit = !args.no_edit;
    form.remove = !args.no_remove;
    form.view = args.view;
    form.pagination = args.pagination;
    form.reload = args.reload;

    let mut state = GeneratorFormState::new(form);
    if let Some(columns) = &args.columns {
        warn_unknown("column", columns, &state.column_selection);
        state.select_columns(columns);
    }
    if let Some(fields) = &args.fields {
        warn_unknown("field", fields, &state.field_selection);
        state.select_fields(fields);
    }
    state.display_names.extend(args.labels.iter().cloned());
    Ok(state)
}

fn warn_unknown(kind: &str, names: &[String], selection: &BTreeMap<String, bool>) {
    for name in names.iter().filter(|name| !selection.contains_key(*name)) {
        warn!("Ignoring unknown {} `{}`", kind, name);
    }
}
