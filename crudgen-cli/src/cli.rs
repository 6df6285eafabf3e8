use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generates React Query hooks and CRUD admin pages from model schemas"
)]
pub struct Cli {
    #[arg(global = true, short, long, help = "Show debug messages")]
    pub verbose: bool,

    #[arg(
        global = true,
        long,
        env = "CRUDGEN_STATE",
        help = "Location of the generator state file [default: .crudgen/state.json]"
    )]
    pub state: Option<PathBuf>,

    #[arg(
        global = true,
        short,
        long,
        help = "Config file, looked up as crudgen.toml in the current or parent directory when omitted"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum Commands {
    #[command(about = "Generate hook files or an admin page", display_order = 10)]
    Generate {
        #[command(subcommand)]
        command: GenerateSubcommands,
    },
    #[command(about = "Work with model schema files", display_order = 20)]
    Schema {
        #[command(subcommand)]
        command: SchemaSubcommands,
    },
    #[command(about = "Manage the crudgen.toml config file", display_order = 30)]
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum GenerateSubcommands {
    #[command(about = "Write one query hook file per registered model")]
    Hooks {
        #[arg(
            short,
            long,
            env = "CRUDGEN_QUERIES_DIR",
            help = "Queries root, hook files are written to <OUTPUT_DIR>/models [default: src/queries]"
        )]
        output_dir: Option<PathBuf>,
    },
    #[command(about = "Generate an admin page for one model")]
    Page(PageArgs),
}

#[derive(clap::Args, PartialEq, Eq, Debug)]
#[command(group(ArgGroup::new("source").args(["schema", "page", "restore"]).required(true)))]
pub struct PageArgs {
    #[arg(short, long, help = "Schema file holding the model block")]
    pub schema: Option<PathBuf>,

    #[arg(long, help = "Start from a page stored by `schema import`")]
    pub page: Option<String>,

    #[arg(long, help = "Regenerate the last page from the saved form state")]
    pub restore: bool,

    #[arg(
        short,
        long,
        requires = "schema",
        help = "Model block to use [default: the first block of the schema]"
    )]
    pub model: Option<String>,

    #[arg(long, help = "Singular name [default: the model name]")]
    pub singular: Option<String>,

    #[arg(long, help = "Plural name [default: the pluralized singular name]")]
    pub plural: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Table columns to keep [default: all]")]
    pub columns: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',', help = "Form fields to keep [default: all]")]
    pub fields: Option<Vec<String>>,

    #[arg(
        long = "label",
        value_name = "FIELD=TEXT",
        value_parser = parse_label,
        help = "Display name of a column or field, may be repeated"
    )]
    pub labels: Vec<(String, String)>,

    #[arg(long, help = "No add button")]
    pub no_add: bool,

    #[arg(long, help = "No edit button")]
    pub no_edit: bool,

    #[arg(long, help = "No remove button")]
    pub no_remove: bool,

    #[arg(long, help = "Add a view button")]
    pub view: bool,

    #[arg(long, help = "Show the pagination bar")]
    pub pagination: bool,

    #[arg(long, help = "Add a reload button")]
    pub reload: bool,

    #[arg(short, long, help = "Write the page to this file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum SchemaSubcommands {
    #[command(about = "Store every model of the schema as a named page")]
    Import {
        #[arg(help = "Schema file, glob patterns are expanded")]
        file: String,
    },
    #[command(about = "Print each model block of the schema on its own")]
    Split {
        #[arg(help = "Schema file, glob patterns are expanded")]
        file: String,
    },
}

#[derive(Subcommand, PartialEq, Eq, Debug)]
pub enum ConfigSubcommands {
    #[command(about = "Create crudgen.toml in the current directory")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn parse_label(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((field, text)) if !field.trim().is_empty() => {
            Ok((field.trim().to_owned(), text.to_owned()))
        }
        _ => Err(format!("expected FIELD=TEXT, got `{value}`")),
    }
}
