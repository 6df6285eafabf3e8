use std::fmt::Display;
use tracing_subscriber::{EnvFilter, prelude::*};

pub mod config;
pub mod generate;
pub mod schema;

pub use config::*;
pub use generate::*;
pub use schema::*;

pub fn handle_error<E>(error: E)
where
    E: Display,
{
    eprintln!("{error}");
    ::std::process::exit(1);
}

/// Log to stderr so that a page printed to stdout stays clean
pub fn init_tracing(verbose: bool) {
    if verbose {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let filter_layer = EnvFilter::new("crudgen_cli=info,crudgen_codegen=info,crudgen=info");
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .without_time()
            .with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    }
}
