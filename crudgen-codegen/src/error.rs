use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    StdIoError(#[from] io::Error),
    /// A name failed validation before it reached a template
    #[error("{0}")]
    ModelError(#[from] crudgen::Error),
}
