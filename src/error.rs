use std::io;

/// An error raised while building models or persisting generator state
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A name that would be interpolated into generated source is not a plain identifier
    #[error("Invalid {kind} `{value}`: expected an identifier made of letters, digits, `_` or `$`")]
    InvalidIdentifier {
        /// What the name was used as, e.g. `model name` or `field name`
        kind: &'static str,
        /// The rejected value
        value: String,
    },
    /// Plural and singular forms would produce the same hook and query key names
    #[error("Model `{model}` uses `{name}` as both its plural and singular name")]
    AmbiguousPlural {
        /// Registry key of the model
        model: String,
        /// The shared form
        name: String,
    },
    /// The requested model block does not exist in the schema text
    #[error("Model `{0}` not found in schema")]
    MissingModel(String),
    /// The schema text contained nothing to import
    #[error("Schema is empty")]
    EmptySchema,
    /// Reading or writing the state file failed
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    /// A stored value could not be (de)serialized
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}
