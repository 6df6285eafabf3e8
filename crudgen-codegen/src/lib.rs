mod error;
mod hook;
mod names;
mod page;
mod util;
mod writer;

pub use error::*;
pub use hook::{HOOK_DIR, HookWriter};
pub use names::*;
pub use page::*;
pub use writer::*;
