#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # crudgen
//!
//! Model layer of a generator for CRUD admin front-ends. It reads
//! `model <Name> { ... }` schema blocks, derives every casing of an entity
//! name, and keeps the generator's state between runs. Source text is
//! emitted by `crudgen-codegen`; the `crudgen` binary lives in `crudgen-cli`.
//!
//! ## Names
//!
//! ```
//! use crudgen::naming::{pluralize, to_camel_case, to_kebab_case};
//!
//! assert_eq!(pluralize("CourseCategory"), "CourseCategories");
//! assert_eq!(to_kebab_case("LeadStatus"), "lead-status");
//! assert_eq!(to_camel_case("order item"), "orderItem");
//! ```
//!
//! ## Schema blocks
//!
//! ```
//! use crudgen::schema::{extract_columns, extract_form_fields, parse_schema};
//!
//! let schema = "model Order {
//!   id        Int      @id
//!   total     Int
//!   items     OrderItem[]
//!   createdAt DateTime
//! }";
//!
//! let order = &parse_schema(schema)[0];
//! assert_eq!(order.name, "Order");
//!
//! let columns: Vec<_> = extract_columns(&order.text).into_iter().map(|f| f.name).collect();
//! assert_eq!(columns, ["total", "createdAt"]);
//!
//! let fields: Vec<_> = extract_form_fields(&order.text).into_iter().map(|f| f.name).collect();
//! assert_eq!(fields, ["total", "items"]);
//! ```
//!
//! ## Registry
//!
//! The registry is built once and passed to whoever needs it.
//!
//! ```
//! use crudgen::{ModelRegistry, RawModel};
//!
//! let registry = ModelRegistry::build([
//!     ("Order", RawModel::default()),
//!     ("LeadStatus", RawModel::new("LeadStatuses", "LeadStatus")),
//! ])?;
//! assert_eq!(registry.get("Order").unwrap().plural, "Orders");
//! # Ok::<(), crudgen::Error>(())
//! ```

pub mod error;
mod function;
pub mod naming;
mod registry;
pub mod schema;
pub mod state;

pub use error::*;
pub use function::*;
pub use registry::*;
pub use schema::{Field, ModelBlock};
pub use state::*;
