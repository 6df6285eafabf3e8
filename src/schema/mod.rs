//! Splitting schema text into `model <Name> { ... }` blocks and reading their fields.
//!
//! The parser is line based: the first line of a block is its header, every
//! other non-blank line not starting with `}` is a `<name> <type>` pair.

mod field;

pub use field::*;

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static MODEL_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"model\s+[A-Za-z0-9_]+\s+\{").expect("model start pattern"));

static MODEL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^model\s+([A-Za-z0-9_]+)").expect("model header pattern"));

/// A model block paired with its name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelBlock {
    pub name: String,
    pub text: String,
}

impl ModelBlock {
    pub fn columns(&self) -> Vec<Field> {
        extract_columns(&self.text)
    }

    pub fn form_fields(&self) -> Vec<Field> {
        extract_form_fields(&self.text)
    }
}

/// Split right before every `model <Name> {`, dropping empty pieces
pub fn split_models(schema: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for cut in MODEL_START.find_iter(schema).map(|m| m.start()) {
        pieces.push(&schema[start..cut]);
        start = cut;
    }
    pieces.push(&schema[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Name of a block starting with `model <Name>`, `None` for anything else
pub fn model_name(block: &str) -> Option<String> {
    MODEL_HEADER
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().to_owned())
}

/// Fields shown as table columns: no `id`, `updatedAt`, list relations or directives
pub fn extract_columns(block: &str) -> Vec<Field> {
    field_lines(block)
        .filter(|field| field.name != "id" && field.name != "updatedAt")
        .filter(|field| !field.is_list() && !field.is_directive())
        .collect()
}

/// Fields shown as form controls: no `id`, timestamps or directives.
/// List relations are kept.
pub fn extract_form_fields(block: &str) -> Vec<Field> {
    field_lines(block)
        .filter(|field| !matches!(field.name.as_str(), "id" | "createdAt" | "updatedAt"))
        .filter(|field| !field.is_directive())
        .collect()
}

/// Split and name every block, skipping pieces without a model header
pub fn parse_schema(schema: &str) -> Vec<ModelBlock> {
    split_models(schema)
        .into_iter()
        .filter_map(|text| match model_name(&text) {
            Some(name) => Some(ModelBlock { name, text }),
            None => {
                debug!("Skipping block without model header: {:?}", first_line(&text));
                None
            }
        })
        .collect()
}

/// Find one model by name
pub fn find_model(schema: &str, name: &str) -> Result<ModelBlock, crate::Error> {
    parse_schema(schema)
        .into_iter()
        .find(|block| block.name == name)
        .ok_or_else(|| crate::Error::MissingModel(name.to_owned()))
}

fn field_lines(block: &str) -> impl Iterator<Item = Field> + '_ {
    block
        .split('\n')
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('}'))
        .map(|line| {
            let mut tokens = line.split_whitespace();
            let name = tokens.next().unwrap_or_default();
            Field::new(name, tokens.next())
        })
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORDER: &str = "model Order {
  id        String   @id @default(uuid())
  name      String
  tags      String[]
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}";

    #[test]
    fn test_split_models() {
        let blocks = split_models("model A {\n id String\n}\nmodel B {\n id String\n}");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|block| block.starts_with("model")));
        assert_eq!(blocks[0], "model A {\n id String\n}");
        assert_eq!(blocks[1], "model B {\n id String\n}");
    }

    #[test]
    fn test_split_models_keeps_preamble() {
        let schema = "generator client {\n provider = \"prisma-client-js\"\n}\n\nmodel A {\n id String\n}\n";
        let blocks = split_models(schema);
        assert_eq!(blocks.len(), 2);
        assert_eq!(model_name(&blocks[0]), None);
        assert_eq!(model_name(&blocks[1]), Some("A".to_owned()));
        assert!(split_models("  \n ").is_empty());
    }

    #[test]
    fn test_model_name() {
        assert_eq!(model_name(ORDER), Some("Order".to_owned()));
        assert_eq!(model_name("enum Role {\n ADMIN\n}"), None);
        assert_eq!(model_name(" model Late {"), None);
    }

    #[test]
    fn test_extract_columns() {
        let columns = extract_columns(
            "model Post {\n id String\n name String\n tags String[]\n createdAt DateTime\n updatedAt DateTime\n}",
        );
        assert_eq!(
            columns,
            vec![
                Field::new("name", Some("String")),
                Field::new("createdAt", Some("DateTime")),
            ]
        );
    }

    #[test]
    fn test_extract_columns_without_timestamps() {
        let block = "model Post {\n id String\n name String\n tags String[]\n updatedAt DateTime\n}";
        assert_eq!(extract_columns(block), vec![Field::new("name", Some("String"))]);
    }

    #[test]
    fn test_extract_form_fields() {
        assert_eq!(
            extract_form_fields(ORDER),
            vec![
                Field::new("name", Some("String")),
                Field::new("tags", Some("String[]")),
            ]
        );
    }

    #[test]
    fn test_directives_and_short_lines() {
        let block = "model Tag {\n  id Int\n  label\n  @@unique([label])\n\n}";
        assert_eq!(extract_columns(block), vec![Field::new("label", None)]);
        assert_eq!(extract_form_fields(block), vec![Field::new("label", None)]);
    }

    #[test]
    fn test_parse_schema_skips_non_models() {
        let schema = format!("datasource db {{\n provider = \"postgresql\"\n}}\n{ORDER}\nmodel B {{\n id Int\n}}");
        let models = parse_schema(&schema);
        assert_eq!(
            models.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            vec!["Order", "B"]
        );
        assert_eq!(models[0].columns().len(), 2);
    }

    #[test]
    fn test_find_model() {
        assert_eq!(find_model(ORDER, "Order").unwrap().name, "Order");
        assert!(matches!(
            find_model(ORDER, "Invoice"),
            Err(crate::Error::MissingModel(name)) if name == "Invoice"
        ));
    }
}
