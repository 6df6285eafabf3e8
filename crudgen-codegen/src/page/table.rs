use super::PageWriter;
use crate::util::escape_single_quoted;
use crudgen::{Field, naming::upper_first};

impl PageWriter {
    /// Display label of a field: the override if one is set, else the field
    /// name, first character upper-cased
    pub fn label(&self, field: &Field) -> String {
        let label = match self.display_names.get(&field.name) {
            Some(name) if !name.trim().is_empty() => name.as_str(),
            _ => field.name.as_str(),
        };
        escape_single_quoted(upper_first(label))
    }

    /// The `columns` array of the list table
    pub fn gen_columns(&self) -> String {
        let mut entries = vec!["      numericColumn(),".to_owned()];
        for column in self.columns.iter() {
            let mut lines = vec![
                "      {".to_owned(),
                format!("        title: t('{}'),", self.label(column)),
                format!("        dataIndex: '{}',", column.name),
                format!("        key: '{}',", column.name),
            ];
            if column.is_date_time() {
                lines.push(
                    "        render: (value: string) => defaultDateTimeFormat(value),".to_owned(),
                );
            }
            lines.push("      },".to_owned());
            entries.push(lines.join("\n"));
        }
        wrap_memo("columns", entries)
    }

    /// The `fields` array of the create/edit form
    pub fn gen_fields(&self) -> String {
        let entries = self
            .fields
            .iter()
            .map(|field| {
                let mut lines = vec![
                    "      {".to_owned(),
                    format!("        label: t('{}'),", self.label(field)),
                    format!("        name: '{}',", field.name),
                ];
                if field.is_boolean() {
                    lines.push("        type: 'switch',".to_owned());
                } else if field.is_integer() {
                    lines.push("        type: 'number',".to_owned());
                }
                if field.is_required() {
                    lines.push("        rules: [{ required: true }],".to_owned());
                }
                lines.push("      },".to_owned());
                lines.join("\n")
            })
            .collect();
        wrap_memo("fields", entries)
    }
}

fn wrap_memo(name: &str, entries: Vec<String>) -> String {
    let mut lines = vec![format!("  const {name} = useMemo("), "    () => [".to_owned()];
    lines.extend(entries);
    lines.push("    ],".to_owned());
    lines.push("    [t],".to_owned());
    lines.push("  );".to_owned());
    lines.join("\n")
}
