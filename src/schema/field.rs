use serde::{Deserialize, Serialize};

/// One `<name> <type>` line of a model block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Raw type token, e.g. `String?` or `Order[]`; `None` when the line had a single token
    pub declared_type: Option<String>,
}

impl Field {
    pub fn new(name: &str, declared_type: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            declared_type: declared_type.map(str::to_owned),
        }
    }

    /// Declared type without the `?` and `[]` markers
    pub fn base_type(&self) -> Option<&str> {
        self.declared_type
            .as_deref()
            .map(|ty| ty.trim_end_matches('?').trim_end_matches("[]"))
    }

    pub fn is_optional(&self) -> bool {
        self.declared_type
            .as_deref()
            .is_some_and(|ty| ty.contains('?'))
    }

    pub fn is_list(&self) -> bool {
        self.declared_type
            .as_deref()
            .is_some_and(|ty| ty.contains("[]"))
    }

    pub fn is_boolean(&self) -> bool {
        self.base_type() == Some("Boolean")
    }

    pub fn is_integer(&self) -> bool {
        self.base_type() == Some("Int")
    }

    pub fn is_date_time(&self) -> bool {
        self.base_type() == Some("DateTime")
    }

    /// `@@index(...)` style block attribute
    pub fn is_directive(&self) -> bool {
        self.name.starts_with("@@")
    }

    pub fn is_system_field(&self) -> bool {
        self.name == "id" || self.is_list() || self.is_directive()
    }

    /// Whether a form control for this field gets a `required` rule
    pub fn is_required(&self) -> bool {
        self.declared_type.is_some() && !self.is_optional() && !self.is_boolean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let title = Field::new("title", Some("String"));
        assert!(title.is_required());
        assert!(!title.is_optional());
        assert!(!title.is_system_field());

        let note = Field::new("note", Some("String?"));
        assert!(note.is_optional());
        assert!(!note.is_required());
        assert_eq!(note.base_type(), Some("String"));

        let active = Field::new("active", Some("Boolean"));
        assert!(active.is_boolean());
        assert!(!active.is_required());

        let items = Field::new("items", Some("OrderItem[]"));
        assert!(items.is_list());
        assert!(items.is_system_field());
        assert_eq!(items.base_type(), Some("OrderItem"));

        assert!(Field::new("id", Some("Int")).is_system_field());
        assert!(Field::new("@@index([userId])", None).is_directive());
        assert!(Field::new("count", Some("Int?")).is_integer());
        assert!(Field::new("createdAt", Some("DateTime")).is_date_time());
    }

    #[test]
    fn test_missing_type() {
        let field = Field::new("orphan", None);
        assert_eq!(field.base_type(), None);
        assert!(!field.is_optional());
        assert!(!field.is_list());
        assert!(!field.is_required());
        assert!(!field.is_boolean());
    }
}
