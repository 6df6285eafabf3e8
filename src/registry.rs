use crate::{
    Error,
    naming::{is_identifier, lower_first, to_kebab_case},
};
use serde::{Deserialize, Serialize};

/// Naming metadata for one entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Registry key, also the name of the per-model API surface (`api.apis.<name>`)
    pub name: String,
    /// Plural form used in collection hooks, e.g. `useOrders`
    pub plural: String,
    /// Singular form used in single-item hooks, e.g. `useOrder`
    pub singular: String,
}

/// A registry entry before defaults are applied
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModel {
    pub plural: Option<String>,
    pub singular: Option<String>,
}

/// Ordered, read-only mapping from entity key to [`ModelDescriptor`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
}

impl RawModel {
    pub fn new(plural: &str, singular: &str) -> Self {
        Self {
            plural: Some(plural.to_owned()),
            singular: Some(singular.to_owned()),
        }
    }
}

impl ModelDescriptor {
    /// Build a descriptor, checking that every form is usable as an identifier
    pub fn new(name: &str, plural: &str, singular: &str) -> Result<Self, Error> {
        let descriptor = Self {
            name: name.to_owned(),
            plural: plural.to_owned(),
            singular: singular.to_owned(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (kind, value) in [
            ("model name", &self.name),
            ("plural name", &self.plural),
            ("singular name", &self.singular),
        ] {
            if !is_identifier(value) {
                return Err(Error::InvalidIdentifier {
                    kind,
                    value: value.clone(),
                });
            }
        }
        if self.plural_camel() == self.singular_camel() {
            return Err(Error::AmbiguousPlural {
                model: self.name.clone(),
                name: self.plural.clone(),
            });
        }
        Ok(())
    }

    pub fn plural_camel(&self) -> String {
        lower_first(&self.plural)
    }

    pub fn singular_camel(&self) -> String {
        lower_first(&self.singular)
    }

    pub fn plural_kebab(&self) -> String {
        to_kebab_case(&self.plural)
    }

    pub fn singular_kebab(&self) -> String {
        to_kebab_case(&self.singular)
    }

    /// Stem of the generated hook file, derived from `name`
    pub fn file_stem(&self) -> String {
        to_kebab_case(&self.name)
    }
}

impl ModelRegistry {
    /// Apply defaults to every raw entry.
    ///
    /// Each descriptor starts as `{ plural: key + "s", singular: key }`, raw
    /// overrides replace those, and `name` is always the key. A repeated key
    /// keeps its first position and takes the later overrides.
    pub fn build<I, K>(raw: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, RawModel)>,
        K: Into<String>,
    {
        let mut models: Vec<ModelDescriptor> = Vec::new();
        for (key, raw) in raw {
            let key: String = key.into();
            let descriptor = ModelDescriptor {
                plural: raw.plural.unwrap_or_else(|| format!("{key}s")),
                singular: raw.singular.unwrap_or_else(|| key.clone()),
                name: key,
            };
            descriptor.validate()?;
            match models.iter_mut().find(|m| m.name == descriptor.name) {
                Some(existing) => *existing = descriptor,
                None => models.push(descriptor),
            }
        }
        Ok(Self { models })
    }

    /// The built-in model list of the admin application
    pub fn seed() -> Result<Self, Error> {
        Self::build(
            SEED_MODELS
                .iter()
                .map(|(key, plural, singular)| (*key, RawModel::new(plural, singular))),
        )
    }

    pub fn get(&self, key: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.name == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModelRegistry {
    type Item = &'a ModelDescriptor;
    type IntoIter = std::slice::Iter<'a, ModelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

/// `(key, plural, singular)`
pub const SEED_MODELS: [(&str, &str, &str); 38] = [
    ("Pages", "Pages", "Page"),
    ("PageView", "PageViews", "PageView"),
    ("User", "Users", "User"),
    ("Role", "Roles", "Role"),
    ("Permission", "Permissions", "Permission"),
    ("Notifications", "Notifications", "Notification"),
    ("Suggestions", "Suggestions", "Suggestion"),
    ("Notes", "Notes", "Note"),
    ("EventCalendar", "EventCalendars", "EventCalendar"),
    ("UserDevice", "UserDevices", "UserDevice"),
    ("ViewNotification", "ViewNotifications", "ViewNotification"),
    ("Partner", "Partners", "Partner"),
    ("ErrorFeedback", "ErrorFeedbacks", "ErrorFeedback"),
    ("ErrorLog", "ErrorLogs", "ErrorLog"),
    // Leads
    ("LeadStatus", "LeadStatuses", "LeadStatus"),
    ("Lead", "Leads", "Lead"),
    ("LeadHistory", "LeadHistories", "LeadHistory"),
    ("LeadComment", "LeadComments", "LeadComment"),
    ("LeadStatusHistory", "LeadStatusHistories", "LeadStatusHistory"),
    ("TgGroup", "TgGroups", "TgGroup"),
    // Academy
    ("Mentor", "Mentors", "Mentor"),
    ("CourseCategory", "CourseCategories", "CourseCategory"),
    ("Course", "Courses", "Course"),
    ("CourseEnrollment", "CourseEnrollments", "CourseEnrollment"),
    ("Lesson", "Lessons", "Lesson"),
    ("Module", "Modules", "Module"),
    ("Assignment", "Assignments", "Assignment"),
    ("UserAssignment", "UserAssignments", "UserAssignment"),
    ("Task", "Tasks", "Task"),
    ("UserTask", "UserTasks", "UserTask"),
    ("Bookmark", "Bookmarks", "Bookmark"),
    ("Event", "Events", "Event"),
    // Shop
    ("ShopCategory", "ShopCategories", "ShopCategory"),
    ("Product", "Products", "Product"),
    ("FavoriteProduct", "FavoriteProducts", "FavoriteProduct"),
    ("Order", "Orders", "Order"),
    ("OrderItem", "OrderItems", "OrderItem"),
    // Coins
    ("CoinHistory", "CoinHistories", "CoinHistory"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_applies_defaults() {
        let registry = ModelRegistry::build([
            ("Order", RawModel::default()),
            (
                "Category",
                RawModel {
                    plural: Some("Categories".to_owned()),
                    singular: None,
                },
            ),
        ])
        .unwrap();

        assert_eq!(
            registry.get("Order"),
            Some(&ModelDescriptor {
                name: "Order".to_owned(),
                plural: "Orders".to_owned(),
                singular: "Order".to_owned(),
            })
        );
        assert_eq!(registry.get("Category").unwrap().plural, "Categories");
        assert_eq!(registry.get("Category").unwrap().singular, "Category");
    }

    #[test]
    fn test_build_keeps_insertion_order() {
        let registry = ModelRegistry::build([
            ("Zebra", RawModel::default()),
            ("Apple", RawModel::default()),
            ("Zebra", RawModel::new("Zebras", "Zebra")),
        ])
        .unwrap();
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["Zebra", "Apple"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_name_is_always_the_key() {
        let registry = ModelRegistry::build([("Pages", RawModel::new("Pages", "Page"))]).unwrap();
        let pages = registry.get("Pages").unwrap();
        assert_eq!(pages.name, "Pages");
        assert_eq!(pages.singular, "Page");
        assert_eq!(pages.file_stem(), "pages");
    }

    #[test]
    fn test_build_rejects_bad_identifiers() {
        let err = ModelRegistry::build([("Order Item", RawModel::default())]).unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { kind: "model name", .. }));

        let err = ModelRegistry::build([("Order", RawModel::new("Orders'", "Order"))]).unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { kind: "plural name", .. }));
    }

    #[test]
    fn test_build_rejects_plural_equal_to_singular() {
        let err = ModelRegistry::build([("Fish", RawModel::new("Fish", "Fish"))]).unwrap_err();
        assert!(matches!(
            &err,
            Error::AmbiguousPlural { model, name } if model == "Fish" && name == "Fish"
        ));
        assert!(err.to_string().contains("`Fish`"));

        // only the first letter differs, the query keys would still clash
        let err = ModelRegistry::build([("Sheep", RawModel::new("sheep", "Sheep"))]).unwrap_err();
        assert!(matches!(err, Error::AmbiguousPlural { .. }));

        assert!(ModelDescriptor::new("Sheep", "Sheep", "Sheep").is_err());
        assert!(ModelDescriptor::new("Fish", "Fishes", "Fish").is_ok());
    }

    #[test]
    fn test_seed() {
        let registry = ModelRegistry::seed().unwrap();
        assert_eq!(registry.len(), SEED_MODELS.len());
        assert_eq!(registry.keys().next(), Some("Pages"));
        let status = registry.get("LeadStatusHistory").unwrap();
        assert_eq!(status.plural_camel(), "leadStatusHistories");
        assert_eq!(status.plural_kebab(), "lead-status-histories");
        assert_eq!(status.singular_camel(), "leadStatusHistory");
    }
}
