use super::StateStore;
use crate::{
    Error,
    naming::pluralize,
    schema::{model_name, split_models},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Key the page catalog is stored under
pub const PAGES_KEY: &str = "pages";

/// A named page the generator can be seeded from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: u64,
    pub name_singular: String,
    pub name_plural: String,
    pub model: String,
}

/// A page as produced from schema text, before it gets an id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageDraft {
    pub name_singular: String,
    pub name_plural: String,
    pub model: String,
}

/// What importing a schema would change
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub create: Vec<PageDraft>,
    /// Existing id paired with its new content
    pub update: Vec<(u64, PageDraft)>,
}

/// Every stored page, ordered by id
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCatalog {
    pages: Vec<PageRecord>,
}

impl ImportPlan {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.update.is_empty()
    }
}

impl PageCatalog {
    pub fn new(pages: Vec<PageRecord>) -> Self {
        Self { pages }
    }

    pub fn load<S: StateStore>(store: &S) -> Result<Self, Error> {
        match store.get(PAGES_KEY)? {
            Some(value) => Ok(Self {
                pages: serde_json::from_str(&value)?,
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn save<S: StateStore>(&self, store: &mut S) -> Result<(), Error> {
        store.set(PAGES_KEY, serde_json::to_string(&self.pages)?)
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn find(&self, name_singular: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|p| p.name_singular == name_singular)
    }

    /// Compare schema text against the catalog.
    ///
    /// A model whose singular name is unknown is created, a known one whose
    /// block text changed is updated, an identical one is left alone.
    pub fn plan_import(&self, schema: &str) -> Result<ImportPlan, Error> {
        let schema = schema.trim();
        if schema.is_empty() {
            return Err(Error::EmptySchema);
        }

        let mut plan = ImportPlan::default();
        for block in split_models(schema) {
            let Some(name) = model_name(&block) else {
                debug!("Skipping block without model header");
                continue;
            };
            let draft = PageDraft {
                name_plural: pluralize(&name),
                name_singular: name,
                model: block,
            };
            match self.find(&draft.name_singular) {
                Some(page) if page.model != draft.model => plan.update.push((page.id, draft)),
                Some(_) => {}
                None => plan.create.push(draft),
            }
        }
        Ok(plan)
    }

    /// Apply a plan, handing out ids after the current maximum
    pub fn apply(&mut self, plan: ImportPlan) {
        for (id, draft) in plan.update {
            if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
                page.name_singular = draft.name_singular;
                page.name_plural = draft.name_plural;
                page.model = draft.model;
            }
        }

        let mut next_id = self.pages.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        for draft in plan.create {
            self.pages.push(PageRecord {
                id: next_id,
                name_singular: draft.name_singular,
                name_plural: draft.name_plural,
                model: draft.model,
            });
            next_id += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = "model Category {\n id Int\n title String\n}\n\nmodel Box {\n id Int\n}";

    #[test]
    fn test_plan_import_on_empty_catalog() {
        let plan = PageCatalog::default().plan_import(SCHEMA).unwrap();
        assert_eq!(
            plan.create,
            vec![
                PageDraft {
                    name_singular: "Category".to_owned(),
                    name_plural: "Categories".to_owned(),
                    model: "model Category {\n id Int\n title String\n}".to_owned(),
                },
                PageDraft {
                    name_singular: "Box".to_owned(),
                    name_plural: "Boxes".to_owned(),
                    model: "model Box {\n id Int\n}".to_owned(),
                },
            ]
        );
        assert!(plan.update.is_empty());
    }

    #[test]
    fn test_plan_import_detects_changes() {
        let mut catalog = PageCatalog::default();
        catalog.apply(catalog.plan_import(SCHEMA).unwrap());
        assert_eq!(catalog.pages().len(), 2);
        assert_eq!(catalog.find("Box").unwrap().id, 2);

        assert!(catalog.plan_import(SCHEMA).unwrap().is_empty());

        let changed = "model Box {\n id Int\n size Int\n}\nmodel Lid {\n id Int\n}";
        let plan = catalog.plan_import(changed).unwrap();
        assert_eq!(plan.update.len(), 1);
        assert_eq!(plan.update[0].0, 2);
        assert_eq!(plan.create.len(), 1);

        catalog.apply(plan);
        assert_eq!(catalog.find("Box").unwrap().model, "model Box {\n id Int\n size Int\n}");
        assert_eq!(catalog.find("Lid").unwrap().id, 3);
    }

    #[test]
    fn test_plan_import_rejects_empty_schema() {
        assert!(matches!(
            PageCatalog::default().plan_import("  \n"),
            Err(Error::EmptySchema)
        ));
    }

    #[test]
    fn test_catalog_persists() {
        let mut store = MemoryStore::default();
        let mut catalog = PageCatalog::load(&store).unwrap();
        catalog.apply(catalog.plan_import(SCHEMA).unwrap());
        catalog.save(&mut store).unwrap();

        assert_eq!(PageCatalog::load(&store).unwrap(), catalog);
    }
}
