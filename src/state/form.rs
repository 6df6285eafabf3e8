use super::StateStore;
use crate::{
    Error, ModelDescriptor,
    schema::{Field, extract_columns, extract_form_fields},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key the page generator's form state is stored under
pub const FORM_STATE_KEY: &str = "modelForm";

/// Names, model text and table toggles of the page being generated
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelForm {
    pub singular: String,
    pub plural: String,
    /// The `model <Name> { ... }` block
    pub model: String,
    #[serde(default)]
    pub add: bool,
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub remove: bool,
    #[serde(default)]
    pub view: bool,
    /// Stored under `hidePagination`; `true` shows the pagination bar
    #[serde(default, rename = "hidePagination")]
    pub pagination: bool,
    #[serde(default)]
    pub reload: bool,
}

/// Everything the interactive generator needs to reproduce a page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorFormState {
    #[serde(rename = "formData")]
    pub form_data: ModelForm,
    #[serde(rename = "formColumnsData", default)]
    pub column_selection: BTreeMap<String, bool>,
    #[serde(rename = "formFieldsData", default)]
    pub field_selection: BTreeMap<String, bool>,
    #[serde(rename = "formNamesData", default)]
    pub display_names: BTreeMap<String, String>,
}

impl ModelForm {
    /// Add, edit and remove on; view, pagination and reload off
    pub fn new(singular: &str, plural: &str, model: &str) -> Self {
        Self {
            singular: singular.to_owned(),
            plural: plural.to_owned(),
            model: model.to_owned(),
            add: true,
            edit: true,
            remove: true,
            view: false,
            pagination: false,
            reload: false,
        }
    }
}

impl GeneratorFormState {
    /// Start with every extracted column and form field selected
    pub fn new(form_data: ModelForm) -> Self {
        let column_selection = extract_columns(&form_data.model)
            .into_iter()
            .map(|field| (field.name, true))
            .collect();
        let field_selection = extract_form_fields(&form_data.model)
            .into_iter()
            .map(|field| (field.name, true))
            .collect();
        Self {
            form_data,
            column_selection,
            field_selection,
            display_names: BTreeMap::new(),
        }
    }

    /// Keep only the named columns selected
    pub fn select_columns<S: AsRef<str>>(&mut self, names: &[S]) {
        select_only(&mut self.column_selection, names);
    }

    /// Keep only the named form fields selected
    pub fn select_fields<S: AsRef<str>>(&mut self, names: &[S]) {
        select_only(&mut self.field_selection, names);
    }

    /// Columns of the model text that are switched on, in schema order
    pub fn selected_columns(&self) -> Vec<Field> {
        extract_columns(&self.form_data.model)
            .into_iter()
            .filter(|field| self.column_selection.get(&field.name) == Some(&true))
            .collect()
    }

    /// Form fields of the model text that are switched on, in schema order
    pub fn selected_fields(&self) -> Vec<Field> {
        extract_form_fields(&self.form_data.model)
            .into_iter()
            .filter(|field| self.field_selection.get(&field.name) == Some(&true))
            .collect()
    }

    /// The page talks to `api.apis.<Singular>`
    pub fn model_descriptor(&self) -> Result<ModelDescriptor, Error> {
        let form = &self.form_data;
        ModelDescriptor::new(&form.singular, &form.plural, &form.singular)
    }

    pub fn save<S: StateStore>(&self, store: &mut S) -> Result<(), Error> {
        store.set(FORM_STATE_KEY, serde_json::to_string(self)?)
    }

    /// `None` until a page has been generated once
    pub fn load<S: StateStore>(store: &S) -> Result<Option<Self>, Error> {
        match store.get(FORM_STATE_KEY)? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }
}

fn select_only<S: AsRef<str>>(selection: &mut BTreeMap<String, bool>, names: &[S]) {
    for (name, selected) in selection.iter_mut() {
        *selected = names.iter().any(|n| n.as_ref() == name);
    }
}
