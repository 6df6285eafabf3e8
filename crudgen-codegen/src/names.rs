use crate::Error;
use crudgen::{ModelDescriptor, naming::lower_first};

/// Every spelling of an entity name a template interpolates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelNames {
    pub name: String,
    pub plural: String,
    pub singular: String,
    pub plural_camel: String,
    pub singular_camel: String,
    pub plural_kebab: String,
    pub singular_kebab: String,
    /// camelCase of `name`, the `/api/<segment>/...` part of request URLs
    pub route_segment: String,
    pub file_stem: String,
}

impl ModelNames {
    pub fn new(model: &ModelDescriptor) -> Result<Self, Error> {
        model.validate()?;
        Ok(Self {
            name: model.name.clone(),
            plural: model.plural.clone(),
            singular: model.singular.clone(),
            plural_camel: model.plural_camel(),
            singular_camel: model.singular_camel(),
            plural_kebab: model.plural_kebab(),
            singular_kebab: model.singular_kebab(),
            route_segment: lower_first(&model.name),
            file_stem: model.file_stem(),
        })
    }
}

impl TryFrom<&ModelDescriptor> for ModelNames {
    type Error = Error;

    fn try_from(model: &ModelDescriptor) -> Result<Self, Self::Error> {
        Self::new(model)
    }
}
