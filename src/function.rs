use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Permission tag the backend checks for a core function
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Permission {
    Aggregation,
    Read,
    Create,
    Update,
    Delete,
}

/// The fixed CRUD verbs every model API exposes.
///
/// The camelCase string form is the method name on `api.apis.<Model>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum CoreFunction {
    Count,
    Exist,
    FindMany,
    FindOne,
    CreateOne,
    CreateMany,
    CreateList,
    UpdateOne,
    UpdateMany,
    UpdateList,
    DeleteOne,
    DeleteMany,
    DeleteAll,
}

impl CoreFunction {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn permission(&self) -> Permission {
        match self {
            Self::Count => Permission::Aggregation,
            Self::Exist | Self::FindMany | Self::FindOne => Permission::Read,
            Self::CreateOne | Self::CreateMany | Self::CreateList => Permission::Create,
            Self::UpdateOne | Self::UpdateMany | Self::UpdateList => Permission::Update,
            Self::DeleteOne | Self::DeleteMany | Self::DeleteAll => Permission::Delete,
        }
    }

    /// URL path suffix under `/api/<model>/`
    pub fn fixed_path(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Exist => "exist",
            Self::FindMany => "find-many",
            Self::FindOne => "find-first",
            Self::CreateOne => "create",
            Self::CreateMany => "create-many",
            Self::CreateList => "create-list",
            Self::UpdateOne => "update",
            Self::UpdateMany => "update-many",
            Self::UpdateList => "update-list",
            Self::DeleteOne => "delete",
            Self::DeleteMany => "delete-many",
            Self::DeleteAll => "delete-all",
        }
    }

    /// Updates are sent as `PATCH`, everything else as `POST`
    pub fn http_method(&self) -> &'static str {
        match self {
            Self::UpdateOne | Self::UpdateMany | Self::UpdateList => "PATCH",
            _ => "POST",
        }
    }

    /// `deleteAll` is the only call sent without a body
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::DeleteAll)
    }

    pub fn method(&self) -> &'static str {
        (*self).into()
    }

    /// `/api/<model>/<path>` for a camelCase model segment
    pub fn route(&self, model_segment: &str) -> String {
        format!("/api/{}/{}", model_segment, self.fixed_path())
    }
}
