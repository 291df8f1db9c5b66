use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Per-user, per-module action grant. Enforcement happens on the server;
/// this record only drives what the console offers to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccess {
    #[serde(rename = "ID")]
    pub id: i32,
    pub user_name: String,
    #[serde(rename = "ModuleID")]
    pub module_id: Option<i32>,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccessDraft {
    pub user_name: String,
    #[serde(rename = "ModuleID")]
    pub module_id: Option<i32>,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

impl UserAccessDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("UserName", &self.user_name, "User name");
        v.require_selected("ModuleID", self.module_id, "Module");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> UserAccess {
        UserAccess {
            id,
            user_name: self.user_name,
            module_id: self.module_id,
            can_view: self.can_view,
            can_add: self.can_add,
            can_edit: self.can_edit,
            can_delete: self.can_delete,
        }
    }
}

impl From<&UserAccess> for UserAccessDraft {
    fn from(record: &UserAccess) -> Self {
        Self {
            user_name: record.user_name.clone(),
            module_id: record.module_id,
            can_view: record.can_view,
            can_add: record.can_add,
            can_edit: record.can_edit,
            can_delete: record.can_delete,
        }
    }
}

impl Resource for UserAccess {
    type Draft = UserAccessDraft;
    const BASE_PATH: &'static str = "/userAccess";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "User Access"
    }

    fn list_name() -> &'static str {
        "User Access"
    }
}
