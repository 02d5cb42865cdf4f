use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::common::{EntityRecord, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Terminated,
}

/// HR employee record, persisted under the `hrm_employees_v2` storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub joined_on: String,
}

impl Employee {
    /// Blank create-mode draft: status Active, joined today.
    pub fn template() -> Self {
        Self {
            id: 0,
            name: String::new(),
            email: String::new(),
            role: String::new(),
            department: String::new(),
            status: EmployeeStatus::Active,
            joined_on: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl EntityRecord for Employee {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role, &self.department]
    }

    fn required_fields() -> &'static [&'static str] {
        &["name", "email", "role"]
    }
}
