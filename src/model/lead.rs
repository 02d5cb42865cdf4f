use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::common::{EntityRecord, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Lost,
}

/// CRM lead record, persisted under the `erp_crm_leads` storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: LeadStatus,
    /// Capture date as `YYYY-MM-DD`, matching the stored representation.
    pub created_on: String,
}

impl Lead {
    /// Blank create-mode draft: status New, dated today. The id is a
    /// placeholder until the store mints one on create.
    pub fn template() -> Self {
        Self {
            id: 0,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            status: LeadStatus::New,
            created_on: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}

impl EntityRecord for Lead {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.company]
    }

    fn required_fields() -> &'static [&'static str] {
        &["name", "email"]
    }
}
