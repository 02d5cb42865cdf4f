use crate::model::{Employee, EmployeeStatus, Lead, LeadStatus};

/// Storage key for the CRM leads collection.
pub const LEADS_STORAGE_KEY: &str = "erp_crm_leads";

/// Storage key for the HR employees collection.
pub const EMPLOYEES_STORAGE_KEY: &str = "hrm_employees_v2";

/// Fallback CRM leads, shown whenever the stored collection is absent,
/// unreadable, or empty. Ids and dates are fixed so the fallback renders
/// identically on every launch.
pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: 1_735_000_000_001,
            name: "Rajesh Khanna".to_string(),
            email: "rajesh.khanna@khannalogistics.in".to_string(),
            phone: "9820012345".to_string(),
            company: "Khanna Logistics".to_string(),
            status: LeadStatus::Qualified,
            created_on: "2026-01-12".to_string(),
        },
        Lead {
            id: 1_735_000_000_002,
            name: "Meera Iyer".to_string(),
            email: "meera@iyerexports.in".to_string(),
            phone: "9845098450".to_string(),
            company: "Iyer Exports".to_string(),
            status: LeadStatus::New,
            created_on: "2026-02-03".to_string(),
        },
        Lead {
            id: 1_735_000_000_003,
            name: "Arjun Nair".to_string(),
            email: "arjun.nair@coastalfreight.in".to_string(),
            phone: "9900112233".to_string(),
            company: "Coastal Freight Co".to_string(),
            status: LeadStatus::Contacted,
            created_on: "2026-02-18".to_string(),
        },
        Lead {
            id: 1_735_000_000_004,
            name: "Sofia D'Souza".to_string(),
            email: "sofia@dsouzamotors.in".to_string(),
            phone: "9765432109".to_string(),
            company: "D'Souza Motors".to_string(),
            status: LeadStatus::Lost,
            created_on: "2026-03-01".to_string(),
        },
    ]
}

/// Fallback HR employees.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1_735_000_000_101,
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@company.in".to_string(),
            role: "Fleet Manager".to_string(),
            department: "Operations".to_string(),
            status: EmployeeStatus::Active,
            joined_on: "2024-06-10".to_string(),
        },
        Employee {
            id: 1_735_000_000_102,
            name: "Vikram Singh".to_string(),
            email: "vikram.singh@company.in".to_string(),
            role: "Driver".to_string(),
            department: "Transport".to_string(),
            status: EmployeeStatus::OnLeave,
            joined_on: "2023-11-02".to_string(),
        },
        Employee {
            id: 1_735_000_000_103,
            name: "Anita Deshpande".to_string(),
            email: "anita.d@company.in".to_string(),
            role: "HR Executive".to_string(),
            department: "Human Resources".to_string(),
            status: EmployeeStatus::Active,
            joined_on: "2025-01-20".to_string(),
        },
    ]
}
