// ==========================================
// Employee Registry - domain value types
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Employment status (listing filter)
// ==========================================
// "Active" (any case) selects active employees; any other non-blank value
// selects inactive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,
    Inactive,
}

impl EmploymentStatus {
    /// Interpret a raw status filter; blank means "no filter".
    pub fn from_filter(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.eq_ignore_ascii_case("active") {
            Some(EmploymentStatus::Active)
        } else {
            Some(EmploymentStatus::Inactive)
        }
    }

    pub fn matches(self, is_active: bool) -> bool {
        match self {
            EmploymentStatus::Active => is_active,
            EmploymentStatus::Inactive => !is_active,
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "ACTIVE"),
            EmploymentStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

// ==========================================
// EmployeeFilter - normalized listing filters
// ==========================================
// Blank / whitespace-only inputs become None. All present filters are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Case-insensitive exact match on department
    pub department: Option<String>,
    pub status: Option<EmploymentStatus>,
    /// Case-insensitive substring match on name
    pub search: Option<String>,
}

impl EmployeeFilter {
    pub fn from_raw(department: Option<&str>, status: Option<&str>, search: Option<&str>) -> Self {
        Self {
            department: non_blank(department),
            status: status.and_then(EmploymentStatus::from_filter),
            search: non_blank(search),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.status.is_none() && self.search.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
