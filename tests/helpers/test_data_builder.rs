// ==========================================
// Test data builders
// ==========================================

use employee_registry::domain::EmployeeDraft;

// ==========================================
// EmployeeDraft builder
// ==========================================

pub struct DraftBuilder {
    name: String,
    department: String,
    email: String,
    is_active: bool,
}

impl DraftBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            department: "Eng".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            is_active: true,
        }
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> EmployeeDraft {
        EmployeeDraft::new(self.name, self.department, self.email, self.is_active)
    }
}

// ==========================================
// Import sheet rows
// ==========================================

pub fn standard_header() -> Vec<String> {
    cells(&["Name", "Department", "Email", "IsActive"])
}

pub fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// `count` valid rows with unique emails, alternating active flags
pub fn unique_rows(count: usize) -> Vec<Vec<String>> {
    (1..=count)
        .map(|i| {
            vec![
                format!("Employee {i}"),
                if i % 2 == 0 { "Eng" } else { "HR" }.to_string(),
                format!("employee{i}@example.com"),
                if i % 3 == 0 { "false" } else { "true" }.to_string(),
            ]
        })
        .collect()
}
