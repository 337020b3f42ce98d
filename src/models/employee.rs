use serde::Serialize;

/// A registered employee (⇔ `employees` row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}
