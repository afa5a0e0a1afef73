use serde::Serialize;

/// Winner of an aggregate reduction: employee name and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeStat<T> {
    pub name: String,
    pub value: T,
}

impl<T> EmployeeStat<T> {
    pub fn new(name: &str, value: T) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    /// Sentinel results carry an empty name.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}
