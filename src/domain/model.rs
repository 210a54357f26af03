use serde::{Deserialize, Serialize};

/// Fixed-value factory: always the same descriptive line.
pub fn make_margherita() -> String {
    "This is a Margherita pizza.".to_string()
}

/// A labeled record produced by the parameterized factory. Immutable after
/// construction; `size` is rendered to text once so numeric and textual
/// inputs format identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub category: String,
    pub size: String,
}

impl Pizza {
    /// Accepts any category and any displayable size, no validation.
    pub fn new(category: impl Into<String>, size: impl ToString) -> Self {
        Self {
            category: category.into(),
            size: size.to_string(),
        }
    }

    /// Pure formatting from the record's own fields.
    pub fn description(&self) -> String {
        format!("This is a {}-inch {} pizza.", self.size, self.category)
    }

    /// Emits the description to stdout.
    pub fn describe(&self) {
        println!("{}", self.description());
    }
}

/// Built-in demo sequence, in print order: one fixed-value pizza, two
/// parameterized ones.
pub fn demo_lines() -> Vec<String> {
    vec![
        make_margherita(),
        Pizza::new("Hawaiian", 9).description(),
        Pizza::new("Vegetarian", 12).description(),
    ]
}
