use serde::Serialize;
use std::fmt;

/// Closed set of result classifications returned alongside a formatted value.
/// Callers map these to their own icons; the evaluator never returns glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Temperature,
    Weight,
    Volume,
    Percentage,
    Math,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Temperature,
        Category::Weight,
        Category::Volume,
        Category::Percentage,
        Category::Math,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
            Category::Percentage => "Percentage",
            Category::Math => "Math",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recognized query: the display string plus its category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub text: String,
    pub category: Category,
}

impl Evaluation {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}
