use crate::query::types::Category;
use serde::{Deserialize, Serialize};

/// How results are written by the command line front end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Presentation icon per category. The evaluator only returns the category;
/// mapping it to a glyph is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CategoryIcons {
    pub temperature: String,
    pub weight: String,
    pub volume: String,
    pub percentage: String,
    pub math: String,
}

impl Default for CategoryIcons {
    fn default() -> Self {
        Self {
            temperature: "🌡".to_string(),
            weight: "⚖".to_string(),
            volume: "🧪".to_string(),
            percentage: "%".to_string(),
            math: "🧮".to_string(),
        }
    }
}

impl CategoryIcons {
    pub fn icon(&self, category: Category) -> &str {
        match category {
            Category::Temperature => &self.temperature,
            Category::Weight => &self.weight,
            Category::Volume => &self.volume,
            Category::Percentage => &self.percentage,
            Category::Math => &self.math,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub icons: CategoryIcons,
}

impl DisplayConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: DisplayConfig = toml::from_str(content)?;
        Ok(config)
    }
}
