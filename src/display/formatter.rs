use crate::display::config::{DisplayConfig, OutputFormat};
use crate::query::types::Evaluation;

/// Render one evaluation as a single output line. `None` renders as an empty
/// line in text mode and `null` in JSON mode, so batch output stays aligned
/// with its input.
pub fn render(evaluation: Option<&Evaluation>, config: &DisplayConfig) -> String {
    match config.format {
        OutputFormat::Text => match evaluation {
            Some(evaluation) => format!(
                "{} {}  ({})",
                config.icons.icon(evaluation.category),
                evaluation.text,
                evaluation.category
            ),
            None => String::new(),
        },
        OutputFormat::Json => {
            serde_json::to_string(&evaluation).unwrap_or_else(|_| "null".to_string())
        }
    }
}
