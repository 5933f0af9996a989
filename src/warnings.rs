use serde::{Deserialize, Serialize};

/// Notice produced while turning form text into a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// Warning level ("warning" or "info")
    pub level: String,
    /// Form field the notice refers to
    pub field: String,
    pub message: String,
}

/// Collection of input warnings
#[derive(Debug, Clone, Default)]
pub struct InputWarnings {
    warnings: Vec<Warning>,
}

impl InputWarnings {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Text in a numeric field could not be read as a number and was replaced by 0
    pub fn add_invalid_number(&mut self, field: &str, value: &str) {
        self.warnings.push(Warning {
            level: "warning".to_string(),
            field: field.to_string(),
            message: format!("'{}' is not a number, using 0", value),
        });
    }

    /// Filament type or brand is not in the catalog, so the filament is priced at 0
    pub fn add_unknown_filament(&mut self, field: &str, value: &str) {
        self.warnings.push(Warning {
            level: "warning".to_string(),
            field: field.to_string(),
            message: format!("'{}' is not in the filament catalog, filament priced at 0", value),
        });
    }

    /// Monthly job count cannot divide the fixed costs
    pub fn add_no_monthly_jobs(&mut self, field: &str) {
        self.warnings.push(Warning {
            level: "warning".to_string(),
            field: field.to_string(),
            message: "monthly jobs must be greater than 0, no fixed cost allocated".to_string(),
        });
    }

    /// Add an informational message
    pub fn add_info(&mut self, field: &str, message: String) {
        self.warnings.push(Warning {
            level: "info".to_string(),
            field: field.to_string(),
            message,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Warnings that refer to one field
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Warning> + 'a {
        self.warnings.iter().filter(move |w| w.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_invalid_number() {
        let mut warnings = InputWarnings::new();
        warnings.add_invalid_number("print_hours", "abc");

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings.warnings()[0].level, "warning");
        assert_eq!(warnings.warnings()[0].field, "print_hours");
        assert!(warnings.warnings()[0].message.contains("abc"));
    }

    #[test]
    fn test_for_field() {
        let mut warnings = InputWarnings::new();
        warnings.add_invalid_number("print_hours", "x");
        warnings.add_no_monthly_jobs("monthly_jobs");
        warnings.add_info("monthly_jobs", "rounded".to_string());

        assert_eq!(warnings.for_field("monthly_jobs").count(), 2);
        assert_eq!(warnings.for_field("filament_grams").count(), 0);
    }

    #[test]
    fn test_empty_warnings() {
        let warnings = InputWarnings::new();
        assert!(warnings.is_empty());
        assert_eq!(warnings.len(), 0);
    }
}
