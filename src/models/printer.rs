//! Printer (resource) model.
//!
//! A printer is the row axis of the timeline: identity only, no schedule
//! state of its own. Printers are created and maintained by an external
//! printer-management system; the layout engine treats them as read-only.

use serde::{Deserialize, Serialize};

/// Label used when a printer has no type assigned.
pub const UNKNOWN_TYPE_LABEL: &str = "Unknown resource type";

/// A physical printer that jobs are laid out against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Printer {
    /// Unique printer identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Printer type name (e.g., "FDM 0.4mm"). `None` = type not assigned.
    pub type_name: Option<String>,
}

impl Printer {
    /// Creates a new printer with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            type_name: None,
        }
    }

    /// Sets the printer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the printer type name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Display label for the printer type.
    ///
    /// A missing type is an expected state, not an error; it renders
    /// as [`UNKNOWN_TYPE_LABEL`].
    pub fn type_label(&self) -> &str {
        self.type_name.as_deref().unwrap_or(UNKNOWN_TYPE_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_builder() {
        let p = Printer::new("P1")
            .with_name("Prusa MK4")
            .with_type_name("FDM 0.4mm");

        assert_eq!(p.id, "P1");
        assert_eq!(p.name, "Prusa MK4");
        assert_eq!(p.type_label(), "FDM 0.4mm");
    }

    #[test]
    fn test_printer_without_type() {
        let p = Printer::new("P2").with_name("Old Ender");
        assert_eq!(p.type_name, None);
        assert_eq!(p.type_label(), UNKNOWN_TYPE_LABEL);
    }

    #[test]
    fn test_printer_serde_roundtrip() {
        let p = Printer::new("P1").with_name("Prusa MK4");
        let json = serde_json::to_string(&p).unwrap();
        let back: Printer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
