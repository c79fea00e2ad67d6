use std::collections::BTreeMap;

use tailor_core::display::DisplaySink;

/// In-memory display target for the terminal quote form.
///
/// Slots are stored by name exactly as the binding writes them; `render`
/// turns the current slot contents into readout lines. Text slots and raw
/// value slots are kept apart so the hidden total-amount field never leaks
/// into the human-readable output.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    texts: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatted readout for a display slot, if the binding has written it.
    pub fn text(
        &self,
        field: &str,
    ) -> Option<&str> {
        self.texts.get(field).map(String::as_str)
    }

    /// Raw value for a form-submission slot, if the binding has written it.
    pub fn value(
        &self,
        field: &str,
    ) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Renders one line per readout, labeled with the slot name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (field, text) in &self.texts {
            out.push_str(&format!("  {field:<24} {text}\n"));
        }
        out
    }
}

impl DisplaySink for TerminalDisplay {
    fn set_text(
        &mut self,
        field: &str,
        text: &str,
    ) {
        self.texts.insert(field.to_string(), text.to_string());
    }

    fn set_value(
        &mut self,
        field: &str,
        value: &str,
    ) {
        self.values.insert(field.to_string(), value.to_string());
    }
}
