//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Tab / S-Tab for moving between form fields
    pub fn with_field_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("Tab", "Next Field"));
        self.shortcuts.push(Shortcut::new("S-Tab", "Prev Field"));
        self
    }

    /// Add Ctrl+q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("C-q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Add a shortcut only when `condition` holds
    pub fn add_if(self, condition: bool, key: &str, description: &str) -> Self {
        if condition {
            self.add(key, description)
        } else {
            self
        }
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_field_navigation().build();

        assert_eq!(shortcuts.len(), 2);
        assert!(shortcuts.iter().any(|s| s.key == "Tab"));
        assert!(shortcuts.iter().any(|s| s.key == "S-Tab"));
    }

    #[test]
    fn test_add_if() {
        let shortcuts = ShortcutsBuilder::new()
            .add_if(true, "x", "Remove")
            .add_if(false, "c", "Change")
            .with_quit()
            .build();

        assert_eq!(shortcuts.len(), 2);
        assert!(shortcuts.iter().any(|s| s.key == "x"));
        assert!(!shortcuts.iter().any(|s| s.key == "c"));
    }

    #[test]
    fn test_empty_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().build();

        assert_eq!(shortcuts.len(), 0);
    }
}
