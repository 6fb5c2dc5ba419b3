//! Menu commands and the table rendered before each prompt.

/// Commands the operator can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    View,
    Analysis,
    Add,
    Edit,
    Delete,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub command: Command,
    pub label: &'static str,
    /// Extra names accepted for this entry besides its label.
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

impl MenuEntry {
    fn matches(&self, choice: &str) -> bool {
        self.label.eq_ignore_ascii_case(choice)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(choice))
    }
}

/// Ordered, immutable menu table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Finds the command whose label or alias matches trimmed `input`,
    /// ignoring case.
    pub fn select(&self, input: &str) -> Option<Command> {
        let choice = input.trim();
        self.entries
            .iter()
            .find(|entry| entry.matches(choice))
            .map(|entry| entry.command)
    }
}

impl Default for Menu {
    fn default() -> Self {
        let entry = |command: Command,
                     label: &'static str,
                     aliases: &'static [&'static str],
                     description: &'static str| MenuEntry {
            command,
            label,
            aliases,
            description,
        };
        Self::new(vec![
            entry(Command::View, "View", &["display"], "View country data"),
            entry(
                Command::Analysis,
                "Analysis",
                &[],
                "View maximum and minimum values for each metric",
            ),
            entry(Command::Add, "Add", &[], "Add data"),
            entry(Command::Edit, "Edit", &[], "Edit data"),
            entry(Command::Delete, "Delete", &[], "Delete data"),
            entry(Command::Quit, "Quit", &[], "Exits the program"),
        ])
    }
}
