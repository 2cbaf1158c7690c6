//! Command registry for centralized access.

/// Built-in portfolio commands, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Resume,
    Clear,
    Whoami,
    Date,
    Ls,
}

impl Command {
    /// All commands, in the order help and `ls` list them.
    pub fn all() -> &'static [Command] {
        &[
            Self::Help,
            Self::About,
            Self::Skills,
            Self::Projects,
            Self::Experience,
            Self::Contact,
            Self::Resume,
            Self::Clear,
            Self::Whoami,
            Self::Date,
            Self::Ls,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Clear => "clear",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::Ls => "ls",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show this help message",
            Self::About => "Display information about me",
            Self::Skills => "Show my technical skills",
            Self::Projects => "List my featured projects",
            Self::Experience => "Show my work experience",
            Self::Contact => "Get in touch with me",
            Self::Resume => "Download my resume",
            Self::Clear => "Clear the terminal screen",
            Self::Whoami => "Display current user information",
            Self::Date => "Show current date and time",
            Self::Ls => "List available commands",
        }
    }

    /// Look up a command by raw input. Surrounding whitespace and letter case are ignored.
    pub fn parse(input: &str) -> Option<Command> {
        let normalized = input.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|cmd| cmd.name() == normalized)
    }

    pub fn spec(&self) -> CommandSpec {
        CommandSpec {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Name and description pair shown by help, `ls` and autocomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Central, ordered registry of command specs.
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            specs: Command::all().iter().map(Command::spec).collect(),
        }
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Entries whose name starts with the lower-cased input, in registry order.
    /// Blank input matches everything.
    pub fn filter_prefix(&self, input: &str) -> Vec<CommandSpec> {
        if input.trim().is_empty() {
            return self.specs.clone();
        }
        let input_lower = input.to_lowercase();
        self.specs
            .iter()
            .filter(|spec| spec.name.starts_with(&input_lower))
            .copied()
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_eleven_commands_in_order() {
        let registry = CommandRegistry::new();
        let names: Vec<_> = registry.specs().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "help",
                "about",
                "skills",
                "projects",
                "experience",
                "contact",
                "resume",
                "clear",
                "whoami",
                "date",
                "ls"
            ]
        );
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        for cmd in Command::all() {
            let shouted = format!("  {}\t", cmd.name().to_uppercase());
            assert_eq!(Command::parse(&shouted), Some(*cmd));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_partial() {
        assert_eq!(Command::parse("foo"), None);
        assert_eq!(Command::parse("hel"), None);
        assert_eq!(Command::parse("help me"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn filter_prefix_h_matches_only_help() {
        let registry = CommandRegistry::new();
        let names: Vec<_> = registry.filter_prefix("h").iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["help"]);
    }

    #[test]
    fn filter_prefix_is_case_insensitive() {
        let registry = CommandRegistry::new();
        let names: Vec<_> = registry.filter_prefix("C").iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["contact", "clear"]);
    }

    #[test]
    fn filter_prefix_empty_returns_full_registry() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.filter_prefix(""), registry.specs().to_vec());
    }

    #[test]
    fn filter_prefix_no_match() {
        let registry = CommandRegistry::new();
        assert!(registry.filter_prefix("zzz").is_empty());
    }
}
