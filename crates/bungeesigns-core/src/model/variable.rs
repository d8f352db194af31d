/// A `%token%` placeholder defined under `variables` in `layout.yml`
///
/// The type tag and argument string are interpreted by the sign renderer;
/// this type only carries them and performs the textual substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomVariable {
    kind: String,
    placeholder: String,
    arguments: String,
}

impl CustomVariable {
    /// Create a variable for the config key `name`, which becomes `%name%`
    pub fn new(kind: impl Into<String>, name: &str, arguments: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            placeholder: format!("%{}%", name),
            arguments: arguments.into(),
        }
    }

    /// Type tag, e.g. `TEXT`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Placeholder token including the surrounding `%`
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    /// Replace every occurrence of the placeholder in `text` with `value`
    pub fn replace_in(&self, text: &str, value: &str) -> String {
        text.replace(&self.placeholder, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_and_replace() {
        let var = CustomVariable::new("TEXT", "network", "My Network");
        assert_eq!(var.placeholder(), "%network%");
        assert_eq!(var.kind(), "TEXT");
        assert_eq!(var.arguments(), "My Network");
        assert_eq!(
            var.replace_in("Join %network% - %network%", "Foo"),
            "Join Foo - Foo"
        );
        assert_eq!(var.replace_in("no token", "Foo"), "no token");
    }
}
