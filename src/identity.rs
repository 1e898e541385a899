//! Current user display name.

/// Name shown when the environment does not provide one.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Variables consulted in order: Windows first, then POSIX shells.
const USER_VARS: [&str; 3] = ["USERNAME", "USER", "LOGNAME"];

/// Display name of the user running the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    display_name: String,
}

impl UserIdentity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// Reads the user name from the process environment.
    pub fn from_env() -> Self {
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves the user name through `lookup`, falling back to [`UNKNOWN_USER`]
    /// when no variable holds a non-blank value.
    pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let name = USER_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| UNKNOWN_USER.to_string());
        Self::new(name)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
