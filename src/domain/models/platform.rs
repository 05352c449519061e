use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider kind a group is scoped to.
///
/// `Claude` and `ClaudeConsole` address the same upstream vendor through
/// different access paths (direct API key vs. console-proxied session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Claude,
    ClaudeConsole,
    Gemini,
    Openai,
}

impl Platform {
    /// All supported platforms, in account-lookup priority order.
    ///
    /// This order is a compatibility contract: a member id that exists in
    /// more than one provider namespace resolves from the earliest entry.
    pub const ALL: [Platform; 4] = [
        Platform::Claude,
        Platform::ClaudeConsole,
        Platform::Gemini,
        Platform::Openai,
    ];

    /// The wire/storage name of the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Claude => "claude",
            Platform::ClaudeConsole => "claude-console",
            Platform::Gemini => "gemini",
            Platform::Openai => "openai",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
