//! What the attached terminal allows codeinsight to draw.

use is_terminal::IsTerminal;

/// Terminal facts read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Tree and section output goes to a person, not a pipe
    pub stdout_tty: bool,
    /// `select` reads its keys from here
    pub stdin_tty: bool,
    pub supports_color: bool,
    /// Box-drawing and checkbox glyphs render
    pub supports_unicode: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
            std::io::stdin().is_terminal(),
        )
    }

    pub(crate) fn from_env(
        get_env: impl Fn(&str) -> Option<String>,
        stdout_tty: bool,
        stdin_tty: bool,
    ) -> Self {
        let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        // CI logs get plain text even when they fake a tty
        let supports_color =
            stdout_tty && !dumb && get_env("NO_COLOR").is_none() && get_env("CI").is_none();

        // The first locale variable that is set decides; none set means UTF-8
        let utf8_locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .find_map(|key| get_env(key).filter(|v| !v.is_empty()))
            .map_or(true, |locale| {
                let locale = locale.to_lowercase();
                locale.contains("utf-8") || locale.contains("utf8")
            });

        Self {
            stdout_tty,
            stdin_tty,
            supports_color,
            supports_unicode: !dumb && utf8_locale,
        }
    }

    /// Both ends of the interactive tree are a terminal
    pub fn can_prompt(&self) -> bool {
        self.stdin_tty && self.stdout_tty
    }
}
