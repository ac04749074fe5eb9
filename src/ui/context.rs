use codeinsight::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode,
        }
    }

    /// Interactive widgets need a real terminal and non-JSON output
    pub fn interactive(&self) -> bool {
        self.caps.can_prompt() && !self.json
    }
}
