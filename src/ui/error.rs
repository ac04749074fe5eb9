use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

/// Render an error and its causes, one per line
pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mark = icon(unicode, icons::ERROR, icons_ascii::ERROR);
    let mut out = format!("{} {}\n", paint(mark, colors::ERROR, color), err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    // The UI context may not exist yet when config discovery fails
    let caps = TerminalCapabilities::detect();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
