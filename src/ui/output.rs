use std::path::Path;

use codeinsight::config::ConfigWarning;

use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool, color: bool) {
    let warn = paint(
        icon(unicode, icons::WARNING, icons_ascii::WARNING),
        colors::WARNING,
        color,
    );
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", warn, w.key, path.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", warn, w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Print a digest section (summary, tree, content) under a heading
pub fn print_section(title: &str, body: &str, unicode: bool) {
    let rule = icon(unicode, icons::SEPARATOR, icons_ascii::SEPARATOR).repeat(title.chars().count().max(3));
    println!("{}", title);
    println!("{}", rule);
    if body.is_empty() {
        println!("(empty)");
    } else {
        println!("{}", body.trim_end_matches(['\r', '\n']));
    }
    println!();
}
