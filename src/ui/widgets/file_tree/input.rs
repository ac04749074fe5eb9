//! Keyboard input handling and interactive loop.

use crossterm::event::KeyEvent;

use crate::ui::theme::{icon, icons, icons_ascii};

use super::menu::{TreeAction, TreeMenu, TreeOutcome};
use super::render::fit_width;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('y') => Some(TreeAction::Copy),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively.
///
/// The menu keeps the final selection whatever the outcome.
pub fn run_interactive(
    menu: &mut TreeMenu,
    title: &str,
    supports_unicode: bool,
) -> std::io::Result<TreeOutcome> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, menu: &TreeMenu| -> std::io::Result<()> {
        let width = terminal::size().map_or(80, |(w, _)| usize::from(w.max(20)));

        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        write!(stdout, "{}\r\n\r\n", title)?;

        if menu.flattened_nodes().is_empty() {
            write!(stdout, "No files detected\r\n")?;
        }
        for line in menu.render(supports_unicode).lines() {
            write!(stdout, "{}\r\n", fit_width(line, width))?;
        }

        let rule = icon(supports_unicode, icons::SEPARATOR, icons_ascii::SEPARATOR);
        write!(stdout, "{}\r\n", rule.repeat(63))?;

        for line in menu.render_status_bar(supports_unicode).lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        for line in menu.render_help_bar().lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        stdout.flush()
    };

    execute!(stdout, cursor::Hide)?;

    let result = (|| -> std::io::Result<TreeOutcome> {
        render_ui(&mut stdout, menu)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if let Some(action) = key_to_action(key) {
                    match action {
                        TreeAction::Confirm => return Ok(TreeOutcome::Confirmed),
                        TreeAction::Copy => return Ok(TreeOutcome::Copy),
                        TreeAction::Quit => return Ok(TreeOutcome::Cancelled),
                        _ => {
                            menu.handle_action(action);
                            render_ui(&mut stdout, menu)?;
                        }
                    }
                }
            }
        }
    })();

    // Restore the terminal even when the loop failed
    let restored = execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    );
    terminal::disable_raw_mode()?;
    restored?;

    result
}
