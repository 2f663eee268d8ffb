//! Keyboard input handling and interactive loop.

use crossterm::event::KeyEvent;

use super::menu::{MenuAction, TreeMenu};
use super::render::RenderOptions;

/// Convert a keyboard event to a MenuAction
pub fn key_to_action(key: KeyEvent) -> Option<MenuAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
        KeyCode::Right | KeyCode::Char('l') => Some(MenuAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(MenuAction::Collapse),
        KeyCode::Char(' ') => Some(MenuAction::ToggleCheck),
        KeyCode::Enter => Some(MenuAction::Select),
        KeyCode::Char('d') | KeyCode::Delete => Some(MenuAction::Delete),
        KeyCode::Char('a') => Some(MenuAction::CheckAll),
        KeyCode::Char('n') => Some(MenuAction::CheckNone),
        KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively until the user quits
pub fn run_interactive(
    menu: &mut TreeMenu,
    options: RenderOptions,
    width: u16,
) -> std::io::Result<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    use crate::ui::theme::{icon, icons, icons_ascii};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, menu: &TreeMenu| -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let header = icon(options.unicode, icons::TREE, icons_ascii::TREE);
        write!(stdout, "{} Permission Tree\r\n\r\n", header)?;

        for line in menu.render(options).lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        let rule = if options.unicode { "─" } else { "-" };
        write!(stdout, "{}\r\n", rule.repeat(usize::from(width.min(63))))?;

        for line in menu.render_status_bar(options).lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        for line in menu.render_help_bar().lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        stdout.flush()
    };

    execute!(stdout, cursor::Hide)?;

    let result = (|| -> std::io::Result<()> {
        render_ui(&mut stdout, menu)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key) {
                    if menu.handle_action(action) {
                        return Ok(());
                    }
                    render_ui(&mut stdout, menu)?;
                }
            }
        }
    })();

    // Restore terminal even when the loop failed
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> Option<MenuAction> {
        key_to_action(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn key_to_action_arrow_keys() {
        assert_eq!(press(KeyCode::Up), Some(MenuAction::Up));
        assert_eq!(press(KeyCode::Down), Some(MenuAction::Down));
        assert_eq!(press(KeyCode::Left), Some(MenuAction::Collapse));
        assert_eq!(press(KeyCode::Right), Some(MenuAction::Expand));
    }

    #[test]
    fn key_to_action_vim_keys() {
        assert_eq!(press(KeyCode::Char('k')), Some(MenuAction::Up));
        assert_eq!(press(KeyCode::Char('j')), Some(MenuAction::Down));
        assert_eq!(press(KeyCode::Char('h')), Some(MenuAction::Collapse));
        assert_eq!(press(KeyCode::Char('l')), Some(MenuAction::Expand));
    }

    #[test]
    fn key_to_action_tree_interactions() {
        assert_eq!(press(KeyCode::Char(' ')), Some(MenuAction::ToggleCheck));
        assert_eq!(press(KeyCode::Enter), Some(MenuAction::Select));
        assert_eq!(press(KeyCode::Char('d')), Some(MenuAction::Delete));
        assert_eq!(press(KeyCode::Delete), Some(MenuAction::Delete));
    }

    #[test]
    fn key_to_action_bulk_shortcuts() {
        assert_eq!(press(KeyCode::Char('a')), Some(MenuAction::CheckAll));
        assert_eq!(press(KeyCode::Char('n')), Some(MenuAction::CheckNone));
    }

    #[test]
    fn key_to_action_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), Some(MenuAction::Quit));
        assert_eq!(press(KeyCode::Esc), Some(MenuAction::Quit));
    }

    #[test]
    fn key_to_action_unknown_key() {
        assert_eq!(press(KeyCode::Char('z')), None);
        assert_eq!(press(KeyCode::F(1)), None);
    }
}
