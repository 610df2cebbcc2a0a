//! Keyboard input handling and interactive loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use treeselect::{SelectionSink, TreeSelectOptions};

use super::menu::{Outcome, Picker, PickerAction};
use super::render::{render_frame, Frame};
use crate::ui::terminal::OutputStyle;

/// Convert a keyboard event to a picker action.
///
/// While `typing`, letters go to the search box; otherwise `hjkl` navigate
/// and any other printable char starts a search.
pub fn key_to_action(key: KeyEvent, typing: bool) -> Option<PickerAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Up => Some(PickerAction::Up),
        KeyCode::Down => Some(PickerAction::Down),
        KeyCode::Right => Some(PickerAction::Descend),
        KeyCode::Left => Some(PickerAction::Ascend),
        KeyCode::Enter => Some(PickerAction::Choose),
        KeyCode::Esc => Some(PickerAction::Escape),
        KeyCode::Backspace => Some(PickerAction::Backspace),
        KeyCode::Char('c') if ctrl => Some(PickerAction::Abort),
        KeyCode::Char('u') if ctrl => Some(PickerAction::ClearQuery),
        KeyCode::Char('x') if ctrl => Some(PickerAction::ClearSelection),
        KeyCode::Char(d @ '1'..='9') if alt => Some(PickerAction::JumpTo(d as usize - '1' as usize)),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) if typing => Some(PickerAction::Type(c)),
        KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Char('l') => Some(PickerAction::Descend),
        KeyCode::Char('h') => Some(PickerAction::Ascend),
        KeyCode::Char('/') => Some(PickerAction::FocusSearch),
        KeyCode::Char(c) => Some(PickerAction::Type(c)),
        _ => None,
    }
}

/// Leaves raw mode and restores the screen even on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(out, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        use crossterm::{cursor, execute, terminal};

        let mut out = io::stderr();
        let _ = execute!(
            out,
            cursor::Show,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the picker until the user chooses or dismisses.
///
/// Frames are drawn on stderr so stdout stays free for the result.
pub fn run_interactive<S: SelectionSink>(
    picker: &mut Picker<S>,
    options: &TreeSelectOptions,
    style: OutputStyle,
) -> io::Result<Outcome> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute, terminal,
    };

    let mut screen = io::stderr();
    let _guard = RawModeGuard::enter(&mut screen)?;

    let draw = |screen: &mut io::Stderr, picker: &Picker<S>| -> io::Result<()> {
        execute!(
            screen,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let frame = Frame {
            options,
            selected_label: &picker.session().selection().label,
            cursor: picker.cursor(),
            typing: picker.is_typing(),
            style,
            size: terminal::size().unwrap_or((80, 24)),
        };
        for line in render_frame(&picker.view(), frame) {
            write!(screen, "{}\r\n", line)?;
        }
        screen.flush()
    };

    draw(&mut screen, picker)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(action) = key_to_action(key, picker.is_typing()) else {
                    continue;
                };
                match picker.handle(action) {
                    Outcome::Continue => draw(&mut screen, picker)?,
                    done => return Ok(done),
                }
            }
            Event::Resize(..) => draw(&mut screen, picker)?,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_to_action_arrow_keys() {
        assert_eq!(key_to_action(key(KeyCode::Up), false), Some(PickerAction::Up));
        assert_eq!(key_to_action(key(KeyCode::Down), true), Some(PickerAction::Down));
        assert_eq!(
            key_to_action(key(KeyCode::Left), false),
            Some(PickerAction::Ascend)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Right), false),
            Some(PickerAction::Descend)
        );
    }

    #[test]
    fn key_to_action_vim_keys_only_when_not_typing() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('k')), false),
            Some(PickerAction::Up)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('h')), false),
            Some(PickerAction::Ascend)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('k')), true),
            Some(PickerAction::Type('k'))
        );
    }

    #[test]
    fn key_to_action_other_chars_start_search() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('p')), false),
            Some(PickerAction::Type('p'))
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('/')), false),
            Some(PickerAction::FocusSearch)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('/')), true),
            Some(PickerAction::Type('/'))
        );
    }

    #[test]
    fn key_to_action_control_chords() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl('u'), true), Some(PickerAction::ClearQuery));
        assert_eq!(
            key_to_action(ctrl('x'), false),
            Some(PickerAction::ClearSelection)
        );
        assert_eq!(key_to_action(ctrl('c'), true), Some(PickerAction::Abort));
        assert_eq!(key_to_action(ctrl('z'), true), None);
    }

    #[test]
    fn key_to_action_alt_digit_jumps() {
        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);
        assert_eq!(key_to_action(alt('1'), false), Some(PickerAction::JumpTo(0)));
        assert_eq!(key_to_action(alt('9'), true), Some(PickerAction::JumpTo(8)));
        assert_eq!(key_to_action(alt('0'), false), None);
    }

    #[test]
    fn key_to_action_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::F(1)), false), None);
        assert_eq!(key_to_action(key(KeyCode::Tab), false), None);
    }
}
