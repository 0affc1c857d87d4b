//! Key bindings: crossterm key events to picker intents

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::picker::Intent;

/// Decode one key event. Returns `None` for keys with no binding.
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Intent::Next),
            KeyCode::Char('p') => Some(Intent::Previous),
            KeyCode::Char('c') | KeyCode::Char('g') => Some(Intent::Cancel),
            KeyCode::Char('u') => Some(Intent::SetQuery(String::new())),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => Some(Intent::Next),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => Some(Intent::Previous),
        KeyCode::Enter => Some(Intent::Commit),
        KeyCode::Esc => Some(Intent::Cancel),
        KeyCode::Backspace => Some(Intent::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(Intent::Insert(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys() {
        for code in [KeyCode::Right, KeyCode::Down, KeyCode::Tab] {
            assert_eq!(intent_for(press(code)), Some(Intent::Next));
        }
        for code in [KeyCode::Left, KeyCode::Up, KeyCode::BackTab] {
            assert_eq!(intent_for(press(code)), Some(Intent::Previous));
        }
        assert_eq!(intent_for(ctrl('n')), Some(Intent::Next));
        assert_eq!(intent_for(ctrl('p')), Some(Intent::Previous));
    }

    #[test]
    fn test_commit_and_cancel() {
        assert_eq!(intent_for(press(KeyCode::Enter)), Some(Intent::Commit));
        assert_eq!(intent_for(press(KeyCode::Esc)), Some(Intent::Cancel));
        assert_eq!(intent_for(ctrl('c')), Some(Intent::Cancel));
        assert_eq!(intent_for(ctrl('g')), Some(Intent::Cancel));
    }

    #[test]
    fn test_query_editing() {
        assert_eq!(intent_for(press(KeyCode::Char('a'))), Some(Intent::Insert('a')));
        assert_eq!(
            intent_for(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Intent::Insert('A'))
        );
        assert_eq!(intent_for(press(KeyCode::Char('é'))), Some(Intent::Insert('é')));
        assert_eq!(intent_for(press(KeyCode::Backspace)), Some(Intent::Backspace));
        assert_eq!(intent_for(ctrl('u')), Some(Intent::SetQuery(String::new())));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(intent_for(press(KeyCode::F(1))), None);
        assert_eq!(intent_for(ctrl('x')), None);
        assert_eq!(
            intent_for(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(intent_for(release), None);

        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..release
        };
        assert_eq!(intent_for(repeat), Some(Intent::Commit));
    }
}
