use carousel3d::{Intent, Vec3, ZoomDirection};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the demo to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Intent(Intent),
    Recenter,
    TogglePause,
    ToggleDebug,
    Quit,
}

/// Keyboard bindings
///
/// Arrows rotate, space stops rotating, `a`/`d` change item, `z`/`x` zoom
/// and `s` stops zooming.
pub fn map_key(event: &KeyEvent) -> Option<KeyAction> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    let action = match event.code {
        KeyCode::Up => KeyAction::Intent(Intent::StartRotate(Vec3::x())),
        KeyCode::Down => KeyAction::Intent(Intent::StartRotate(-Vec3::x())),
        KeyCode::Left => KeyAction::Intent(Intent::StartRotate(Vec3::y())),
        KeyCode::Right => KeyAction::Intent(Intent::StartRotate(-Vec3::y())),
        KeyCode::Char(' ') => KeyAction::Intent(Intent::StopRotate),
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => KeyAction::Intent(Intent::Previous),
            'd' => KeyAction::Intent(Intent::Next),
            'z' => KeyAction::Intent(Intent::StartZoom(ZoomDirection::In)),
            'x' => KeyAction::Intent(Intent::StartZoom(ZoomDirection::Out)),
            's' => KeyAction::Intent(Intent::StopZoom),
            'r' => KeyAction::Recenter,
            'p' => KeyAction::TogglePause,
            'b' => KeyAction::ToggleDebug,
            'q' => KeyAction::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(&press(KeyCode::Char('d'))), Some(KeyAction::Intent(Intent::Next)));
        assert_eq!(map_key(&press(KeyCode::Char('A'))), Some(KeyAction::Intent(Intent::Previous)));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key(&press(KeyCode::Left)),
            Some(KeyAction::Intent(Intent::StartRotate(Vec3::y())))
        );
        assert_eq!(map_key(&press(KeyCode::Char(' '))), Some(KeyAction::Intent(Intent::StopRotate)));
    }

    #[test]
    fn test_quit_and_unbound() {
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(map_key(&press(KeyCode::Char('k'))), None);
        assert_eq!(map_key(&press(KeyCode::F(1))), None);
    }
}
