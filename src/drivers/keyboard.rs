use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Irons out terminal differences before events reach the desktop: drops
/// key releases, folds Shift+Tab into BackTab and lowercases control chords.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer;

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.kind == KeyEventKind::Release {
                    return None;
                }
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && let KeyCode::Char(c) = key.code
                    && c.is_ascii_uppercase()
                {
                    key.code = KeyCode::Char(c.to_ascii_lowercase());
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                Some(Event::Key(key))
            }
            other => Some(other),
        }
    }
}
