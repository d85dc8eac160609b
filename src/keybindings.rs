use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Hide the launcher and drop keyboard focus from inputs.
    Dismiss,
    CycleWindows,
    CloseWindow,
    MinimizeWindow,
    ToggleMaximize,
    ToggleLauncher,
    ToggleTheme,
    Logout,
    // Desktop icon / lock-screen card navigation
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    Activate,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::Dismiss => "Hide launcher / leave input",
            Action::CycleWindows => "Switch window",
            Action::CloseWindow => "Close active window",
            Action::MinimizeWindow => "Minimize active window",
            Action::ToggleMaximize => "Maximize / restore active window",
            Action::ToggleLauncher => "Open launcher",
            Action::ToggleTheme => "Toggle theme",
            Action::Logout => "Log out",
            Action::FocusLeft => "Focus left",
            Action::FocusRight => "Focus right",
            Action::FocusUp => "Focus up",
            Action::FocusDown => "Focus down",
            Action::Activate => "Open focused item",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn desktop() -> Self {
        use Action::*;
        let ctrl = KeyModifiers::CONTROL;
        let alt = KeyModifiers::ALT;
        let none = KeyModifiers::NONE;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), ctrl));
        kb.add(Dismiss, KeyCombo::new(KeyCode::Esc, none));
        kb.add(CycleWindows, KeyCombo::new(KeyCode::Tab, alt));
        // terminals and desktop environments tend to swallow Alt+Tab
        kb.add(CycleWindows, KeyCombo::new(KeyCode::Char('`'), alt));
        kb.add(CloseWindow, KeyCombo::new(KeyCode::Char('w'), ctrl));
        kb.add(MinimizeWindow, KeyCombo::new(KeyCode::Char('m'), ctrl));
        kb.add(MinimizeWindow, KeyCombo::new(KeyCode::Down, ctrl));
        kb.add(ToggleMaximize, KeyCombo::new(KeyCode::Up, ctrl));
        kb.add(ToggleLauncher, KeyCombo::new(KeyCode::Char(' '), ctrl));
        kb.add(ToggleLauncher, KeyCombo::new(KeyCode::F(2), none));
        kb.add(ToggleTheme, KeyCombo::new(KeyCode::Char('t'), ctrl));
        kb.add(Logout, KeyCombo::new(KeyCode::Char('l'), ctrl));
        kb.add(FocusLeft, KeyCombo::new(KeyCode::Left, none));
        kb.add(FocusRight, KeyCombo::new(KeyCode::Right, none));
        kb.add(FocusUp, KeyCombo::new(KeyCode::Up, none));
        kb.add(FocusDown, KeyCombo::new(KeyCode::Down, none));
        kb.add(Activate, KeyCombo::new(KeyCode::Enter, none));
        kb.add(Activate, KeyCombo::new(KeyCode::Char(' '), none));
        kb
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.map
            .iter()
            .find(|(_, list)| list.iter().any(|c| c.matches(key)))
            .map(|(act, _)| *act)
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_bindings_cover_window_shortcuts() {
        let kb = KeyBindings::desktop();
        let alt_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::ALT);
        assert_eq!(kb.action_for_key(&alt_tab), Some(Action::CycleWindows));
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::CloseWindow, &ctrl_w));
        let plain_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&plain_w), None);
    }

    #[test]
    fn combos_display_with_modifiers() {
        let kb = KeyBindings::desktop();
        assert_eq!(kb.combos_for(Action::Quit), vec!["Ctrl+Q"]);
        assert_eq!(
            kb.combos_for(Action::Activate),
            vec!["Enter".to_string(), "Space".to_string()]
        );
    }
}
