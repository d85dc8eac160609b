//! Desktop shell: lock screen, icons, windows, taskbar and overlays.
//!
//! `Desktop` owns the [`WindowManager`] and routes every input event to it
//! or to the shell widgets around it. It never mutates window state itself.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::config::DeskConfig;
use crate::content::{AppEntry, AppId, AppKind, ContentProvider, resolve};
use crate::event_loop::ControlFlow;
use crate::geometry::{Point, Size, rect_contains};
use crate::keybindings::{Action, KeyBindings};
use crate::launcher::Launcher;
use crate::log_buffer::LogBuffer;
use crate::notifications::Notifications;
use crate::persona::{Emphasis, Persona};
use crate::taskbar::{Taskbar, TaskbarHit};
use crate::terminal_app::{Effect, TerminalSession};
use crate::theme::{Palette, ThemeMode};
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};
use crate::window::{OpenOutcome, PointerOutcome, WindowManager};
use crate::window::decorator::Chrome;

const ICON_WIDTH: u16 = 12;
const ICON_HEIGHT: u16 = 3;
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 6;
const CARD_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lock,
    Desktop,
}

pub struct Desktop {
    screen: Screen,
    persona: Option<Persona>,
    theme: ThemeMode,
    wm: WindowManager,
    content: Arc<dyn ContentProvider>,
    taskbar: Taskbar,
    launcher: Launcher,
    notifications: Notifications,
    // keyed by app, tagged with the window instance they belong to
    terminals: HashMap<AppId, (u64, TerminalSession)>,
    keys: KeyBindings,
    log: Option<LogBuffer>,
    icon_focus: usize,
    card_focus: usize,
    icon_hits: Vec<(Rect, AppId)>,
    card_hits: Vec<(Rect, Persona)>,
    input_focus: bool,
    now: Instant,
    quit: bool,
}

impl Desktop {
    pub fn new(
        config: &DeskConfig,
        content: Arc<dyn ContentProvider>,
        log: Option<LogBuffer>,
        now: Instant,
    ) -> Self {
        let wm = WindowManager::new(config.wm, Arc::clone(&content), now);
        let mut desktop = Self {
            screen: Screen::Lock,
            persona: None,
            theme: config.theme,
            wm,
            content,
            taskbar: Taskbar::new(),
            launcher: Launcher::new(),
            notifications: Notifications::new(),
            terminals: HashMap::new(),
            keys: KeyBindings::desktop(),
            log,
            icon_focus: 0,
            card_focus: 0,
            icon_hits: Vec::new(),
            card_hits: Vec::new(),
            input_focus: false,
            now,
            quit: false,
        };
        if let Some(persona) = config.persona {
            desktop.login(persona);
        }
        desktop
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn persona(&self) -> Option<Persona> {
        self.persona
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn taskbar(&self) -> &Taskbar {
        &self.taskbar
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn terminal(&self, app: &AppId) -> Option<&TerminalSession> {
        self.terminals.get(app).map(|(_, session)| session)
    }

    pub fn has_input_focus(&self) -> bool {
        self.input_focus
    }

    pub fn icon_focus(&self) -> usize {
        self.icon_focus
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.wm.next_deadline(), self.notifications.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // Session

    pub fn login(&mut self, persona: Persona) {
        self.persona = Some(persona);
        self.screen = Screen::Desktop;
        self.icon_focus = 0;
        self.notifications
            .push(self.now, "Welcome!", format!("Logged in as {persona}"));
        tracing::info!(persona = %persona, "logged in");
    }

    pub fn logout(&mut self) {
        self.wm.close_all();
        self.launcher.hide();
        self.input_focus = false;
        self.persona = None;
        self.screen = Screen::Lock;
        self.notifications
            .push(self.now, "Logged out", "Choose your experience again");
        tracing::info!("logged out");
        self.sync();
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
        self.notifications
            .push(self.now, "Theme Changed", format!("Switched to {theme} mode"));
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    /// Icons shown on the desktop for the current persona.
    pub fn visible_icons(&self) -> Vec<&AppEntry> {
        let persona = self.persona;
        self.content
            .apps()
            .iter()
            .filter(|entry| persona.is_none_or(|p| p.emphasis(entry.id) != Emphasis::Hidden))
            .collect()
    }

    pub fn open_app(&mut self, app: &AppId) -> OpenOutcome {
        let outcome = self.wm.open_app(app);
        if outcome != OpenOutcome::Ignored {
            self.input_focus = self.is_terminal(app);
        }
        self.sync();
        outcome
    }

    fn is_terminal(&self, app: &AppId) -> bool {
        resolve(self.content.as_ref(), app).kind() == AppKind::Terminal
    }

    /// Advance timers: window reveal/removal and toast expiry.
    pub fn tick(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
        self.wm.tick(self.now);
        self.notifications.tick(self.now);
        self.sync();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.wm.set_viewport(Size::new(width, height));
    }

    fn sync(&mut self) {
        let wm = &self.wm;
        let content = self.content.as_ref();
        self.terminals
            .retain(|app, (instance, _)| wm.get(app).is_some_and(|w| w.instance() == *instance));
        for window in wm.windows() {
            if resolve(content, window.app()).kind() == AppKind::Terminal
                && !self.terminals.contains_key(window.app())
            {
                self.terminals.insert(
                    window.app().clone(),
                    (
                        window.instance(),
                        TerminalSession::new(self.persona, self.log.clone()),
                    ),
                );
            }
        }
        self.wm.sync_taskbar(&mut self.taskbar);
    }

    // Input

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(*width, *height),
            _ => {}
        }
        self.sync();
        if self.quit {
            ControlFlow::Quit
        } else {
            ControlFlow::Continue
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let action = self.keys.action_for_key(key);
        if action == Some(Action::Quit) {
            self.quit = true;
            return;
        }
        match self.screen {
            Screen::Lock => self.handle_lock_key(action),
            Screen::Desktop => {
                if self.launcher.is_visible() {
                    self.handle_launcher_key(key, action);
                } else if self.terminal_has_keys(key) {
                    self.handle_terminal_key(key);
                } else if let Some(action) = action {
                    self.run_action(action);
                }
            }
        }
    }

    fn handle_lock_key(&mut self, action: Option<Action>) {
        let count = Persona::ALL.len();
        match action {
            Some(Action::FocusLeft | Action::FocusUp) => {
                self.card_focus = (self.card_focus + count - 1) % count;
            }
            Some(Action::FocusRight | Action::FocusDown) => {
                self.card_focus = (self.card_focus + 1) % count;
            }
            Some(Action::Activate) => self.login(Persona::ALL[self.card_focus]),
            _ => {}
        }
    }

    fn handle_launcher_key(&mut self, key: &KeyEvent, action: Option<Action>) {
        let content = Arc::clone(&self.content);
        match key.code {
            KeyCode::Esc => self.launcher.hide(),
            KeyCode::Enter => {
                if let Some(app) = self.launcher.confirm(content.as_ref()) {
                    self.open_app(&app);
                }
            }
            KeyCode::Up => self.launcher.select_prev(content.as_ref()),
            KeyCode::Down => self.launcher.select_next(content.as_ref()),
            KeyCode::Backspace => self.launcher.backspace(),
            KeyCode::Char(c) if !has_chord(key) => self.launcher.push_char(c),
            _ => {
                if let Some(action) = action {
                    self.run_action(action);
                }
            }
        }
    }

    /// Plain keys go to the terminal when it is the active window and its
    /// input line has focus; chords still reach the desktop.
    fn terminal_has_keys(&self, key: &KeyEvent) -> bool {
        if !self.input_focus || has_chord(key) {
            return false;
        }
        self.wm
            .focused()
            .is_some_and(|app| self.terminals.contains_key(app))
    }

    fn handle_terminal_key(&mut self, key: &KeyEvent) {
        let Some(app) = self.wm.focused().cloned() else {
            return;
        };
        let theme = self.theme;
        let content = Arc::clone(&self.content);
        let Some((_, session)) = self.terminals.get_mut(&app) else {
            return;
        };
        let effect = match key.code {
            KeyCode::Esc => {
                self.input_focus = false;
                None
            }
            KeyCode::Enter => session.submit(theme, content.as_ref()),
            KeyCode::Backspace => {
                session.backspace();
                None
            }
            KeyCode::Char(c) => {
                session.push_char(c);
                None
            }
            _ => None,
        };
        match effect {
            Some(Effect::OpenApp(app)) => {
                self.open_app(&app);
            }
            Some(Effect::SetTheme(mode)) => self.set_theme(mode),
            None => {}
        }
    }

    fn run_action(&mut self, action: Action) {
        let active = self.wm.focused().cloned();
        match action {
            Action::Quit => self.quit = true,
            Action::Dismiss => {
                self.launcher.hide();
                self.input_focus = false;
            }
            Action::CycleWindows => {
                if let Some(app) = self.wm.cycle_windows() {
                    self.input_focus = self.is_terminal(&app);
                }
            }
            Action::CloseWindow => {
                if let Some(app) = active {
                    self.wm.close_window(&app);
                }
            }
            Action::MinimizeWindow => {
                if let Some(app) = active {
                    self.wm.minimize_window(&app);
                }
            }
            Action::ToggleMaximize => {
                if let Some(app) = active {
                    self.wm.toggle_maximize(&app);
                }
            }
            Action::ToggleLauncher => self.launcher.toggle(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Logout => self.logout(),
            Action::FocusLeft | Action::FocusUp => self.move_icon_focus(-1),
            Action::FocusRight | Action::FocusDown => self.move_icon_focus(1),
            Action::Activate => {
                let target = self
                    .visible_icons()
                    .get(self.icon_focus)
                    .map(|entry| AppId::from(entry.id));
                if let Some(app) = target {
                    self.open_app(&app);
                }
            }
        }
    }

    fn move_icon_focus(&mut self, delta: isize) {
        let count = self.visible_icons().len();
        if count == 0 {
            return;
        }
        self.icon_focus = (self.icon_focus as isize + delta).rem_euclid(count as isize) as usize;
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let point = Point::new(mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.screen {
                Screen::Lock => {
                    let hit = self
                        .card_hits
                        .iter()
                        .find(|(rect, _)| rect_contains(*rect, mouse.column, mouse.row))
                        .map(|(_, persona)| *persona);
                    if let Some(persona) = hit {
                        self.login(persona);
                    }
                }
                Screen::Desktop => self.pointer_down(mouse.column, mouse.row, point),
            },
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.wm.pointer_move(point);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.wm.pointer_up(point);
            }
            _ => {}
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16, point: Point) {
        let on_start = self.taskbar.hit_test(column, row) == Some(TaskbarHit::Start);
        if self.launcher.is_visible() {
            if let Some(app) = self.launcher.hit_test(column, row) {
                self.launcher.hide();
                self.open_app(&app);
                return;
            }
            if self.launcher.contains(column, row) {
                return;
            }
            if !on_start {
                self.launcher.hide();
            }
        }
        if let Some(id) = self.notifications.close_hit(column, row) {
            self.notifications.dismiss(id);
            return;
        }
        if rect_contains(self.taskbar.area(), column, row) {
            match self.taskbar.hit_test(column, row) {
                Some(TaskbarHit::Start) => self.launcher.toggle(),
                Some(TaskbarHit::Entry(app)) => self.wm.taskbar_click(&app),
                Some(TaskbarHit::Theme) => self.toggle_theme(),
                None => {}
            }
            return;
        }
        match self.wm.pointer_down(point) {
            PointerOutcome::Ignored => {}
            PointerOutcome::Focused(app) | PointerOutcome::DragStarted(app) => {
                self.input_focus = self.is_terminal(&app);
                return;
            }
            _ => return,
        }
        let icon = self
            .icon_hits
            .iter()
            .position(|(rect, _)| rect_contains(*rect, column, row));
        match icon {
            Some(idx) => {
                self.icon_focus = idx;
                let app = self.icon_hits[idx].1.clone();
                self.open_app(&app);
            }
            None => self.input_focus = false,
        }
    }

    // Rendering

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        self.resize(area.width, area.height);
        let palette = Palette::for_mode(self.theme);
        match self.screen {
            Screen::Lock => self.render_lock(frame, area, &palette),
            Screen::Desktop => self.render_desktop(frame, area, &palette),
        }
    }

    fn render_lock(&mut self, frame: &mut UiFrame<'_>, area: Rect, palette: &Palette) {
        self.card_hits.clear();
        let base = Style::default().bg(palette.desktop_bg).fg(palette.desktop_fg);
        fill_rect(frame, area, base);
        let mid = area.y + area.height / 2;
        let heading = base.fg(palette.accent).add_modifier(Modifier::BOLD);
        put_centered(frame, area, mid.saturating_sub(6), "folio-desk", heading);
        put_centered(frame, area, mid.saturating_sub(5), "Choose your experience", base);

        let total = CARD_WIDTH * 3 + CARD_GAP * 2;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let y = mid.saturating_sub(CARD_HEIGHT / 2);
        for (idx, persona) in Persona::ALL.into_iter().enumerate() {
            let card = Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT).intersection(area);
            let style = if idx == self.card_focus {
                Style::default()
                    .bg(palette.header_bg)
                    .fg(palette.header_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().bg(palette.window_bg).fg(palette.window_fg)
            };
            fill_rect(frame, card, style);
            let inner = (CARD_WIDTH - 2) as usize;
            let bounds = frame.area();
            let buffer = frame.buffer_mut();
            safe_set_string(buffer, bounds, x + 1, y + 1, persona.label(), style);
            let description = truncate_to_width(persona.description(), inner);
            safe_set_string(buffer, bounds, x + 1, y + 3, &description, style.remove_modifier(Modifier::BOLD));
            self.card_hits.push((card, persona));
            x = x.saturating_add(CARD_WIDTH + CARD_GAP);
        }
        let hint = "←/→ choose · Enter log in · Ctrl+Q quit";
        put_centered(frame, area, y + CARD_HEIGHT + 1, hint, base.fg(palette.muted));
    }

    fn render_desktop(&mut self, frame: &mut UiFrame<'_>, area: Rect, palette: &Palette) {
        let taskbar_height = self.wm.config().taskbar_height.min(area.height);
        let desktop = Rect::new(area.x, area.y, area.width, area.height - taskbar_height);
        let taskbar_area = Rect::new(area.x, area.y + desktop.height, area.width, taskbar_height);

        fill_rect(
            frame,
            desktop,
            Style::default().bg(palette.desktop_bg).fg(palette.desktop_fg),
        );
        self.render_icons(frame, desktop, palette);
        self.render_windows(frame, palette);
        self.wm.sync_taskbar(&mut self.taskbar);
        self.taskbar.render(
            frame,
            taskbar_area,
            palette,
            self.theme,
            self.launcher.is_visible(),
        );
        self.launcher
            .render(frame, desktop, self.content.as_ref(), palette);
        self.notifications.render(frame, desktop, palette);
    }

    fn render_icons(&mut self, frame: &mut UiFrame<'_>, desktop: Rect, palette: &Palette) {
        self.icon_hits.clear();
        let base = Style::default().bg(palette.desktop_bg).fg(palette.desktop_fg);
        let persona = self.persona;
        let entries: Vec<(AppId, &'static str, &'static str, Emphasis)> = self
            .visible_icons()
            .into_iter()
            .map(|entry| {
                let emphasis = persona.map_or(Emphasis::Normal, |p| p.emphasis(entry.id));
                (AppId::from(entry.id), entry.icon, entry.title, emphasis)
            })
            .collect();
        let (mut x, mut y) = (desktop.x + 1, desktop.y + 1);
        for (idx, (app, icon, title, emphasis)) in entries.into_iter().enumerate() {
            if y + ICON_HEIGHT > desktop.y + desktop.height {
                x += ICON_WIDTH + 1;
                y = desktop.y + 1;
            }
            if x + ICON_WIDTH > desktop.x + desktop.width {
                break;
            }
            let mut style = match emphasis {
                Emphasis::Dimmed => base.fg(palette.muted).add_modifier(Modifier::DIM),
                Emphasis::Highlighted => base.fg(palette.accent).add_modifier(Modifier::BOLD),
                Emphasis::Normal | Emphasis::Hidden => base,
            };
            if idx == self.icon_focus {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let cell = Rect::new(x, y, ICON_WIDTH, ICON_HEIGHT - 1);
            let bounds = frame.area();
            let buffer = frame.buffer_mut();
            let glyph_x = x + ICON_WIDTH / 2;
            safe_set_string(buffer, bounds, glyph_x, y, icon, style);
            let label = truncate_to_width(title, ICON_WIDTH as usize);
            let label_x = x + (ICON_WIDTH - label.chars().count() as u16) / 2;
            safe_set_string(buffer, bounds, label_x, y + 1, &label, style);
            self.icon_hits.push((cell, app));
            y += ICON_HEIGHT;
        }
    }

    fn render_windows(&self, frame: &mut UiFrame<'_>, palette: &Palette) {
        let decorator = self.wm.decorator();
        let focused = self.wm.focused();
        let text = Style::default().bg(palette.window_bg).fg(palette.window_fg);
        for window in self.wm.draw_order() {
            decorator.render_window(
                frame,
                window.rect(),
                Chrome {
                    title: window.title(),
                    icon: window.icon(),
                    focused: focused == Some(window.app()),
                    maximized: window.is_maximized(),
                    transitioning: !window.is_active(),
                },
                palette,
            );
            let inner = decorator.content_rect(window.rect());
            if inner.width < 2 || inner.height == 0 {
                continue;
            }
            let width = (inner.width - 2) as usize;
            let rows = inner.height as usize;
            let lines: Vec<String> = match self.terminals.get(window.app()) {
                Some((_, session)) => {
                    let mut lines = session.lines().to_vec();
                    lines.push(session.prompt_line());
                    let skip = lines.len().saturating_sub(rows);
                    lines.split_off(skip)
                }
                None => resolve(self.content.as_ref(), window.app())
                    .body()
                    .lines()
                    .take(rows)
                    .map(str::to_string)
                    .collect(),
            };
            for (idx, line) in lines.iter().enumerate() {
                frame.put_str(inner.x + 1, inner.y + idx as i32, line, width, text);
            }
        }
    }
}

fn has_chord(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn fill_rect(frame: &mut UiFrame<'_>, rect: Rect, style: Style) {
    let rect = rect.intersection(frame.area());
    let buffer = frame.buffer_mut();
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }
    }
}

fn put_centered(frame: &mut UiFrame<'_>, area: Rect, y: u16, text: &str, style: Style) {
    let width = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let bounds = frame.area();
    safe_set_string(frame.buffer_mut(), bounds, x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WmConfig;
    use crate::content::Catalog;
    use ratatui::buffer::Buffer;
    use std::time::Duration;

    fn config(persona: Option<Persona>) -> DeskConfig {
        DeskConfig {
            persona,
            theme: ThemeMode::Dark,
            tick: Duration::from_millis(16),
            verbose: false,
            mouse: true,
            wm: WmConfig::terminal(),
        }
    }

    fn desktop(persona: Option<Persona>) -> (Desktop, Instant) {
        let t0 = Instant::now();
        let mut desk = Desktop::new(&config(persona), Arc::new(Catalog::portfolio()), None, t0);
        desk.resize(100, 30);
        (desk, t0)
    }

    fn draw(desk: &mut Desktop) -> Buffer {
        let area = Rect::new(0, 0, 100, 30);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        desk.render(&mut frame);
        buffer
    }

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn lock_screen_keyboard_login() {
        let (mut desk, _) = desktop(None);
        assert_eq!(desk.screen(), Screen::Lock);
        desk.handle_event(&key(KeyCode::Right, KeyModifiers::NONE));
        desk.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(desk.screen(), Screen::Desktop);
        assert_eq!(desk.persona(), Some(Persona::Developer));
        assert_eq!(desk.notifications().len(), 1);
    }

    #[test]
    fn guest_does_not_see_terminal_icon() {
        let (desk, _) = desktop(Some(Persona::Guest));
        assert!(desk.visible_icons().iter().all(|e| e.id != "terminal"));
        let (desk, _) = desktop(Some(Persona::Recruiter));
        assert!(desk.visible_icons().iter().any(|e| e.id == "terminal"));
    }

    #[test]
    fn icon_click_opens_window_and_taskbar_follows() {
        let (mut desk, _) = desktop(Some(Persona::Recruiter));
        draw(&mut desk);
        // first icon sits at the top-left of the desktop
        desk.handle_event(&click(3, 1));
        assert!(desk.wm().contains(&AppId::from("resume")));
        assert_eq!(desk.taskbar().entries().len(), 1);
        assert!(desk.taskbar().entries()[0].active);
    }

    #[test]
    fn keyboard_activate_opens_focused_icon() {
        let (mut desk, _) = desktop(Some(Persona::Recruiter));
        desk.handle_event(&key(KeyCode::Down, KeyModifiers::NONE));
        desk.handle_event(&key(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(desk.wm().contains(&AppId::from("projects")));
    }

    #[test]
    fn terminal_commands_drive_the_desktop() {
        let (mut desk, _) = desktop(Some(Persona::Developer));
        desk.open_app(&AppId::from("terminal"));
        assert!(desk.has_input_focus());
        for ch in "open about".chars() {
            desk.handle_event(&key(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        desk.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(desk.wm().contains(&AppId::from("about")));
        assert_eq!(desk.wm().focused(), Some(&AppId::from("about")));
        assert!(!desk.has_input_focus());
    }

    #[test]
    fn terminal_session_is_dropped_with_its_window() {
        let (mut desk, t0) = desktop(Some(Persona::Developer));
        let terminal = AppId::from("terminal");
        desk.open_app(&terminal);
        assert!(desk.terminal(&terminal).is_some());
        desk.handle_event(&key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        desk.tick(t0 + Duration::from_millis(400));
        assert!(desk.terminal(&terminal).is_none());
    }

    #[test]
    fn launcher_filters_and_opens() {
        let (mut desk, _) = desktop(Some(Persona::Guest));
        desk.handle_event(&key(KeyCode::F(2), KeyModifiers::NONE));
        assert!(desk.launcher().is_visible());
        for ch in "blo".chars() {
            desk.handle_event(&key(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        desk.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!desk.launcher().is_visible());
        assert!(desk.wm().contains(&AppId::from("blog")));
    }

    #[test]
    fn escape_hides_launcher() {
        let (mut desk, _) = desktop(Some(Persona::Guest));
        desk.handle_event(&key(KeyCode::F(2), KeyModifiers::NONE));
        desk.handle_event(&key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!desk.launcher().is_visible());
    }

    #[test]
    fn logout_closes_windows_and_locks() {
        let (mut desk, t0) = desktop(Some(Persona::Guest));
        desk.open_app(&AppId::from("resume"));
        desk.handle_event(&key(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(desk.screen(), Screen::Lock);
        desk.tick(t0 + Duration::from_secs(1));
        assert!(desk.wm().is_empty());
        assert!(desk.taskbar().entries().is_empty());
    }

    #[test]
    fn theme_toggle_notifies_and_expires() {
        let (mut desk, t0) = desktop(Some(Persona::Guest));
        desk.handle_event(&key(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert_eq!(desk.theme(), ThemeMode::Light);
        assert_eq!(desk.notifications().len(), 2);
        desk.tick(t0 + Duration::from_secs(5));
        assert!(desk.notifications().is_empty());
    }

    #[test]
    fn quit_chord_stops_the_loop() {
        let (mut desk, _) = desktop(None);
        let flow = desk.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(flow, ControlFlow::Quit);
        assert!(desk.should_quit());
    }

    #[test]
    fn render_paints_window_chrome() {
        let (mut desk, t0) = desktop(Some(Persona::Guest));
        desk.open_app(&AppId::from("contact"));
        desk.tick(t0 + Duration::from_millis(100));
        let buffer = draw(&mut desk);
        let window = desk.wm().get(&AppId::from("contact")).unwrap().rect();
        let close_x = (window.x + window.width as i32 - 2) as u16;
        assert_eq!(buffer.cell((close_x, window.y as u16)).unwrap().symbol(), "x");
    }
}
