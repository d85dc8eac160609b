//! The fake shell shown inside the Terminal window.
//!
//! Commands are pure: they append to the session's scrollback and may hand
//! back an [`Effect`] for the desktop to apply.

use chrono::Local;
use indoc::indoc;

use crate::content::{AppId, ContentProvider};
use crate::log_buffer::LogBuffer;
use crate::persona::Persona;
use crate::theme::ThemeMode;

const PROMPT: &str = "guest@folio:~$ ";
const BANNER: &str = "Welcome to folio-desk terminal v1.0\nType 'help' for available commands.";
const DMESG_LINES: usize = 20;
const MAX_SCROLLBACK: usize = 400;
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

const HELP: &str = indoc! {"
    Available commands:
      help        - Show this help message
      about       - Display information about me
      projects    - List my projects
      skills      - Show my technical skills
      contact     - Display contact information
      theme       - Switch between dark/light theme
      clear       - Clear the terminal
      open <app>  - Open an application
      whoami      - Display current user
      echo <text> - Echo the provided text
      date        - Show current date and time
      dmesg       - Show recent desktop log lines
"};

const ABOUT: &str = indoc! {"
    Mrigendra - Full Stack Developer & IT Specialist

    A developer working across web, mobile and system administration.
    Interests: IT, Mobile Development, Music Production, AI/ML
"};

const PROJECTS: &str = indoc! {"
    My Projects:
      E-Commerce Platform    - React, Node.js, MongoDB
      Fitness Tracker App    - React Native, Firebase
      Analytics Dashboard    - Vue.js, D3.js, Python
      AI Chatbot             - Python, TensorFlow, NLP
      Code Editor            - Electron, JavaScript
      Music Streaming App    - Angular, Express, PostgreSQL
"};

const SKILLS: &str = indoc! {"
    Technical Skills:
      Languages:    JavaScript, Python, Java, TypeScript
      Frontend:     React, Vue.js, Angular, HTML5, CSS3
      Backend:      Node.js, Express, Django, Spring Boot
      Databases:    MongoDB, PostgreSQL, MySQL, Redis
      Cloud:        AWS, Docker, Kubernetes
"};

const CONTACT: &str = indoc! {"
    Contact Information:
      Email:     mrigendra@example.com
      GitHub:    github.com/mrigendra
      Portfolio: mrigendra.dev
"};

/// Desktop-level side effect requested by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenApp(AppId),
    SetTheme(ThemeMode),
}

#[derive(Debug)]
pub struct TerminalSession {
    lines: Vec<String>,
    input: String,
    user: String,
    log: Option<LogBuffer>,
}

impl TerminalSession {
    pub fn new(persona: Option<Persona>, log: Option<LogBuffer>) -> Self {
        let mut session = Self {
            lines: Vec::new(),
            input: String::new(),
            user: persona.map_or_else(|| "guest".to_string(), |p| p.to_string()),
            log,
        };
        session.reset();
        session
    }

    fn reset(&mut self) {
        self.lines.clear();
        self.lines.extend(BANNER.lines().map(str::to_string));
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prompt_line(&self) -> String {
        format!("{PROMPT}{}", self.input)
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Run the current input line.
    pub fn submit(&mut self, theme: ThemeMode, apps: &dyn ContentProvider) -> Option<Effect> {
        let command = std::mem::take(&mut self.input);
        let command = command.trim();
        self.lines.push(format!("{PROMPT}{command}"));
        let mut words = command.split_whitespace();
        let Some(name) = words.next() else {
            return None;
        };
        let args: Vec<&str> = words.collect();
        tracing::debug!(command = name, "terminal command");
        let effect = match name {
            "help" => self.print(HELP),
            "about" => self.print(ABOUT),
            "projects" => self.print(PROJECTS),
            "skills" => self.print(SKILLS),
            "contact" => self.print(CONTACT),
            "whoami" => {
                let user = self.user.clone();
                self.print(&user)
            }
            "echo" => self.print(&args.join(" ")),
            "date" => self.print(&Local::now().format(DATE_FORMAT).to_string()),
            "clear" => {
                self.reset();
                None
            }
            "theme" => self.theme(&args, theme),
            "open" => self.open(&args, apps),
            "dmesg" => self.dmesg(),
            other => self.print(&format!(
                "Command not found: {other}\nType 'help' for available commands."
            )),
        };
        self.trim_scrollback();
        effect
    }

    fn print(&mut self, text: &str) -> Option<Effect> {
        self.lines.extend(text.lines().map(str::to_string));
        self.lines.push(String::new());
        None
    }

    fn theme(&mut self, args: &[&str], current: ThemeMode) -> Option<Effect> {
        match args.first().and_then(|arg| ThemeMode::parse(arg)) {
            Some(mode) => {
                self.print(&format!("Theme switched to {mode} mode."));
                Some(Effect::SetTheme(mode))
            }
            None => self.print(&format!(
                "Usage: theme [dark|light]\nCurrent theme: {current}"
            )),
        }
    }

    fn open(&mut self, args: &[&str], apps: &dyn ContentProvider) -> Option<Effect> {
        let valid: Vec<&str> = apps.apps().iter().map(|entry| entry.id).collect();
        match args.first() {
            Some(app) if valid.contains(app) => {
                self.print(&format!("Opening {app}..."));
                Some(Effect::OpenApp(AppId::from(*app)))
            }
            Some(app) => self.print(&format!(
                "Unknown app: {app}\nValid apps: {}",
                valid.join(", ")
            )),
            None => self.print(&format!(
                "Usage: open <app>\nAvailable apps: {}",
                valid.join(", ")
            )),
        }
    }

    fn dmesg(&mut self) -> Option<Effect> {
        let lines = self
            .log
            .as_ref()
            .map(|log| log.tail(DMESG_LINES))
            .unwrap_or_default();
        if lines.is_empty() {
            return self.print("(log is empty)");
        }
        self.print(&lines.join("\n"))
    }

    fn trim_scrollback(&mut self) {
        let excess = self.lines.len().saturating_sub(MAX_SCROLLBACK);
        if excess > 0 {
            self.lines.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn run(session: &mut TerminalSession, line: &str) -> Option<Effect> {
        for ch in line.chars() {
            session.push_char(ch);
        }
        session.submit(ThemeMode::Dark, &Catalog::portfolio())
    }

    #[test]
    fn open_known_app_returns_effect() {
        let mut session = TerminalSession::new(None, None);
        assert_eq!(
            run(&mut session, "open resume"),
            Some(Effect::OpenApp(AppId::from("resume")))
        );
        assert!(session.lines().iter().any(|l| l == "Opening resume..."));
        assert_eq!(run(&mut session, "open nope"), None);
        assert!(session.lines().iter().any(|l| l.starts_with("Unknown app: nope")));
    }

    #[test]
    fn theme_command_validates_argument() {
        let mut session = TerminalSession::new(None, None);
        assert_eq!(
            run(&mut session, "theme light"),
            Some(Effect::SetTheme(ThemeMode::Light))
        );
        assert_eq!(run(&mut session, "theme"), None);
        assert!(session.lines().iter().any(|l| l == "Current theme: dark"));
    }

    #[test]
    fn echo_whoami_and_unknown() {
        let mut session = TerminalSession::new(Some(Persona::Developer), None);
        run(&mut session, "echo  hello   world");
        run(&mut session, "whoami");
        run(&mut session, "frobnicate");
        let lines = session.lines();
        assert!(lines.iter().any(|l| l == "hello world"));
        assert!(lines.iter().any(|l| l == "developer"));
        assert!(lines.iter().any(|l| l == "Command not found: frobnicate"));
    }

    #[test]
    fn date_prints_local_time() {
        let mut session = TerminalSession::new(None, None);
        run(&mut session, "date");
        let printed = &session.lines()[session.lines().len() - 2];
        assert!(chrono::NaiveDateTime::parse_from_str(printed, DATE_FORMAT).is_ok());
    }

    #[test]
    fn clear_resets_to_banner() {
        let mut session = TerminalSession::new(None, None);
        run(&mut session, "help");
        run(&mut session, "clear");
        assert_eq!(session.lines().len(), 3);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn dmesg_reads_log_ring() {
        let log = LogBuffer::new(8);
        log.push("INFO opened window app=resume");
        let mut session = TerminalSession::new(None, Some(log));
        run(&mut session, "dmesg");
        assert!(
            session
                .lines()
                .iter()
                .any(|l| l == "INFO opened window app=resume")
        );
    }

    #[test]
    fn empty_line_only_echoes_prompt() {
        let mut session = TerminalSession::new(None, None);
        let before = session.lines().len();
        assert_eq!(run(&mut session, "   "), None);
        assert_eq!(session.lines().len(), before + 1);
    }
}
