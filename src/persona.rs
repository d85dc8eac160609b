use std::fmt;

use clap::ValueEnum;

/// Role chosen on the lock screen. Only changes how desktop icons are
/// presented; the window manager is unaware of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Persona {
    Recruiter,
    Developer,
    Guest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Dimmed,
    Highlighted,
    Hidden,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Recruiter, Persona::Developer, Persona::Guest];

    pub fn label(self) -> &'static str {
        match self {
            Persona::Recruiter => "Recruiter",
            Persona::Developer => "Developer",
            Persona::Guest => "Guest",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Persona::Recruiter => "Resume, experience and contact details first",
            Persona::Developer => "Projects, code and the terminal",
            Persona::Guest => "Look around",
        }
    }

    pub fn emphasis(self, app: &str) -> Emphasis {
        match (self, app) {
            (Persona::Recruiter, "terminal" | "blog") => Emphasis::Dimmed,
            (Persona::Developer, "projects" | "terminal") => Emphasis::Highlighted,
            (Persona::Guest, "terminal") => Emphasis::Hidden,
            _ => Emphasis::Normal,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Persona::Recruiter => "recruiter",
            Persona::Developer => "developer",
            Persona::Guest => "guest",
        })
    }
}
