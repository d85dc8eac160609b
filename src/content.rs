//! Application catalog: titles, icon glyphs and body text per application.
//!
//! The window manager only needs an opaque lookup; unknown identifiers
//! resolve through an explicit fallback branch instead of failing.

use std::fmt;

use indoc::indoc;

pub const FALLBACK_ICON: &str = "□";
pub const FALLBACK_BODY: &str = "This application has no content yet.";

/// Stable application identifier; also the window registry key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Document,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub body: &'static str,
    pub kind: AppKind,
}

pub trait ContentProvider: fmt::Debug {
    fn lookup(&self, id: &AppId) -> Option<&AppEntry>;
    fn apps(&self) -> &[AppEntry];
}

/// Result of resolving an identifier against a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    Known(&'a AppEntry),
    Unknown(AppId),
}

impl Lookup<'_> {
    pub fn title(&self) -> String {
        match self {
            Lookup::Known(entry) => entry.title.to_string(),
            Lookup::Unknown(id) => id.to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Lookup::Known(entry) => entry.icon,
            Lookup::Unknown(_) => FALLBACK_ICON,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Lookup::Known(entry) => entry.body,
            Lookup::Unknown(_) => FALLBACK_BODY,
        }
    }

    pub fn kind(&self) -> AppKind {
        match self {
            Lookup::Known(entry) => entry.kind,
            Lookup::Unknown(_) => AppKind::Document,
        }
    }
}

pub fn resolve<'a>(provider: &'a dyn ContentProvider, id: &AppId) -> Lookup<'a> {
    match provider.lookup(id) {
        Some(entry) => Lookup::Known(entry),
        None => Lookup::Unknown(id.clone()),
    }
}

/// Built-in portfolio applications.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AppEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl Catalog {
    pub fn new(entries: Vec<AppEntry>) -> Self {
        Self { entries }
    }

    pub fn portfolio() -> Self {
        Self::new(vec![
            AppEntry {
                id: "resume",
                title: "Resume",
                icon: "≡",
                body: RESUME,
                kind: AppKind::Document,
            },
            AppEntry {
                id: "projects",
                title: "Projects",
                icon: "◆",
                body: PROJECTS,
                kind: AppKind::Document,
            },
            AppEntry {
                id: "about",
                title: "About Me",
                icon: "☺",
                body: ABOUT,
                kind: AppKind::Document,
            },
            AppEntry {
                id: "contact",
                title: "Contact",
                icon: "✉",
                body: CONTACT,
                kind: AppKind::Document,
            },
            AppEntry {
                id: "blog",
                title: "Blog",
                icon: "✎",
                body: BLOG,
                kind: AppKind::Document,
            },
            AppEntry {
                id: "terminal",
                title: "Terminal",
                icon: "$",
                body: "",
                kind: AppKind::Terminal,
            },
        ])
    }
}

impl ContentProvider for Catalog {
    fn lookup(&self, id: &AppId) -> Option<&AppEntry> {
        self.entries.iter().find(|entry| entry.id == id.as_str())
    }

    fn apps(&self) -> &[AppEntry] {
        &self.entries
    }
}

const RESUME: &str = indoc! {"
    Mrigendra - Full Stack Developer & IT Specialist

    Experience
      Senior Developer, Tech Solutions Inc.   2021 - present
      Full Stack Developer, Digital Agency    2019 - 2021

    Education
      B.Tech Computer Science                 2015 - 2019

    Skills
      JavaScript, TypeScript, Python, Java
      React, Vue.js, Node.js, Django
      AWS, Docker, Kubernetes
"};

const PROJECTS: &str = indoc! {"
    E-Commerce Platform     React, Node.js, MongoDB
    Fitness Tracker App     React Native, Firebase
    Analytics Dashboard     Vue.js, D3.js, Python
    AI Chatbot              Python, TensorFlow, NLP
    Code Editor             Electron, JavaScript
    Music Streaming App     Angular, Express, PostgreSQL
"};

const ABOUT: &str = indoc! {"
    Hi, I'm Mrigendra.

    I build web and mobile products, run infrastructure, and care about
    the small details that make software pleasant to use.

    Interests: IT, Mobile Development, Music Production, AI/ML
"};

const CONTACT: &str = indoc! {"
    Email:     mrigendra@example.com
    LinkedIn:  linkedin.com/in/mrigendra
    GitHub:    github.com/mrigendra
    Portfolio: mrigendra.dev
"};

const BLOG: &str = indoc! {"
    Building a desktop in the browser
      Window stacking, drag sessions and a taskbar in a few hundred lines.

    Notes on shipping React Native apps
      What broke, what didn't, and what I'd do again.
"};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_to_catalog_entries() {
        let catalog = Catalog::portfolio();
        let lookup = resolve(&catalog, &AppId::from("resume"));
        assert!(matches!(lookup, Lookup::Known(_)));
        assert_eq!(lookup.title(), "Resume");
        assert_eq!(lookup.kind(), AppKind::Document);
        assert_eq!(resolve(&catalog, &"terminal".into()).kind(), AppKind::Terminal);
    }

    #[test]
    fn unknown_ids_use_fallback_branch() {
        let catalog = Catalog::portfolio();
        let lookup = resolve(&catalog, &AppId::from("paint"));
        assert_eq!(lookup, Lookup::Unknown(AppId::from("paint")));
        assert_eq!(lookup.title(), "paint");
        assert_eq!(lookup.icon(), FALLBACK_ICON);
        assert_eq!(lookup.body(), FALLBACK_BODY);
    }
}
