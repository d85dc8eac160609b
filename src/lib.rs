//! folio-desk: a portfolio presented as a small desktop in the terminal.
//!
//! The heart of the crate is [`window::WindowManager`], which owns window
//! creation, stacking, dragging, minimize/maximize/restore and the two-phase
//! close. Everything else (lock screen, icons, taskbar, launcher, toasts,
//! the fake terminal) is shell built around it in [`desktop`].

pub mod config;
pub mod content;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod keybindings;
pub mod launcher;
pub mod log_buffer;
pub mod notifications;
pub mod persona;
pub mod taskbar;
pub mod terminal_app;
pub mod theme;
pub mod timers;
pub mod tracing_sub;
pub mod ui;
pub mod window;
