use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;
use crate::geometry::{Point, Size};
use crate::persona::Persona;
use crate::theme::ThemeMode;

/// Geometry and timing constants used by the window manager.
///
/// `Default` keeps the desktop-pixel scale; `terminal()` rescales the same
/// layout to character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmConfig {
    /// First stacking value handed out; everything below belongs to fixed chrome.
    pub z_baseline: u64,
    pub cascade_origin: Point,
    pub cascade_step: Point,
    pub default_size: Size,
    /// Origin used when un-maximizing a window that never saved its geometry.
    pub restore_fallback: Point,
    /// Band at the bottom of the viewport reserved for the taskbar.
    pub taskbar_height: u16,
    pub open_delay: Duration,
    pub close_delay: Duration,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            z_baseline: 100,
            cascade_origin: Point::new(50, 50),
            cascade_step: Point::new(30, 30),
            default_size: Size::new(640, 420),
            restore_fallback: Point::new(100, 100),
            taskbar_height: 60,
            open_delay: Duration::from_millis(100),
            close_delay: Duration::from_millis(300),
        }
    }
}

impl WmConfig {
    pub fn terminal() -> Self {
        Self {
            cascade_origin: Point::new(4, 2),
            cascade_step: Point::new(3, 2),
            default_size: Size::new(56, 16),
            restore_fallback: Point::new(4, 2),
            taskbar_height: 1,
            ..Self::default()
        }
    }
}

const TICK_MIN_MS: u64 = 1;
const TICK_MAX_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(
    name = "folio-desk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A portfolio desktop with draggable windows, in your terminal"
)]
pub struct Cli {
    /// Skip the lock screen and log in as this persona.
    #[arg(short = 'p', long = "persona", value_enum)]
    pub persona: Option<Persona>,

    /// Initial color theme.
    #[arg(short = 't', long = "theme", value_enum, default_value_t = ThemeMode::Dark)]
    pub theme: ThemeMode,

    /// Input poll interval; timers and redraws run at this cadence.
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 16)]
    pub tick_ms: u64,

    /// Log at DEBUG instead of INFO.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Do not capture the mouse.
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    pub persona: Option<Persona>,
    pub theme: ThemeMode,
    pub tick: Duration,
    pub verbose: bool,
    pub mouse: bool,
    pub wm: WmConfig,
}

impl TryFrom<&Cli> for DeskConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(TICK_MIN_MS..=TICK_MAX_MS).contains(&cli.tick_ms) {
            return Err(ConfigError::TickOutOfRange {
                value: cli.tick_ms,
                min: TICK_MIN_MS,
                max: TICK_MAX_MS,
            });
        }
        Ok(Self {
            persona: cli.persona,
            theme: cli.theme,
            tick: Duration::from_millis(cli.tick_ms),
            verbose: cli.verbose,
            mouse: !cli.no_mouse,
            wm: WmConfig::terminal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_into_terminal_metrics() {
        let cli = Cli::try_parse_from(["folio-desk"]).unwrap();
        let config = DeskConfig::try_from(&cli).unwrap();
        assert_eq!(config.persona, None);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.tick, Duration::from_millis(16));
        assert!(config.mouse);
        assert_eq!(config.wm.taskbar_height, 1);
    }

    #[test]
    fn persona_and_theme_flags() {
        let cli = Cli::try_parse_from([
            "folio-desk",
            "--persona",
            "developer",
            "--theme",
            "light",
            "--no-mouse",
        ])
        .unwrap();
        let config = DeskConfig::try_from(&cli).unwrap();
        assert_eq!(config.persona, Some(Persona::Developer));
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(!config.mouse);
    }

    #[test]
    fn tick_out_of_range_is_rejected() {
        let cli = Cli::try_parse_from(["folio-desk", "--tick-ms", "0"]).unwrap();
        assert_eq!(
            DeskConfig::try_from(&cli),
            Err(ConfigError::TickOutOfRange {
                value: 0,
                min: 1,
                max: 1000
            })
        );
    }

    #[test]
    fn terminal_metrics_keep_timing() {
        let px = WmConfig::default();
        let cells = WmConfig::terminal();
        assert_eq!(px.close_delay, cells.close_delay);
        assert_eq!(px.z_baseline, cells.z_baseline);
        assert!(cells.default_size.width < px.default_size.width);
    }
}
