use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tracing::Level;

use folio_desk::config::{Cli, DeskConfig};
use folio_desk::content::Catalog;
use folio_desk::desktop::Desktop;
use folio_desk::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use folio_desk::drivers::{InputDriver, OutputDriver};
use folio_desk::error::DeskError;
use folio_desk::event_loop::{ControlFlow, EventLoop};
use folio_desk::log_buffer::{self, LogBuffer};
use folio_desk::tracing_sub;

fn main() -> Result<(), DeskError> {
    let cli = Cli::parse();
    let config = DeskConfig::try_from(&cli)?;

    let log = LogBuffer::default();
    log_buffer::set_global_log(log.clone());
    log_buffer::install_panic_hook();
    tracing_sub::init_default(if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    });

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(config.mouse)?;

    let mut desktop = Desktop::new(&config, Arc::new(Catalog::portfolio()), Some(log), Instant::now());
    let (width, height) = output.size()?;
    desktop.resize(width, height);
    tracing::info!(width, height, "desktop started");

    let mut pump = EventLoop::new(input, config.tick);
    let result = pump.run(|_, event| {
        match event {
            Some(event) => Ok(desktop.handle_event(&event)),
            None => {
                desktop.tick(Instant::now());
                output.draw(|mut frame| desktop.render(&mut frame))?;
                Ok(if desktop.should_quit() {
                    ControlFlow::Quit
                } else {
                    ControlFlow::Continue
                })
            }
        }
    });

    output.exit()?;
    result?;
    Ok(())
}
