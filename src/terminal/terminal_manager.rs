use std::io;

use termion::input::MouseTerminal;
use termion::raw::{IntoRawMode, RawTerminal};
use ratatui::backend::{Backend, CrosstermBackend, TestBackend};
use ratatui::Terminal;

pub struct TerminalManager<B : Backend> {
    pub terminal : ratatui::Terminal<B>,
}

impl <B : Backend>  TerminalManager<B> {
    pub fn clear_screen(&mut self) -> Result<(), io::Error> {
        self.terminal.clear()
    }
}

pub fn init() -> Result<TerminalManager<CrosstermBackend<MouseTerminal<RawTerminal<io::Stdout>>>>, io::Error> {
    // MouseTerminal switches on click reporting, radio rows are tap sensitive
    let stdout = MouseTerminal::from(io::stdout().into_raw_mode()?);
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let manager = TerminalManager { terminal };

    log::info!("Terminal initialised.");
    Ok(manager)
}

pub fn init_test(width: u16, height: u16) -> Result<TerminalManager<TestBackend>, io::Error> {
    let backend = TestBackend::new(width, height);
    let terminal = Terminal::new(backend)?;
    let manager = TerminalManager { terminal };

    log::info!("Test terminal initialised.");
    Ok(manager)
}
