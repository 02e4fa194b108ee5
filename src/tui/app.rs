use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, ItemId, UiConfig};
use crate::ops::AppContext;
use crate::view::ListView;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new item in the status row
    Add,
    /// The edit popup is open
    Edit,
    /// Waiting for y/n on a delete
    Confirm,
}

/// Main application state
pub struct App {
    pub ctx: AppContext<ListView>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub ui: UiConfig,
    /// Index of the selected row
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// New-item input and its byte cursor
    pub add_buffer: String,
    pub add_cursor: usize,
    /// Byte cursor into the view's edit form
    pub edit_cursor: usize,
    /// Item awaiting delete confirmation
    pub pending_delete: Option<ItemId>,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        let mut ctx = AppContext::new(ListView::new());
        ctx.refresh_counters();
        App {
            ctx,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&ui),
            ui,
            cursor: 0,
            scroll_offset: 0,
            add_buffer: String::new(),
            add_cursor: 0,
            edit_cursor: 0,
            pending_delete: None,
            status_message: None,
            show_help: false,
        }
    }

    /// Id of the item under the cursor
    pub fn selected_id(&self) -> Option<ItemId> {
        self.ctx.view.rows().get(self.cursor).map(|r| r.id)
    }

    pub fn row_count(&self) -> usize {
        self.ctx.view.rows().len()
    }

    /// Keep the cursor on an existing row after the list shrinks
    pub fn clamp_cursor(&mut self) {
        let count = self.row_count();
        self.cursor = if count == 0 {
            0
        } else {
            self.cursor.min(count - 1)
        };
    }

    /// Move the cursor onto an item, if it is still listed
    pub fn select(&mut self, id: ItemId) {
        if let Some(pos) = self.ctx.collection.position(id) {
            self.cursor = pos;
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config.ui.clone());
    info!("starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(items = app.ctx.collection.size(), "tui exited");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
