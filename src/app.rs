//! Interactive session: owns the simulation state and wires terminal
//! events to it.
//!
//! [`LifeApp`] is the command surface. Keys and mouse clicks call its
//! methods, the methods mutate the core state, and the run loop redraws
//! afterwards; nothing in the core holds a reference back into the
//! rendering layer.

use crate::codec;
use crate::colors::{scheme_color, ColorState};
use crate::config::{LifeConfig, DEFAULT_DELAY_MS, MAX_DELAY_MS, MIN_DELAY_MS, SOUP_DENSITY};
use crate::engine;
use crate::error::LifeError;
use crate::grid::{Cell, LiveSet};
use crate::help::render_help_overlay;
use crate::patterns::PATTERNS;
use crate::snapshot::SnapshotStore;
use crate::terminal::Terminal;
use crate::viewport::Viewport;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEventKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::style::Color;
use rand::prelude::*;
use std::fs;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const HELP_TEXT: &str = "\
GAME OF LIFE
───────────────────────
Space   Start/stop
n       Step one generation
e       Edit mode (click cells)
Arrows  Pan the view
[ ]     Zoom out/in
+/-     Faster/slower
1-9,0   Speed presets
p       Place next pattern
f       Random soup fill
s/l     Save/load snapshot
c       Clear the grid
i       Re-import pattern file
x       Export pattern to file
!-%,)   Color scheme
?       Close help
q/Esc   Quit";

/// Simulation state plus the commands the terminal layer drives it with.
pub struct LifeApp {
    grid: LiveSet,
    view: Viewport,
    snapshot: SnapshotStore,
    delay_ms: u64,
    running: bool,
    edit_mode: bool,
}

impl LifeApp {
    pub fn new(config: &LifeConfig, width: i64, height: i64) -> Self {
        Self {
            grid: LiveSet::new(config.initial_cells.iter().copied()),
            view: Viewport::new(width, height, config.cell_size),
            snapshot: SnapshotStore::new(),
            delay_ms: config.delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS),
            running: false,
            edit_mode: false,
        }
    }

    pub fn grid(&self) -> &LiveSet {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.view
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Display-only speed figure for the status line.
    pub fn speed_percent(&self) -> u64 {
        10_000 / self.delay_ms
    }

    /// One transition: the engine computes the next population from the
    /// current one, then the finished generation is recorded.
    pub fn advance_generation(&mut self) {
        let next = engine::advance(&self.grid);
        self.grid.replace(next);
        self.grid.complete_generation();
    }

    /// Flip one cell. Only meaningful between transitions (edit mode).
    pub fn toggle_cell(&mut self, cell: Cell) {
        self.grid.toggle(cell);
    }

    /// Clear the grid and return the animation delay to its default.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.delay_ms = DEFAULT_DELAY_MS;
    }

    /// Animation runs only outside edit mode.
    pub fn toggle_running(&mut self) {
        if !self.edit_mode {
            self.running = !self.running;
        }
    }

    /// Entering edit mode stops the animation.
    pub fn set_edit_mode(&mut self, edit: bool) {
        self.edit_mode = edit;
        if edit {
            self.running = false;
        }
    }

    pub fn save_snapshot(&mut self) {
        self.snapshot.save(&self.grid);
    }

    /// Restore the saved population. Reports `false`, leaving everything
    /// untouched, when nothing has been saved yet.
    pub fn load_snapshot(&mut self) -> bool {
        match self.snapshot.restore() {
            Some(cells) => {
                self.grid.load(cells);
                true
            }
            None => false,
        }
    }

    /// Replace the grid with decoded pattern text. On a decode failure the
    /// current grid and generation are left exactly as they were.
    pub fn import_pattern(&mut self, text: &str) -> Result<(), LifeError> {
        let cells = codec::decode(text)?;
        self.grid.load(cells);
        Ok(())
    }

    /// The current population as pattern text. Refuses an empty grid.
    pub fn export_pattern(&self) -> Result<String, LifeError> {
        if self.grid.is_empty() {
            return Err(LifeError::EmptyGrid);
        }
        Ok(codec::encode(&self.grid))
    }

    pub fn pan(&mut self, dx: i64, dy: i64) {
        self.view.pan(dx, dy);
    }

    pub fn zoom(&mut self, delta: i64) {
        self.view.zoom(delta);
    }

    pub fn resize_window(&mut self, width: i64, height: i64) {
        self.view.resize(width, height);
    }

    /// Positive slows the animation down, negative speeds it up.
    pub fn change_speed(&mut self, delta_ms: i64) {
        let delay = self.delay_ms as i64 + delta_ms;
        self.delay_ms = delay.clamp(MIN_DELAY_MS as i64, MAX_DELAY_MS as i64) as u64;
    }

    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
    }

    /// Drop a built-in pattern centered on the current view.
    pub fn place_pattern(&mut self, index: usize) -> &'static str {
        let pattern = &PATTERNS[index % PATTERNS.len()];
        self.grid.load(pattern.cells_at(self.view.center_cell()));
        pattern.name
    }

    /// Fill the visible range with a random soup.
    pub fn fill_soup(&mut self, rng: &mut StdRng) {
        let range = self.view.visible_range();
        let mut cells = Vec::new();
        for y in range.min.y..=range.max.y {
            for x in range.min.x..=range.max.x {
                if rng.gen_bool(SOUP_DENSITY) {
                    cells.push(Cell::new(x, y));
                }
            }
        }
        self.grid.load(cells);
    }
}

/// Drive an interactive session until the user quits.
pub fn run(config: LifeConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let mut term = Terminal::new(true)?;
    term.clear_screen()?;
    let _mouse_guard = MouseCaptureGuard::enable()?;

    let (width, height) = term.size();
    // The bottom row is the status line; the grid gets the rest.
    let mut app = LifeApp::new(&config, width as i64, grid_rows(height));
    let mut colors = ColorState::new(config.color_scheme);
    let mut show_help = false;
    let mut pattern_index = 0usize;
    let mut status: Option<String> = None;
    let mut last_tick = Instant::now();

    loop {
        if let Ok((w, h)) = crossterm::terminal::size() {
            if (w, h) != term.size() {
                term.resize(w, h);
                term.clear_screen()?;
                app.resize_window(w as i64, grid_rows(h));
            }
        }

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    if colors.handle_key(key.code) {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('?') => show_help = !show_help,
                        KeyCode::Char(' ') => app.toggle_running(),
                        KeyCode::Char('e') => {
                            let edit = !app.edit_mode();
                            app.set_edit_mode(edit);
                        }
                        KeyCode::Char('n') => {
                            if !app.is_running() {
                                app.advance_generation();
                            }
                        }
                        KeyCode::Char('c') => {
                            app.reset();
                            status = None;
                        }
                        KeyCode::Char('s') => {
                            app.save_snapshot();
                            status = Some("snapshot saved".into());
                        }
                        KeyCode::Char('l') => {
                            status = Some(if app.load_snapshot() {
                                "snapshot loaded".into()
                            } else {
                                "no snapshot saved".into()
                            });
                        }
                        KeyCode::Char('p') => {
                            let name = app.place_pattern(pattern_index);
                            pattern_index = (pattern_index + 1) % PATTERNS.len();
                            status = Some(name.to_string());
                        }
                        KeyCode::Char('f') => {
                            app.fill_soup(&mut rng);
                            status = None;
                        }
                        KeyCode::Char('i') => {
                            status = Some(import_from_file(&mut app, config.pattern_file.as_deref()));
                        }
                        KeyCode::Char('x') => {
                            status = Some(match export_to_file(&app, &config.export_dir) {
                                Ok(path) => format!("exported {}", path.display()),
                                Err(err) => format!("export failed: {err}"),
                            });
                        }
                        KeyCode::Char('+') | KeyCode::Char('=') => app.change_speed(-10),
                        KeyCode::Char('-') | KeyCode::Char('_') => app.change_speed(10),
                        KeyCode::Char(']') => app.zoom(2),
                        KeyCode::Char('[') => app.zoom(-2),
                        KeyCode::Up => app.pan(0, 1),
                        KeyCode::Down => app.pan(0, -1),
                        KeyCode::Left => app.pan(-1, 0),
                        KeyCode::Right => app.pan(1, 0),
                        KeyCode::Char(c) if c.is_ascii_digit() => {
                            app.set_delay(delay_preset(c));
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if app.edit_mode() {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            let (_, rows) = app.viewport().size();
                            if (mouse.row as i64) < rows {
                                let cell = app.viewport().cell_at(mouse.column as i64, mouse.row as i64);
                                app.toggle_cell(cell);
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        if app.is_running() && last_tick.elapsed() >= Duration::from_millis(app.delay_ms()) {
            app.advance_generation();
            last_tick = Instant::now();
        }

        draw(&mut term, &app, &colors, config.draw_char, status.as_deref());
        if show_help {
            render_help_overlay(&mut term, HELP_TEXT);
        }
        term.render()?;
        term.sleep(0.01);
    }
}

/// Speed presets on the digit keys, 1 = fastest.
fn delay_preset(digit: char) -> u64 {
    match digit {
        '1' => 10,
        '2' => 25,
        '3' => 50,
        '4' => 75,
        '5' => 100,
        '6' => 150,
        '7' => 250,
        '8' => 500,
        '9' => 750,
        _ => 1000,
    }
}

fn grid_rows(terminal_height: u16) -> i64 {
    (terminal_height as i64 - 1).max(1)
}

fn draw(term: &mut Terminal, app: &LifeApp, colors: &ColorState, draw_char: char, status: Option<&str>) {
    term.clear();

    for cell in app.viewport().visible_cells(app.grid()) {
        let neighbors = engine::live_neighbors(app.grid(), cell);
        let intensity = match neighbors {
            2 => 1,
            3 => 2,
            _ => 0,
        };
        let (color, bold) = scheme_color(colors.scheme, intensity, false);
        let rect = app.viewport().cell_rect(cell);
        for dy in 0..rect.size {
            for dx in 0..rect.size {
                term.set(
                    (rect.x + dx) as i32,
                    (rect.y + dy) as i32,
                    draw_char,
                    Some(color),
                    bold,
                );
            }
        }
    }

    let mode = if app.edit_mode() {
        "EDIT"
    } else if app.is_running() {
        "RUN"
    } else {
        "PAUSED"
    };
    let line = format!(
        "GEN {}  SPEED {}%  POP {}  {}  {}",
        app.grid().generation(),
        app.speed_percent(),
        app.grid().len(),
        mode,
        status.unwrap_or(""),
    );
    let (_, height) = term.size();
    term.set_str(0, height as i32 - 1, &line, Some(Color::White), true);
}

/// Re-read the pattern file given at startup. All-or-nothing: any failure
/// leaves the grid as it was.
fn import_from_file(app: &mut LifeApp, pattern_file: Option<&Path>) -> String {
    let Some(path) = pattern_file else {
        return "no pattern file given".into();
    };
    let result = fs::read_to_string(path)
        .map_err(LifeError::from)
        .and_then(|text| app.import_pattern(&text));
    match result {
        Ok(()) => format!("imported {}", path.display()),
        Err(err) => format!("import failed: {err}"),
    }
}

/// Write the current pattern to a timestamped file in the export
/// directory.
fn export_to_file(app: &LifeApp, export_dir: &Path) -> Result<PathBuf, LifeError> {
    let text = app.export_pattern()?;
    let name = Local::now().format("life-%Y%m%d-%H%M%S.cells").to_string();
    let path = export_dir.join(name);
    fs::create_dir_all(export_dir)?;
    fs::write(&path, text)?;
    Ok(path)
}

struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn enable() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CELL_SIZE;

    fn test_config(initial: Vec<Cell>) -> LifeConfig {
        LifeConfig {
            delay_ms: DEFAULT_DELAY_MS,
            cell_size: DEFAULT_CELL_SIZE,
            draw_char: '#',
            color_scheme: 0,
            seed: Some(7),
            export_dir: PathBuf::from("."),
            pattern_file: None,
            initial_cells: initial,
        }
    }

    fn app_with(initial: Vec<Cell>) -> LifeApp {
        LifeApp::new(&test_config(initial), 80, 24)
    }

    #[test]
    fn advancing_an_empty_grid_still_counts_the_generation() {
        let mut app = app_with(Vec::new());
        app.advance_generation();
        assert!(app.grid().is_empty());
        assert_eq!(app.grid().generation(), 1);
    }

    #[test]
    fn blinker_advances_through_the_command_interface() {
        let mut app = app_with(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        app.advance_generation();
        assert_eq!(app.grid().generation(), 1);
        assert!(app.grid().contains(Cell::new(1, 1)));
        assert!(app.grid().contains(Cell::new(1, 0)));
        assert!(app.grid().contains(Cell::new(1, -1)));
        assert_eq!(app.grid().len(), 3);
    }

    #[test]
    fn failed_import_leaves_state_untouched() {
        let mut app = app_with(vec![Cell::new(4, 4)]);
        app.advance_generation();
        let before = app.grid().sorted_cells();
        let generation = app.grid().generation();

        assert!(matches!(app.import_pattern("junk"), Err(LifeError::Format)));
        assert_eq!(app.grid().sorted_cells(), before);
        assert_eq!(app.grid().generation(), generation);
    }

    #[test]
    fn successful_import_replaces_and_restarts() {
        let mut app = app_with(vec![Cell::new(4, 4)]);
        app.advance_generation();
        app.import_pattern("0,0-1,0--2,3-").expect("imports");
        assert_eq!(app.grid().generation(), 0);
        assert_eq!(
            app.grid().sorted_cells(),
            vec![Cell::new(-2, 3), Cell::new(0, 0), Cell::new(1, 0)]
        );
    }

    #[test]
    fn export_refuses_an_empty_grid() {
        let app = app_with(Vec::new());
        assert!(matches!(app.export_pattern(), Err(LifeError::EmptyGrid)));
    }

    #[test]
    fn export_round_trips_through_import() {
        let cells = vec![Cell::new(-3, 1), Cell::new(0, 0), Cell::new(9, -9)];
        let mut app = app_with(cells.clone());
        let text = app.export_pattern().expect("exports");
        app.reset();
        app.import_pattern(&text).expect("imports");
        assert_eq!(app.grid().len(), cells.len());
        for cell in cells {
            assert!(app.grid().contains(cell));
        }
    }

    #[test]
    fn snapshot_round_trip_restarts_the_generation() {
        let mut app = app_with(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]);
        app.save_snapshot();
        app.advance_generation();
        app.advance_generation();

        assert!(app.load_snapshot());
        assert_eq!(app.grid().generation(), 0);
        assert_eq!(
            app.grid().sorted_cells(),
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        // The slot survives the load and can be restored again.
        assert!(app.load_snapshot());
    }

    #[test]
    fn load_without_snapshot_is_a_no_op() {
        let mut app = app_with(vec![Cell::new(5, 5)]);
        assert!(!app.load_snapshot());
        assert_eq!(app.grid().sorted_cells(), vec![Cell::new(5, 5)]);
    }

    #[test]
    fn speed_clamps_at_both_ends() {
        let mut app = app_with(Vec::new());
        app.change_speed(-100_000);
        assert_eq!(app.delay_ms(), MIN_DELAY_MS);
        assert_eq!(app.speed_percent(), 1000);
        app.change_speed(100_000);
        assert_eq!(app.delay_ms(), MAX_DELAY_MS);
        assert_eq!(app.speed_percent(), 10);
    }

    #[test]
    fn reset_restores_the_default_speed() {
        let mut app = app_with(vec![Cell::new(1, 1)]);
        app.change_speed(500);
        app.reset();
        assert!(app.grid().is_empty());
        assert_eq!(app.delay_ms(), DEFAULT_DELAY_MS);
    }

    #[test]
    fn edit_mode_stops_and_blocks_the_animation() {
        let mut app = app_with(Vec::new());
        app.toggle_running();
        assert!(app.is_running());
        app.set_edit_mode(true);
        assert!(!app.is_running());
        app.toggle_running();
        assert!(!app.is_running());
        app.set_edit_mode(false);
        app.toggle_running();
        assert!(app.is_running());
    }

    #[test]
    fn placed_pattern_is_centered_and_fresh() {
        let mut app = app_with(Vec::new());
        app.advance_generation();
        let name = app.place_pattern(1);
        assert_eq!(name, "Blinker");
        assert_eq!(app.grid().generation(), 0);
        assert_eq!(app.grid().len(), 3);
        let range = app.viewport().visible_range();
        for cell in app.grid().sorted_cells() {
            assert!(range.contains(cell));
        }
    }

    #[test]
    fn soup_fill_lands_inside_the_visible_range() {
        let mut app = app_with(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        app.fill_soup(&mut rng);
        assert!(!app.grid().is_empty());
        let range = app.viewport().visible_range();
        for cell in app.grid().sorted_cells() {
            assert!(range.contains(cell));
        }
    }

    #[test]
    fn delay_presets_are_ordered() {
        let mut previous = 0;
        for digit in ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'] {
            let delay = delay_preset(digit);
            assert!(delay > previous);
            assert!((MIN_DELAY_MS..=MAX_DELAY_MS).contains(&delay));
            previous = delay;
        }
    }
}
