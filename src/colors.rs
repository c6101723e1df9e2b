use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Shared color scheme state
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self {
            scheme: default_scheme,
        }
    }

    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('!') => self.scheme = 1,  // Shift+1: fire
            KeyCode::Char('@') => self.scheme = 2,  // Shift+2: ice
            KeyCode::Char('#') => self.scheme = 3,  // Shift+3: gold
            KeyCode::Char('$') => self.scheme = 4,  // Shift+4: mono
            KeyCode::Char('%') => self.scheme = 5,  // Shift+5: neon
            KeyCode::Char(')') => self.scheme = 0,  // Shift+0: classic green
            _ => return false,
        }
        true
    }
}

/// Get color from scheme based on cell intensity (0 = sparse or crowded,
/// 1 = two neighbors, 2 = three neighbors)
pub fn scheme_color(scheme: u8, intensity: u8, bold: bool) -> (Color, bool) {
    match scheme {
        1 => match intensity {
            // Red/Yellow (fire)
            0 => (Color::DarkRed, false),
            1 => (Color::Red, false),
            _ => (Color::Yellow, bold),
        },
        2 => match intensity {
            // Blue/Cyan (ice)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            _ => (Color::Cyan, bold),
        },
        3 => match intensity {
            // Yellow/White (gold)
            0 => (Color::DarkYellow, false),
            1 => (Color::Yellow, false),
            _ => (Color::White, bold),
        },
        4 => match intensity {
            // White/Grey (mono)
            0 => (Color::DarkGrey, false),
            1 => (Color::Grey, false),
            _ => (Color::White, bold),
        },
        5 => match intensity {
            // Blue/Magenta (neon)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            _ => (Color::Magenta, bold),
        },
        _ => match intensity {
            // Default: classic green
            0 => (Color::DarkGreen, false),
            1 => (Color::Green, false),
            _ => (Color::Green, true),
        },
    }
}
