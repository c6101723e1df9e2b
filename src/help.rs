use crate::terminal::Terminal;
use crossterm::style::Color;

/// Render a centered help overlay box with the provided text.
pub fn render_help_overlay(term: &mut Terminal, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let (width, height) = term.size();
    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2; // 1 row padding top/bottom

    let start_x = ((width as usize).saturating_sub(box_width) / 2) as i32;
    let start_y = ((height as usize).saturating_sub(box_height) / 2) as i32;

    let border_color = Some(Color::White);
    let text_color = Some(Color::Grey);

    let horizontal = "─".repeat(box_width - 2);
    term.set_str(start_x, start_y, &format!("┌{horizontal}┐"), border_color, false);
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + 1 + i as i32;
        let padding = max_width - line.chars().count();
        term.set(start_x, y, '│', border_color, false);
        term.set_str(
            start_x + 1,
            y,
            &format!(" {}{} ", line, " ".repeat(padding)),
            text_color,
            false,
        );
        term.set(start_x + box_width as i32 - 1, y, '│', border_color, false);
    }
    term.set_str(
        start_x,
        start_y + box_height as i32 - 1,
        &format!("└{horizontal}┘"),
        border_color,
        false,
    );
}
