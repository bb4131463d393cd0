//! Display and output formatting utilities

use crate::engine::{LifeEngine, StepDelta};
use itertools::Itertools;

/// Terminal formatting for grids and step deltas
pub struct GridFormatter;

impl GridFormatter {
    /// Format the grid with row and column numbers
    pub fn format_with_coords(engine: &LifeEngine) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..engine.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for y in 0..engine.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..engine.width() {
                output.push_str(if engine.get(x as i64, y as i64) {
                    "██"
                } else {
                    "··"
                });
            }
            output.push('\n');
        }

        output
    }

    /// One-line summary of a step delta with decoded coordinates
    pub fn format_delta(delta: &StepDelta) -> String {
        if delta.is_quiescent() {
            return "no transitions".to_string();
        }

        let died = delta
            .died_coords()
            .map(|(x, y)| format!("({}, {})", x, y))
            .join(" ");
        let born = delta
            .born_coords()
            .map(|(x, y)| format!("({}, {})", x, y))
            .join(" ");

        format!(
            "-{} +{} | died: {} | born: {}",
            delta.died.len(),
            delta.born.len(),
            if died.is_empty() { "-" } else { died.as_str() },
            if born.is_empty() { "-" } else { born.as_str() }
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let mut engine = LifeEngine::new(3, 3).unwrap();
        engine.seed([(0, 0), (1, 1), (2, 2)]);

        let with_coords = GridFormatter::format_with_coords(&engine);
        assert!(with_coords.contains("██"));
        assert!(with_coords.contains("··"));
        assert!(with_coords.contains(" 0 1 2"));
    }

    #[test]
    fn test_delta_formatting() {
        let delta = StepDelta {
            width: 5,
            died: vec![11, 13],
            born: vec![7, 17],
        };
        let line = GridFormatter::format_delta(&delta);
        assert!(line.contains("-2 +2"));
        assert!(line.contains("(1, 2)"));
        assert!(line.contains("(2, 3)"));

        let quiet = StepDelta {
            width: 5,
            died: vec![],
            born: vec![],
        };
        assert_eq!(GridFormatter::format_delta(&quiet), "no transitions");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
