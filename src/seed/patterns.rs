//! Pattern files for seeding a grid
//!
//! Format: each line is a row, with '1' for alive cells and '0' for dead
//! cells. Parsing yields the live coordinates rather than a dense grid, so
//! the result feeds straight into the engine's bulk-seed contract.

use anyhow::{Context, Result};
use std::path::Path;

/// A parsed pattern: bounding dimensions plus live-cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Number of live cells in the pattern.
    pub fn live_count(&self) -> usize {
        self.cells.len()
    }
}

/// Load a pattern from a text file.
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a pattern from its string representation.
pub fn parse_pattern(content: &str) -> Result<Pattern> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let height = lines.len();
    let width = lines[0].len();

    if width == 0 {
        anyhow::bail!("Pattern rows cannot be empty");
    }

    let mut cells = Vec::new();

    for (y, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                y,
                line.len(),
                width
            );
        }

        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => cells.push((x as i64, y as i64)),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    y,
                    x
                ),
            }
        }
    }

    Ok(Pattern {
        width,
        height,
        cells,
    })
}

/// Render a pattern back to its text representation.
pub fn pattern_to_string(pattern: &Pattern) -> String {
    let mut rows = vec![vec!['0'; pattern.width]; pattern.height];
    for &(x, y) in &pattern.cells {
        if (0..pattern.width as i64).contains(&x) && (0..pattern.height as i64).contains(&y) {
            rows[y as usize][x as usize] = '1';
        }
    }

    let mut result = String::with_capacity(pattern.height * (pattern.width + 1));
    for row in rows {
        result.extend(row);
        result.push('\n');
    }
    result
}

/// Save a pattern to a text file, creating parent directories as needed.
pub fn save_pattern_to_file<P: AsRef<Path>>(pattern: &Pattern, path: P) -> Result<()> {
    let content = pattern_to_string(pattern);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create the classic example patterns for trying out the simulator.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Glider (moves diagonally forever on a large enough grid)
    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Blinker (period-2 oscillator)
    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content).context("Failed to write block.txt")?;

    // Beacon (period-2 oscillator)
    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}
