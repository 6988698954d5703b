//! Output formatting and progress bars for CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Coord};

/// Create a progress bar for a sampling run
pub fn create_sampling_progress(total_trials: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_trials);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board, marking one cell with `*`
pub fn print_board_with_highlight(board: &Board, highlight: Option<Coord>) {
    for (r, row) in board.rows().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                if highlight == Some(Coord::new(r, c)) {
                    '*'
                } else {
                    cell.to_char()
                }
            })
            .collect();
        println!("  {line}");
    }
}
