/// Terminal output helpers shared by the commands
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color as TableColor, ContentArrangement, Table};

/// Print a styled section header
pub fn print_section(title: &str) {
    println!("\n{} {}", "▶".cyan().bold(), title.bold());
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_tip(message: &str) {
    println!("{} {}", "Tip:".cyan().bold(), message.dimmed());
}

/// Print a two-column table of labels and values
pub fn print_stats_table(title: &str, stats: Vec<(String, String)>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(title).fg(TableColor::Cyan),
            Cell::new("Value").fg(TableColor::Cyan),
        ]);

    for (label, value) in stats {
        table.add_row(vec![Cell::new(label), Cell::new(value).fg(TableColor::Green)]);
    }

    println!("\n{}", table);
}

/// Print formatted number with thousands separator
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Check if colors should be disabled
pub fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
        && std::env::var("CLICOLOR").unwrap_or_else(|_| "1".to_string()) != "0"
}

/// Initialize the formatter (sets up colored output)
pub fn init() {
    if !colors_enabled() {
        colored::control::set_override(false);
    }
}
