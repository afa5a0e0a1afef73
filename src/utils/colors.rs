/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Zebra striping for shift rows: odd rows are dimmed.
pub fn color_for_row(index: usize) -> &'static str {
    if index % 2 == 0 { RESET } else { GREY }
}

/// Wrap a value in a color and reset afterwards.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Subtotal rows are rendered bold yellow.
pub fn colorize_total(value: &str) -> String {
    format!("{BOLD}{YELLOW}{value}{RESET}")
}
