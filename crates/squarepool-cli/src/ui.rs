//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled section header.
pub fn print_header(text: &str) {
    let rule = "-".repeat(30);
    if is_color_disabled() {
        println!("\n{text}\n{rule}");
    } else {
        println!("\n{}\n{rule}", style(text).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_functions_do_not_panic() {
        print_header("SEQUENTIAL");
        print_success("results match");
        print_error("results differ");
    }

    #[test]
    fn print_functions_with_empty_text() {
        print_header("");
        print_success("");
        print_error("");
    }
}
