//! Pure formatting functions for pipeline output.
//!
//! All display logic lives here, separated from the publish workflow.

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Format and print a skipped-revision notice.
pub fn display_skip(message: &str) {
    println!("\x1b[33mskip\x1b[0m {}", message);
}

/// Display the selected revisions for a component.
///
/// Shows one line per revision: version and target content directory,
/// oldest first, the current version last.
pub fn display_selected_revisions(component: &str, revisions: &[(String, String)]) {
    println!("\n\x1b[1mSelected revisions for '{}':\x1b[0m", component);
    for (version, dir_path) in revisions {
        println!("  {} -> {}", version, dir_path);
    }
}
