//! TUI utility functions.

use std::io;
use std::path::Path;

/// Open a file with the system's default application
pub fn open_path(path: &Path) -> io::Result<()> {
    open::that(path)
}

/// Truncate to at most `max` characters, marking the cut with an ellipsis
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max == 0 {
        String::new()
    } else {
        let kept: String = s.chars().take(max - 1).collect();
        format!("{kept}\u{2026}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_str_adds_ellipsis() {
        assert_eq!(truncate_str("projects", 20), "projects");
        assert_eq!(truncate_str("projects", 5), "proj\u{2026}");
    }
}
