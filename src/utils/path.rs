//! Path helpers for user-supplied sheet locations.

use std::path::PathBuf;

/// Expand a leading `~/` to the user's home directory. Anything else is
/// passed through untouched.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/sheet.csv"), PathBuf::from("/tmp/sheet.csv"));
        assert_eq!(expand_tilde("sheet.csv"), PathBuf::from("sheet.csv"));
    }

    #[test]
    fn tilde_prefix_becomes_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/sheet.csv"), home.join("sheet.csv"));
        }
    }

    #[test]
    fn bare_tilde_without_slash_is_literal() {
        assert_eq!(expand_tilde("~sheet.csv"), PathBuf::from("~sheet.csv"));
    }
}
