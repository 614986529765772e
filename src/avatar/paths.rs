//! Parsing of dropped file paths
//!
//! Dropping a file onto a terminal pastes its path. Depending on the terminal
//! the path arrives quoted (`'My Photo.png'`), with escaped spaces
//! (`My\ Photo.png`) or as a `file://` URI. Several files dropped at once are
//! separated by whitespace or newlines.

use std::path::PathBuf;

use url::Url;

/// Split dropped text into the paths it names
pub fn parse_dropped_paths(raw: &str) -> Vec<PathBuf> {
    tokenize(raw)
        .into_iter()
        .filter_map(|token| token_to_path(&token))
        .collect()
}

/// Shell-like split: whitespace separates, quotes group, backslash escapes
fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (Some(_), '\\') | (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}

fn token_to_path(token: &str) -> Option<PathBuf> {
    if token.is_empty() {
        return None;
    }

    if token.starts_with("file://") {
        return match Url::parse(token).ok().and_then(|url| url.to_file_path().ok()) {
            Some(path) => Some(path),
            None => {
                tracing::debug!("Ignoring malformed file URI: {token}");
                None
            }
        };
    }

    if let Some(rest) = token.strip_prefix("~/")
        && let Some(dirs) = directories::BaseDirs::new()
    {
        return Some(dirs.home_dir().join(rest));
    }

    Some(PathBuf::from(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(
            parse_dropped_paths("/home/ada/avatar.png"),
            vec![PathBuf::from("/home/ada/avatar.png")]
        );
    }

    #[test]
    fn test_trailing_whitespace_and_newline() {
        assert_eq!(
            parse_dropped_paths("  /tmp/a.png \n"),
            vec![PathBuf::from("/tmp/a.png")]
        );
    }

    #[test]
    fn test_single_quoted_path_with_spaces() {
        assert_eq!(
            parse_dropped_paths("'/tmp/My Photo.png' "),
            vec![PathBuf::from("/tmp/My Photo.png")]
        );
    }

    #[test]
    fn test_double_quoted_path() {
        assert_eq!(
            parse_dropped_paths("\"/tmp/My Photo.png\""),
            vec![PathBuf::from("/tmp/My Photo.png")]
        );
    }

    #[test]
    fn test_escaped_spaces() {
        assert_eq!(
            parse_dropped_paths(r"/tmp/My\ Photo.png"),
            vec![PathBuf::from("/tmp/My Photo.png")]
        );
    }

    #[test]
    fn test_file_uri() {
        assert_eq!(
            parse_dropped_paths("file:///tmp/My%20Photo.png"),
            vec![PathBuf::from("/tmp/My Photo.png")]
        );
    }

    #[test]
    fn test_multiple_paths() {
        assert_eq!(
            parse_dropped_paths("/tmp/a.png /tmp/b.png\n/tmp/c.png"),
            vec![
                PathBuf::from("/tmp/a.png"),
                PathBuf::from("/tmp/b.png"),
                PathBuf::from("/tmp/c.png"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_dropped_paths("").is_empty());
        assert!(parse_dropped_paths("   \n").is_empty());
    }

    #[test]
    fn test_empty_quotes_are_ignored() {
        assert!(parse_dropped_paths("''").is_empty());
    }
}
