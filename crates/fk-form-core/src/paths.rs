//! Filesystem paths rendered inside CSS `url('...')` values.

/// Escape a path for a single-quoted CSS `url()`. Windows separators are
/// doubled so the CSS parser does not read them as escapes; POSIX paths pass
/// through untouched apart from quotes.
pub fn css_url_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline style showing `path` as a photo-picker thumbnail.
pub fn thumb_style(path: &str) -> String {
    format!("background-image: url('{}')", css_url_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_paths_are_unchanged() {
        assert_eq!(css_url_path("/home/ana/covers/dune.jpg"), "/home/ana/covers/dune.jpg");
    }

    #[test]
    fn windows_separators_are_doubled() {
        assert_eq!(
            css_url_path(r"C:\Users\ana\dune.jpg"),
            r"C:\\Users\\ana\\dune.jpg"
        );
    }

    #[test]
    fn thumb_style_wraps_in_url() {
        assert_eq!(
            thumb_style("/covers/o'brien.png"),
            r"background-image: url('/covers/o\'brien.png')"
        );
    }
}
