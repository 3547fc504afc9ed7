use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::LazyLock;

/// Browser-conditional variant suffix on the stem, e.g. `app.ie9.css`.
static IE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.ie\d?$").expect("static pattern compiles"));

/// Derive the public counterpart of a variant file name: strip one leading
/// underscore from the stem, or failing that a trailing `.ie<digit?>`
/// suffix. Same directory, original extension. A result equal to the input
/// means the file has no parent, which the caller detects by comparison.
pub fn resolve_parent(file: &Utf8Path) -> Utf8PathBuf {
    let dir = file.parent().unwrap_or_else(|| Utf8Path::new(""));
    let stem = file.file_stem().unwrap_or_else(|| file.as_str());

    let parent_stem = match stem.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => IE_SUFFIX.replace(stem, "").into_owned(),
    };

    let name = match file.extension() {
        Some(ext) => format!("{parent_stem}.{ext}"),
        None => parent_stem,
    };
    dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_of(file: &str) -> String {
        resolve_parent(Utf8Path::new(file)).to_string()
    }

    #[test]
    fn strips_one_leading_underscore() {
        assert_eq!(parent_of("_app.css"), "app.css");
        assert_eq!(parent_of("assets/_app.css"), "assets/app.css");
        // Only one underscore is stripped.
        assert_eq!(parent_of("__app.css"), "_app.css");
    }

    #[test]
    fn underscore_wins_over_ie_suffix() {
        assert_eq!(parent_of("_app.ie9.css"), "app.ie9.css");
    }

    #[test]
    fn strips_a_trailing_ie_suffix() {
        assert_eq!(parent_of("app.ie9.css"), "app.css");
        assert_eq!(parent_of("app.ie.css"), "app.css");
        // At most one digit belongs to the suffix.
        assert_eq!(parent_of("app.ie11.css"), "app.ie11.css");
    }

    #[test]
    fn multi_dot_names_keep_their_inner_extension() {
        assert_eq!(parent_of("_page.webp.css"), "page.webp.css");
    }

    #[test]
    fn plain_names_resolve_to_themselves() {
        assert_eq!(parent_of("app.css"), "app.css");
        assert_eq!(parent_of("assets/app.js"), "assets/app.js");
    }

    #[test]
    fn extensionless_names_are_handled() {
        assert_eq!(parent_of("_cache"), "cache");
    }
}
