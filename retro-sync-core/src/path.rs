//! POSIX-style string paths.
//!
//! Source and destination paths are handed to rsync verbatim and may carry
//! an SSH host prefix (`host:/path`), so they are built as strings with `/`
//! separators instead of `std::path::PathBuf`.

/// Join path segments the way a pure POSIX path does.
///
/// Empty and `.` segments are dropped, repeated separators collapse and a
/// trailing separator is removed. The root of the base is kept: exactly two
/// leading slashes stay `//`, one or three-plus become `/`. An empty result
/// is `.`.
pub fn join_posix<I, S>(base: &str, parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = root_of(base);
    let mut segments: Vec<String> = Vec::new();

    let mut push_segments = |raw: &str| {
        // An absolute part resets the path.
        if raw.starts_with('/') {
            segments.clear();
        }
        segments.extend(
            raw.split('/')
                .filter(|s| !s.is_empty() && *s != ".")
                .map(str::to_string),
        );
    };

    push_segments(base);
    for part in parts {
        let part = part.as_ref();
        if part.starts_with('/') {
            root = root_of(part);
        }
        push_segments(part);
    }

    let joined = segments.join("/");
    match (root, joined.is_empty()) {
        ("", true) => ".".to_string(),
        ("", false) => joined,
        (root, _) => format!("{root}{joined}"),
    }
}

fn root_of(path: &str) -> &'static str {
    if path.starts_with("//") && !path.starts_with("///") {
        "//"
    } else if path.starts_with('/') {
        "/"
    } else {
        ""
    }
}

/// Append exactly one `/` to `path`.
///
/// rsync copies a directory's contents when the source ends with `/` and the
/// directory itself otherwise.
pub fn with_trailing_slash(path: &str) -> String {
    format!("{path}/")
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
