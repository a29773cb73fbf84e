//! Lexical path normalization.
//!
//! Collapses repeated separators and removes `.` and `..` segments without
//! touching the file system. Windows paths are normalized on every host so the
//! Win32 resolver behaves the same under test as it does on Windows.

/// Normalize a Windows path: `/` becomes `\`, drive and UNC prefixes are kept.
pub fn normalize_windows(path: &str) -> String {
    let path = path.replace('/', "\\");
    let (prefix, rest) = split_windows_prefix(&path);
    let rooted = rest.starts_with('\\');

    let parts = collapse(rest.split('\\'), rooted);

    let mut out = String::with_capacity(path.len());
    out.push_str(prefix);
    if rooted {
        out.push('\\');
    }
    out.push_str(&parts.join("\\"));

    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Normalize a POSIX path.
pub fn normalize_posix(path: &str) -> String {
    let rooted = path.starts_with('/');
    let parts = collapse(path.split('/'), rooted);

    let mut out = String::with_capacity(path.len());
    if rooted {
        out.push('/');
    }
    out.push_str(&parts.join("/"));

    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Append `child` to a Windows path with a single `\` between them.
pub fn join_windows(base: &str, child: &str) -> String {
    if base.is_empty() || base.ends_with(['\\', '/']) || (base.len() == 2 && base.ends_with(':')) {
        format!("{base}{child}")
    } else {
        format!("{base}\\{child}")
    }
}

/// Split off `C:` or `\\server\share`.
fn split_windows_prefix(path: &str) -> (&str, &str) {
    if let Some(unc) = path.strip_prefix("\\\\") {
        // `\\server\share` when both parts are present, else just `\\server`.
        let mut seps = unc.match_indices('\\').map(|(i, _)| i);
        let server_end = seps.next().unwrap_or(unc.len());
        let share_end = seps.next().unwrap_or(unc.len());
        let split = if server_end > 0 && share_end > server_end + 1 {
            2 + share_end
        } else {
            2 + server_end
        };
        return (&path[..split], &path[split..]);
    }

    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        return (&path[..2], &path[2..]);
    }
    ("", path)
}

fn collapse<'a>(segments: impl Iterator<Item = &'a str>, rooted: bool) -> Vec<&'a str> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root is the root.
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    parts
}
