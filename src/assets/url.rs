//! `db://` style asset URL helpers.
//!
//! URLs always use `/` separators; `.` and empty segments are dropped.

/// Normalize a relative path fragment: unify separators and drop `.`/empty segments.
pub fn normalize_rel_path(source: &str) -> String {
    source
        .replace('\\', "/")
        .split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Join `rel` onto `base`, keeping the scheme of `base` (`db://assets` + `a/b` → `db://assets/a/b`).
pub fn join_url(base: &str, rel: &str) -> String {
    let rel = normalize_rel_path(rel);
    let base = base.trim_end_matches('/');
    match (base.is_empty(), rel.is_empty()) {
        (_, true) => base.to_owned(),
        (true, false) => rel,
        (false, false) => format!("{base}/{rel}"),
    }
}

/// Last segment of a URL.
pub fn basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Last segment without its extension.
pub fn basename_no_ext(url: &str) -> &str {
    let name = basename(url);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}

/// URL without its last segment.
pub fn dirname(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[..idx],
        None => "",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/url.rs"]
mod tests;
