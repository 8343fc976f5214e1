//! Path composition

/// Join a controller prefix and a route path into a full path
///
/// Every trailing `/` is removed from `prefix` and every leading `/` from
/// `path`. An empty prefix yields `/` followed by the path, an empty path
/// yields the prefix, anything else joins the two with a single `/`. Total:
/// `join_paths("", "")` is `/`.
pub fn join_paths(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if prefix.is_empty() {
        return format!("/{path}");
    }
    if path.is_empty() {
        return prefix.to_string();
    }
    format!("{prefix}/{path}")
}
