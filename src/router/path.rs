use smallvec::SmallVec;

const SLASH: char = '/';

pub(super) type Parts<'a> = SmallVec<[&'a str; 8]>;

/// Splits a request path. Only the empty segment before a leading slash is
/// dropped, so `"/a/"` yields `["a", ""]`.
pub(super) fn split_path(path: &str) -> Parts<'_> {
    let mut parts: Parts<'_> = path.split(SLASH).collect();
    if parts.first() == Some(&"") {
        parts.remove(0);
    }
    parts
}

/// Splits a route definition like [`split_path`], except that slashes inside
/// a `{...}` regex group belong to the segment.
pub(super) fn split_routing_path(path: &str) -> Parts<'_> {
    let mut parts: Parts<'_> = SmallVec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, c) in path.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            SLASH if depth == 0 => {
                parts.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&path[start..]);
    if parts.first() == Some(&"") {
        parts.remove(0);
    }
    parts
}

/// The rest of `path` starting at `part`, which must be a subslice of it.
#[inline]
pub(super) fn remainder<'a>(path: &'a str, part: &'a str) -> &'a str {
    &path[calc_offset(path, part)..]
}

#[inline(always)]
fn calc_offset(src: &str, dst: &str) -> usize {
    let p2 = dst.as_ptr() as usize;
    let p1 = src.as_ptr() as usize;
    p2 - p1
}

/// Joins a mount prefix and a route path.
pub(super) fn join_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches(SLASH);
    let path = path.trim_start_matches(SLASH);
    let mut joined = String::with_capacity(prefix.len() + path.len() + 2);
    if !prefix.is_empty() {
        if !prefix.starts_with(SLASH) {
            joined.push(SLASH);
        }
        joined.push_str(prefix);
    }
    if !path.is_empty() {
        joined.push(SLASH);
        joined.push_str(path);
    }
    if joined.is_empty() {
        joined.push(SLASH);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_split() {
        assert_eq!(&*split_path("/users/42"), &["users", "42"]);
        assert_eq!(&*split_path("/users/"), &["users", ""]);
        assert_eq!(&*split_path("/"), &[""]);
        assert_eq!(&*split_path("users"), &["users"]);
        assert_eq!(&*split_path("//a"), &["", "a"]);
        assert!(split_path("").is_empty());
    }

    #[test]
    fn routing_split_keeps_regex_groups() {
        assert_eq!(
            &*split_routing_path("/js/:file{[a-z]+/.+\\.js}"),
            &["js", ":file{[a-z]+/.+\\.js}"]
        );
        assert_eq!(
            &*split_routing_path("/a/:id{[0-9]{1,3}}/b"),
            &["a", ":id{[0-9]{1,3}}", "b"]
        );
        assert_eq!(&*split_routing_path("/static/*"), &["static", "*"]);
        assert_eq!(&*split_routing_path("/"), &[""]);
    }

    #[test]
    fn remainder_of_path() {
        let path = "/js/chunk/123.js";
        let parts = split_path(path);
        assert_eq!(remainder(path, parts[1]), "chunk/123.js");
        assert_eq!(remainder(path, parts[2]), "123.js");
    }

    #[test]
    fn join() {
        assert_eq!(join_path("/api", "/users"), "/api/users");
        assert_eq!(join_path("/api/", "users"), "/api/users");
        assert_eq!(join_path("api", "/"), "/api");
        assert_eq!(join_path("/", "/users"), "/users");
        assert_eq!(join_path("", ""), "/");
    }
}
