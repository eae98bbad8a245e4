use super::error::RouterError;

use regex::Regex;

pub(super) const WILDCARD: &str = "*";

const COLON: char = ':';
const OPEN_BRACE: char = '{';
const CLOSE_BRACE: char = '}';

/// How a route segment is matched against request segments.
#[derive(Debug, Clone)]
pub(super) enum Pattern {
    /// Plain text, stored only as a child key.
    Literal,
    /// `*`: any one segment, and any remainder after it.
    Wildcard,
    /// `:name` or `:name{regex}`.
    Param(Param),
}

#[derive(Debug, Clone)]
pub(super) struct Param {
    /// The raw segment text, which is also the child key of this slot.
    pub key: Box<str>,
    pub name: Box<str>,
    pub matcher: Matcher,
    /// The route that introduced this parameter, for conflict reports.
    pub route: Box<str>,
}

#[derive(Debug, Clone)]
pub(super) enum Matcher {
    Any,
    /// Anchored at both ends.
    Regex(Regex),
}

impl Pattern {
    pub(super) fn compile(segment: &str, route: &str) -> Result<Self, RouterError> {
        if segment == WILDCARD {
            return Ok(Pattern::Wildcard);
        }

        let body = match segment.strip_prefix(COLON) {
            Some(b) => b,
            None => return Ok(Pattern::Literal),
        };

        let (name, constraint) = match body.find(OPEN_BRACE) {
            None => (body, None),
            Some(i) => match body[i + 1..].strip_suffix(CLOSE_BRACE) {
                Some(re) if !re.is_empty() => (&body[..i], Some(re)),
                _ => return Ok(Pattern::Literal),
            },
        };

        if name.is_empty() || name.contains(|c| c == OPEN_BRACE || c == CLOSE_BRACE) {
            return Ok(Pattern::Literal);
        }

        let matcher = match constraint {
            None => Matcher::Any,
            Some(re) => match Regex::new(&format!("^(?:{})$", re)) {
                Ok(r) => Matcher::Regex(r),
                Err(source) => {
                    return Err(RouterError::InvalidPattern {
                        segment: segment.into(),
                        source,
                    })
                }
            },
        };

        Ok(Pattern::Param(Param {
            key: segment.into(),
            name: name.into(),
            matcher,
            route: route.into(),
        }))
    }

    pub(super) fn as_param(&self) -> Option<&Param> {
        match self {
            Pattern::Param(p) => Some(p),
            Pattern::Literal | Pattern::Wildcard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Matcher, Pattern};
    use crate::RouterError;

    fn param(segment: &str) -> (String, Option<String>) {
        match Pattern::compile(segment, "GET /").unwrap() {
            Pattern::Param(p) => {
                assert_eq!(&*p.key, segment);
                let re = match p.matcher {
                    Matcher::Any => None,
                    Matcher::Regex(r) => Some(r.as_str().to_owned()),
                };
                (p.name.into(), re)
            }
            other => panic!("not a param: {:?}", other),
        }
    }

    #[test]
    fn classify() {
        assert!(matches!(
            Pattern::compile("*", "GET /*").unwrap(),
            Pattern::Wildcard
        ));
        for lit in &["users", "", ":", "**", "a:b", ":{x}", ":id{}", ":id{x", ":i}d"] {
            assert!(
                matches!(Pattern::compile(lit, "GET /").unwrap(), Pattern::Literal),
                "{:?}",
                lit
            );
        }

        assert_eq!(param(":id"), ("id".into(), None));
        assert_eq!(
            param(":id{[0-9]+}"),
            ("id".into(), Some("^(?:[0-9]+)$".into()))
        );
        assert_eq!(
            param(":file{.+/.+\\.js}"),
            ("file".into(), Some("^(?:.+/.+\\.js)$".into()))
        );
    }

    #[test]
    fn anchored_regex() {
        let p = match Pattern::compile(":id{[0-9]+}", "GET /").unwrap() {
            Pattern::Param(p) => p,
            _ => unreachable!(),
        };
        match p.matcher {
            Matcher::Regex(re) => {
                assert!(re.is_match("42"));
                assert!(!re.is_match("42a"));
                assert!(!re.is_match("a42"));
            }
            Matcher::Any => panic!("expected regex"),
        }
    }

    #[test]
    fn invalid_regex_fails_fast() {
        let err = Pattern::compile(":id{[0-9}", "GET /a/:id{[0-9}").unwrap_err();
        match err {
            RouterError::InvalidPattern { ref segment, .. } => assert_eq!(&**segment, ":id{[0-9}"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
