/// Configuration errors raised while registering a route.
///
/// A route table that produces one of these is broken; the router never
/// raises errors while searching.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("duplicate param name, use another name instead of {name:?}: {route:?} conflicts with {existing:?}")]
    DuplicateParam {
        name: Box<str>,
        route: Box<str>,
        existing: Box<str>,
    },

    #[error("invalid regex constraint in segment {segment:?}: {source}")]
    InvalidPattern {
        segment: Box<str>,
        #[source]
        source: regex::Error,
    },
}

impl RouterError {
    /// The parameter name involved in a duplicate-name conflict.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::DuplicateParam { name, .. } => Some(name),
            Self::InvalidPattern { .. } => None,
        }
    }
}
