//! A segment trie URL router.
//!
//! Routes are `(method, pattern, handler)` triples. A search returns every
//! handler whose pattern matches the request, ordered by registration, so
//! that a dispatcher can chain them as middleware.
//!
//! Pattern segments:
//!
//! + `users`: literal text
//! + `:id`: any non-empty segment, bound as `id`
//! + `:id{[0-9]+}`: a segment (or the rest of the path) matching the regex
//! + `*`: any segments; as the last segment it also matches nothing
//!
//! ```
//! use nuclear_trie::Router;
//!
//! let mut router: Router<&str> = Router::new();
//! router.all("/*", "logger").insert("GET", "/users/:id", "show_user");
//!
//! let found = router.search("GET", "/users/42").unwrap();
//! assert_eq!(&*found.handlers, &[&"logger", &"show_user"]);
//! assert_eq!(found.params.get("id"), Some("42"));
//! ```

#![forbid(unsafe_code)]

mod macros;
mod router;
mod strmap;

#[cfg(feature = "http-router")]
mod http_router;

pub use crate::router::{Captures, Found, Router, RouterError, Scope, ALL_METHODS};

#[cfg(feature = "http-router")]
pub use crate::http_router::Method;
