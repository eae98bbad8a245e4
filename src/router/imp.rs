use super::cache::HandlerSets;
use super::captures::Captures;
use super::error::RouterError;
use super::path::join_path;
use super::{Node, Router, ALL_METHODS};

use std::borrow::Cow;

use smallvec::SmallVec;

/// The result of a successful search.
#[derive(Debug)]
pub struct Found<'a, T> {
    /// Matching handlers, earliest registered first.
    pub handlers: SmallVec<[&'a T; 4]>,
    /// `"METHOD PATH"` of the route behind each handler.
    pub routes: SmallVec<[&'a str; 4]>,
    pub params: Captures<'a>,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            routes: 0,
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    pub fn search<'a>(&'a self, method: &str, path: &'a str) -> Option<Found<'a, T>> {
        let method = upper_case(method);

        let mut sets: HandlerSets<'a, T> = SmallVec::new();
        let mut params = Captures::new();
        self.root.search(&method, path, &mut sets, &mut params);

        if sets.is_empty() {
            tracing::trace!(method = %method, path, "no route matched");
            return None;
        }
        if sets.len() > 1 {
            sets.sort_by_key(|s| s.score);
        }

        Some(Found {
            handlers: sets.iter().map(|&s| &s.handler).collect(),
            routes: sets.iter().map(|&s| &*s.name).collect(),
            params,
        })
    }

    pub fn insert(&mut self, method: &str, path: &str, handler: T) -> &mut Self {
        if let Err(e) = self.insert_route(method, path, handler) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_insert(
        &mut self,
        method: &str,
        path: &str,
        handler: T,
    ) -> Result<&mut Self, RouterError> {
        self.insert_route(method, path, handler)?;
        Ok(self)
    }

    /// Registers `handler` for every method.
    pub fn all(&mut self, path: &str, handler: T) -> &mut Self {
        self.insert(ALL_METHODS, path, handler)
    }

    pub fn nest(&mut self, prefix: &str, f: impl FnOnce(&mut Scope<T>)) -> &mut Self {
        if let Err(e) = self.try_nest(prefix, f) {
            panic!("{}: prefix = {:?}", e, prefix);
        }
        self
    }

    /// Registers the routes declared on a [`Scope`] under `prefix`, in
    /// declaration order. Stops at the first rejected route.
    pub fn try_nest(
        &mut self,
        prefix: &str,
        f: impl FnOnce(&mut Scope<T>),
    ) -> Result<&mut Self, RouterError> {
        let mut scope = Scope::new();
        f(&mut scope);
        for (method, path, handler) in scope.routes {
            self.insert_route(&method, &join_path(prefix, &path), handler)?;
        }
        Ok(self)
    }
}

impl<T> Router<T> {
    fn insert_route(&mut self, method: &str, path: &str, handler: T) -> Result<(), RouterError> {
        let method = upper_case(method);
        match self.root.insert(&method, path, handler) {
            Ok(node) => {
                tracing::debug!(route = %node.name, through = node.order, "route registered");
                self.routes += 1;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(method = %method, path, error = %e, "route rejected");
                Err(e)
            }
        }
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes declared inside [`Router::nest`], relative to the mount prefix.
#[derive(Debug)]
pub struct Scope<T> {
    routes: Vec<(Box<str>, String, T)>,
}

impl<T> Scope<T> {
    fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn insert(&mut self, method: &str, path: &str, handler: T) -> &mut Self {
        self.routes.push((method.into(), path.to_owned(), handler));
        self
    }

    pub fn all(&mut self, path: &str, handler: T) -> &mut Self {
        self.insert(ALL_METHODS, path, handler)
    }

    pub fn nest(&mut self, prefix: &str, f: impl FnOnce(&mut Scope<T>)) -> &mut Self {
        let mut scope = Scope::new();
        f(&mut scope);
        self.routes.extend(
            scope
                .routes
                .into_iter()
                .map(|(m, p, h)| (m, join_path(prefix, &p), h)),
        );
        self
    }
}

fn upper_case(method: &str) -> Cow<'_, str> {
    if method.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(method.to_ascii_uppercase())
    } else {
        Cow::Borrowed(method)
    }
}
