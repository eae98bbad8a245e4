mod cache;
mod captures;
mod error;
mod imp;
mod insert;
mod path;
mod pattern;
mod search;

pub use self::captures::Captures;
pub use self::error::RouterError;
pub use self::imp::{Found, Scope};

use self::pattern::Pattern;
use crate::strmap::StrMap;

use std::sync::Arc;

use dashmap::DashMap;

/// The method key that matches any request method.
pub const ALL_METHODS: &str = "ALL";

/// A segment trie mapping `(method, path)` to every matching handler.
#[derive(Debug)]
pub struct Router<T> {
    root: Node<T>,
    routes: usize,
}

#[derive(Debug)]
struct Node<T> {
    children: StrMap<Node<T>>,
    /// Non-literal edges out of this node, in insertion order.
    patterns: Vec<Pattern>,
    /// One map per route ending here, in insertion order, pointing into
    /// `handlers`.
    methods: Vec<StrMap<usize>>,
    handlers: Vec<HandlerSet<T>>,
    order: usize,
    name: Box<str>,
    /// `method -> [plain, wildcard]` indices into `handlers`.
    cache: DashMap<Box<str>, [Option<Arc<[usize]>>; 2]>,
}

#[derive(Debug)]
struct HandlerSet<T> {
    handler: T,
    score: usize,
    name: Box<str>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            children: StrMap::new(),
            patterns: Vec::new(),
            methods: Vec::new(),
            handlers: Vec::new(),
            order: 0,
            name: "".into(),
            cache: DashMap::new(),
        }
    }
}
