use super::error::RouterError;
use super::path::split_routing_path;
use super::pattern::{Param, Pattern};
use super::{HandlerSet, Node};

use crate::strmap::StrMap;

use smallvec::SmallVec;

/// A parameter already bound on the path being inserted.
struct Seen {
    name: Box<str>,
    route: Box<str>,
}

impl<T> Node<T> {
    /// Registers `handler` for `method` at `path` below this node and returns
    /// the terminal node. `method` must already be upper-cased.
    ///
    /// Every segment is validated before the trie is touched, so a rejected
    /// route leaves no trace.
    pub(super) fn insert(
        &mut self,
        method: &str,
        path: &str,
        handler: T,
    ) -> Result<&mut Node<T>, RouterError> {
        let route: Box<str> = format!("{} {}", method, path).into();
        let parts = split_routing_path(path);
        let edges = self.compile_route(&parts, &route)?;

        self.order += 1;
        self.name = route.clone();
        let score = self.order;

        let mut cur: &mut Node<T> = self;
        for (&part, edge) in parts.iter().zip(edges) {
            if let Some(pattern) = edge {
                cur.patterns.push(pattern);
            }
            cur = cur.children.get_or_insert_with(part, Node::new);
            cur.order += 1;
            cur.name = route.clone();
        }

        let slot = cur.handlers.len();
        cur.handlers.push(HandlerSet {
            handler,
            score,
            name: route,
        });
        let mut m = StrMap::new();
        m.get_or_insert_with(method, || slot);
        cur.methods.push(m);

        Ok(cur)
    }

    /// Compiles the segments of a route without mutating the trie.
    ///
    /// Returns, per segment, the pattern to attach to its parent node, or
    /// `None` when the segment reuses an existing child or is a literal.
    fn compile_route(
        &self,
        parts: &[&str],
        route: &str,
    ) -> Result<SmallVec<[Option<Pattern>; 8]>, RouterError> {
        let mut seen: SmallVec<[Seen; 8]> = SmallVec::new();
        let mut edges: SmallVec<[Option<Pattern>; 8]> = SmallVec::with_capacity(parts.len());

        // The deepest existing node on the route, until the route leaves the trie.
        let mut cur: Option<&Node<T>> = Some(self);

        for &part in parts {
            let reused = cur.and_then(|n| n.children.get(part).map(|child| (n, child)));
            if let Some((parent, child)) = reused {
                // only the edge this route crosses binds a name on its path
                let crossed = parent
                    .patterns
                    .iter()
                    .filter_map(Pattern::as_param)
                    .find(|p| &*p.key == part);
                seen.extend(crossed.map(Seen::of));
                edges.push(None);
                cur = Some(child);
                continue;
            }

            let pattern = Pattern::compile(part, route)?;
            if let Pattern::Param(ref param) = pattern {
                let existing = match seen.iter().find(|s| s.name == param.name) {
                    Some(s) => Some(&*s.route),
                    None => cur.and_then(|n| {
                        n.children
                            .values()
                            .find_map(|sibling| sibling.find_param(&param.name))
                            .map(|p| &*p.route)
                    }),
                };
                if let Some(existing) = existing {
                    return Err(RouterError::DuplicateParam {
                        name: param.name.clone(),
                        route: route.into(),
                        existing: existing.into(),
                    });
                }
                seen.push(Seen::of(param));
            }

            edges.push(match pattern {
                Pattern::Literal => None,
                p => Some(p),
            });
            cur = None;
        }

        Ok(edges)
    }

    /// Searches this subtree for a parameter called `name`.
    fn find_param(&self, name: &str) -> Option<&Param> {
        self.patterns
            .iter()
            .filter_map(Pattern::as_param)
            .find(|p| &*p.name == name)
            .or_else(|| self.children.values().find_map(|c| c.find_param(name)))
    }
}

impl Seen {
    fn of(param: &Param) -> Self {
        Self {
            name: param.name.clone(),
            route: param.route.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Node;
    use crate::RouterError;

    #[test]
    fn shared_prefix_reuses_nodes() {
        let mut root: Node<u32> = Node::new();
        root.insert("GET", "/users/:id", 1).unwrap();
        root.insert("GET", "/users/:id/posts", 2).unwrap();
        root.insert("POST", "/users/:id", 3).unwrap();

        let users = root.children.get("users").unwrap();
        assert_eq!(users.patterns.len(), 1);
        let id = users.children.get(":id").unwrap();
        assert_eq!(id.methods.len(), 2);
        assert_eq!(id.order, 3);
        assert_eq!(&*id.name, "POST /users/:id");
        assert_eq!(root.order, 3);
    }

    #[test]
    fn scores_follow_global_insertion_order() {
        let mut root: Node<u32> = Node::new();
        root.insert("GET", "/a", 1).unwrap();
        root.insert("GET", "/b", 2).unwrap();
        let node = root.insert("GET", "/a", 3).unwrap();

        let scores: Vec<usize> = node
            .methods
            .iter()
            .filter_map(|m| m.get("GET"))
            .map(|&i| node.handlers[i].score)
            .collect();
        assert_eq!(scores, [1, 3]);
    }

    #[test]
    fn rejected_route_leaves_trie_untouched() {
        let mut root: Node<u32> = Node::new();
        let err = root.insert("GET", "/a/:x/:x", 1).unwrap_err();
        assert_eq!(err.param_name(), Some("x"));
        assert!(root.children.get("a").is_none());
        assert_eq!(root.order, 0);

        let err = root.insert("GET", "/a/:id{(}", 1).unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));
        assert!(root.children.get("a").is_none());
    }

    #[test]
    fn duplicate_name_in_sibling_subtree() {
        let mut root: Node<u32> = Node::new();
        root.insert("GET", "/a/:x/b/:y", 1).unwrap();

        match root.insert("GET", "/a/:y", 2).unwrap_err() {
            RouterError::DuplicateParam {
                name,
                route,
                existing,
            } => {
                assert_eq!(&*name, "y");
                assert_eq!(&*route, "GET /a/:y");
                assert_eq!(&*existing, "GET /a/:x/b/:y");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn reused_param_edge_binds_its_name() {
        let mut root: Node<u32> = Node::new();
        root.insert("GET", "/a/:x", 1).unwrap();
        root.insert("GET", "/a/:y/b", 2).unwrap();

        let err = root.insert("GET", "/a/:x/:x", 3).unwrap_err();
        assert_eq!(err.param_name(), Some("x"));

        // `:y` is a sibling alternative, not on this path
        root.insert("GET", "/a/:x/c/:z", 4).unwrap();
        root.insert("GET", "/a/:x/:w", 5).unwrap();
    }
}
