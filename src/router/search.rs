use super::cache::HandlerSets;
use super::captures::Captures;
use super::path::{remainder, split_path};
use super::pattern::{Matcher, Pattern, WILDCARD};
use super::Node;

use smallvec::SmallVec;

type Frontier<'a, T> = SmallVec<[&'a Node<T>; 4]>;

impl<T> Node<T> {
    /// Walks the trie breadth-first, one request segment at a time,
    /// collecting every handler set that serves `method` along the way.
    ///
    /// Handler sets come back in trie order; the caller ranks them.
    pub(super) fn search<'a>(
        &'a self,
        method: &str,
        path: &'a str,
        sets: &mut HandlerSets<'a, T>,
        params: &mut Captures<'a>,
    ) {
        let parts = split_path(path);
        let last = parts.len().wrapping_sub(1);

        let mut current: Frontier<'a, T> = SmallVec::new();
        current.push(self);

        for (i, &part) in parts.iter().enumerate() {
            let is_last = i == last;
            let mut next: Frontier<'a, T> = SmallVec::new();

            for &node in current.iter() {
                let mut matched = false;

                if let Some(child) = node.children.get(part) {
                    if is_last {
                        // "/hello/*" also matches "/hello"
                        if let Some(star) = child.children.get(WILDCARD) {
                            star.collect_handlers(method, true, sets);
                        }
                        child.collect_handlers(method, false, sets);
                        matched = true;
                    } else {
                        push_unique(&mut next, child);
                    }
                }

                for pattern in node.patterns.iter() {
                    let param = match pattern {
                        Pattern::Wildcard => {
                            if let Some(star) = node.children.get(WILDCARD) {
                                star.collect_handlers(method, false, sets);
                                push_unique(&mut next, star);
                            }
                            continue;
                        }
                        Pattern::Param(p) => p,
                        Pattern::Literal => continue,
                    };

                    if part.is_empty() {
                        continue;
                    }

                    let child = match node.children.get(&param.key) {
                        Some(c) => c,
                        None => continue,
                    };

                    if let Matcher::Regex(ref re) = param.matcher {
                        // "/js/:file{.+\.js}" matches "/js/chunk/123.js"
                        let rest = remainder(path, part);
                        if re.is_match(rest) {
                            child.collect_handlers(method, false, sets);
                            params.insert(&param.name, rest);
                            continue;
                        }
                        if !re.is_match(part) {
                            continue;
                        }
                    }

                    if is_last {
                        child.collect_handlers(method, false, sets);
                        if let Some(star) = child.children.get(WILDCARD) {
                            star.collect_handlers(method, false, sets);
                        }
                    } else {
                        push_unique(&mut next, child);
                    }

                    // "/book/a" and "/book/:slug" side by side:
                    // GET /book/a leaves `slug` unbound, GET /book/b binds it.
                    let bind = !matched
                        || node
                            .children
                            .get(part)
                            .map_or(false, |lit| lit.children.contains_key(part));
                    if bind {
                        params.insert(&param.name, part);
                    }
                }
            }

            current = next;
        }
    }
}

#[inline]
fn push_unique<'a, T>(frontier: &mut Frontier<'a, T>, node: &'a Node<T>) {
    if !frontier.iter().any(|&n| std::ptr::eq(n, node)) {
        frontier.push(node);
    }
}
