use crate::router::{Found, Router, Scope};

pub use http::Method;

impl<T> Router<T> {
    pub fn route(&mut self, method: Method, path: &str, handler: T) -> &mut Self {
        self.insert(method.as_str(), path, handler)
    }

    pub fn find<'a>(&'a self, method: &Method, path: &'a str) -> Option<Found<'a, T>> {
        self.search(method.as_str(), path)
    }
}

impl<T> Scope<T> {
    pub fn route(&mut self, method: Method, path: &str, handler: T) -> &mut Self {
        self.insert(method.as_str(), path, handler)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, path: &str, handler: T) -> &mut Self {
            self.route(Method::$method, path, handler)
        }
    };
}

impl<T> Router<T> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}

impl<T> Scope<T> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
