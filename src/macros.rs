/// Builds a [`Router`](crate::Router) from a route table.
///
/// ```
/// use nuclear_trie::router;
///
/// let router = router! {
///     ALL "/*" => 0,
///     GET "/u/:uid" => 1,
///     @ "/v1" => {
///         POST "/info" => 2,
///     },
/// };
///
/// let found = router.search("POST", "/v1/info").unwrap();
/// assert_eq!(&*found.handlers, &[&0, &2]);
/// ```
#[macro_export]
macro_rules! router {
    (@entries $r:ident;) => {};

    (@entries $r:ident; @ $prefix:literal => { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $r.nest($prefix, |__scope| {
            $crate::router!(@entries __scope; $($inner)*);
        });
        $crate::router!(@entries $r; $($($rest)*)?);
    };

    (@entries $r:ident; $method:ident $pattern:literal => $data:expr $(, $($rest:tt)*)?) => {
        $r.insert(stringify!($method), $pattern, $data);
        $crate::router!(@entries $r; $($($rest)*)?);
    };

    ($($body:tt)*) => {{
        let mut __router = $crate::Router::new();
        $crate::router!(@entries __router; $($body)*);
        __router
    }};
}
