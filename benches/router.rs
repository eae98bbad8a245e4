use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nuclear_trie::Router;

fn build() -> Router<usize> {
    let mut router: Router<usize> = Router::new();
    router
        .all("/*", 0)
        .insert("GET", "/hello/:name", 1)
        .insert("GET", "/users/:id{[0-9]+}/posts/:post", 2)
        .insert("GET", "/static/*", 3)
        .insert("POST", "/users", 4);
    router
}

fn router_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-search");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("GET", "/hello/:name", 1);
        b.iter_with_large_drop(|| router.search("GET", "/hello/world"))
    });

    group.bench_function("middleware-chain", |b| {
        let router = build();
        b.iter_with_large_drop(|| router.search("GET", "/users/42/posts/hello"))
    });

    group.bench_function("miss", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("GET", "/hello/:name", 1);
        b.iter_with_large_drop(|| router.search("GET", "/nothing/here"))
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.insert("GET", "/hello/:name", 1);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("route-table", |b| b.iter(build));
}

criterion_group!(benches, router_search, router_insert);
criterion_main!(benches);
