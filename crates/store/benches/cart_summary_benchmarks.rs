use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_cart::{AddItem, Cart, CartCommand};
use storefront_core::{CartId, Money, Sku};
use storefront_events::execute;
use storefront_store::CartStore;

fn filled_cart(lines: usize) -> Cart {
    let mut cart = Cart::empty(CartId::new());
    // Insert in descending sku order so sorting has real work to do.
    for n in (0..lines).rev() {
        let cmd = CartCommand::Add(AddItem {
            sku: Sku::new(format!("item{:04}", n % 10_000)).unwrap(),
            name: format!("Product {n}"),
            price: Money::from_cents(100 + n as u64),
        });
        execute(&mut cart, &cmd).unwrap();
    }
    cart
}

/// Deriving totals + sorted lines straight from the aggregate.
fn bench_summary_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_recompute");

    for lines in [10usize, 100, 1_000, 5_000] {
        let cart = filled_cart(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &cart, |b, cart| {
            b.iter(|| black_box(cart.summary()));
        });
    }

    group.finish();
}

/// Repeated reads through the store's version-keyed memo.
fn bench_summary_memoized(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_memoized");

    for lines in [10usize, 100, 1_000, 5_000] {
        let store = CartStore::in_memory(filled_cart(lines));
        store.summary().unwrap();

        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &store, |b, store| {
            b.iter(|| black_box(store.summary().unwrap()));
        });
    }

    group.finish();
}

/// Dispatch + publish + read, the per-click cost seen by a view.
fn bench_dispatch_then_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_then_read");

    for lines in [10usize, 1_000] {
        let store = CartStore::in_memory(filled_cart(lines));
        let sku = Sku::new("item0000").unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(lines), &store, |b, store| {
            b.iter(|| {
                store
                    .dispatch(CartCommand::Add(AddItem {
                        sku: sku.clone(),
                        name: "Product 0".to_string(),
                        price: Money::from_cents(100),
                    }))
                    .unwrap();
                black_box(store.summary().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_summary_recompute,
    bench_summary_memoized,
    bench_dispatch_then_read
);
criterion_main!(benches);
