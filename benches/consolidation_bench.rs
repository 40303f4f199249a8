// ABOUTME: Criterion benchmarks for the consolidation engine and board hashing
// ABOUTME: Measures merge-on-insert, classification, and content-hash throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

//! Criterion benchmarks for the shopping-list consolidation engine and the
//! board content hash.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use remy_meal_server::board::hash::content_hash;
use remy_meal_server::board::{MealEntry, WeekBoard};
use remy_meal_server::models::{IngredientLine, MealSlot};
use remy_meal_server::shopping::{classify, normalize_name, NewShoppingItem, ShoppingList};
use uuid::Uuid;

const SAMPLE_NAMES: &[&str] = &[
    "2 large Roma tomatoes",
    "chicken breast",
    "frozen peas",
    "olive oil",
    "basmati rice",
    "cheddar cheese",
    "sourdough bread",
    "black pepper",
    "orange juice",
    "canned black beans",
];

fn batch(size: usize) -> Vec<NewShoppingItem> {
    (0..size)
        .map(|i| {
            let name = SAMPLE_NAMES[i % SAMPLE_NAMES.len()];
            NewShoppingItem::named(name, 1.0 + (i % 4) as f64, if i % 3 == 0 { "g" } else { "" })
        })
        .collect()
}

fn bench_merge_on_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("shopping_merge");
    for size in [10_usize, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let items = batch(size);
            b.iter(|| {
                let mut list = ShoppingList::new();
                for item in items.clone() {
                    list.add(item);
                }
                black_box(list.len())
            });
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_normalized_names", |b| {
        let names: Vec<String> = SAMPLE_NAMES.iter().map(|n| normalize_name(n)).collect();
        b.iter(|| {
            for name in &names {
                black_box(classify(name));
            }
        });
    });
}

fn bench_content_hash(c: &mut Criterion) {
    let mut board = WeekBoard::new(
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    );
    for (i, date) in board.week_dates().into_iter().enumerate() {
        let mut meal = MealEntry::titled(format!("Meal {i}"));
        meal.ingredients = SAMPLE_NAMES
            .iter()
            .map(|n| IngredientLine::new(*n, 1.0, "g"))
            .collect();
        board.apply_entry(date, MealSlot::Dinner, meal).unwrap();
    }

    c.bench_function("board_content_hash", |b| {
        b.iter(|| black_box(content_hash(&board).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_merge_on_insert,
    bench_classify,
    bench_content_hash
);
criterion_main!(benches);
