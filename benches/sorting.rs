//! Sorting throughput over a catalog-sized card list.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use deck_core::cards::{
    Card, CardType, CardTypeCategory, MemoryCardDatabase, Passcode, ReleaseInfo,
};
use deck_core::sorting::{SortingOptions, SortingService, SortingStrategy};

const SUB_TYPES: [&str; 4] = ["Normal Spell", "Field Spell", "Equip Spell", "Quick-Play Spell"];

/// Deterministic synthetic catalog; a few thousand cards matches the
/// in-browser card list the tool works with.
fn synthetic_cards(count: u32) -> Vec<Card> {
    (0..count)
        .map(|i| {
            // Cheap LCG so stats are scattered but reproducible.
            let seed = i.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let monster = seed % 3 != 0;
            let card_type = if monster {
                CardType::new("Normal Monster", CardTypeCategory::Monster, 1)
            } else {
                CardType::new("Spell Card", CardTypeCategory::Spell, 2)
            };
            let passcode = Passcode::parse(&format!("{i:08}")).unwrap();
            Card::new(passcode, format!("Card {}", seed % 1000), card_type)
                .with_stats(
                    Some((seed % 4000) as i32),
                    Some((seed % 3000) as i32),
                    Some((seed % 12) as i32),
                )
                .with_sub_type(SUB_TYPES[(seed % 4) as usize])
                .with_views(u64::from(seed % 100_000))
                .with_release(ReleaseInfo::new(Some(i64::from(seed % 1_000_000)), None))
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut database = MemoryCardDatabase::new();
    database.register_sub_types(CardTypeCategory::Spell, SUB_TYPES.map(String::from));

    let cards = synthetic_cards(5000);
    let service = SortingService::new(&database);

    for strategy in [SortingStrategy::Default, SortingStrategy::Name, SortingStrategy::Atk] {
        c.bench_function(&format!("sort_5000_{strategy:?}"), |b| {
            b.iter_batched(
                || cards.clone(),
                |cards| service.sort(cards, &SortingOptions::new(strategy)),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
