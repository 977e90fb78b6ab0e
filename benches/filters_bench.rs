use criterion::{black_box, criterion_group, criterion_main, Criterion};
use partyprefs::catalog::{CardSet, CardSetCatalog};
use partyprefs::notifications::UnsupportedBackend;
use partyprefs::prefs::view::{FormState, SettingsView};
use partyprefs::prefs::{FilterPartition, PreferencesManager};
use partyprefs::store::memory::MemoryCookieStore;
use partyprefs::store::CookieStore;

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_reconcile");

    // A catalog far larger than any real deployment sees.
    let mut catalog = CardSetCatalog::new();
    for i in 0..1000 {
        catalog.insert(CardSet::new(i, format!("Card Set {i}"), i));
    }

    let banned: Vec<String> = (0..1000).step_by(3).map(|i| i.to_string()).collect();
    let required: Vec<String> = (1..1000).step_by(3).map(|i| i.to_string()).collect();

    let mut prefs = PreferencesManager::new(
        MemoryCookieStore::new(),
        FormState::new(),
        UnsupportedBackend,
    );
    prefs.store_mut().set("cardsets_banned", &banned.join(","));
    prefs
        .store_mut()
        .set("cardsets_required", &required.join(","));

    group.bench_function("reconcile_1000_card_sets", |b| {
        b.iter(|| {
            prefs.update_card_set_filters(black_box(&catalog));
        });
    });

    group.bench_function("transfer_one_of_1000", |b| {
        b.iter(|| {
            prefs.update_card_set_filters(&catalog);
            prefs.view_mut().select(FilterPartition::Neutral, 500);
            prefs.transfer_card_sets(
                black_box(&catalog),
                FilterPartition::Neutral,
                FilterPartition::Banned,
            );
            black_box(prefs.view().partition_rows(FilterPartition::Banned).len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
