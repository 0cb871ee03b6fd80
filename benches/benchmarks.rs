criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_seven_cards,
        classifying_holdem_cards,
        enumerating_river_boards,
        exhausting_flop_histogram,
        sampling_preflop_histogram,
}

fn seven() -> Vec<Card> {
    let mut rng = SmallRng::seed_from_u64(0);
    Vec::from(Deck::new().deal(7, &mut rng).unwrap())
}

fn classifying_seven_cards(c: &mut criterion::Criterion) {
    let cards = seven();
    c.bench_function("classify a 7-card Hand", |b| {
        b.iter(|| Evaluator::classify(&cards))
    });
}

fn classifying_holdem_cards(c: &mut criterion::Criterion) {
    let cards = seven();
    c.bench_function("classify 2 hole + 5 board cards", |b| {
        b.iter(|| Evaluator::holdem(&cards[..2], &cards[2..]))
    });
}

fn enumerating_river_boards(c: &mut criterion::Criterion) {
    let pool = Hand::from(Deck::without(&Card::parse("As Kd").unwrap()).unwrap());
    c.bench_function("enumerate all 5-card boards of 50 cards", |b| {
        b.iter(|| Boards::from((5, pool)).count())
    });
}

fn exhausting_flop_histogram(c: &mut criterion::Criterion) {
    let equity = Equity::deal(
        &Card::parse("Ah Kh").unwrap(),
        &Card::parse("Qh Jh 2c").unwrap(),
    )
    .unwrap();
    c.bench_function("exhaust Flop histogram", |b| {
        b.iter(|| equity.histogram(Mode::Exhaustive))
    });
}

fn sampling_preflop_histogram(c: &mut criterion::Criterion) {
    let equity = Equity::deal(&Card::parse("As Kd").unwrap(), &[])
        .unwrap()
        .seeded(0);
    c.bench_function("sample 10k Preflop boards", |b| {
        b.iter(|| equity.histogram(Mode::Sampled(10_000)))
    });
}

use holdem::cards::*;
use holdem::equity::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
