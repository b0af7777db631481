use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_optimal::{Evaluator, FeedbackPattern, FeedbackTable, Rules, Solver, Vocabulary, Word, INFEASIBLE};

const SOLUTIONS: &[&str] = &[
    "baker", "boxer", "cater", "cower", "eater", "hater", "later", "mower", "paper", "racer", "saner", "taker",
    "water", "wager", "maker", "lower", "power", "tower", "rower", "sower", "joker", "poker", "caper", "taper",
    "gazer",
];
const EXTRA: &[&str] = &["crane", "slate", "mopey", "twerp", "chomp"];

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|text| text.parse().unwrap()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let vocabulary = Vocabulary::new(words(SOLUTIONS), words(EXTRA));

    c.bench_function("feedback", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for guess in vocabulary.words() {
                for secret in vocabulary.words() {
                    total += FeedbackPattern::calculate(black_box(guess), black_box(secret)).0 as u32;
                }
            }
            total
        })
    });

    c.bench_function("build_table", |b| {
        b.iter(|| FeedbackTable::build(black_box(&vocabulary), Rules::Standard).unwrap())
    });

    let table = FeedbackTable::build(&vocabulary, Rules::Standard).unwrap();
    let solver = Solver::new(&table);
    let candidates = table.solutions();

    c.bench_function("solve_cost", |b| {
        b.iter(|| solver.solve_cost(black_box(&candidates), table.guess_order(), INFEASIBLE, 0))
    });

    let evaluator = Evaluator::new(solver);
    c.bench_function("eval_cater", |b| b.iter(|| evaluator.eval(black_box("cater")).unwrap()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
