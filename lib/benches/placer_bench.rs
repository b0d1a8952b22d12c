#![feature(test)]

extern crate test;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_search::*;

use test::Bencher;

const WORDS: [&str; 12] = [
    "ALGORITHM", "BACKTRACK", "DIAGONAL", "RETRY", "GRID", "PUZZLE", "LETTER", "RANDOM",
    "PLACEMENT", "BOUNDS", "SEARCH", "WORD",
];

#[bench]
fn bench_place_words_default_grid(b: &mut Bencher) {
    let placer = Placer::default();
    let mut rng = StdRng::seed_from_u64(0);

    b.iter(|| placer.place_words(&WORDS, &mut rng))
}

#[bench]
fn bench_place_words_tight_grid(b: &mut Bencher) {
    let placer = Placer::new(PlacerConfig::default().with_size(10, 10));
    let mut rng = StdRng::seed_from_u64(0);

    b.iter(|| placer.place_words(&WORDS, &mut rng))
}

#[bench]
fn bench_place_words_parallel_tight_grid(b: &mut Bencher) {
    let placer = Placer::new(PlacerConfig::default().with_size(10, 10));
    let mut seed = 0;

    b.iter(|| {
        seed += 1;
        placer.place_words_parallel(&WORDS, seed)
    })
}
