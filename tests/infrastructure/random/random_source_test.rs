use cisec_nexus::application::ports::RandomSource;
use cisec_nexus::infrastructure::random::{SeededRandomSource, ThreadRngSource};

#[test]
fn given_thread_rng_when_drawing_then_stays_in_range() {
    let source = ThreadRngSource;
    for _ in 0..500 {
        assert!(source.next_index(6) < 6);
    }
}

#[test]
fn given_single_slot_when_drawing_then_always_zero() {
    assert_eq!(ThreadRngSource.next_index(1), 0);
    assert_eq!(SeededRandomSource::new(9).next_index(1), 0);
}

#[test]
fn given_same_seed_when_drawing_then_sequences_match() {
    let a = SeededRandomSource::new(2024);
    let b = SeededRandomSource::new(2024);

    let first: Vec<usize> = (0..50).map(|_| a.next_index(6)).collect();
    let second: Vec<usize> = (0..50).map(|_| b.next_index(6)).collect();

    assert_eq!(first, second);
}

#[test]
fn given_many_draws_when_seeded_then_every_slot_is_reachable() {
    let source = SeededRandomSource::new(11);
    let mut seen = [false; 6];

    for _ in 0..1000 {
        seen[source.next_index(6)] = true;
    }

    assert!(seen.iter().all(|s| *s));
}
