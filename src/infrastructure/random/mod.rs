mod seeded_random_source;
mod thread_rng_source;

pub use seeded_random_source::SeededRandomSource;
pub use thread_rng_source::ThreadRngSource;
