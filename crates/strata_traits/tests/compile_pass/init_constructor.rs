use strata_traits::{MetaTrait, meta_trait};

/// A trait built from a named constructor.
#[meta_trait(init = Counter::zero)]
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    fn zero() -> Self {
        Self { count: 0 }
    }
}

fn main() {
    assert_eq!(Counter::construct(), Counter { count: 0 });
    assert_eq!(Counter::FIELD, "counter");
    assert_eq!(Counter::TRAIT.description(), "Counter");
}
