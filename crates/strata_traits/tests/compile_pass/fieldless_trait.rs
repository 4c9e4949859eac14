use strata_traits::{Composite, CompositeExt, meta_trait, with_traits};

/// A marker trait with no state.
#[meta_trait]
#[derive(Debug, Clone, PartialEq)]
struct Fooer;

#[with_traits(Fooer::TRAIT)]
struct SomethingThatHasFoo;

fn main() {
    let something = SomethingThatHasFoo::default();
    assert_eq!(something.recover::<Fooer>(), Ok(Fooer));
    assert_eq!(something.composes().len(), 1);
}
