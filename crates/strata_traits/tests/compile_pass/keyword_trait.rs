use strata_traits::{Composite, CompositeExt, MetaTrait, meta_trait, with_traits};

/// A trait whose derived field name is a keyword.
#[meta_trait]
#[derive(Debug, Clone, Default, PartialEq)]
struct Match;

#[with_traits(Match::TRAIT)]
struct HasMatch;

fn main() {
    let composite = HasMatch::default();
    assert_eq!(Match::FIELD, "match");
    assert!(composite.lookup_field("match").is_some());
    assert_eq!(composite.r#match(), &Match);
    assert_eq!(composite.recover::<Match>(), Ok(Match));
}
