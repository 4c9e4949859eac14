use strata_traits::{CompositeExt, meta_trait, with_traits};

#[meta_trait]
#[derive(Debug, Clone, Default, PartialEq)]
struct Abc {
    abc: i32,
}

/// A composite carrying a payload of any shareable type.
#[with_traits(Abc::TRAIT)]
struct Tagged<T: Send + Sync + 'static> {
    payload: T,
}

fn main() {
    let tagged = Tagged::compose(String::from("payload"));
    assert_eq!(tagged.payload, "payload");
    assert_eq!(tagged.recover::<Abc>(), Ok(Abc::default()));
}
