use strata_traits::{CompositeExt, with_traits};

mod traits {
    use strata_traits::meta_trait;

    /// A trait declared in another module.
    #[meta_trait]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Abc {
        pub abc: i32,
    }
}

#[with_traits(traits::Abc::TRAIT)]
struct Composite {
    name: &'static str,
}

fn main() {
    use traits::WithAbc;

    let composite = Composite::compose("named");
    assert_eq!(composite.name, "named");
    assert_eq!(composite.abc().abc, 0);
    assert!(composite.has_trait::<traits::Abc>());
}
