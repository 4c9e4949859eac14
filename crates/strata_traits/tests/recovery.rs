//! End-to-end tests for declaring, composing and recovering traits.

use core::any::Any;

use strata_traits::prelude::*;

#[meta_trait(init = new)]
#[derive(Debug, Clone, PartialEq)]
struct Abc {
    abc: i32,
}

impl Abc {
    fn new() -> Self {
        Self { abc: 42 }
    }
}

#[meta_trait(init = new)]
#[derive(Debug, Clone, PartialEq)]
struct Xyz {
    xyz: i32,
}

impl Xyz {
    fn new() -> Self {
        Self { xyz: 99 }
    }
}

#[meta_trait]
#[derive(Debug, Clone, Default, PartialEq)]
struct Fooer;

#[with_traits(Abc::TRAIT)]
struct OnlyAbc;

#[with_traits(Xyz::TRAIT)]
struct OnlyXyz;

#[with_traits(Abc::TRAIT, Xyz::TRAIT)]
struct Both;

#[with_traits(Xyz::TRAIT, Abc::TRAIT, Fooer::TRAIT)]
struct WithOwnFields {
    id: u32,
    label: String,
}

/// Exposes an `abc` slot holding something other than an `Abc`.
struct Impostor {
    abc: i32,
}

impl Composite for Impostor {
    fn lookup_field(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        match name {
            "abc" => Some(&self.abc),
            _ => None,
        }
    }

    fn composes(&self) -> &[TraitIdentity] {
        &[]
    }
}

/// Exposes a real `Abc` it never declares.
struct Undeclared {
    abc: Abc,
}

impl Composite for Undeclared {
    fn lookup_field(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        match name {
            "abc" => Some(&self.abc),
            _ => None,
        }
    }

    fn composes(&self) -> &[TraitIdentity] {
        &[]
    }
}

#[test]
fn recovers_composed_trait() {
    let composite = OnlyAbc::default();
    assert_eq!(recover_trait::<Abc>(&composite), Ok(Abc { abc: 42 }));
    assert_eq!(composite.recover::<Abc>(), Ok(Abc { abc: 42 }));
    assert_eq!(Abc::recover(&composite), Ok(Abc { abc: 42 }));
}

#[test]
fn absent_trait_is_not_found() {
    let composite = OnlyXyz::default();
    let err = recover_trait::<Abc>(&composite).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.kind(),
        &TraitErrorKind::NotFound { field: "abc" },
        "unexpected error: {err}"
    );
    assert_eq!(err.kind().to_string(), "Failed to find property abc in from");
    assert!(!composite.has_trait::<Abc>());
}

#[test]
fn multiple_traits_recover_independently() {
    let composite = Both::default();
    assert_eq!(recover_trait::<Abc>(&composite), Ok(Abc { abc: 42 }));
    assert_eq!(recover_trait::<Xyz>(&composite), Ok(Xyz { xyz: 99 }));
    assert!(recover_trait::<Fooer>(&composite).is_err());
}

#[test]
fn slots_are_named_after_traits() {
    let composite = Both::default();
    assert!(composite.lookup_field("abc").is_some());
    assert!(composite.lookup_field("xyz").is_some());
    assert!(composite.lookup_field("Abc").is_none());
    assert!(composite.lookup_field("").is_none());
    assert_eq!(composite.abc, Abc { abc: 42 });
    assert_eq!(composite.xyz, Xyz { xyz: 99 });
}

#[test]
fn composes_lists_traits_in_declaration_order() {
    let composite = WithOwnFields::compose(1, "one".into());
    let names: Vec<&str> = composite
        .composes()
        .iter()
        .map(TraitIdentity::description)
        .collect();
    assert_eq!(names, ["Xyz", "Abc", "Fooer"]);
}

#[test]
fn own_fields_are_kept_alongside_slots() {
    let composite = WithOwnFields::compose(7, "seven".into());
    assert_eq!(composite.id, 7);
    assert_eq!(composite.label, "seven");
    assert_eq!(composite.abc(), &Abc { abc: 42 });
    assert_eq!(composite.xyz(), &Xyz { xyz: 99 });
    assert_eq!(composite.fooer(), &Fooer);
}

#[test]
fn wrong_type_under_slot_name_is_mismatch() {
    let impostor = Impostor { abc: 42 };
    let err = recover_trait::<Abc>(&impostor).unwrap_err();

    assert!(err.is_type_mismatch());
    assert!(!err.is_not_found());
    assert_eq!(err.trait_identity(), &Abc::TRAIT);
    assert_eq!(err.kind().to_string(), "Property abc is not of type Abc");
}

#[test]
fn undeclared_slot_matches_structurally() {
    let handle = Undeclared { abc: Abc { abc: 5 } };
    assert_eq!(recover_trait::<Abc>(&handle), Ok(Abc { abc: 5 }));

    let err = recover_declared::<Abc>(&handle).unwrap_err();
    assert_eq!(err.kind(), &TraitErrorKind::NotDeclared { field: "abc" });
}

#[test]
fn recovery_returns_a_copy() {
    let mut composite = Both::default();
    let mut recovered = recover_trait::<Abc>(&composite).unwrap();
    recovered.abc = 1;
    assert_eq!(composite.abc, Abc { abc: 42 });

    composite.abc.abc = 2;
    assert_eq!(recovered.abc, 1);
    assert_eq!(recover_trait::<Abc>(&composite), Ok(Abc { abc: 2 }));
}

#[test]
fn recovery_through_erased_handle() {
    let handles: Vec<Box<dyn Composite>> = vec![
        Box::new(OnlyAbc::default()),
        Box::new(OnlyXyz::default()),
        Box::new(Both::default()),
    ];

    let with_abc = handles
        .iter()
        .filter(|handle| recover_trait::<Abc>(handle.as_ref()).is_ok())
        .count();
    assert_eq!(with_abc, 2);
}

#[test]
fn generated_identity_matches_type_name() {
    assert_eq!(Abc::TRAIT, TraitIdentity::of("Abc"));
    assert_eq!(Abc::TRAIT.description(), "Abc");
    assert_eq!(Abc::FIELD, "abc");
    assert_eq!(Fooer::FIELD, "fooer");
    assert_eq!(Abc::construct(), Abc { abc: 42 });
}

#[test]
fn registry_recovers_by_name() {
    let registry = TraitRegistry::new();
    registry.register::<Abc>().unwrap();
    registry.register::<Xyz>().unwrap();

    let composite = OnlyXyz::default();
    let recovered = registry.recover_by_name(&composite, "Xyz").unwrap();
    assert_eq!(recovered.downcast_ref::<Xyz>(), Some(&Xyz { xyz: 99 }));

    assert!(matches!(
        registry.recover_by_name(&composite, "Abc"),
        Err(RecoveryError::Trait(err)) if err.is_not_found()
    ));
    assert!(matches!(
        registry.recover_by_name(&composite, "Fooer"),
        Err(RecoveryError::Unregistered(name)) if name == "Fooer"
    ));
}

#[test]
fn registry_rejects_duplicates() {
    let registry = TraitRegistry::new();
    registry.register::<Fooer>().unwrap();

    let err = registry.register::<Fooer>().unwrap_err();
    assert_eq!(err, DefinitionError::duplicate_registration("Fooer"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn declared_verification_rejects_undeclared_slots() {
    let registry =
        TraitRegistry::with_config(RegistryConfig::new().with_verification(Verification::Declared));
    registry.register::<Abc>().unwrap();

    let handle = Undeclared { abc: Abc::new() };
    assert!(registry.recover::<Abc>(&handle).is_err());
    assert!(registry.capabilities(&handle).is_empty());

    let composite = OnlyAbc::default();
    assert_eq!(registry.recover::<Abc>(&composite).unwrap(), Abc::new());
    assert_eq!(registry.capabilities(&composite), [Abc::TRAIT]);
}

#[test]
fn unknown_names_are_absent_on_composite_with_own_fields() {
    let composite = WithOwnFields::compose(3, "three".into());
    for name in ["id", "label", "Abc", "ABC", "abcd", "fooer ", "r#match", ""] {
        assert!(composite.lookup_field(name).is_none(), "{name:?} should be absent");
    }
    assert!(composite.lookup_field("fooer").is_some());
}

#[test]
fn descriptors_recover_from_generated_composite() {
    let composite = Both::default();

    let descriptor = TraitDescriptor::<Xyz>::of();
    assert_eq!(descriptor.recover(&composite), Ok(Xyz { xyz: 99 }));
    assert_eq!(descriptor.construct(), Xyz { xyz: 99 });

    let erased = ErasedDescriptor::of::<Abc>();
    for verification in [Verification::Structural, Verification::Declared] {
        let value = erased.recover_boxed(&composite, verification).unwrap();
        assert_eq!(value.downcast_ref::<Abc>(), Some(&Abc { abc: 42 }));
    }

    let erased = ErasedDescriptor::of::<Fooer>();
    let err = erased
        .recover_boxed(&composite, Verification::Declared)
        .unwrap_err();
    assert_eq!(err.kind(), &TraitErrorKind::NotDeclared { field: "fooer" });
}
