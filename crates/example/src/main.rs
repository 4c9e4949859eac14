//! Example program composing traits.
//!
//! Declares a `Fooer` trait, composes it into `SomethingThatHasFoo`, and
//! recovers it again through nothing but the `Composite` handle.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=strata_traits=trace compose
//! ```

use strata::prelude::*;
use tracing_subscriber::EnvFilter;

/// A trait that knows how to foo.
#[meta_trait]
#[derive(Debug, Clone, Default, PartialEq)]
struct Fooer;

impl Fooer {
    fn foo(&self) -> &'static str {
        "foo"
    }
}

/// A trait carrying a greeting.
#[meta_trait(init = Greeter::english)]
#[derive(Debug, Clone, PartialEq)]
struct Greeter {
    greeting: String,
}

impl Greeter {
    fn english() -> Self {
        Self {
            greeting: "hello".to_string(),
        }
    }
}

#[with_traits(Fooer::TRAIT)]
struct SomethingThatHasFoo;

#[with_traits(Fooer::TRAIT, Greeter::TRAIT)]
struct Visitor {
    name: String,
}

/// Logs what a composite offers, knowing only its handle.
fn describe(label: &str, composite: &dyn Composite, registry: &TraitRegistry) {
    let capabilities: Vec<String> = registry
        .capabilities(composite)
        .iter()
        .map(ToString::to_string)
        .collect();
    tracing::info!(composite = label, ?capabilities, "capabilities");

    match recover_trait::<Fooer>(composite) {
        Ok(fooer) => tracing::info!(composite = label, said = fooer.foo(), "recovered Fooer"),
        Err(err) => tracing::warn!(composite = label, %err, "no Fooer"),
    }

    match recover_trait::<Greeter>(composite) {
        Ok(greeter) => {
            tracing::info!(composite = label, greeting = %greeter.greeting, "recovered Greeter");
        }
        Err(err) if err.is_not_found() => {
            tracing::info!(composite = label, "no Greeter, carrying on without one");
        }
        Err(err) => tracing::warn!(composite = label, %err, "unexpected Greeter slot"),
    }
}

fn main() -> Result<(), DefinitionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let registry = TraitRegistry::global();
    registry.register::<Fooer>()?;
    registry.register::<Greeter>()?;

    let something = SomethingThatHasFoo::default();
    tracing::info!(said = something.fooer().foo(), "direct access");

    let visitor = Visitor::compose("ada".to_string());
    tracing::info!(name = %visitor.name, greeting = %visitor.greeter().greeting, "composed visitor");

    describe("SomethingThatHasFoo", &something, registry);
    describe("Visitor", &visitor, registry);

    Ok(())
}
