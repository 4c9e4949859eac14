//! Process-wide trait registry.
//!
//! [`TraitRegistry`] maps trait types to their descriptors. Registration is
//! write-once per type: registering a type twice, or two types under one
//! identity, is a definition error rather than a silent overwrite. After
//! registration, descriptors are only read, so lookups from many threads
//! contend on nothing but a read lock.
//!
//! The registry adds what a bare [`recover_trait`](crate::recover_trait)
//! cannot do: recovery by name when the trait type is not known statically,
//! capability listing, and a configurable [`Verification`] policy.
//!
//! # Example
//!
//! ```
//! use strata_traits::{TraitRegistry, meta_trait, with_traits};
//!
//! #[meta_trait]
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Abc {
//!     abc: i32,
//! }
//!
//! #[with_traits(Abc::TRAIT)]
//! struct Composite;
//!
//! let registry = TraitRegistry::new();
//! registry.register::<Abc>().unwrap();
//! assert!(registry.register::<Abc>().is_err());
//!
//! let composite = Composite::default();
//! let names: Vec<_> = registry.capabilities(&composite);
//! assert_eq!(names[0].description(), "Abc");
//!
//! let value = registry.recover_by_name(&composite, "Abc").unwrap();
//! assert_eq!(value.downcast_ref::<Abc>(), Some(&Abc::default()));
//! ```

use core::any::{Any, TypeId};
use core::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;
use parking_lot::RwLock;
use strata_decl::{DefinitionError, field_name_for};

use crate::composite::Composite;
use crate::error::{RecoveryError, TraitError};
use crate::identity::TraitIdentity;
use crate::meta_trait::{MetaTrait, TraitDescriptor};
use crate::recover::{recover_declared, recover_trait};

/// How much a composite must promise before a trait is recovered from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verification {
    /// Match by slot name and runtime type only.
    #[default]
    Structural,
    /// Also require the trait to appear in [`Composite::composes`].
    Declared,
}

/// Registry configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Recovery policy used by [`TraitRegistry::recover`] and friends.
    pub verification: Verification,
}

impl RegistryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recovery policy.
    #[must_use]
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }
}

/// Boxed trait value produced by an [`ErasedDescriptor`].
pub type BoxedTrait = Box<dyn Any + Send + Sync>;

/// A [`TraitDescriptor`] with its type erased.
#[derive(Clone)]
pub struct ErasedDescriptor {
    identity: TraitIdentity,
    field_name: &'static str,
    type_id: TypeId,
    type_name: &'static str,
    construct: fn() -> BoxedTrait,
    recover: fn(&dyn Composite) -> Result<BoxedTrait, TraitError>,
    recover_declared: fn(&dyn Composite) -> Result<BoxedTrait, TraitError>,
}

fn construct_boxed<T: MetaTrait>() -> BoxedTrait {
    Box::new(T::construct())
}

fn recover_boxed<T: MetaTrait>(from: &dyn Composite) -> Result<BoxedTrait, TraitError> {
    recover_trait::<T>(from).map(|value| Box::new(value) as BoxedTrait)
}

fn recover_declared_boxed<T: MetaTrait>(from: &dyn Composite) -> Result<BoxedTrait, TraitError> {
    recover_declared::<T>(from).map(|value| Box::new(value) as BoxedTrait)
}

impl ErasedDescriptor {
    /// Erases the descriptor of `T`.
    #[must_use]
    pub fn of<T: MetaTrait>() -> Self {
        Self {
            identity: T::TRAIT,
            field_name: T::FIELD,
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
            construct: construct_boxed::<T>,
            recover: recover_boxed::<T>,
            recover_declared: recover_declared_boxed::<T>,
        }
    }

    /// The trait identity.
    #[must_use]
    pub fn identity(&self) -> &TraitIdentity {
        &self.identity
    }

    /// The slot name.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// The `TypeId` of the trait type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The Rust type name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Invokes the nullary constructor.
    #[must_use]
    pub fn construct_boxed(&self) -> BoxedTrait {
        (self.construct)()
    }

    /// Recovers the trait under the given policy.
    ///
    /// # Errors
    ///
    /// See [`recover_trait`] and [`recover_declared`].
    pub fn recover_boxed(
        &self,
        from: &dyn Composite,
        verification: Verification,
    ) -> Result<BoxedTrait, TraitError> {
        match verification {
            Verification::Structural => (self.recover)(from),
            Verification::Declared => (self.recover_declared)(from),
        }
    }
}

impl fmt::Debug for ErasedDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedDescriptor")
            .field("identity", &self.identity)
            .field("field_name", &self.field_name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[derive(Default)]
struct RegistryState {
    by_type: HashMap<TypeId, ErasedDescriptor>,
    by_name: HashMap<TraitIdentity, TypeId>,
}

/// Registry of trait descriptors.
#[derive(Default)]
pub struct TraitRegistry {
    config: RegistryConfig,
    state: RwLock<RegistryState>,
}

static GLOBAL: LazyLock<TraitRegistry> = LazyLock::new(TraitRegistry::new);

impl TraitRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            state: RwLock::default(),
        }
    }

    /// The process-wide registry, created on first use with the default
    /// configuration.
    #[must_use]
    pub fn global() -> &'static TraitRegistry {
        &GLOBAL
    }

    /// The configuration this registry was created with.
    #[must_use]
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Registers trait `T` and returns its descriptor.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::DuplicateRegistration`] if `T`, or another type
    ///   with the same identity, is already registered
    /// - [`DefinitionError::IneligibleTrait`] if `T::FIELD` is not derived
    ///   from `T::TRAIT`
    pub fn register<T: MetaTrait>(&self) -> Result<TraitDescriptor<T>, DefinitionError> {
        let identity = T::TRAIT;

        let expected = field_name_for(identity.description());
        if expected != T::FIELD {
            tracing::warn!(
                trait_name = %identity,
                field = T::FIELD,
                expected = %expected,
                "rejected trait with mismatched field name"
            );
            return Err(DefinitionError::ineligible(
                identity.description(),
                format!("field name `{}` should be `{expected}`", T::FIELD),
            ));
        }

        let type_id = TypeId::of::<T>();
        let mut state = self.state.write();
        if state.by_type.contains_key(&type_id) || state.by_name.contains_key(&identity) {
            tracing::warn!(trait_name = %identity, "rejected duplicate trait registration");
            return Err(DefinitionError::duplicate_registration(identity.description()));
        }

        state.by_name.insert(identity.clone(), type_id);
        state.by_type.insert(type_id, ErasedDescriptor::of::<T>());
        drop(state);

        tracing::debug!(
            trait_name = %identity,
            field = T::FIELD,
            type_name = core::any::type_name::<T>(),
            "registered trait"
        );
        Ok(TraitDescriptor::of())
    }

    /// Returns `true` if `T` is registered.
    #[must_use]
    pub fn contains<T: MetaTrait>(&self) -> bool {
        self.state.read().by_type.contains_key(&TypeId::of::<T>())
    }

    /// Returns the descriptor of `T` if it is registered.
    #[must_use]
    pub fn descriptor<T: MetaTrait>(&self) -> Option<TraitDescriptor<T>> {
        self.contains::<T>().then(TraitDescriptor::of)
    }

    /// Returns the erased descriptor registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ErasedDescriptor> {
        let state = self.state.read();
        let type_id = state.by_name.get(name)?;
        state.by_type.get(type_id).cloned()
    }

    /// Recovers `T` according to the configured [`Verification`].
    ///
    /// # Errors
    ///
    /// - [`RecoveryError::Unregistered`] if `T` was never registered
    /// - [`RecoveryError::Trait`] if recovery itself fails
    pub fn recover<T: MetaTrait>(&self, from: &dyn Composite) -> Result<T, RecoveryError> {
        if !self.contains::<T>() {
            return Err(RecoveryError::Unregistered(T::TRAIT.description().to_string()));
        }
        let value = match self.config.verification {
            Verification::Structural => recover_trait::<T>(from)?,
            Verification::Declared => recover_declared::<T>(from)?,
        };
        Ok(value)
    }

    /// Recovers the trait registered under `name` without knowing its type.
    ///
    /// # Errors
    ///
    /// Same as [`recover`](Self::recover).
    pub fn recover_by_name(
        &self,
        from: &dyn Composite,
        name: &str,
    ) -> Result<BoxedTrait, RecoveryError> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| RecoveryError::Unregistered(name.to_string()))?;
        Ok(descriptor.recover_boxed(from, self.config.verification)?)
    }

    /// Lists the registered traits recoverable from `from`, sorted by name.
    #[must_use]
    pub fn capabilities(&self, from: &dyn Composite) -> Vec<TraitIdentity> {
        // Composites are user code; never call into them with the lock held.
        let descriptors: Vec<ErasedDescriptor> =
            self.state.read().by_type.values().cloned().collect();
        let mut found: Vec<TraitIdentity> = descriptors
            .iter()
            .filter(|descriptor| {
                descriptor
                    .recover_boxed(from, self.config.verification)
                    .is_ok()
            })
            .map(|descriptor| descriptor.identity.clone())
            .collect();
        found.sort();
        found
    }

    /// All registered identities, sorted by name.
    #[must_use]
    pub fn identities(&self) -> Vec<TraitIdentity> {
        let mut names: Vec<_> = self.state.read().by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered traits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().by_type.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().by_type.is_empty()
    }
}

impl fmt::Debug for TraitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraitRegistry")
            .field("config", &self.config)
            .field("traits", &self.identities())
            .finish()
    }
}
