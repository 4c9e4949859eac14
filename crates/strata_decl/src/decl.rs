//! The declaration shape an expander hands to the checks in this crate.
//!
//! Nothing here is tied to a particular syntax tree: an expander reads its own
//! representation of an annotated item and fills in a [`TypeDecl`].

use core::fmt;

/// The kind of item an annotation was attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// A struct (named, tuple or unit).
    Struct,
    /// An enum.
    Enum,
    /// A union.
    Union,
    /// Anything else, described by the expander.
    Other(String),
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.write_str("struct"),
            Self::Enum => f.write_str("enum"),
            Self::Union => f.write_str("union"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

/// A constructor the declared type exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    /// Name used to invoke the constructor (`default`, `new`, ...).
    pub name: String,
    /// Number of parameters.
    pub arity: usize,
    /// Whether the constructor can fail (returns `Option` or `Result`).
    pub failable: bool,
}

impl ConstructorDecl {
    /// A zero-argument constructor that always succeeds.
    #[must_use]
    pub fn nullary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: 0,
            failable: false,
        }
    }

    /// A constructor with `arity` parameters.
    #[must_use]
    pub fn with_arity(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            failable: false,
        }
    }

    /// Marks the constructor as failable.
    #[must_use]
    pub fn failable(mut self) -> Self {
        self.failable = true;
        self
    }

    /// Returns `true` if this constructor can produce a default trait value.
    #[must_use]
    pub fn is_applicable_nullary(&self) -> bool {
        self.arity == 0 && !self.failable
    }
}

/// The parsed shape of an annotated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// The declared type name, without generics.
    pub name: String,
    /// What kind of item it is.
    pub kind: DeclKind,
    /// Names of the fields it already declares, in order.
    pub fields: Vec<String>,
    /// The constructors it exposes.
    pub constructors: Vec<ConstructorDecl>,
}

impl TypeDecl {
    /// Creates a declaration with no fields and no constructors.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Shorthand for a struct declaration.
    #[must_use]
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(name, DeclKind::Struct)
    }

    /// Adds a declared field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Adds a constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Returns `true` if a field with this name is already declared.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }
}

/// A trait reference as written in a composition annotation, e.g. `Abc::TRAIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitRef {
    /// The reference text. Whitespace is ignored.
    pub path: String,
}

impl TraitRef {
    /// Wraps the textual reference.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl From<&str> for TraitRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for TraitRef {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
