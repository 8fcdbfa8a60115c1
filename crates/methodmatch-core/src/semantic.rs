//! Boundary traits for the host semantic model.
//!
//! The matcher engine never parses or resolves anything itself. A host
//! (compiler front-end, IDE index, or the reference [`crate::model`]) hands
//! it already-resolved types and symbols through these traits.

use std::fmt;

/// Reserved method name carried by constructor symbols.
///
/// It is not a legal source identifier, so string name criteria can never
/// select constructors by accident. Use
/// [`MethodMatcherBuilder::constructor`](crate::MethodMatcherBuilder::constructor)
/// to match them.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// A resolved type with access to its direct supertypes.
///
/// Implementations report the *erased* fully qualified name: generic
/// arguments are not part of it, so `java.util.List<String>` reports
/// `java.util.List`.
pub trait Type {
    /// Erased fully qualified name (e.g. `java.lang.String`, `int`).
    fn fully_qualified_name(&self) -> &str;

    /// Whether this is the unresolved-type sentinel.
    fn is_unknown(&self) -> bool {
        false
    }

    /// Direct supertypes: superclass plus implemented or extended interfaces.
    ///
    /// Returns an empty list for root types and for the unknown sentinel.
    fn direct_supertypes(&self) -> Vec<Box<dyn Type + '_>>;

    /// Exact name comparison. Never true for the unknown sentinel.
    fn is(&self, fully_qualified_name: &str) -> bool {
        !self.is_unknown() && self.fully_qualified_name() == fully_qualified_name
    }
}

impl<T: Type + ?Sized> Type for &T {
    fn fully_qualified_name(&self) -> &str {
        (**self).fully_qualified_name()
    }

    fn is_unknown(&self) -> bool {
        (**self).is_unknown()
    }

    fn direct_supertypes(&self) -> Vec<Box<dyn Type + '_>> {
        (**self).direct_supertypes()
    }
}

impl fmt::Debug for dyn Type + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("!unknown!")
        } else {
            f.write_str(self.fully_qualified_name())
        }
    }
}

/// A resolved symbol as exposed by the host model.
///
/// Only method symbols (methods and constructors) can satisfy a matcher.
/// Other symbol kinds exist because hosts hand them out in some places a
/// method symbol might be expected, e.g. the functional-interface type of a
/// method reference.
pub trait Symbol {
    /// Whether this symbol is a method or constructor.
    fn is_method(&self) -> bool;

    /// Whether this is the unresolved-symbol sentinel.
    fn is_unknown(&self) -> bool {
        false
    }

    /// Method name, [`CONSTRUCTOR_NAME`] for constructors.
    fn name(&self) -> &str;

    /// The declaring type, `None` when it could not be resolved.
    fn owner(&self) -> Option<Box<dyn Type + '_>>;

    /// Declared parameter types in order.
    fn parameter_types(&self) -> Vec<Box<dyn Type + '_>>;

    /// Whether this symbol is a constructor.
    fn is_constructor(&self) -> bool {
        self.is_method() && self.name() == CONSTRUCTOR_NAME
    }
}

impl<S: Symbol + ?Sized> Symbol for &S {
    fn is_method(&self) -> bool {
        (**self).is_method()
    }

    fn is_unknown(&self) -> bool {
        (**self).is_unknown()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn owner(&self) -> Option<Box<dyn Type + '_>> {
        (**self).owner()
    }

    fn parameter_types(&self) -> Vec<Box<dyn Type + '_>> {
        (**self).parameter_types()
    }
}

/// A tree node that can be asked which symbol it resolves to.
///
/// Invocations, constructor calls, method declarations and method references
/// all implement this. The engine does not care which kind of node it is.
pub trait MethodSubject {
    /// The symbol this node resolves to, `None` when resolution failed.
    fn resolve_symbol(&self) -> Option<Box<dyn Symbol + '_>>;

    /// Static type of the call site, when the node has one.
    ///
    /// For `receiver.m()` and `receiver::m` this is the type of `receiver`;
    /// for an unqualified `m()` it is the enclosing class. When present,
    /// owner-type criteria are checked against it instead of the declaring
    /// type of the resolved symbol.
    fn call_site_type(&self) -> Option<Box<dyn Type + '_>> {
        None
    }
}
