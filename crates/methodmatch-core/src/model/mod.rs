//! Reference in-memory semantic model.
//!
//! A small stand-in for a real front-end: declared types with their direct
//! supertypes, method symbols, and call sites bound to them. It implements
//! the [`crate::semantic`] traits and backs the snapshot files consumed by
//! the CLI.

use std::collections::HashMap;

use crate::semantic::{MethodSubject, Symbol, Type, CONSTRUCTOR_NAME};

pub mod snapshot;

pub use snapshot::{MatchMode, Snapshot, SnapshotError};

/// Root of every class hierarchy.
pub const OBJECT: &str = "java.lang.Object";

/// Name reported by the unknown-type sentinel.
pub const UNKNOWN_TYPE_NAME: &str = "!unknown!";

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A class (abstract or not).
    Class,
    /// An interface.
    Interface,
    /// A primitive type.
    Primitive,
}

#[derive(Debug, Clone)]
struct TypeDef {
    name: String,
    kind: TypeKind,
    supertypes: Vec<String>,
}

/// Handle to a declared method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId(usize);

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    owner: String,
    name: String,
    params: Vec<String>,
}

impl MethodDef {
    /// Creates a method declared in `owner`. Use [`CONSTRUCTOR_NAME`] for
    /// constructors.
    #[must_use]
    pub fn new(owner: &str, name: &str, params: &[&str]) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Creates a constructor of `owner`.
    #[must_use]
    pub fn constructor(owner: &str, params: &[&str]) -> Self {
        Self::new(owner, CONSTRUCTOR_NAME, params)
    }

    /// Declaring type name.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type names.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    fn same_signature(&self, owner: &str, name: &str, params: &[&str]) -> bool {
        self.owner == owner
            && self.name == name
            && self.params.len() == params.len()
            && self.params.iter().zip(params).all(|(a, b)| a == b)
    }
}

/// Declared types and methods.
///
/// Supertypes are stored by name and resolved on demand, so declaration
/// order does not matter; names never declared resolve to the unknown
/// sentinel. Primitives and [`OBJECT`] are predeclared.
#[derive(Debug, Clone)]
pub struct TypeTable {
    types: Vec<TypeDef>,
    by_name: HashMap<String, usize>,
    methods: Vec<MethodDef>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Creates a table holding only the predeclared types.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self {
            types: Vec::new(),
            by_name: HashMap::new(),
            methods: Vec::new(),
        };
        for primitive in PRIMITIVES {
            table.declare(primitive, TypeKind::Primitive, &[]);
        }
        table.declare(OBJECT, TypeKind::Class, &[]);
        table
    }

    /// Declares (or redeclares) a type.
    pub fn declare(&mut self, name: &str, kind: TypeKind, supertypes: &[&str]) {
        let def = TypeDef {
            name: name.to_string(),
            kind,
            supertypes: supertypes.iter().map(|s| (*s).to_string()).collect(),
        };
        if let Some(&index) = self.by_name.get(name) {
            self.types[index] = def;
        } else {
            self.by_name.insert(name.to_string(), self.types.len());
            self.types.push(def);
        }
    }

    /// Declares a class with its superclass and interfaces.
    pub fn declare_class(&mut self, name: &str, supertypes: &[&str]) {
        self.declare(name, TypeKind::Class, supertypes);
    }

    /// Declares an interface with its super-interfaces.
    pub fn declare_interface(&mut self, name: &str, supertypes: &[&str]) {
        self.declare(name, TypeKind::Interface, supertypes);
    }

    /// Declares a method and returns its handle.
    pub fn declare_method(&mut self, method: MethodDef) -> MethodId {
        self.methods.push(method);
        MethodId(self.methods.len() - 1)
    }

    /// Whether `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Looks a type up by name, unknown sentinel when not declared.
    #[must_use]
    pub fn get(&self, name: &str) -> TypeRef<'_> {
        TypeRef {
            table: self,
            def: self.by_name.get(name).map(|&i| &self.types[i]),
        }
    }

    /// The unknown-type sentinel.
    #[must_use]
    pub fn unknown(&self) -> TypeRef<'_> {
        TypeRef {
            table: self,
            def: None,
        }
    }

    /// Finds a method by owner, name and parameter type names.
    #[must_use]
    pub fn method_id(&self, owner: &str, name: &str, params: &[&str]) -> Option<MethodId> {
        self.methods
            .iter()
            .position(|m| m.same_signature(owner, name, params))
            .map(MethodId)
    }

    /// Finds a method symbol by owner, name and parameter type names.
    #[must_use]
    pub fn method(&self, owner: &str, name: &str, params: &[&str]) -> Option<MethodRef<'_>> {
        self.method_id(owner, name, params).map(|id| self.method_ref(id))
    }

    /// Symbol for a method handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this table.
    #[must_use]
    pub fn method_ref(&self, id: MethodId) -> MethodRef<'_> {
        MethodRef {
            table: self,
            def: &self.methods[id.0],
        }
    }

    /// Symbol for a method handle, or `None` if `id` was not issued by
    /// this table.
    #[must_use]
    pub fn lookup_method(&self, id: MethodId) -> Option<MethodRef<'_>> {
        self.methods
            .get(id.0)
            .map(|def| MethodRef { table: self, def })
    }

    /// Binds a call site to this table.
    #[must_use]
    pub fn site(
        &self,
        line: u32,
        kind: SiteKind,
        method: Option<MethodId>,
        receiver: Option<&str>,
    ) -> SiteRef<'_> {
        self.bind(Site {
            line,
            kind,
            method,
            receiver: receiver.map(str::to_string),
            interface: None,
        })
    }

    /// Binds an owned [`Site`] to this table.
    #[must_use]
    pub fn bind(&self, site: Site) -> SiteRef<'_> {
        SiteRef { table: self, site }
    }
}

/// A type looked up in a [`TypeTable`], possibly the unknown sentinel.
#[derive(Debug, Clone, Copy)]
pub struct TypeRef<'a> {
    table: &'a TypeTable,
    def: Option<&'a TypeDef>,
}

impl TypeRef<'_> {
    /// Kind of the type, `None` for the unknown sentinel.
    #[must_use]
    pub fn kind(&self) -> Option<TypeKind> {
        self.def.map(|d| d.kind)
    }

    fn needs_implicit_object(&self, def: &TypeDef) -> bool {
        match def.kind {
            TypeKind::Primitive => false,
            TypeKind::Interface => def.supertypes.is_empty(),
            TypeKind::Class => {
                def.name != OBJECT
                    && !def
                        .supertypes
                        .iter()
                        .any(|s| self.table.get(s).kind() == Some(TypeKind::Class))
            }
        }
    }
}

impl Type for TypeRef<'_> {
    fn fully_qualified_name(&self) -> &str {
        self.def.map_or(UNKNOWN_TYPE_NAME, |d| d.name.as_str())
    }

    fn is_unknown(&self) -> bool {
        self.def.is_none()
    }

    fn direct_supertypes(&self) -> Vec<Box<dyn Type + '_>> {
        let Some(def) = self.def else {
            return Vec::new();
        };
        let mut supertypes: Vec<Box<dyn Type + '_>> = def
            .supertypes
            .iter()
            .map(|s| Box::new(self.table.get(s)) as Box<dyn Type + '_>)
            .collect();
        if self.needs_implicit_object(def) {
            supertypes.push(Box::new(self.table.get(OBJECT)));
        }
        supertypes
    }
}

/// A method symbol from a [`TypeTable`].
#[derive(Debug, Clone, Copy)]
pub struct MethodRef<'a> {
    table: &'a TypeTable,
    def: &'a MethodDef,
}

impl MethodRef<'_> {
    /// The underlying declaration.
    #[must_use]
    pub fn def(&self) -> &MethodDef {
        self.def
    }
}

impl Symbol for MethodRef<'_> {
    fn is_method(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.def.name
    }

    fn owner(&self) -> Option<Box<dyn Type + '_>> {
        Some(Box::new(self.table.get(&self.def.owner)))
    }

    fn parameter_types(&self) -> Vec<Box<dyn Type + '_>> {
        self.def
            .params
            .iter()
            .map(|p| Box::new(self.table.get(p)) as Box<dyn Type + '_>)
            .collect()
    }
}

/// Any symbol a site can hand out.
#[derive(Debug, Clone, Copy)]
pub enum SymbolRef<'a> {
    /// A method or constructor.
    Method(MethodRef<'a>),
    /// A type symbol, e.g. the functional interface of a method reference.
    Type(TypeRef<'a>),
    /// Resolution failed.
    Unknown,
}

impl Symbol for SymbolRef<'_> {
    fn is_method(&self) -> bool {
        matches!(self, Self::Method(_))
    }

    fn is_unknown(&self) -> bool {
        match self {
            Self::Method(_) => false,
            Self::Type(ty) => ty.is_unknown(),
            Self::Unknown => true,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Method(m) => m.name(),
            Self::Type(ty) => ty.fully_qualified_name(),
            Self::Unknown => UNKNOWN_TYPE_NAME,
        }
    }

    fn owner(&self) -> Option<Box<dyn Type + '_>> {
        match self {
            Self::Method(m) => m.owner(),
            Self::Type(_) | Self::Unknown => None,
        }
    }

    fn parameter_types(&self) -> Vec<Box<dyn Type + '_>> {
        match self {
            Self::Method(m) => m.parameter_types(),
            Self::Type(_) | Self::Unknown => Vec::new(),
        }
    }
}

/// Syntactic kind of a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteKind {
    /// Method or constructor declaration.
    Declaration,
    /// `receiver.m(..)` or `m(..)`.
    Invocation,
    /// `new T(..)`.
    NewClass,
    /// `receiver::m` or `T::new`.
    MethodReference,
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declaration => write!(f, "declaration"),
            Self::Invocation => write!(f, "invocation"),
            Self::NewClass => write!(f, "new-class"),
            Self::MethodReference => write!(f, "method-reference"),
        }
    }
}

/// A tree node resolved against a [`TypeTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// 1-indexed source line.
    pub line: u32,
    /// Node kind.
    pub kind: SiteKind,
    /// Resolved method, `None` when resolution failed.
    pub method: Option<MethodId>,
    /// Static type of the receiver, or the enclosing class of an
    /// unqualified invocation.
    pub receiver: Option<String>,
    /// Functional interface a method reference is converted to.
    pub interface: Option<String>,
}

/// A [`Site`] bound to the table it refers into.
#[derive(Debug, Clone)]
pub struct SiteRef<'a> {
    table: &'a TypeTable,
    site: Site,
}

impl SiteRef<'_> {
    /// The bound site.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The symbol a host hands to symbol-based matching for this node.
    ///
    /// Method references yield the type symbol of their functional
    /// interface, which is not a method symbol.
    #[must_use]
    pub fn symbol(&self) -> SymbolRef<'_> {
        match (self.site.kind, self.site.method) {
            (SiteKind::MethodReference, _) => self
                .site
                .interface
                .as_deref()
                .map_or(SymbolRef::Unknown, |i| SymbolRef::Type(self.table.get(i))),
            (_, Some(id)) => self
                .table
                .lookup_method(id)
                .map_or(SymbolRef::Unknown, SymbolRef::Method),
            (_, None) => SymbolRef::Unknown,
        }
    }
}

impl MethodSubject for SiteRef<'_> {
    fn resolve_symbol(&self) -> Option<Box<dyn Symbol + '_>> {
        let id = self.site.method?;
        let Some(method) = self.table.lookup_method(id) else {
            tracing::trace!(line = self.site.line, "method id not declared in this table");
            return None;
        };
        Some(Box::new(method))
    }

    fn call_site_type(&self) -> Option<Box<dyn Type + '_>> {
        match self.site.kind {
            SiteKind::Invocation | SiteKind::MethodReference => self
                .site
                .receiver
                .as_deref()
                .map(|r| Box::new(self.table.get(r)) as Box<dyn Type + '_>),
            SiteKind::Declaration | SiteKind::NewClass => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ty: &dyn Type) -> Vec<String> {
        ty.direct_supertypes()
            .iter()
            .map(|s| s.fully_qualified_name().to_string())
            .collect()
    }

    #[test]
    fn predeclared_types() {
        let table = TypeTable::new();
        assert!(table.contains("int"));
        assert!(table.contains(OBJECT));
        assert!(names(&table.get("int")).is_empty());
        assert!(names(&table.get(OBJECT)).is_empty());
    }

    #[test]
    fn implicit_object_supertype() {
        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        table.declare_interface("I", &[]);
        table.declare_class("B", &["A", "I"]);
        table.declare_class("C", &["I"]);
        assert_eq!(names(&table.get("A")), vec![OBJECT]);
        assert_eq!(names(&table.get("I")), vec![OBJECT]);
        assert_eq!(names(&table.get("B")), vec!["A", "I"]);
        assert_eq!(names(&table.get("C")), vec!["I", OBJECT]);
    }

    #[test]
    fn undeclared_names_are_unknown() {
        let mut table = TypeTable::new();
        table.declare_class("A", &["missing.Base"]);
        let a = table.get("A");
        let supers = a.direct_supertypes();
        assert!(supers[0].is_unknown());
        assert!(table.get("missing.Base").is_unknown());
        assert!(names(&table.unknown()).is_empty());
    }

    #[test]
    fn method_lookup() {
        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        let id = table.declare_method(MethodDef::new("A", "f", &["int", "long"]));
        assert_eq!(table.method_id("A", "f", &["int", "long"]), Some(id));
        assert_eq!(table.method_id("A", "f", &["int"]), None);
        let f = table.method_ref(id);
        assert_eq!(f.name(), "f");
        assert_eq!(f.parameter_types().len(), 2);
        assert!(!f.is_constructor());
    }

    #[test]
    fn method_reference_symbol_is_not_a_method() {
        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        table.declare_interface("java.util.function.Consumer", &[]);
        let f = table.declare_method(MethodDef::new("A", "f", &["int"]));
        let site = table.bind(Site {
            line: 9,
            kind: SiteKind::MethodReference,
            method: Some(f),
            receiver: Some("A".to_string()),
            interface: Some("java.util.function.Consumer".to_string()),
        });
        assert!(site.resolve_symbol().is_some_and(|s| s.is_method()));
        assert!(!site.symbol().is_method());
    }

    #[test]
    fn foreign_method_id_never_matches() {
        let mut other = TypeTable::new();
        other.declare_class("A", &[]);
        other.declare_method(MethodDef::new("A", "f", &[]));
        let g = other.declare_method(MethodDef::new("A", "g", &[]));

        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        table.declare_method(MethodDef::new("A", "f", &[]));
        assert!(table.lookup_method(g).is_none());

        let everything = crate::MethodMatchers::create()
            .of_any_type()
            .any_name()
            .with_any_parameters()
            .build()
            .unwrap();
        let site = table.site(4, SiteKind::Invocation, Some(g), Some("A"));
        assert!(site.resolve_symbol().is_none());
        assert!(site.symbol().is_unknown());
        assert!(!everything.matches(&site));
        assert!(!everything.matches_symbol(&site.symbol()));
    }
}
