//! The fixed builtin-type registry.
//!
//! A closed set of primitive kind identifiers, compiled in. Membership is by
//! exact identifier match, never by inheritance: a host type that derives
//! from a primitive is not builtin. Extending the set means recompiling, not
//! configuration.

/// A builtin (primitive) type kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Builtin {
    /// Textual string (`str`).
    Str,
    /// Arbitrary-precision integer (`int`).
    Int,
    /// Floating point (`float`).
    Float,
    /// Complex number (`complex`).
    Complex,
    /// Ordered sequence (`list`).
    List,
    /// Fixed-size ordered sequence (`tuple`).
    Tuple,
    /// Numeric range (`range`).
    Range,
    /// Mapping (`dict`).
    Dict,
    /// Set (`set`).
    Set,
    /// Immutable set (`frozenset`).
    FrozenSet,
    /// Boolean (`bool`).
    Bool,
    /// Raw byte sequence (`bytes`).
    Bytes,
    /// Mutable byte sequence (`bytearray`).
    ByteArray,
    /// Read-only memory view (`memoryview`).
    MemoryView,
    /// The "no value" type (`NoneType`).
    NoneType,
}

impl Builtin {
    /// Every builtin kind, in registry order.
    pub const ALL: [Builtin; 15] = [
        Builtin::Str,
        Builtin::Int,
        Builtin::Float,
        Builtin::Complex,
        Builtin::List,
        Builtin::Tuple,
        Builtin::Range,
        Builtin::Dict,
        Builtin::Set,
        Builtin::FrozenSet,
        Builtin::Bool,
        Builtin::Bytes,
        Builtin::ByteArray,
        Builtin::MemoryView,
        Builtin::NoneType,
    ];

    /// Look up a kind by its exact host identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "complex" => Some(Self::Complex),
            "list" => Some(Self::List),
            "tuple" => Some(Self::Tuple),
            "range" => Some(Self::Range),
            "dict" => Some(Self::Dict),
            "set" => Some(Self::Set),
            "frozenset" => Some(Self::FrozenSet),
            "bool" => Some(Self::Bool),
            "bytes" => Some(Self::Bytes),
            "bytearray" => Some(Self::ByteArray),
            "memoryview" => Some(Self::MemoryView),
            "NoneType" => Some(Self::NoneType),
            _ => None,
        }
    }

    /// The host identifier for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Range => "range",
            Self::Dict => "dict",
            Self::Set => "set",
            Self::FrozenSet => "frozenset",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::ByteArray => "bytearray",
            Self::MemoryView => "memoryview",
            Self::NoneType => "NoneType",
        }
    }
}

/// Whether an identifier names a builtin kind.
pub fn is_builtin_name(name: &str) -> bool {
    Builtin::from_name(name).is_some()
}
