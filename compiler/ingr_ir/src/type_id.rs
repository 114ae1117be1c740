//! Type and signature handles.
//!
//! `Idx` indexes the type pool; primitive types have fixed indices so they
//! can be named without a pool. `SigId` indexes the pool's interned
//! signature table, so equal signatures always share one id.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality (O(1)), not structural comparison.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Primitive Types (indices 0-9) ===

    /// The `boolean` type.
    pub const BOOLEAN: Self = Self(0);
    /// The `byte` type.
    pub const BYTE: Self = Self(1);
    /// The `char` type.
    pub const CHAR: Self = Self(2);
    /// The `short` type.
    pub const SHORT: Self = Self(3);
    /// The `int` type.
    pub const INT: Self = Self(4);
    /// The `long` type.
    pub const LONG: Self = Self(5);
    /// The `float` type.
    pub const FLOAT: Self = Self(6);
    /// The `double` type.
    pub const DOUBLE: Self = Self(7);
    /// The `void` return type.
    pub const VOID: Self = Self(8);
    /// The type of the `null` literal.
    pub const NULL: Self = Self(9);

    /// First index for pool-allocated types.
    pub const FIRST_DYNAMIC: u32 = 16;

    /// Sentinel value indicating an unresolved type.
    pub const NONE: Self = Self(u32::MAX);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 10;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned primitive.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Check if this is the `boolean` primitive.
    #[inline]
    pub const fn is_boolean(self) -> bool {
        self.0 == Self::BOOLEAN.0
    }

    /// Keyword name of a primitive type, `None` for pool-allocated types.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("boolean"),
            1 => Some("byte"),
            2 => Some("char"),
            3 => Some("short"),
            4 => Some("int"),
            5 => Some("long"),
            6 => Some("float"),
            7 => Some("double"),
            8 => Some("void"),
            9 => Some("null"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            write!(f, "Idx::{}", name.to_ascii_uppercase())
        } else if self.is_none() {
            write!(f, "Idx::NONE")
        } else {
            write!(f, "Idx({})", self.0)
        }
    }
}

impl Default for Idx {
    fn default() -> Self {
        Self::NONE
    }
}

/// Index into the pool's signature table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SigId(u32);

impl SigId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigId({})", self.0)
    }
}
