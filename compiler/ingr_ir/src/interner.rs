//! String interner for identifiers.
//!
//! Provides O(1) interning and lookup. Shared by reference across the
//! parallel expansion passes, which intern canonical names concurrently.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Strings are leaked on first insertion, so lookups hand out `&'static str`.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        Self {
            table: RwLock::new(InternTable {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        // Fast path: check if already interned
        if let Some(&name) = self.table.read().map.get(s) {
            return name;
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return name;
        }

        let raw = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded {} entries", u32::MAX));
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        name
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings[name.index()]
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
