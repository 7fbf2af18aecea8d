//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, Signed, ToPrimitive};

/// A type that can be used as an ordinal label code.
///
/// These are constrained to be signed primitive integers,
/// so that the unseen sentinel (`-1`) is representable;
/// and the max code in a vocabulary must be less than `C::max()`.
pub trait CodeType:
    'static
    + PrimInt
    + Signed
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<C> CodeType for C where
    C: 'static
        + PrimInt
        + Signed
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// The code marking a value missing from the vocabulary.
#[inline(always)]
pub fn unseen_code<C: CodeType>() -> C {
    -C::one()
}

/// Convert a vocabulary position to a code.
///
/// ## Returns
/// `None` if the position does not fit in `C`.
#[inline(always)]
pub fn code_from_index<C: CodeType>(index: usize) -> Option<C> {
    C::from_usize(index)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type LCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> LCHashMap<K, V> {
            LCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type LCHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type LCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> LCHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type LCHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type LCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> LCHashMap<K, V> {
            LCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type LCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a type is `Send`.
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a type is `Sync`.
pub fn check_is_sync<S: Sync>(_: S) {}
