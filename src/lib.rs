#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod linked_map;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// A hash map that preserves insertion order, implemented as a doubly-linked
/// list threaded through an arena and backed by a hash table for O(1)
/// lookups.
///
/// This alias fixes the hasher to the default one; to supply a different
/// hasher, use [`linked_map::LinkedMap`] directly.
///
/// # Examples
///
/// ```
/// use linked_map::LinkedMap;
///
/// let mut map = LinkedMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// // Entries come back in the order they went in.
/// let entries: Vec<_> = map.iter().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type LinkedMap<K, V> = crate::linked_map::LinkedMap<K, V, RandomState>;
use core::num::NonZeroU32;

pub use linked_map::IntoIter;
pub use linked_map::Iter;
pub use linked_map::Keys;
pub use linked_map::Values;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A stable handle to an entry in a linked map.
///
/// Pointers come from [`get_ptr`] and the other `*_ptr` accessors, and allow
/// O(1) access to an entry without hashing its key again. A pointer stays
/// valid until its entry is removed, no matter how the rest of the map
/// changes. Pointers are **non-generational**: after an entry is removed, a
/// later insertion may reuse its pointer.
///
/// [`get_ptr`]: linked_map::LinkedMap::get_ptr
///
/// # Examples
///
/// ```
/// use linked_map::LinkedMap;
///
/// let mut map = LinkedMap::new();
/// map.insert("key", 42);
/// let ptr = map.get_ptr(&"key").unwrap();
///
/// // Use the pointer for direct access
/// assert_eq!(map.ptr_get(ptr), Some(&42));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Ptr").field(&self.index()).finish()
    }
}

impl Ptr {
    /// Index biased by one so `Option<Ptr>` keeps the size of a `u32`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "arena index out of Ptr range: {index}");
        Ptr(NonZeroU32::new(index as u32 + 1).unwrap())
    }

    pub(crate) fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
