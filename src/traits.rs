//! Interfaces and types used by the container backends to manage, compare
//! and hash the values they store: a `destructor`, `compare`, `hash` and
//! `max_load` hook per user type. Rust's automatic [`Drop`] already performs
//! the destructor role for any `T: Drop` stored in a container, so no
//! explicit destructor hook is modeled here; [`ElementTraits`] is kept as a
//! marker so container signatures have a named bound to hang documentation
//! on.

use core::cmp::Ordering;
use core::hash::Hasher;

/// Types that may be stored as elements of a container.
///
/// Blanket-implemented for every `Sized` type; [`Drop`] already performs
/// whatever per-element cleanup a container needs, so this trait exists
/// only to give container type signatures a named bound to hang
/// documentation on.
pub trait ElementTraits {}

impl<T: ?Sized> ElementTraits for T {}

/// Types that may be used as keys of `HashMap`/`HashSet`.
///
/// Required: `Eq` (equality is always needed to confirm a probe match) and
/// [`key_hash`](HashKey::key_hash). [`MAX_LOAD`](HashKey::MAX_LOAD) is the
/// per-type hash table load factor, defaulting to `0.9`.
pub trait HashKey: ElementTraits + Eq {
    /// Hashes `self` into a 64-bit digest used to compute a bucket's home
    /// index and 4-bit metadata fragment.
    fn key_hash(&self) -> u64;

    /// Maximum load factor in `(0, 1]` before the table grows. Default
    /// `0.9`.
    const MAX_LOAD: f64 = 0.9;
}

/// Types that may be used as keys of `OrderedMap`/`OrderedSet`.
///
/// Required: a three-way [`key_cmp`](OrderedKey::key_cmp). Equality is
/// synthesized from it rather than requiring a separate `Eq` bound.
pub trait OrderedKey: ElementTraits {
    /// Three-way ordering used to place `self` in the tree.
    fn key_cmp(&self, other: &Self) -> Ordering;
}

/// A one-shot, non-cryptographic hash wrapping `wyhash`, used by every
/// built-in [`HashKey`] impl below and available as a [`Hasher`] for callers
/// who want one directly.
#[derive(Default)]
pub struct WyHasher(wyhash::WyHash);

impl Hasher for WyHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0.finish()
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes)
    }
}

#[inline]
fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = WyHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

macro_rules! impl_hash_key_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HashKey for $ty {
                #[inline]
                fn key_hash(&self) -> u64 {
                    hash_bytes(&self.to_ne_bytes())
                }
            }
            impl OrderedKey for $ty {
                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_hash_key_for_int!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl HashKey for bool {
    #[inline]
    fn key_hash(&self) -> u64 {
        hash_bytes(&[*self as u8])
    }
}
impl OrderedKey for bool {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl HashKey for crate::compat::String {
    #[inline]
    fn key_hash(&self) -> u64 {
        hash_bytes(self.as_bytes())
    }
}
impl OrderedKey for crate::compat::String {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self.as_str(), other.as_str())
    }
}

impl HashKey for &str {
    #[inline]
    fn key_hash(&self) -> u64 {
        hash_bytes(self.as_bytes())
    }
}
impl OrderedKey for &str {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(*self, *other)
    }
}

/// Lets `HashMap<ManagedString, _>`/`HashSet<ManagedString>` be queried by a
/// borrowed `[u8]` slice directly, so a lookup by a string literal or other
/// borrowed byte buffer allocates nothing (mirrors looking a managed string
/// up by a raw, unowned C string).
impl HashKey for [u8] {
    #[inline]
    fn key_hash(&self) -> u64 {
        hash_bytes(self)
    }
}
impl OrderedKey for [u8] {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

/// Same heterogeneous-lookup role as the `[u8]` impls above, for callers
/// borrowing a `str` instead of raw bytes.
impl HashKey for str {
    #[inline]
    fn key_hash(&self) -> u64 {
        hash_bytes(self.as_bytes())
    }
}
impl OrderedKey for str {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}
