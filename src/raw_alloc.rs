//! Fallible single-value heap allocation.
//!
//! `Box::try_new` would be the natural fit here but sits behind the
//! unstable allocator API; this allocates and writes through the global
//! allocator directly and hands the result back as an ordinary [`Box`].

use crate::compat::Box;
use crate::error::Error;
use core::alloc::Layout;

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        use std::alloc::alloc;
    } else {
        extern crate alloc as alloc_crate;
        use alloc_crate::alloc::alloc;
    }
}

pub(crate) fn try_new_boxed<T>(value: T) -> Result<Box<T>, Error> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }
    // SAFETY: `layout` is non-zero-sized; a null return means allocation
    // failure, handled below before any use of `ptr`.
    let ptr = unsafe { alloc(layout) } as *mut T;
    if ptr.is_null() {
        return Err(Error::OutOfMemory);
    }
    // SAFETY: `ptr` was just allocated with `Layout::new::<T>()` from the
    // global allocator and is non-null, matching what `Box<T>` requires.
    unsafe {
        ptr.write(value);
        Ok(Box::from_raw(ptr))
    }
}
