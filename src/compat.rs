//! Compatibility layer for `no_std` compilations.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "std")] {
        pub use ::std::{
            vec,
            vec::Vec,
            string::String,
            boxed::Box,
            collections,
        };
    } else {
        extern crate alloc;
        pub use self::alloc::{
            vec,
            vec::Vec,
            string::String,
            boxed::Box,
            collections,
        };
    }
}
