//! The cross-cutting allocation-result discipline shared by every container.
//!
//! Every operation that can allocate returns a `Result<Inserted<'_, T>,
//! Error>`. `Err` means the container is provably unchanged; `Ok` carries
//! either a reference to the affected element or [`Inserted::Done`] for
//! operations that succeed without producing one (`reserve`,
//! `shrink_to_fit`, …).
//!
//! `&mut self` already is the up-to-date handle to the container after a
//! call returns, so this module only needs to carry the payload half of a
//! fallible operation's result.

use crate::error::Error;

/// The payload half of a fallible container operation.
#[derive(Debug)]
pub enum Inserted<'a, T> {
    /// A reference to the element the operation inserted, overwrote, or
    /// otherwise produced.
    Element(&'a mut T),
    /// The operation succeeded but has no single element to hand back.
    Done,
}

impl<'a, T> Inserted<'a, T> {
    /// Returns the element reference, panicking if called on
    /// [`Inserted::Done`].
    ///
    /// Intended for call sites that statically know an element is produced,
    /// e.g. after `Vector::push`.
    #[track_caller]
    pub fn unwrap_element(self) -> &'a mut T {
        match self {
            Inserted::Element(el) => el,
            Inserted::Done => panic!("called `unwrap_element` on `Inserted::Done`"),
        }
    }

    /// Returns `Some` reference if this is [`Inserted::Element`].
    pub fn element(self) -> Option<&'a mut T> {
        match self {
            Inserted::Element(el) => Some(el),
            Inserted::Done => None,
        }
    }
}

/// The result type returned by every fallible container operation.
pub type AllocResult<'a, T> = Result<Inserted<'a, T>, Error>;
