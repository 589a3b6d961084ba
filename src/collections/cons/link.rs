use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

use derive_more::IsVariant;

use super::{InvalidRestType, Iter};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// An immutable, singly linked cons list. Each non-empty Link holds an element (`first`) and the
/// remainder of the sequence (`rest`), which is either another Link or empty.
///
/// Links are never mutated after construction. Tails are reference counted, so any number of
/// lists can share a common suffix and cloning a Link is `O(1)`.
///
/// # Time Complexity
/// For this analysis of time complexity, `n` is the number of items in the Link.
///
/// | Method | Complexity |
/// |-|-|
/// | `new/single` | `O(1)` |
/// | `first/rest` | `O(1)` |
/// | `clone` | `O(1)` |
/// | `is_empty` | `O(1)` |
/// | `len` | `O(n)` |
/// | `eq/hash` | `O(n)` |
///
/// None of the operations on a Link recurse, so lists of any length can be built, formatted,
/// compared and dropped without exhausting the stack.
///
/// ```
/// use cons_list::collections::cons::Link;
///
/// let list = Link::new(3, Link::new(4, Link::single(5)));
/// assert_eq!(format!("{list}"), "<3 4 5>");
/// assert_eq!(format!("{list:?}"), "Link(3,Link(4,Link(5)))");
/// ```
pub struct Link<T> {
    pub(crate) state: LinkState<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum LinkState<T> {
    #[default]
    Empty,
    Full(Rc<Node<T>>),
}

use LinkState::*;

pub(crate) struct Node<T> {
    pub first: T,
    pub rest: Link<T>,
}

impl<T> Link<T> {
    /// Creates a new, empty Link.
    pub const fn empty() -> Link<T> {
        Link {
            state: Empty,
        }
    }

    /// Creates a Link with `first` as its element, followed by `rest`.
    pub fn new(first: T, rest: Link<T>) -> Link<T> {
        Link {
            state: Full(Rc::new(Node { first, rest })),
        }
    }

    /// Creates a Link containing only `first`.
    pub fn single(first: T) -> Link<T> {
        Link::new(first, Link::empty())
    }

    /// Returns true if this Link is the empty sequence.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the number of elements in the Link, walking the whole list to do so.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns a reference to the first element, if the Link isn't empty.
    pub fn first(&self) -> Option<&T> {
        self.split().map(|(first, _)| first)
    }

    /// Returns a reference to the remainder of the list, if the Link isn't empty.
    pub fn rest(&self) -> Option<&Link<T>> {
        self.split().map(|(_, rest)| rest)
    }

    /// Returns references to both the first element and the remainder of the list, if the Link
    /// isn't empty.
    pub fn split(&self) -> Option<(&T, &Link<T>)> {
        match &self.state {
            Empty => None,
            Full(node) => Some((&node.first, &node.rest)),
        }
    }

    /// Returns true if both Links are the same list, rather than just structurally equal. Any two
    /// empty Links are the same list.
    pub fn ptr_eq(&self, other: &Link<T>) -> bool {
        match (&self.state, &other.state) {
            (Empty, Empty) => true,
            (Full(a), Full(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) const fn iter(&self) -> Iter<'_, T> {
        Iter {
            link: self,
        }
    }

    /// Reverses a Link by taking ownership of each of its nodes.
    ///
    /// # Safety
    /// Every node in the list must be uniquely owned by it, such as a list that was just built
    /// and never cloned.
    pub(crate) unsafe fn into_reversed(mut self) -> Link<T> {
        let mut reversed = Link::empty();
        while let Full(node) = mem::take(&mut self.state) {
            // SAFETY: The caller guarantees that no other Link references this node.
            let Node { first, rest } = unsafe { Rc::into_inner(node).unreachable() };
            reversed = Link::new(first, reversed);
            self = rest;
        }
        reversed
    }
}

impl<T: 'static> Link<T> {
    /// Creates a Link from a dynamically typed `rest`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `rest` isn't a `Link<T>`.
    pub fn new_any(first: T, rest: Box<dyn Any>) -> Link<T> {
        Link::try_new_any(first, rest).throw()
    }

    /// Creates a Link from a dynamically typed `rest`, returning an [`Err`] on a failure rather
    /// than panicking.
    ///
    /// ```
    /// use cons_list::collections::cons::{InvalidRestType, Link};
    ///
    /// let list = Link::try_new_any(1, Box::new(Link::single(2_i32)));
    /// assert_eq!(list, Ok(Link::new(1, Link::single(2))));
    ///
    /// let list = Link::try_new_any(1, Box::new(2));
    /// assert_eq!(list, Err(InvalidRestType));
    /// ```
    pub fn try_new_any(first: T, rest: Box<dyn Any>) -> Result<Link<T>, InvalidRestType> {
        let rest = rest.downcast::<Link<T>>().map_err(|_| InvalidRestType)?;
        Ok(Link::new(first, *rest))
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Link {
            state: match &self.state {
                Empty => Empty,
                Full(node) => Full(Rc::clone(node)),
            },
        }
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, stopping at the first node that is still shared with
        // another list.
        let mut curr = mem::take(&mut self.state);
        while let Full(node) = curr {
            match Rc::into_inner(node) {
                Some(mut node) => curr = mem::take(&mut node.rest.state),
                None => break,
            }
        }
    }
}

impl<T> FromIterator<T> for Link<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let reversed = iter
            .into_iter()
            .fold(Link::empty(), |rest, first| Link::new(first, rest));

        // SAFETY: reversed was built above and never cloned.
        unsafe { reversed.into_reversed() }
    }
}

impl<T: PartialEq> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self;
        let mut b = other;

        loop {
            match (&a.state, &b.state) {
                (Empty, Empty) => break true,
                (Full(node_a), Full(node_b)) => {
                    if Rc::ptr_eq(node_a, node_b) {
                        break true;
                    }
                    if node_a.first != node_b.first {
                        break false;
                    }
                    a = &node_a.rest;
                    b = &node_b.rest;
                },
                _ => break false,
            }
        }
    }
}

impl<T: Eq> Eq for Link<T> {}

impl<T: Hash> Hash for Link<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for value in self.iter() {
            value.hash(state);
            len += 1;
        }

        // Terminate variable length hashing sequence.
        len.hash(state);
    }
}

impl<T: Debug> Debug for Link<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        let mut depth = 0_usize;
        let mut curr = self;
        while let Full(node) = &curr.state {
            if depth > 0 {
                write!(f, ",")?;
            }
            write!(f, "Link({:?}", node.first)?;
            depth += 1;
            curr = &node.rest;
        }

        for _ in 0..depth {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Link<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ">")
    }
}
