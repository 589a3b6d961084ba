use std::iter::FusedIterator;

use super::{Link, LinkState};

/// A borrowed traversal over the elements of a [`Link`], front to back.
pub(crate) struct Iter<'a, T> {
    pub(crate) link: &'a Link<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link: &'a Link<T> = self.link;
        match &link.state {
            LinkState::Empty => None,
            LinkState::Full(node) => {
                self.link = &node.rest;
                Some(&node.first)
            },
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            link: self.link,
        }
    }
}
