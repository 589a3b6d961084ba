use super::{Link, LinkState};

/// Returns a Link containing the consecutive integers from `start` up to, but excluding, `end`.
/// The result is empty if `start >= end`.
///
/// ```
/// use cons_list::collections::cons::range_link;
///
/// assert_eq!(format!("{:?}", range_link(3, 6)), "Link(3,Link(4,Link(5)))");
/// assert!(range_link(6, 3).is_empty());
/// ```
pub fn range_link(start: i64, end: i64) -> Link<i64> {
    // Built back to front, so each new node is consed onto the part already finished.
    (start..end)
        .rev()
        .fold(Link::empty(), |rest, value| Link::new(value, rest))
}

/// Returns a Link containing `f(x)` for each element `x` of `s`, in the same order. `f` is called
/// exactly once per element, from front to back.
///
/// ```
/// use cons_list::collections::cons::{map_link, range_link};
///
/// let square = |x: &i64| x * x;
/// assert_eq!(format!("{:?}", map_link(square, &range_link(3, 6))), "Link(9,Link(16,Link(25)))");
/// ```
pub fn map_link<T, U, F>(f: F, s: &Link<T>) -> Link<U>
where
    F: FnMut(&T) -> U,
{
    s.iter().map(f).collect()
}

/// Returns a Link containing only the elements `x` of `s` for which `f(x)` is true, in their
/// original order.
///
/// Elements after the last rejected one aren't copied; the result shares that suffix with `s`.
/// `f` is called exactly once per element, from front to back.
///
/// ```
/// use cons_list::collections::cons::{filter_link, range_link};
///
/// let odd = |x: &i64| x % 2 == 1;
/// assert_eq!(format!("{:?}", filter_link(odd, &range_link(3, 6))), "Link(3,Link(5))");
/// ```
pub fn filter_link<T, F>(mut f: F, s: &Link<T>) -> Link<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    // Kept elements seen so far, most recent first.
    let mut kept = Link::empty();
    // How many of the most recent kept elements follow the last rejected one.
    let mut kept_since_rejection = 0_usize;
    let mut shared = s;

    let mut curr = s;
    while let LinkState::Full(node) = &curr.state {
        if f(&node.first) {
            kept = Link::new(&node.first, kept);
            kept_since_rejection += 1;
        } else {
            kept_since_rejection = 0;
            shared = &node.rest;
        }
        curr = &node.rest;
    }

    kept.iter()
        .skip(kept_since_rejection)
        .fold(shared.clone(), |rest, value| Link::new((*value).clone(), rest))
}
