//! A module containing [`Link`], an immutable cons list, and the free functions that build new
//! Links out of existing ones.
//!
//! Links share their tails, so [`filter_link`] and cloning avoid copying wherever a suffix can be
//! reused as-is.
//!
//! ```
//! use cons_list::collections::cons::{filter_link, map_link, range_link};
//!
//! let square = |x: &i64| x * x;
//! let odd = |x: &i64| x % 2 == 1;
//!
//! assert_eq!(format!("{}", range_link(3, 6)), "<3 4 5>");
//! assert_eq!(format!("{:?}", map_link(square, &range_link(3, 6))), "Link(9,Link(16,Link(25)))");
//! assert_eq!(format!("{:?}", filter_link(odd, &range_link(3, 6))), "Link(3,Link(5))");
//! ```

mod error;
mod iter;
mod link;
mod ops;
mod parse;

pub use error::*;
pub(crate) use iter::*;
pub use link::*;
pub use ops::*;
