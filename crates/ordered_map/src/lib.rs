//! Ordered map used by the chess tournament tracker
//!
//! Keys are kept in ascending order according to a comparator supplied at
//! construction time (`Ord::cmp` by default). Lookups and insertions scan
//! linearly, which is fine for the tournament-sized collections it holds.
//!
//! Traversal comes in two flavours:
//! - borrowing iterators (`iter`, `iter_mut`, `keys`, `values`)
//! - explicit [`Cursor`]s that hand out owned key snapshots
//!
//! Every traversal owns its own position, so nesting two traversals over the
//! same map is fine.

pub mod cursor;
pub mod error;
pub mod map;

pub use cursor::Cursor;
pub use error::{MapError, MapResult};
pub use map::{Comparator, Iter, IterMut, OrderedMap};
