//! Range queries answered by monotonic working sets.
//!
//! Both families keep a sequence of *indices* whose referenced values are
//! ordered. Each index enters and leaves the working set at most
//! once, so every function here runs in O(n) total.
//!
//! | Function | Working set | Answer per position |
//! |----------|-------------|---------------------|
//! | [`next_greater_element`] | decreasing stack | first larger value to the right |
//! | [`next_smaller_element`] | increasing stack | first smaller value to the right |
//! | [`daily_temperatures`] | decreasing stack | distance to the first larger value |
//! | [`largest_rectangle_area`] | increasing stack | (single maximum) |
//! | [`sliding_window_maximum`] | [`MonotonicQueue`] | maximum of each width-`k` window |
//! | [`sliding_window_minimum`] | [`MonotonicQueue`] | minimum of each width-`k` window |
//!
//! ```
//! use linea_monotonic::{daily_temperatures, sliding_window_maximum};
//!
//! assert_eq!(
//!     daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]),
//!     vec![1, 1, 4, 2, 1, 1, 0, 0],
//! );
//! assert_eq!(
//!     sliding_window_maximum(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap(),
//!     vec![3, 3, 5, 5, 6, 7],
//! );
//! ```

#![warn(missing_docs)]

pub mod stack;
pub mod window;

pub use stack::{daily_temperatures, largest_rectangle_area, next_greater_element, next_smaller_element};
pub use window::{Extremum, MonotonicQueue, sliding_window_maximum, sliding_window_minimum};
