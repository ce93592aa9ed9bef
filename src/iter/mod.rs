//! Lazy tuple producers over buffers and views.
//!
//! [`group`] walks one buffer in non-overlapping windows of `N`; [`zip2`],
//! [`zip3`] and [`zip4`] walk several buffers in lock step. Neither
//! materializes anything: each item is copied out of the backing storage
//! as it is produced.
//!
//! ```
//! use linbuf::iter::{group, zip2};
//!
//! let xy = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let points: Vec<[f64; 2]> = group::<f64, 2, _>(&xy).collect();
//! assert_eq!(points, vec![[1.0, 2.0], [3.0, 4.0]]);
//!
//! let a = [1, -2, 3];
//! let b = [-1, 2, -3, 4];
//! let sums: Vec<i32> = zip2(&a, &b).map(|(_, x, y)| x + y).collect();
//! assert_eq!(sums, vec![0, 0, 0]);
//! ```

mod group;
mod zip;

pub use group::{group, group_ex, Group};
pub use zip::{zip2, zip3, zip4, Zip2, Zip3, Zip4};
