//! Pure rust core for estimating the wetted surface area of a ship hull and
//! sampling its resistance over the speed range 1 to 10 m/s.
//!
//! ```
//! use hullres_core::prelude::*;
//!
//! let params = HullParameters::valid();
//! let curve = calc_resistance_curve("karpov", &params);
//! assert_eq!(curve.len(), N_SAMPLES);
//! assert!(curve.ensure_finite().is_ok());
//! ```

/// Generates a formatted string tagged with file and line number, optionally
/// followed by the debug representation of an expression.
#[macro_export]
macro_rules! format_dbg {
    ($dbg_expr:expr) => {
        format!(
            "[{}:{}] {}: {:?}",
            file!(),
            line!(),
            stringify!($dbg_expr),
            $dbg_expr
        )
    };
    () => {
        format!("[{}:{}]", file!(), line!())
    };
}

pub mod error;
pub mod hull;
pub(crate) mod imports;
pub mod prelude;
pub mod resistance;
pub mod si;
pub mod traits;
pub mod uc;
pub mod utils;
