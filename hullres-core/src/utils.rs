use crate::imports::*;

/// Returns true if `val1` and `val2` are within a relative or absolute
/// `epsilon` of each other (default 1e-8).
pub fn almost_eq(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(1e-8);
    ((val2 - val1) / (val1 + val2)).abs() < epsilon || (val2 - val1).abs() < epsilon
}

/// [almost_eq] for uom quantities, compared on their SI base values
pub fn almost_eq_uom<D, U>(
    val1: &uom::si::Quantity<D, U, f64>,
    val2: &uom::si::Quantity<D, U, f64>,
    epsilon: Option<f64>,
) -> bool
where
    D: uom::si::Dimension + ?Sized,
    U: uom::si::Units<f64> + ?Sized,
{
    almost_eq(val1.value, val2.value, epsilon)
}
