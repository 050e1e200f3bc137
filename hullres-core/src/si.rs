//! Import uom si system and add unit constants
//! Zero values should be created using standard uom syntax ($Quantity::ZERO) after adding "use crate::imports::*"
//! Non-zero values should be created using standard uom syntax ($Quantity::new::<$unit>($value)) or multiplication syntax ($value * $UNIT_CONSTANT)

use uom::si;

pub use si::area::square_meter;
pub use si::f64::{Area, Force, Length, Ratio, Velocity, Volume};
pub use si::force::newton;
pub use si::length::meter;
pub use si::ratio::ratio;
pub use si::velocity::meter_per_second;
pub use si::volume::cubic_meter;
