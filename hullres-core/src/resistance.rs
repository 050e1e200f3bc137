//! Wetted surface area estimation and resistance-vs-speed curves.

mod curve;
mod wetted_area;


pub use curve::*;
pub use wetted_area::*;

use crate::hull::HullParameters;
use crate::imports::*;

/// Estimates the wetted surface area by `method_tag` and samples the
/// resulting resistance curve.  Unknown tags resolve to zero area, see
/// [estimate_by_tag].
pub fn calc_resistance_curve(method_tag: &str, params: &HullParameters) -> ResistanceCurve {
    let surface_area = estimate_by_tag(method_tag, params);
    #[cfg(feature = "logging")]
    log::debug!(
        "{}",
        format_dbg!((method_tag, surface_area.get::<si::square_meter>()))
    );
    ResistanceCurve {
        method: method_tag.to_string(),
        ..generate(surface_area, params)
    }
}

/// Like [calc_resistance_curve], but rejects unknown method tags with
/// [HullResError::UnknownMethod].
pub fn calc_resistance_curve_strict(
    method_tag: &str,
    params: &HullParameters,
) -> HullResResult<ResistanceCurve> {
    let method: SurfaceAreaMethod = method_tag.parse()?;
    Ok(ResistanceCurve {
        method: method.tag().to_string(),
        ..generate(estimate(method, params), params)
    })
}
