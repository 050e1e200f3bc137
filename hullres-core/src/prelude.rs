pub use crate::error::{HullResError, HullResResult};
pub use crate::hull::{HullParameters, FORM_FIELDS};
pub use crate::resistance::{
    calc_res, calc_resistance_curve, calc_resistance_curve_strict, estimate, estimate_by_tag,
    generate, speed_samples, ResistanceCurve, ResistanceSample, SampleSlice, SurfaceAreaMethod,
    N_SAMPLES, SPEED_MAX_MPS, SPEED_MIN_MPS,
};
pub use crate::si;
pub use crate::traits::{Init, SerdeAPI, Valid};
pub use crate::uc;
