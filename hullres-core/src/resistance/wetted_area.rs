use crate::hull::HullParameters;
use crate::imports::*;

/// Empirical models for the wetted surface area of a hull.  The serialized
/// tags are the method selectors used by existing forms and input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceAreaMethod {
    /// Towing tank standard for cargo ships
    #[serde(rename = "vantai")]
    TowingTank,
    /// Fast craft
    #[serde(rename = "nhanh")]
    FastCraft,
    /// Small fast craft, driven by displacement volume only
    #[serde(rename = "nho_nhanh")]
    SmallFastCraft,
    /// Muragin
    #[serde(rename = "muragin")]
    Muragin,
    /// Hulls with a large block coefficient
    #[serde(rename = "delta_lon")]
    LargeBlockCoeff,
    /// Karpov
    #[serde(rename = "karpov")]
    Karpov,
}

impl SurfaceAreaMethod {
    pub const ALL: [Self; 6] = [
        Self::TowingTank,
        Self::FastCraft,
        Self::SmallFastCraft,
        Self::Muragin,
        Self::LargeBlockCoeff,
        Self::Karpov,
    ];

    /// Method selector tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TowingTank => "vantai",
            Self::FastCraft => "nhanh",
            Self::SmallFastCraft => "nho_nhanh",
            Self::Muragin => "muragin",
            Self::LargeBlockCoeff => "delta_lon",
            Self::Karpov => "karpov",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TowingTank => "towing tank standard, L*d*(2 + 1.37*(delta - 0.274)*B/d)",
            Self::FastCraft => "fast craft, L*d*(1.36 + 1.37*delta*B/d)",
            Self::SmallFastCraft => "small fast craft, 2.75*sqrt(V*L)",
            Self::Muragin => "Muragin, L*d*(1.36 + 1.13*delta*B/d)",
            Self::LargeBlockCoeff => "large block coefficient, L*(0.5*B + d)*(0.55 + 1.52*delta)",
            Self::Karpov => "Karpov, cbrt(V^2)*(5.1 + 0.074*L/d - 0.4*delta)",
        }
    }

    /// Wetted surface area of `params` according to this method.  No
    /// validation is done, so e.g. zero draft yields a non-finite area.
    pub fn calc_area(&self, params: &HullParameters) -> si::Area {
        let h = params.values();
        let (l, b, d, delta, v) = (h.length, h.breadth, h.draft, h.block_coeff, h.volume);
        let area = match self {
            Self::TowingTank => l * d * (2.0 + 1.37 * (delta - 0.274) * b / d),
            Self::FastCraft => l * d * (1.36 + 1.37 * delta * b / d),
            Self::SmallFastCraft => 2.75 * (v * l).sqrt(),
            Self::Muragin => l * d * (1.36 + 1.13 * delta * b / d),
            Self::LargeBlockCoeff => l * (0.5 * b + d) * (0.55 + 1.52 * delta),
            Self::Karpov => v.powi(2).cbrt() * (5.1 + 0.074 * l / d - 0.4 * delta),
        };
        area * uc::M2
    }
}

impl fmt::Display for SurfaceAreaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SurfaceAreaMethod {
    type Err = HullResError;

    /// Strict parse of a method tag
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.tag() == tag)
            .ok_or_else(|| HullResError::UnknownMethod(tag.to_string()))
    }
}

impl TryFrom<&str> for SurfaceAreaMethod {
    type Error = HullResError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for SurfaceAreaMethod {
    type Error = HullResError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

/// Wetted surface area of `params` by `method`
pub fn estimate(method: SurfaceAreaMethod, params: &HullParameters) -> si::Area {
    method.calc_area(params)
}

/// Wetted surface area by method tag.  A tag outside
/// [SurfaceAreaMethod::ALL] yields zero area rather than an error, so the
/// resulting curve carries only the weight term.
pub fn estimate_by_tag(tag: &str, params: &HullParameters) -> si::Area {
    match tag.parse::<SurfaceAreaMethod>() {
        Ok(method) => method.calc_area(params),
        Err(_err) => {
            #[cfg(feature = "logging")]
            log::warn!("{_err}; using zero wetted surface area");
            si::Area::ZERO
        }
    }
}
