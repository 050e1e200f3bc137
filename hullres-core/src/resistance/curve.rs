use crate::hull::HullParameters;
use crate::imports::*;

/// Lowest sampled speed, m/s
pub const SPEED_MIN_MPS: f64 = 1.0;
/// Highest sampled speed, m/s
pub const SPEED_MAX_MPS: f64 = 10.0;
/// Number of samples in every [ResistanceCurve]
pub const N_SAMPLES: usize = 100;

/// Sample speeds of every curve, evenly spaced and including both endpoints
pub fn speed_samples() -> Vec<si::Velocity> {
    Vec::<f64>::linspace(SPEED_MIN_MPS, SPEED_MAX_MPS, N_SAMPLES)
        .into_iter()
        .map(|v| v * uc::MPS)
        .collect()
}

/// Hull resistance at `speed`, combining a frictional term that scales with
/// wetted surface area and a residual term that scales with displacement:
///
/// R = 0.17*S*v^1.825 + 1.45*(24 - L/B)*delta^2.5*(W/L^2)*v^4
pub fn calc_res(
    surface_area: si::Area,
    params: &HullParameters,
    speed: si::Velocity,
) -> si::Force {
    let h = params.values();
    let s = surface_area.get::<si::square_meter>();
    let v = speed.get::<si::meter_per_second>();
    let res = 0.17 * s * v.powf(1.825)
        + 1.45
            * (24.0 - h.length / h.breadth)
            * h.block_coeff.powf(2.5)
            * (h.weight / h.length.powi(2))
            * v.powi(4);
    res * uc::N
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceSample {
    pub speed: si::Velocity,
    pub resistance: si::Force,
}

#[ext(SampleSlice)]
pub impl [ResistanceSample] {
    /// First sample whose speed or resistance is NaN or infinite
    fn first_non_finite(&self) -> Option<(usize, &ResistanceSample)> {
        self.iter()
            .enumerate()
            .find(|(_, s)| !s.speed.value.is_finite() || !s.resistance.value.is_finite())
    }

    fn is_strictly_ascending(&self) -> bool {
        self.windows(2).all(|w| w[0].speed < w[1].speed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Resistance sampled at [N_SAMPLES] speeds from [SPEED_MIN_MPS] to
/// [SPEED_MAX_MPS], in ascending speed order.
pub struct ResistanceCurve {
    /// Method tag the surface area was estimated with, empty when the area
    /// was supplied directly
    pub method: String,
    /// Wetted surface area the curve was generated from
    pub surface_area: si::Area,
    pub(crate) samples: Vec<ResistanceSample>,
}

impl ResistanceCurve {
    /// Evaluates [calc_res] at every speed in [speed_samples].  Arithmetic
    /// failures are not caught here; see [Self::ensure_finite].
    pub fn generate(surface_area: si::Area, params: &HullParameters) -> Self {
        let samples = speed_samples()
            .into_iter()
            .map(|speed| ResistanceSample {
                speed,
                resistance: calc_res(surface_area, params, speed),
            })
            .collect();
        Self {
            method: String::new(),
            surface_area,
            samples,
        }
    }

    pub fn samples(&self) -> &[ResistanceSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn speeds(&self) -> Vec<si::Velocity> {
        self.samples.iter().map(|s| s.speed).collect()
    }

    pub fn resistances(&self) -> Vec<si::Force> {
        self.samples.iter().map(|s| s.resistance).collect()
    }

    /// Errors on the first sample that is not finite, e.g. from zero length or
    /// breadth, so that callers can report a failed computation instead of
    /// rendering it.
    pub fn ensure_finite(&self) -> HullResResult<()> {
        match self.samples.first_non_finite() {
            Some((index, sample)) => Err(HullResError::NumericDegeneracy {
                index,
                speed: sample.speed.get::<si::meter_per_second>(),
                resistance: sample.resistance.get::<si::newton>(),
            }),
            None => Ok(()),
        }
    }

    /// Writes `speed_mps,resistance_n` rows with a header line
    pub fn to_csv_writer<W: std::io::Write>(&self, wtr: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(wtr);
        wtr.write_record(["speed_mps", "resistance_n"])?;
        for sample in &self.samples {
            wtr.write_record(&[
                sample.speed.get::<si::meter_per_second>().to_string(),
                sample.resistance.get::<si::newton>().to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_file<P: AsRef<Path>>(&self, filepath: P) -> anyhow::Result<()> {
        let filepath = filepath.as_ref();
        let file = File::create(filepath)
            .with_context(|| format!("Could not create file: {filepath:?}"))?;
        self.to_csv_writer(file)
    }
}

/// Resistance curve of a hull with wetted surface area `surface_area`
pub fn generate(surface_area: si::Area, params: &HullParameters) -> ResistanceCurve {
    ResistanceCurve::generate(surface_area, params)
}

impl Init for ResistanceCurve {
    fn init(&mut self) -> anyhow::Result<()> {
        ensure!(
            self.samples.len() == N_SAMPLES,
            "{}\nExpected {N_SAMPLES} samples, found {}",
            format_dbg!(),
            self.samples.len()
        );
        ensure!(
            self.samples.is_strictly_ascending(),
            "{}\nSample speeds must be strictly ascending",
            format_dbg!()
        );
        Ok(())
    }
}
impl SerdeAPI for ResistanceCurve {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_grid() {
        let curve = generate(1000.0 * uc::M2, &HullParameters::valid());
        assert_eq!(curve.len(), N_SAMPLES);
        let speeds: Vec<f64> = curve
            .speeds()
            .iter()
            .map(|v| v.get::<si::meter_per_second>())
            .collect();
        assert_eq!(speeds[0], 1.0);
        assert_eq!(speeds[N_SAMPLES - 1], 10.0);
        for w in speeds.windows(2) {
            assert!(w[0] < w[1]);
            assert!(almost_eq(w[1] - w[0], 9.0 / 99.0, Some(1e-12)));
        }
    }

    #[test]
    fn test_weight_term_only() {
        let params = HullParameters::valid();
        let curve = generate(si::Area::ZERO, &params);
        // 1.45*(24 - 100/15)*0.65^2.5*(5e6/100^2)*v^4
        let res = curve.resistances();
        assert!(almost_eq(res[0].get::<si::newton>(), 4280.588565977879, Some(1e-9)));
        assert!(almost_eq(
            res[N_SAMPLES - 1].get::<si::newton>(),
            42805885.65977879,
            Some(1e-9)
        ));
    }

    #[test]
    fn test_friction_term_only() {
        let mut params = HullParameters::valid();
        params.weight = si::Force::ZERO;
        let res = calc_res(1000.0 * uc::M2, &params, 10.0 * uc::MPS);
        assert!(almost_eq(
            res.get::<si::newton>(),
            0.17 * 1000.0 * 10f64.powf(1.825),
            Some(1e-12)
        ));
    }

    #[test]
    fn test_zero_breadth_is_not_finite() {
        let mut params = HullParameters::valid();
        params.breadth = si::Length::ZERO;
        let curve = generate(1000.0 * uc::M2, &params);
        assert!(curve
            .resistances()
            .iter()
            .all(|r| !r.get::<si::newton>().is_finite()));
        match curve.ensure_finite() {
            Err(HullResError::NumericDegeneracy { index, speed, .. }) => {
                assert_eq!(index, 0);
                assert_eq!(speed, 1.0);
            }
            other => panic!("expected numeric degeneracy, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_length_is_not_finite() {
        let mut params = HullParameters::valid();
        params.length = si::Length::ZERO;
        let curve = generate(si::Area::ZERO, &params);
        assert!(curve.samples().first_non_finite().is_some());
        assert!(curve.ensure_finite().is_err());
    }

    #[test]
    fn test_csv() {
        let curve = generate(1000.0 * uc::M2, &HullParameters::valid());
        let mut buf = Vec::new();
        curve.to_csv_writer(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), N_SAMPLES + 1);
        assert_eq!(lines[0], "speed_mps,resistance_n");
        assert!(lines[1].starts_with("1,"));
        assert!(lines[N_SAMPLES].starts_with("10,"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        curve.to_csv_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn test_init_rejects_truncated_curve() {
        let mut curve = generate(1000.0 * uc::M2, &HullParameters::valid());
        assert!(curve.init().is_ok());
        curve.samples.pop();
        assert!(curve.init().is_err());
        let yaml = curve.to_yaml().unwrap();
        assert!(ResistanceCurve::from_yaml(&yaml, false).is_err());
        assert!(ResistanceCurve::from_yaml(&yaml, true).is_ok());
    }

    #[test]
    fn test_init_rejects_empty_curve() {
        let empty = ResistanceCurve {
            method: "karpov".into(),
            surface_area: si::Area::ZERO,
            samples: vec![],
        };
        assert!(empty.is_empty());
        let json = empty.to_json().unwrap();
        assert!(ResistanceCurve::from_json(&json, false).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let curve = generate(1000.0 * uc::M2, &HullParameters::valid());
        let bin = curve.to_bincode().unwrap();
        assert_eq!(ResistanceCurve::from_bincode(&bin).unwrap(), curve);

        let from_json = ResistanceCurve::from_json(curve.to_json().unwrap(), false).unwrap();
        assert_eq!(from_json.len(), N_SAMPLES);
        for (a, b) in from_json.samples().iter().zip(curve.samples()) {
            assert!(almost_eq_uom(&a.resistance, &b.resistance, Some(1e-12)));
        }
    }
}
