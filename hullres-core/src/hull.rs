//! Principal dimensions of a hull as consumed by the resistance formulas.

use crate::imports::*;

/// Form field keys, in the order the delivery layer collects them
pub const FORM_FIELDS: [&str; 6] = ["L", "B", "d", "delta", "W", "V"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// Hull geometry and displacement.  No plausibility checks are applied;
/// degenerate values (e.g. zero draft) propagate through the formulas as
/// non-finite results.
pub struct HullParameters {
    /// Waterline length, L
    #[serde(alias = "L")]
    pub length: si::Length,
    /// Moulded breadth, B
    #[serde(alias = "B")]
    pub breadth: si::Length,
    /// Draft, d
    #[serde(alias = "d")]
    pub draft: si::Length,
    /// Block coefficient, delta
    #[serde(alias = "delta")]
    pub block_coeff: si::Ratio,
    /// Displacement weight, W
    #[serde(alias = "W")]
    pub weight: si::Force,
    /// Volumetric displacement, V
    #[serde(alias = "V")]
    pub volume: si::Volume,
}

/// SI base values of [HullParameters] for use in the empirical formulas,
/// whose coefficients are not dimensionally consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HullValues {
    pub length: f64,
    pub breadth: f64,
    pub draft: f64,
    pub block_coeff: f64,
    pub weight: f64,
    pub volume: f64,
}

impl HullParameters {
    pub fn new(
        length: si::Length,
        breadth: si::Length,
        draft: si::Length,
        block_coeff: si::Ratio,
        weight: si::Force,
        volume: si::Volume,
    ) -> Self {
        Self {
            length,
            breadth,
            draft,
            block_coeff,
            weight,
            volume,
        }
    }

    /// Builds parameters from raw form fields keyed by [FORM_FIELDS].
    /// Every field must be present and parse as a real number.
    pub fn from_form(form: &HashMap<String, String>) -> HullResResult<Self> {
        let mut params = Self::default();
        for key in FORM_FIELDS {
            let raw = form.get(key).ok_or_else(|| HullResError::InvalidInput {
                field: key.to_string(),
                reason: "missing field".into(),
            })?;
            params.set_field(key, parse_field(key, raw)?)?;
        }
        Ok(params)
    }

    /// Overrides only the fields present in `form`.  Keys outside
    /// [FORM_FIELDS] are rejected.
    pub fn apply_form(&mut self, form: &HashMap<String, String>) -> HullResResult<()> {
        for (key, raw) in form {
            let value = parse_field(key, raw)?;
            self.set_field(key, value)?;
        }
        Ok(())
    }

    /// Sets a field from its SI base value
    pub fn set_field(&mut self, key: &str, value: f64) -> HullResResult<()> {
        match key {
            "L" | "length" => self.length = value * uc::M,
            "B" | "breadth" => self.breadth = value * uc::M,
            "d" | "draft" => self.draft = value * uc::M,
            "delta" | "block_coeff" => self.block_coeff = value * uc::R,
            "W" | "weight" => self.weight = value * uc::N,
            "V" | "volume" => self.volume = value * uc::M3,
            _ => {
                return Err(HullResError::InvalidInput {
                    field: key.to_string(),
                    reason: format!("unrecognized field, must be one of {FORM_FIELDS:?}"),
                })
            }
        }
        Ok(())
    }

    pub(crate) fn values(&self) -> HullValues {
        HullValues {
            length: self.length.get::<si::meter>(),
            breadth: self.breadth.get::<si::meter>(),
            draft: self.draft.get::<si::meter>(),
            block_coeff: self.block_coeff.get::<si::ratio>(),
            weight: self.weight.get::<si::newton>(),
            volume: self.volume.get::<si::cubic_meter>(),
        }
    }
}

fn parse_field(key: &str, raw: &str) -> HullResResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| HullResError::InvalidInput {
            field: key.to_string(),
            reason: format!("{raw:?} is not a number ({err})"),
        })
}

impl Valid for HullParameters {
    fn valid() -> Self {
        Self {
            length: 100.0 * uc::M,
            breadth: 15.0 * uc::M,
            draft: 5.0 * uc::M,
            block_coeff: 0.65 * uc::R,
            weight: 5.0e6 * uc::N,
            volume: 4800.0 * uc::M3,
        }
    }
}

impl Init for HullParameters {}
impl SerdeAPI for HullParameters {}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> HashMap<String, String> {
        [
            ("L", "100"),
            ("B", "15"),
            ("d", "5"),
            ("delta", "0.65"),
            ("W", "5e6"),
            ("V", " 4800 "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_form() {
        let params = HullParameters::from_form(&valid_form()).unwrap();
        assert_eq!(params, HullParameters::valid());
    }

    #[test]
    fn test_from_form_missing_field() {
        let mut form = valid_form();
        form.remove("delta");
        match HullParameters::from_form(&form) {
            Err(HullResError::InvalidInput { field, .. }) => assert_eq!(field, "delta"),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_from_form_not_a_number() {
        let mut form = valid_form();
        form.insert("B".into(), "fifteen".into());
        let err = HullParameters::from_form(&form).unwrap_err();
        assert!(matches!(err, HullResError::InvalidInput { ref field, .. } if field == "B"));
        assert!(err.to_string().contains("fifteen"));
    }

    #[test]
    fn test_apply_form() {
        let mut params = HullParameters::valid();
        let form = HashMap::from([("d".to_string(), "6.5".to_string())]);
        params.apply_form(&form).unwrap();
        assert_eq!(params.draft, 6.5 * uc::M);
        assert_eq!(params.length, 100.0 * uc::M);

        let bad = HashMap::from([("T".to_string(), "1".to_string())]);
        assert!(params.apply_form(&bad).is_err());
    }

    #[test]
    fn test_serde_aliases() {
        let yaml = "L: 100.0\nB: 15.0\nd: 5.0\ndelta: 0.65\nW: 5000000.0\nV: 4800.0\n";
        let params = HullParameters::from_yaml(yaml, false).unwrap();
        assert_eq!(params, HullParameters::valid());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let params = HullParameters::valid();
        for ext in ["yaml", "json", "bin"] {
            let path = dir.path().join(format!("hull.{ext}"));
            params.to_file(&path).unwrap();
            assert_eq!(HullParameters::from_file(&path, false).unwrap(), params);
        }
        assert!(params.to_file(dir.path().join("hull.toml")).is_err());
    }
}
