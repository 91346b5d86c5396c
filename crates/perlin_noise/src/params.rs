//! # Noise Parameters
//!
//! Octave count, persistence, lacunarity and the output transform.
//!
//! Every setter validates its input and leaves the previous value in place
//! when it rejects one.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};

/// How the normalized octave sum is shaped before bounds are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputShaping {
    /// `(3 - 2n) * n^2` applied directly to the normalized sum `n`.
    ///
    /// The polynomial is a smoothstep on `[0, 1]`; negative sums are
    /// folded upwards by it.
    #[default]
    Smoothstep,
    /// `n` is clamped to `[-1, 1]`, moved into `[0, 1]`, smoothstepped and
    /// moved back into `[-1, 1]`.
    UnitSmoothstep,
    /// The normalized sum, unshaped.
    Linear,
}

impl OutputShaping {
    /// Applies the shaping to a normalized octave sum.
    #[inline]
    #[must_use]
    pub fn apply(self, normalized: f64) -> f64 {
        match self {
            Self::Smoothstep => smoothstep(normalized),
            Self::UnitSmoothstep => {
                let unit = (normalized.clamp(-1.0, 1.0) + 1.0) * 0.5;
                smoothstep(unit) * 2.0 - 1.0
            }
            Self::Linear => normalized,
        }
    }
}

/// Cubic smoothstep polynomial `(3 - 2t) * t^2`.
#[inline]
fn smoothstep(t: f64) -> f64 {
    (3.0 - 2.0 * t) * t * t
}

/// Target range of the final value.
///
/// A shaped value `v` is mapped as `lower + (v + 1) / 2 * (upper - lower)`,
/// so the default `[-1, 1]` leaves values untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputBounds {
    lower: f64,
    upper: f64,
}

impl OutputBounds {
    /// Creates bounds.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] unless both ends are finite
    /// and `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> NoiseResult<Self> {
        if lower.is_finite() && upper.is_finite() && lower < upper {
            Ok(Self { lower, upper })
        } else {
            Err(NoiseError::parameter("bounds", format!("[{lower}, {upper}]")))
        }
    }

    /// Lower end of the range.
    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    /// Upper end of the range.
    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    /// Maps a value from `[-1, 1]` into these bounds.
    #[inline]
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.lower + (value + 1.0) * 0.5 * (self.upper - self.lower)
    }
}

impl Default for OutputBounds {
    fn default() -> Self {
        Self {
            lower: -1.0,
            upper: 1.0,
        }
    }
}

/// Parameters of the octave summation.
///
/// A plain `Copy` value: a sampling pass can take a snapshot and sample with
/// it while the owner keeps editing its own copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParameters {
    octave_count: u32,
    persistence: f64,
    lacunarity: f64,
    shaping: OutputShaping,
    bounds: OutputBounds,
}

impl NoiseParameters {
    /// Default number of octaves.
    pub const DEFAULT_OCTAVE_COUNT: u32 = 3;
    /// Default amplitude decay per octave.
    pub const DEFAULT_PERSISTENCE: f64 = 0.5;
    /// Default frequency growth per octave.
    pub const DEFAULT_LACUNARITY: f64 = 2.0;

    /// Creates validated parameters with default shaping and bounds.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] for the first value outside
    /// its domain.
    pub fn new(octave_count: u32, persistence: f64, lacunarity: f64) -> NoiseResult<Self> {
        let mut params = Self::default();
        params.set_octave_count(octave_count)?;
        params.set_persistence(persistence)?;
        params.set_lacunarity(lacunarity)?;
        Ok(params)
    }

    /// Number of octaves summed.
    #[must_use]
    pub fn octave_count(&self) -> u32 {
        self.octave_count
    }

    /// Amplitude decay per octave.
    #[must_use]
    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Frequency growth per octave.
    #[must_use]
    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Output shaping.
    #[must_use]
    pub fn shaping(&self) -> OutputShaping {
        self.shaping
    }

    /// Output bounds.
    #[must_use]
    pub fn bounds(&self) -> OutputBounds {
        self.bounds
    }

    /// Sets the octave count.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] for zero.
    pub fn set_octave_count(&mut self, octave_count: u32) -> NoiseResult<()> {
        if octave_count == 0 {
            return Err(rejected("octave_count", octave_count));
        }
        self.octave_count = octave_count;
        Ok(())
    }

    /// Sets the persistence.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] unless `0 < persistence < 1`.
    pub fn set_persistence(&mut self, persistence: f64) -> NoiseResult<()> {
        // NaN fails both comparisons
        if !(persistence > 0.0 && persistence < 1.0) {
            return Err(rejected("persistence", persistence));
        }
        self.persistence = persistence;
        Ok(())
    }

    /// Sets the lacunarity.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] unless `lacunarity > 1` and finite.
    pub fn set_lacunarity(&mut self, lacunarity: f64) -> NoiseResult<()> {
        if !(lacunarity > 1.0 && lacunarity.is_finite()) {
            return Err(rejected("lacunarity", lacunarity));
        }
        self.lacunarity = lacunarity;
        Ok(())
    }

    /// Sets the output shaping.
    pub fn set_shaping(&mut self, shaping: OutputShaping) {
        self.shaping = shaping;
    }

    /// Sets the output bounds.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] unless both ends are finite
    /// and `lower < upper`.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> NoiseResult<()> {
        let bounds = OutputBounds::new(lower, upper).map_err(|err| {
            tracing::debug!(lower, upper, "rejected bounds");
            err
        })?;
        self.bounds = bounds;
        Ok(())
    }
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            octave_count: Self::DEFAULT_OCTAVE_COUNT,
            persistence: Self::DEFAULT_PERSISTENCE,
            lacunarity: Self::DEFAULT_LACUNARITY,
            shaping: OutputShaping::default(),
            bounds: OutputBounds::default(),
        }
    }
}

fn rejected(name: &'static str, value: impl ToString) -> NoiseError {
    let value = value.to_string();
    tracing::debug!(parameter = name, value = %value, "rejected noise parameter");
    NoiseError::InvalidParameter { name, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = NoiseParameters::default();
        assert_eq!(params.octave_count(), 3);
        assert_eq!(params.persistence(), 0.5);
        assert_eq!(params.lacunarity(), 2.0);
        assert_eq!(params.shaping(), OutputShaping::Smoothstep);
        assert_eq!(params.bounds(), OutputBounds::default());
    }

    #[test]
    fn test_persistence_rejections_keep_value() {
        let mut params = NoiseParameters::default();
        params.set_persistence(0.25).unwrap();

        for bad in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(matches!(
                params.set_persistence(bad),
                Err(NoiseError::InvalidParameter { name: "persistence", .. })
            ));
            assert_eq!(params.persistence(), 0.25);
        }
    }

    #[test]
    fn test_octave_and_lacunarity_validation() {
        let mut params = NoiseParameters::default();
        assert!(params.set_octave_count(0).is_err());
        assert_eq!(params.octave_count(), 3);

        assert!(params.set_lacunarity(1.0).is_err());
        assert!(params.set_lacunarity(f64::INFINITY).is_err());
        assert_eq!(params.lacunarity(), 2.0);
        params.set_lacunarity(1.0001).unwrap();
        assert_eq!(params.lacunarity(), 1.0001);
    }

    #[test]
    fn test_new_validates() {
        assert!(NoiseParameters::new(4, 0.6, 2.5).is_ok());
        assert!(NoiseParameters::new(0, 0.6, 2.5).is_err());
        assert!(NoiseParameters::new(4, 1.6, 2.5).is_err());
        assert!(NoiseParameters::new(4, 0.6, 0.5).is_err());
    }

    #[test]
    fn test_bounds() {
        let mut params = NoiseParameters::default();
        assert!(params.set_bounds(1.0, 1.0).is_err());
        assert!(params.set_bounds(2.0, -2.0).is_err());
        assert!(params.set_bounds(f64::NEG_INFINITY, 0.0).is_err());
        assert_eq!(params.bounds(), OutputBounds::default());

        params.set_bounds(0.0, 255.0).unwrap();
        let bounds = params.bounds();
        assert_eq!(bounds.map(-1.0), 0.0);
        assert_eq!(bounds.map(1.0), 255.0);
        assert_eq!(bounds.map(0.0), 127.5);
    }

    #[test]
    fn test_default_bounds_are_identity() {
        let bounds = OutputBounds::default();
        for v in [-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert!((bounds.map(v) - v).abs() < 1e-15);
        }
    }

    #[test]
    fn test_shaping() {
        // Documented formula, applied as-is
        assert_eq!(OutputShaping::Smoothstep.apply(0.0), 0.0);
        assert_eq!(OutputShaping::Smoothstep.apply(0.5), 0.5);
        assert_eq!(OutputShaping::Smoothstep.apply(1.0), 1.0);
        assert_eq!(OutputShaping::Smoothstep.apply(-0.5), 1.0);
        assert_eq!(OutputShaping::Smoothstep.apply(-1.0), 5.0);

        // Unit variant stays inside [-1, 1] and is odd-symmetric
        assert_eq!(OutputShaping::UnitSmoothstep.apply(-1.0), -1.0);
        assert_eq!(OutputShaping::UnitSmoothstep.apply(0.0), 0.0);
        assert_eq!(OutputShaping::UnitSmoothstep.apply(1.0), 1.0);
        assert_eq!(OutputShaping::UnitSmoothstep.apply(3.0), 1.0);
        let a = OutputShaping::UnitSmoothstep.apply(0.4);
        let b = OutputShaping::UnitSmoothstep.apply(-0.4);
        assert!((a + b).abs() < 1e-12);

        assert_eq!(OutputShaping::Linear.apply(-0.75), -0.75);
    }
}
