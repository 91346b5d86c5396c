//! # Noise Configuration
//!
//! TOML description of a gradient field and the sampler reading it.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! width = 640
//! height = 480
//! chunk_size = 40
//! seed = 42                # absent: fresh entropy on every build
//! octaves = 3
//! persistence = 0.5
//! lacunarity = 2.0
//! shaping = "smoothstep"   # "smoothstep" | "unit_smoothstep" | "linear"
//! lower = -1.0
//! upper = 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::gradient::GradientField;
use crate::params::{NoiseParameters, OutputShaping};
use crate::sampler::NoiseSampler;

/// Configuration for building a [`GradientField`] and [`NoiseSampler`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Area width, in pixels.
    pub width: u32,
    /// Area height, in pixels.
    pub height: u32,
    /// Chunk side, in pixels.
    pub chunk_size: u32,
    /// Lattice seed. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Number of octaves.
    pub octaves: u32,
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub lacunarity: f64,
    /// Output shaping.
    pub shaping: OutputShaping,
    /// Lower output bound.
    pub lower: f64,
    /// Upper output bound.
    pub upper: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            chunk_size: 40,
            seed: None,
            octaves: NoiseParameters::DEFAULT_OCTAVE_COUNT,
            persistence: NoiseParameters::DEFAULT_PERSISTENCE,
            lacunarity: NoiseParameters::DEFAULT_LACUNARITY,
            shaping: OutputShaping::default(),
            lower: -1.0,
            upper: 1.0,
        }
    }
}

impl NoiseConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`NoiseError::InvalidConfig`] if the document does not parse.
    /// - [`NoiseError::InvalidDimension`] / [`NoiseError::InvalidParameter`]
    ///   if a value is outside its domain.
    pub fn from_toml_str(source: &str) -> NoiseResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|err| NoiseError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`NoiseError::Io`] if the file cannot be read, otherwise as
    /// [`NoiseConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> NoiseResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|err| NoiseError::Io(format!("{}: {err}", path.display())))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded noise config");
        Ok(config)
    }

    /// Checks every value against its domain.
    ///
    /// # Errors
    ///
    /// The first [`NoiseError::InvalidDimension`] or
    /// [`NoiseError::InvalidParameter`] found.
    pub fn validate(&self) -> NoiseResult<()> {
        if self.width == 0 || self.height == 0 || self.chunk_size == 0 {
            return Err(NoiseError::InvalidDimension {
                width: self.width,
                height: self.height,
                chunk_size: self.chunk_size,
            });
        }
        self.parameters().map(|_| ())
    }

    /// Validated sampler parameters.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidParameter`] for the first value outside its domain.
    pub fn parameters(&self) -> NoiseResult<NoiseParameters> {
        let mut params = NoiseParameters::new(self.octaves, self.persistence, self.lacunarity)?;
        params.set_shaping(self.shaping);
        params.set_bounds(self.lower, self.upper)?;
        Ok(params)
    }

    /// Builds the gradient lattice, seeded if a seed is configured.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidDimension`] if a dimension is zero.
    pub fn build_field(&self) -> NoiseResult<GradientField> {
        match self.seed {
            Some(seed) => GradientField::from_seed(self.width, self.height, self.chunk_size, seed),
            None => GradientField::new(self.width, self.height, self.chunk_size),
        }
    }

    /// Builds a sampler over a fresh lattice.
    ///
    /// # Errors
    ///
    /// As [`NoiseConfig::build_field`] and [`NoiseConfig::parameters`].
    pub fn build_sampler(&self) -> NoiseResult<NoiseSampler> {
        let params = self.parameters()?;
        Ok(NoiseSampler::with_params(self.build_field()?, params))
    }
}
