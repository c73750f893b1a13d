//! Chromatic Scale
//!
//! Equal-tempered conversion between signed semitone indices and frequencies,
//! anchored to a configurable reference pitch (standard orchestral A = 440Hz).

use thiserror::Error;

/// Number of semitones per octave.
pub(crate) const SEMITONES: i32 = 12;

/// Standard orchestral A reference frequency in Hz.
pub const STANDARD_A: f64 = 440.0;

/// Semitones the reference A sits above index 0 on the chromatic table,
/// so that index 0 lands on C.
const CHROMATIC_A_INDEX: i32 = 3;

/// Errors from frequency/index conversion.
#[derive(Debug, Error)]
pub enum ScaleError {
    /// A frequency outside the logarithm's domain was passed to [`ChromaticScale::to_index`]
    /// or a note constructor.
    #[error("frequency must be positive, got {frequency}")]
    NonPositiveFrequency {
        /// The offending frequency in Hz.
        frequency: f64,
    },

    /// The reference frequency given to the builder was not positive.
    #[error("reference frequency must be positive, got {reference}")]
    NonPositiveReference {
        /// The offending reference frequency in Hz.
        reference: f64,
    },
}

/// Builder for a [`ChromaticScale`] to customize the reference pitch.
pub struct ChromaticScaleBuilder {
    reference_frequency: f64,
}

impl ChromaticScaleBuilder {
    /// Create a new builder with the standard A = 440Hz reference.
    pub fn new() -> Self {
        ChromaticScaleBuilder {
            reference_frequency: STANDARD_A,
        }
    }

    /// Set the reference frequency in Hz (e.g. 432.0 for A=432 tuning).
    pub fn reference_frequency(mut self, hz: f64) -> Self {
        self.reference_frequency = hz;
        self
    }

    /// Build the [`ChromaticScale`].
    ///
    /// Returns [`ScaleError::NonPositiveReference`] unless the reference
    /// frequency is a positive finite number.
    pub fn build(self) -> Result<ChromaticScale, ScaleError> {
        if self.reference_frequency <= 0.0 || !self.reference_frequency.is_finite() {
            return Err(ScaleError::NonPositiveReference {
                reference: self.reference_frequency,
            });
        }
        Ok(ChromaticScale {
            reference_frequency: self.reference_frequency,
        })
    }
}

impl Default for ChromaticScaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Equal-tempered twelve-tone scale anchored to a reference frequency.
///
/// All derived note and chord logic operates purely in semitone-index space,
/// so swapping the reference (say, A=432) retunes everything without touching
/// any other code.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChromaticScale {
    reference_frequency: f64,
}

impl ChromaticScale {
    /// Return a builder to customize the reference pitch.
    pub fn builder() -> ChromaticScaleBuilder {
        ChromaticScaleBuilder::new()
    }

    /// Create a scale with the standard A = 440Hz reference.
    pub fn new() -> Self {
        ChromaticScale {
            reference_frequency: STANDARD_A,
        }
    }

    /// The reference frequency in Hz.
    pub fn reference_frequency(&self) -> f64 {
        self.reference_frequency
    }

    /// Frequency in Hz of the given semitone index.
    ///
    /// Index 0 is C just above the reference A; indices may be negative.
    pub fn to_frequency(&self, index: i32) -> f64 {
        self.reference_frequency * 2f64.powf((index + CHROMATIC_A_INDEX) as f64 / 12.0)
    }

    /// Nearest semitone index for the given frequency.
    ///
    /// Rounds half-steps half away from zero (`f64::round` semantics), so a
    /// quarter-tone exactly between two semitones resolves to the one further
    /// from the reference.
    ///
    /// Returns [`ScaleError::NonPositiveFrequency`] unless `frequency` is a
    /// positive finite number.
    pub fn to_index(&self, frequency: f64) -> Result<i32, ScaleError> {
        if frequency <= 0.0 || !frequency.is_finite() {
            return Err(ScaleError::NonPositiveFrequency { frequency });
        }
        Ok(self.index_of(frequency))
    }

    /// Index math without the domain check. Callers guarantee `frequency > 0`.
    pub(crate) fn index_of(&self, frequency: f64) -> i32 {
        let half_steps = 12.0 * (frequency / self.reference_frequency).log2();
        (half_steps - CHROMATIC_A_INDEX as f64).round() as i32
    }
}

impl Default for ChromaticScale {
    fn default() -> Self {
        Self::new()
    }
}
