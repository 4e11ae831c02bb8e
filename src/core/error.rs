use thiserror::Error;

/// Degenerate launch solutions that `compute_velocity` lets through unchanged.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum AimError {
    #[error("no launch speed reaches the hoop at {theta_deg:.2} deg: range denominator is zero")]
    ZeroDenominator { theta_deg: f64 },

    #[error("launch speed at {theta_deg:.2} deg is not a finite number ({value})")]
    NonFinite { theta_deg: f64, value: f64 },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("drawing backend failed: {0}")]
    Drawing(String),

    #[error("unsupported snapshot extension '{0}' (expected svg, png, bmp or jpg)")]
    UnsupportedExtension(String),
}
