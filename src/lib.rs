use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod grid;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidParameters { width: u32, height: u32 },
    #[error("failed to allocate a buffer for {width}x{height} cells")]
    Allocation { width: u32, height: u32 },
    #[error("expected {expected} bytes of cell data, got {actual}")]
    LengthMismatch { expected: u64, actual: u64 },
    #[error("unknown fill policy {0:?}, expected \"linear\" or \"quadratic\"")]
    UnknownPolicy(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One grid cell: two 32-bit float channels, `r` stored before `g`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Record {
    pub r: f32,
    pub g: f32,
}

impl Record {
    pub fn new(r: f32, g: f32) -> Self {
        Self { r, g }
    }
}

/// The function mapping a cell position to its record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum FillPolicy {
    /// record(x, y) = (x, y).
    Linear,
    /// record(x, y) = (x², y²).
    Quadratic,
}

impl FillPolicy {
    pub fn sample(&self, x: u32, y: u32) -> Record {
        match self {
            Self::Linear => Record::new(x as f32, y as f32),
            Self::Quadratic => {
                Record::new((x as u64 * x as u64) as f32, (y as u64 * y as u64) as f32)
            }
        }
    }
}

impl FromStr for FillPolicy {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "quadratic" => Ok(Self::Quadratic),
            _ => Err(GridError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Validated grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GridParameters {
    pub width: u32,
    pub height: u32,
}

impl GridParameters {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidParameters { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_reject_zero_dimensions() {
        assert!(matches!(
            GridParameters::new(0, 4),
            Err(GridError::InvalidParameters { width: 0, height: 4 })
        ));
        assert!(matches!(
            GridParameters::new(4, 0),
            Err(GridError::InvalidParameters { width: 4, height: 0 })
        ));

        let params = GridParameters::new(512, 512).unwrap();
        assert_eq!(params.cell_count(), 512 * 512);
    }

    #[test]
    fn test_linear_policy_samples_position() {
        let policy = FillPolicy::Linear;
        assert_eq!(policy.sample(0, 0), Record::new(0.0, 0.0));
        assert_eq!(policy.sample(3, 1), Record::new(3.0, 1.0));
        assert_eq!(policy.sample(511, 511), Record::new(511.0, 511.0));
    }

    #[test]
    fn test_quadratic_policy_samples_squares() {
        let policy = FillPolicy::Quadratic;
        assert_eq!(policy.sample(0, 0), Record::new(0.0, 0.0));
        assert_eq!(policy.sample(2, 2), Record::new(4.0, 4.0));
        assert_eq!(policy.sample(63, 7), Record::new(3969.0, 49.0));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("linear".parse::<FillPolicy>().unwrap(), FillPolicy::Linear);
        assert_eq!(
            "quadratic".parse::<FillPolicy>().unwrap(),
            FillPolicy::Quadratic
        );
        assert!(matches!(
            "cubic".parse::<FillPolicy>(),
            Err(GridError::UnknownPolicy(_))
        ));
    }
}
