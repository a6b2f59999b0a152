//! Basic COCOMO effort estimation
//!
//! Picks a project mode from the size in thousands of lines of code and
//! applies that mode's coefficients:
//!
//! - effort = a * KLoC^b (person-months)
//! - time = c * effort^d (months)
//! - staff = effort / time

use std::fmt;

use crate::error::{PhonebookError, PhonebookResult};

/// Project classes of the basic model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectMode {
    Organic,
    SemiDetached,
    Embedded,
}

impl ProjectMode {
    /// Mode for a project of the given size
    ///
    /// Anything up to 50 KLoC (tiny projects included) is Organic.
    pub fn for_size(kloc: f64) -> Self {
        if kloc <= 50.0 {
            Self::Organic
        } else if kloc <= 300.0 {
            Self::SemiDetached
        } else {
            Self::Embedded
        }
    }

    /// Coefficients for this mode
    pub fn coefficients(self) -> Coefficients {
        match self {
            Self::Organic => Coefficients::new(2.4, 1.05, 2.5, 0.38),
            Self::SemiDetached => Coefficients::new(3.0, 1.12, 2.5, 0.35),
            Self::Embedded => Coefficients::new(3.6, 1.20, 2.5, 0.32),
        }
    }
}

impl fmt::Display for ProjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organic => write!(f, "Organic"),
            Self::SemiDetached => write!(f, "Semi-Detached"),
            Self::Embedded => write!(f, "Embedded"),
        }
    }
}

/// The (a, b, c, d) row of the coefficient table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Coefficients {
    const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

/// Result of one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub kloc: f64,
    pub mode: ProjectMode,
    pub coefficients: Coefficients,
    /// Person-months
    pub effort: f64,
    /// Months
    pub time: f64,
    /// Average head count
    pub staff: f64,
}

/// Estimate effort, schedule and staffing for a project of `kloc` KLoC
pub fn estimate(kloc: f64) -> PhonebookResult<Estimate> {
    if !kloc.is_finite() || kloc <= 0.0 {
        return Err(PhonebookError::Validation(format!(
            "KLoC must be a positive number, got {}",
            kloc
        )));
    }

    let mode = ProjectMode::for_size(kloc);
    let coefficients = mode.coefficients();
    let Coefficients { a, b, c, d } = coefficients;

    let effort = a * kloc.powf(b);
    let time = c * effort.powf(d);

    Ok(Estimate {
        kloc,
        mode,
        coefficients,
        effort,
        time,
        staff: effort / time,
    })
}
