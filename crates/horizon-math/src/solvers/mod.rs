//! Root-finding algorithms.
//!
//! This module provides the numerical solver used to recover an implied
//! periodic rate:
//!
//! - [`newton_raphson`]: fast quadratic convergence when a derivative is
//!   available
//!
//! Convergence is judged on the step size (the change between successive
//! estimates), matching how the rate solver's tolerance is specified, and a
//! run that exhausts its iteration budget is reported with
//! [`SolverResult::converged`] set to `false` rather than as an error — the
//! last estimate is still the best available answer.

mod newton;

pub use newton::newton_raphson;

/// Default tolerance on the step between successive estimates.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found (or the last estimate when not converged).
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the returned root).
    pub residual: f64,
    /// Whether the step tolerance was met within the iteration budget.
    pub converged: bool,
}
