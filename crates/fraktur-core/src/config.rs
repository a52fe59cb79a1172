use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_ITERATIONS, INITIAL_ITERATIONS, ITERATION_INCREMENT};

/// Tunable iteration policy for a render session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Iteration budget at zoom step zero.
    #[serde(default = "default_initial_iterations")]
    pub initial_iterations: u32,
    /// Additional iterations per discrete zoom step.
    #[serde(default = "default_iteration_increment")]
    pub iteration_increment: u32,
    /// Absolute cap, also the budget used by full renders.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            initial_iterations: INITIAL_ITERATIONS,
            iteration_increment: ITERATION_INCREMENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

fn default_initial_iterations() -> u32 {
    INITIAL_ITERATIONS
}

fn default_iteration_increment() -> u32 {
    ITERATION_INCREMENT
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}
