//! Errors for entity construction and scene loading.

use thiserror::Error;

/// One problem with a component configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComponentError {
    #[error("Position not specified. Call .at(x, y)")]
    MissingPosition,

    #[error("Position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f32, y: f32 },

    #[error("Prop graphic not specified. Call .model(..) or .billboard(..)")]
    MissingGraphic,

    #[error("Patrol has no waypoints")]
    EmptyPatrol,

    #[error("Patrol starts at waypoint {next} but has only {len}")]
    PatrolIndexOutOfRange { next: usize, len: usize },

    #[error("Patrol speed must be positive (got {speed})")]
    NonPositiveSpeed { speed: f32 },

    #[error("Invalid stats: health {health} outside 0..={max_health}")]
    InvalidStats { health: f32, max_health: f32 },
}

/// Errors returned by the entity builders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// Every problem found, not just the first.
    #[error("{}", summarize(.0))]
    Invalid(Vec<ComponentError>),
}

impl BuildError {
    /// Every problem found, in the order they were checked.
    pub fn problems(&self) -> &[ComponentError] {
        match self {
            Self::Invalid(problems) => problems,
        }
    }
}

fn summarize(problems: &[ComponentError]) -> String {
    let messages: Vec<String> = problems.iter().map(ToString::to_string).collect();
    format!("Invalid entity: {}", messages.join("; "))
}

/// Errors from loading a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Scene parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Prop {index} rejected: {source}")]
    Prop {
        index: usize,
        #[source]
        source: BuildError,
    },

    #[error("Actor {index} rejected: {source}")]
    Actor {
        index: usize,
        #[source]
        source: BuildError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_lists_every_problem() {
        let err = BuildError::Invalid(vec![
            ComponentError::MissingPosition,
            ComponentError::EmptyPatrol,
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid entity: Position not specified. Call .at(x, y); Patrol has no waypoints"
        );
        assert_eq!(err.problems().len(), 2);
    }
}
