use std::fmt::{Display, Formatter};
use std::hash::Hash;

use anyhow::Result;
use console_engine::screen::Screen;

/// Data type we use to encode an `Action` as a number.
pub type ModelActionType = u8;

/// A discrete action out of a finite action space
pub trait Action: Display + Sized + Clone + Copy + Hash + PartialEq + Eq {
    /// Number of possible actions
    const ACTION_SPACE: ModelActionType;
    /// Identifying the Action as a unique value in range (0..Self::ACTION_SPACE)
    fn numeric(&self) -> ModelActionType;
    fn try_from_numeric(value: ModelActionType) -> Result<Self>;
}

/// Environment, modeling the world of an agent
pub trait Environment {
    /// State representation
    type S: Clone + DebugVisualizer;
    type A: Action;

    /// Resets the environment to a defined starting point
    fn reset(&mut self);

    /// Current state
    fn state(&self) -> &Self::S;

    /// Performs one time/action-step.
    ///
    /// Applies the given `action` to the environment and returns:
    ///   - next state
    ///   - immediate reward earned during performing that step
    ///   - done flag (e.g. game ended)
    ///
    fn step(
        &mut self,
        action: Self::A,
    ) -> (&Self::S, f32, bool);
}

pub trait DebugVisualizer {
    fn one_line_info(&self) -> String;
    fn render_to_console(&self) -> Screen;
}

/// Failures of the replay memory and of the players feeding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// a replay memory needs room for at least one experience
    ZeroCapacity,
    /// numeric action value outside of `0..ACTION_SPACE`
    ActionOutOfRange(ModelActionType),
    InvalidParameter(&'static str),
    LockPoisoned,
    Render(String),
}

impl Display for ReplayError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ReplayError::ZeroCapacity => f.write_str("replay memory capacity must be greater than zero"),
            ReplayError::ActionOutOfRange(value) => write!(f, "action value {} out of range", value),
            ReplayError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            ReplayError::LockPoisoned => f.write_str("replay memory lock poisoned"),
            ReplayError::Render(msg) => write!(f, "render failed: {}", msg),
        }
    }
}

impl std::error::Error for ReplayError {}
