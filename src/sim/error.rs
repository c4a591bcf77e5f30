//! Simulation error types

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// Random sampling never found a spot free of other entities
    #[error("no free position for radius {radius} after {attempts} attempts")]
    Placement { radius: f32, attempts: u32 },
}
