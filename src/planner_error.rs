use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Side length must be a finite, non-negative number (got {0}).")]
    InvalidSideLength(f64),
    #[error("Invalid loading mode '{0}', expected pair, connector or single.")]
    InvalidMode(String),
    #[error("Invalid plate '{0}', expected <weight>:<thickness>:<count>[:<label>].")]
    InvalidPlate(String),
    #[error("No usable plates in the inventory.")]
    EmptyInventory,
}
