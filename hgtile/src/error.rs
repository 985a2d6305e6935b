use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HgtError {
    #[error("coordinate (lat {0}, lon {1}) outside the unit-degree cell domain")]
    OutOfDomain(f64, f64),
}
