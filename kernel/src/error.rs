use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// Disallowed no matter what state the entity is in.
    ForbiddenOperation,
    /// Not valid for the current state of the entity.
    Operation,
    OutOfStock,
    NotFound,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::ForbiddenOperation => write!(f, "Forbidden operation"),
            KernelError::Operation => write!(f, "Invalid operation"),
            KernelError::OutOfStock => write!(f, "Out of stock"),
            KernelError::NotFound => write!(f, "Entity not found"),
        }
    }
}

impl Context for KernelError {}
