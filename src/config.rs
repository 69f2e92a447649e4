//! Simulation parameters.
//!
//! The context-switch cost applies to every algorithm; the quantum only to
//! Round-Robin. Both are validated here, at the boundary, so the scheduling
//! loops never see a degenerate value.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Parameters shared by a set of scheduling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Overhead charged after a process relinquishes the CPU.
    pub context_switch_time: i64,
    /// Round-Robin time slice.
    pub quantum: i64,
}

impl SimulationConfig {
    /// Default context-switch time.
    pub const DEFAULT_CONTEXT_SWITCH: i64 = 1;
    /// Default Round-Robin quantum.
    pub const DEFAULT_QUANTUM: i64 = 2;

    /// Creates a config with the defaults (context switch 1, quantum 2).
    pub fn new() -> Self {
        Self {
            context_switch_time: Self::DEFAULT_CONTEXT_SWITCH,
            quantum: Self::DEFAULT_QUANTUM,
        }
    }

    /// Sets the context-switch time.
    pub fn with_context_switch(mut self, context_switch_time: i64) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Checks every parameter and reports all problems at once.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if let Err(e) = check_context_switch(self.context_switch_time) {
            errors.push(e);
        }
        if let Err(e) = check_quantum(self.quantum) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_context_switch(context_switch_time: i64) -> Result<(), ValidationError> {
    if context_switch_time < 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NegativeContextSwitch,
            format!("Context-switch time must be non-negative, got {context_switch_time}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.context_switch_time, 1);
        assert_eq!(config.quantum, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new()
            .with_context_switch(0)
            .with_quantum(4);
        assert_eq!(config.context_switch_time, 0);
        assert_eq!(config.quantum, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_quantum() {
        for q in [0, -3] {
            let errors = SimulationConfig::new().with_quantum(q).validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
        }
    }

    #[test]
    fn test_negative_context_switch() {
        let errors = SimulationConfig::new()
            .with_context_switch(-1)
            .validate()
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeContextSwitch);
    }

    #[test]
    fn test_reports_all_errors() {
        let errors = SimulationConfig::new()
            .with_context_switch(-1)
            .with_quantum(0)
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
