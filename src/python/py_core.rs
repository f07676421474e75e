//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Action, GameError};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        match err {
            GameError::PileFull { .. } => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action placing hand card `card_index` into `cauldron_index`.
    #[new]
    fn new(card_index: u8, cauldron_index: u8) -> Self {
        Self(Action::new(card_index, cauldron_index))
    }

    /// Decode a flat action id. Returns None if the id is out of range.
    #[staticmethod]
    fn from_id(action_id: u16) -> Option<Self> {
        Action::from_id(action_id).map(Self)
    }

    /// Flat action id (`card_index * 3 + cauldron_index`).
    #[getter]
    fn id(&self) -> u16 {
        self.0.id()
    }

    #[getter]
    fn card_index(&self) -> u8 {
        self.0.card_index
    }

    #[getter]
    fn cauldron_index(&self) -> u8 {
        self.0.cauldron_index
    }

    fn __repr__(&self) -> String {
        format!(
            "Action(card_index={}, cauldron_index={})",
            self.0.card_index, self.0.cauldron_index
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id())
    }
}
