//! Tri-state field patch used by every update DTO.
//!
//! A JSON update body distinguishes three cases per field:
//!
//! | JSON            | `Patch`        | Effect                     |
//! |-----------------|----------------|----------------------------|
//! | key missing     | `Absent`       | leave the column unchanged |
//! | `null`          | `Null`         | clear the column           |
//! | any other value | `Value(v)`     | overwrite with `v`         |
//!
//! Fields must be annotated with `#[serde(default)]` so that a missing key
//! falls back to [`Patch::Absent`].

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The new column value for a nullable column, or `None` when absent.
    ///
    /// `Some(None)` means "set to NULL".
    pub fn as_update(&self) -> Option<Option<&T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }

    /// Apply this patch to a nullable field in place.
    pub fn apply_to(&self, target: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            Patch::Absent => {}
            Patch::Null => *target = None,
            Patch::Value(v) => *target = Some(v.clone()),
        }
    }

    /// Reject an explicit `null` for a column that cannot be cleared.
    pub fn reject_null(&self, field: &str) -> Result<(), CoreError> {
        if matches!(self, Patch::Null) {
            return Err(CoreError::Validation(format!("{field} cannot be null")));
        }
        Ok(())
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; `#[serde(default)]` covers absence.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
