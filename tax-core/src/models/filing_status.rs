use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedFilingJointly,
}

impl FilingStatus {
    /// Maps the `--joint` command line switch onto a filing status.
    pub fn from_joint(joint: bool) -> Self {
        if joint {
            Self::MarriedFilingJointly
        } else {
            Self::Single
        }
    }

    pub fn is_joint(&self) -> bool {
        matches!(self, Self::MarriedFilingJointly)
    }
}

/// A value that differs between single and joint filers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByStatus<T> {
    pub single: T,
    pub joint: T,
}

impl<T: Copy> ByStatus<T> {
    pub const fn new(
        single: T,
        joint: T,
    ) -> Self {
        Self { single, joint }
    }

    /// Uses the same value for both filing statuses.
    pub const fn same(value: T) -> Self {
        Self {
            single: value,
            joint: value,
        }
    }

    pub fn get(
        &self,
        status: FilingStatus,
    ) -> T {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedFilingJointly => self.joint,
        }
    }
}
