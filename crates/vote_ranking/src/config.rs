// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use crate::error::{RankingError, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_CAPACITY: usize = 50;

/// Number of children per node in the sorted region.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Branching {
    Binary,
    Ternary,
}

impl Branching {
    pub fn factor(&self) -> usize {
        match self {
            Branching::Binary => 2,
            Branching::Ternary => 3,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub branching: Branching,
    // Upper bound (exclusive) of the sorted region.
    pub capacity: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            branching: Branching::Ternary,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RankingConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RankingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(RankingError::InvalidConfig(
                "capacity must be positive".into(),
            ));
        }
        Ok(())
    }
}
