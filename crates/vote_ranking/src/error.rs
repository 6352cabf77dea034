// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("ranking update rejected: {0}")]
    Update(#[from] heap_array::Error),

    #[error("failed to read ranking config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse ranking config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid ranking config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RankingError>;
