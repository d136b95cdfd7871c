// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RiskorderError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::RiskorderError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.search))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.search.seeds == 0 {
        return Err(RiskorderError::Config(
            "[search].seeds must be >= 1 (got 0)".to_string(),
        ));
    }
    if cfg.search.budget == 0 {
        return Err(RiskorderError::Config(
            "[search].budget must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
