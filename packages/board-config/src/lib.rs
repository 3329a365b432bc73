mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Pagination, Postgres, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.default_page < 1 {
		return Err(Error::Validation {
			message: "pagination.default_page must be 1 or greater.".to_string(),
		});
	}
	if cfg.pagination.max_limit < 1 {
		return Err(Error::Validation {
			message: "pagination.max_limit must be 1 or greater.".to_string(),
		});
	}

	for (label, limit) in [
		("pagination.page_default_limit", cfg.pagination.page_default_limit),
		("pagination.cursor_default_limit", cfg.pagination.cursor_default_limit),
	] {
		if limit < 1 {
			return Err(Error::Validation { message: format!("{label} must be 1 or greater.") });
		}
		if limit > cfg.pagination.max_limit {
			return Err(Error::Validation {
				message: format!("{label} must not exceed pagination.max_limit."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
