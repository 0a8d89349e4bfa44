use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
	pub database_path: PathBuf,
	pub staff_members: Vec<String>,
	pub payment_accounts: Vec<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			database_path: PathBuf::from("databases/tribu.db"),
			staff_members: Vec::new(),
			payment_accounts: Vec::new(),
		}
	}
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		let _ = dotenvy::dotenv();

		let database_path = match env::var("DATABASE_PATH") {
			Ok(path) if path.trim().is_empty() => return Err(ConfigError::EmptyDatabasePath),
			Ok(path) => PathBuf::from(path),
			Err(_) => Config::default().database_path,
		};

		Ok(Self {
			database_path,
			staff_members: parse_list("STAFF_MEMBERS")?,
			payment_accounts: parse_list("PAYMENT_ACCOUNTS")?,
		})
	}
}

/// Reads a comma separated list. Unset means "no restriction".
fn parse_list(key: &'static str) -> Result<Vec<String>, ConfigError> {
	let raw = match env::var(key) {
		Ok(raw) => raw,
		Err(env::VarError::NotPresent) => return Ok(Vec::new()),
		Err(env::VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode(key)),
	};

	Ok(raw
		.split(',')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(str::to_string)
		.collect())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("DATABASE_PATH must not be empty")]
	EmptyDatabasePath,
	#[error("{0} is not valid unicode")]
	NotUnicode(&'static str),
}
