use crate::{Error, Result};

/// Identity service coordinates and the password credentials used to get a token.
///
/// No validation is done here. A malformed `auth_url` or empty credentials
/// only surface when `Client::authenticate` is called.
#[derive(Clone)]
pub struct Credentials {
	auth_url: String,
	tenant: String,
	username: String,
	password: String,
}

/// Env var names, the same ones used by the `swift` command line tool.
impl Credentials {
	pub const AUTH_URL_ENV_NAME: &str = "OS_AUTH_URL";
	pub const TENANT_ENV_NAME: &str = "OS_TENANT_NAME";
	pub const USERNAME_ENV_NAME: &str = "OS_USERNAME";
	pub const PASSWORD_ENV_NAME: &str = "OS_PASSWORD";
}

/// Constructors
impl Credentials {
	pub fn new(
		auth_url: impl Into<String>,
		tenant: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self {
			auth_url: auth_url.into(),
			tenant: tenant.into(),
			username: username.into(),
			password: password.into(),
		}
	}

	/// Read `OS_AUTH_URL`, `OS_TENANT_NAME`, `OS_USERNAME` and `OS_PASSWORD`.
	pub fn from_env() -> Result<Self> {
		Self::from_vars(|name| std::env::var(name).ok())
	}

	/// Same as `from_env`, but the variables come from `lookup` (e.g., a parsed `.env` file).
	pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let get = |name: &'static str| lookup(name).ok_or(Error::EnvVarMissing { name });

		Ok(Self {
			auth_url: get(Self::AUTH_URL_ENV_NAME)?,
			tenant: get(Self::TENANT_ENV_NAME)?,
			username: get(Self::USERNAME_ENV_NAME)?,
			password: get(Self::PASSWORD_ENV_NAME)?,
		})
	}
}

/// Getters
impl Credentials {
	pub fn auth_url(&self) -> &str {
		&self.auth_url
	}

	pub fn tenant(&self) -> &str {
		&self.tenant
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn password(&self) -> &str {
		&self.password
	}

	/// The Keystone v2 token URL (`<auth_url>/tokens`).
	pub fn tokens_url(&self) -> String {
		format!("{}/tokens", self.auth_url)
	}
}

// The password must never end up in logs.
impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("auth_url", &self.auth_url)
			.field("tenant", &self.tenant)
			.field("username", &self.username)
			.field("password", &"REDACTED")
			.finish()
	}
}

// region:    --- Tests


// endregion: --- Tests
