use crate::client::{Client, Session};
use crate::identity::{TokenGrant, auth_payload};
use crate::resolver::Endpoint;
use crate::webc::{self, WebRequest, WebResponse};
use crate::{Error, Result};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

const HEADER_AUTH_TOKEN: &str = "X-Auth-Token";
const HEADER_ZEROVM_EXECUTE: &str = "X-Zerovm-Execute";
const ZEROVM_EXECUTE_VERSION: &str = "1.0";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Public operations
impl Client {
	/// Get a token from the identity service (`POST <auth_url>/tokens`) and look up the `swift` endpoint.
	///
	/// On success the session token is replaced. The endpoint is replaced only when the service catalog
	/// has a `swift` entry; a catalog without one still succeeds (check `Session::service_endpoint`).
	/// On failure the session is left untouched.
	pub async fn authenticate(&self) -> Result<Session> {
		let credentials = &self.inner.credentials;
		let url = credentials.tokens_url();

		let headers = vec![
			("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
			("Accept".to_string(), CONTENT_TYPE_JSON.to_string()),
		];
		let request = WebRequest::post_json(&url, headers, auth_payload(credentials));

		tracing::debug!(%url, tenant = credentials.tenant(), username = credentials.username(), "authenticate");
		let web_response = self.send(request).await?;

		let TokenGrant {
			token,
			service_endpoint,
		} = TokenGrant::from_response_body(web_response.body)?;

		if service_endpoint.is_none() {
			tracing::warn!(%url, "no 'swift' endpoint in the service catalog");
		}

		self.inner.update_session(|session| {
			session.token = Some(token);
			if let Some(endpoint) = service_endpoint {
				session.service_endpoint = Some(endpoint);
			}
		});

		Ok(self.session())
	}

	/// Execute a ZeroVM job. `job` is serialized as JSON and POSTed to the `swift` endpoint.
	///
	/// Returns the response body, usually the job's stdout (a JSON string when the service did not answer JSON).
	pub async fn execute(&self, job: &impl Serialize) -> Result<Value> {
		let (token, endpoint) = self.authenticated_target()?;
		let payload = serde_json::to_value(job)?;

		let headers = vec![
			(HEADER_AUTH_TOKEN.to_string(), token),
			(HEADER_ZEROVM_EXECUTE.to_string(), ZEROVM_EXECUTE_VERSION.to_string()),
			("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
		];
		let request = WebRequest::post_json(endpoint.url(), headers, payload);

		tracing::debug!(url = endpoint.url(), "execute");
		let web_response = self.send(request).await?;
		tracing::trace!(body = ?web_response.body, "execute response");

		Ok(web_response.body)
	}

	/// Store `content` as the object `path` under the `swift` endpoint (`PUT <endpoint>/<path>`).
	pub async fn upload(&self, path: &str, content: impl Into<Bytes>) -> Result<()> {
		let (token, endpoint) = self.authenticated_target()?;
		let url = endpoint.object_url(path);

		let headers = vec![(HEADER_AUTH_TOKEN.to_string(), token)];
		let request = WebRequest::put_bytes(&url, headers, content);

		tracing::debug!(%url, "upload");
		self.send(request).await?;

		Ok(())
	}

	/// The `swift://<account>/<path>` URL of the object `path`, for use in job descriptions.
	pub fn swift_url(&self, path: &str) -> Result<String> {
		let endpoint = self.service_endpoint().ok_or(Error::NoServiceEndpoint)?;
		endpoint.swift_url(path)
	}
}

/// Support
impl Client {
	/// Snapshot of the token and endpoint at request construction time.
	fn authenticated_target(&self) -> Result<(String, Endpoint)> {
		let Session {
			token,
			service_endpoint,
		} = self.inner.session_snapshot();

		let token = token.ok_or(Error::NotAuthenticated)?;
		let endpoint = service_endpoint.ok_or(Error::NoServiceEndpoint)?;

		Ok((token, endpoint))
	}

	async fn send(&self, request: WebRequest) -> Result<WebResponse> {
		let url = request.url.clone();

		let web_response = self
			.inner
			.transport
			.send(request)
			.await
			.and_then(WebResponse::into_success)
			.map_err(|webc_error: webc::Error| {
				tracing::debug!(%url, error = %webc_error, "web call failed");
				Error::WebCall { url, webc_error }
			})?;

		Ok(web_response)
	}
}
