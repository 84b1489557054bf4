use crate::webc::{Error, Result, WebBody, WebRequest, WebResponse, WebTransport};
use futures::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;

/// The default `WebTransport`, backed by a `reqwest::Client`.
#[derive(Debug, Default, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		WebClient { reqwest_client }
	}
}

impl WebClient {
	pub async fn do_request(&self, request: WebRequest) -> Result<WebResponse> {
		let reqwest_builder = self.new_req_builder(request);
		let reqwest_res = reqwest_builder.send().await?;
		WebResponse::from_reqwest_response(reqwest_res).await
	}

	fn new_req_builder(&self, request: WebRequest) -> RequestBuilder {
		let WebRequest {
			method,
			url,
			headers,
			body,
		} = request;

		let mut reqwest_builder = self.reqwest_client.request(method, url);
		for (k, v) in headers.iter() {
			reqwest_builder = reqwest_builder.header(k, v);
		}

		match body {
			WebBody::Json(payload) => reqwest_builder.json(&payload),
			WebBody::Bytes(content) => reqwest_builder.body(content),
		}
	}
}

impl WebTransport for WebClient {
	fn send(&self, request: WebRequest) -> BoxFuture<'_, Result<WebResponse>> {
		Box::pin(self.do_request(request))
	}
}

impl WebResponse {
	pub(crate) async fn from_reqwest_response(res: Response) -> Result<WebResponse> {
		let status = res.status();

		let is_json = res
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|ct| ct.to_str().ok())
			.map(|ct| ct.starts_with("application/json"))
			.unwrap_or_default();

		let text = res.text().await?;

		// Failed statuses keep the raw text, the client only reports it.
		let body = if is_json && status.is_success() {
			serde_json::from_str::<Value>(&text).map_err(|err| Error::ResponseFailedNotJson {
				body: text.clone(),
				cause: err.to_string(),
			})?
		} else {
			Value::String(text)
		};

		Ok(WebResponse { status, body })
	}
}
