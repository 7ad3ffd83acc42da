use std::collections::HashMap;

use reqwest::{header::HeaderMap, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone)]
pub struct RequestParams<'a, S: Serialize> {
    pub url: &'a str,
    pub method: Method,
    pub body: Option<S>,
    pub query_args: Option<HashMap<&'a str, &'a str>>,
    pub proxy: Option<&'a reqwest::Proxy>,
    pub headers: Option<HeaderMap>,
}

#[derive(Debug)]
pub struct HttpResponse<R> {
    pub status: StatusCode,
    pub body: R,
}

fn build_client(proxy: Option<&reqwest::Proxy>) -> eyre::Result<Client> {
    match proxy {
        Some(proxy) => Ok(Client::builder().proxy(proxy.clone()).build()?),
        None => Ok(Client::new()),
    }
}

/// Sends one request and decodes the body as JSON whatever the status code is.
/// Fails on transport errors and on bodies that do not decode into `R`.
pub async fn send_http_request<R: DeserializeOwned>(
    request_params: RequestParams<'_, impl Serialize>,
) -> eyre::Result<HttpResponse<R>> {
    let client = build_client(request_params.proxy)?;

    let mut request = client.request(request_params.method.clone(), request_params.url);

    if let Some(params) = &request_params.query_args {
        request = request.query(&params);
    }

    if let Some(body) = &request_params.body {
        request = request.json(&body);
    }

    if let Some(headers) = request_params.headers.as_ref() {
        request = request.headers(headers.clone());
    }

    let response = request
        .send()
        .await
        .inspect_err(|e| tracing::debug!("Request failed: {}", e))?;

    let status = response.status();

    let text = response
        .text()
        .await
        .inspect_err(|e| tracing::debug!("Failed to retrieve response text: {}", e))?;

    let body = serde_json::from_str::<R>(&text).inspect_err(|e| {
        tracing::debug!("Failed to deserialize response ({status}): {}\n {} ", e, text)
    })?;

    Ok(HttpResponse { status, body })
}
