//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use reqwest::{Client, Method};

use paystack_types::{ApiRequest, HttpMethod, RawResponse, Transport, TransportError};

/// HTTP transport over a reusable `reqwest::Client`.
///
/// The wrapped client owns the connection pool and timeouts. Cloning the
/// transport shares that pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Wraps a caller-configured client.
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }
}

impl From<Client> for HttpTransport {
    fn from(http: Client) -> Self {
        Self::new(http)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
        };

        let mut req = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(classify)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(classify)?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(url: String) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_connect_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = HttpTransport::default();
        let err = transport
            .execute(request(format!("http://127.0.0.1:{}/balance", port)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Connect(_)));
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_request_error() {
        let transport = HttpTransport::default();
        let mut req = request("not a url".into());
        req.body = Some(json!({}));
        let err = transport.execute(req).await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
