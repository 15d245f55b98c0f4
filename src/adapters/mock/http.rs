//! In-memory HTTP client for tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

/// HTTP client answering from canned responses.
///
/// Responses are looked up per exact URL. Queued responses for a URL are
/// consumed first, in order; after that the URL's fixed response, then the
/// default. Every request is recorded.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://127.0.0.1:5000/check",
///     Ok(Response::json(200, &serde_json::json!({"empty": true}))),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, Result<Response, HttpError>>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<Result<Response, HttpError>>>>>,
    default_response: Arc<Mutex<Option<Result<Response, HttpError>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request to `url` with `response`.
    pub fn set_response(&self, url: &str, response: Result<Response, HttpError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Answer the next request to `url` with `response`, once.
    pub fn push_response(&self, url: &str, response: Result<Response, HttpError>) {
        self.queued
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn set_default_response(&self, response: Result<Response, HttpError>) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, url: &str, headers: &Headers, body: &str) {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    fn respond(&self, url: &str) -> Result<Response, HttpError> {
        if let Some(response) = self
            .queued
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front)
        {
            return response;
        }
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return response.clone();
        }
        self.default_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(HttpError::Other(format!("No mock response for URL: {}", url))))
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers, body);
        self.respond(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://127.0.0.1:5000/check";

    #[tokio::test]
    async fn test_post_records_request() {
        let client = MockHttpClient::new();
        client.set_response(URL, Ok(Response::new(200, "ok")));

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = client.post(URL, r#"{"password":"x"}"#, &headers).await.unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
        assert_eq!(requests[0].body, r#"{"password":"x"}"#);
        assert_eq!(
            requests[0].headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_queued_before_fixed() {
        let client = MockHttpClient::new();
        client.set_response(URL, Ok(Response::new(200, "fixed")));
        client.push_response(URL, Err(HttpError::Timeout("1s".into())));
        client.push_response(URL, Ok(Response::new(503, "busy")));

        assert!(matches!(
            client.post(URL, "{}", &Headers::new()).await,
            Err(HttpError::Timeout(_))
        ));
        assert_eq!(client.post(URL, "{}", &Headers::new()).await.unwrap().status, 503);
        assert_eq!(client.post(URL, "{}", &Headers::new()).await.unwrap().text(), "fixed");
        assert_eq!(client.post(URL, "{}", &Headers::new()).await.unwrap().text(), "fixed");
    }

    #[tokio::test]
    async fn test_default_and_missing() {
        let client = MockHttpClient::new();
        assert!(matches!(
            client.post(URL, "{}", &Headers::new()).await,
            Err(HttpError::Other(_))
        ));

        client.set_default_response(Ok(Response::new(404, "nope")));
        assert_eq!(
            client.post("http://elsewhere/", "{}", &Headers::new()).await.unwrap().status,
            404
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = MockHttpClient::new();
        let cloned = client.clone();
        cloned.set_response(URL, Ok(Response::new(200, "")));

        client.post(URL, "{}", &Headers::new()).await.unwrap();
        assert_eq!(cloned.get_requests().len(), 1);
    }
}
