use conference_view_core::{TopicError, TopicResponse};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::rc::Rc;

/// GET the topic endpoint and decode its body
pub async fn fetch_topic(url: &str) -> Result<TopicResponse, TopicError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| TopicError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(TopicError::Status(resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| TopicError::Network(e.to_string()))?;
    TopicResponse::parse(&body)
}

/// Anything that can answer a topic request
pub trait TopicSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<TopicResponse, TopicError>>;
}

/// Topic source backed by an HTTP endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTopicSource {
    endpoint: String,
}

impl HttpTopicSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TopicSource for HttpTopicSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<TopicResponse, TopicError>> {
        let endpoint = self.endpoint.clone();
        async move { fetch_topic(&endpoint).await }.boxed_local()
    }
}

/// Shared topic source, compared by identity so it can live in props
#[derive(Clone)]
pub struct TopicSourceHandle(Rc<dyn TopicSource>);

impl TopicSourceHandle {
    pub fn new(source: impl TopicSource + 'static) -> Self {
        TopicSourceHandle(Rc::new(source))
    }

    pub fn http(endpoint: impl Into<String>) -> Self {
        Self::new(HttpTopicSource::new(endpoint))
    }

    pub fn fetch(&self) -> LocalBoxFuture<'static, Result<TopicResponse, TopicError>> {
        self.0.fetch()
    }
}

impl PartialEq for TopicSourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality_is_identity() {
        let a = TopicSourceHandle::http("https://example.com/question");
        let b = TopicSourceHandle::http("https://example.com/question");

        assert!(a == a.clone());
        assert!(a != b);
    }

    #[test]
    fn test_http_source_keeps_endpoint() {
        let source = HttpTopicSource::new("https://example.com/question");
        assert_eq!(source.endpoint(), "https://example.com/question");
    }
}
