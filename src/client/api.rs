use reqwest::cookie::Jar;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use url::Url;

use crate::client::payload::{ApiResponse, Body, Payload};
use crate::config::WolfyConfig;
use crate::error::{Error, Result};

/// One call against the authenticated API: verb, path relative to the API
/// base, body and per-request header overrides.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Body,
    headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Body::Empty,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Form-encoded body; fails before sending if the payload isn't flat
    pub fn form<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.body = Body::form(payload)?;
        Ok(self)
    }

    /// Form content type with no fields
    pub fn empty_form(mut self) -> Self {
        self.body = Body::empty_form();
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.body = Body::json(payload)?;
        Ok(self)
    }

    /// Set or replace one header for this request only
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Resolve `path` against the API base.
///
/// Leading slashes are dropped so absolute-looking paths stay under the API
/// prefix. The result must share the base's origin.
pub fn resolve_path(base: &Url, path: &str) -> Result<Url> {
    let relative = path.trim_start_matches('/');
    let url = base
        .join(relative)
        .map_err(|e| Error::malformed_path(path, e))?;

    if url.origin() != base.origin() {
        return Err(Error::malformed_path(path, "resolves outside the API origin"));
    }
    Ok(url)
}

/// Percent-encode a value used as a single path segment (space as `%20`)
pub(crate) fn encode_segment(value: &str) -> Result<String> {
    Ok(query_escape(value)?.replace('+', "%20"))
}

/// Escape a path segment the way query values are escaped (space as `+`).
///
/// Empty and dot segments are rejected: URL resolution collapses them, even
/// percent-encoded, and the request would reach a different endpoint.
pub(crate) fn query_escape(value: &str) -> Result<String> {
    if matches!(value, "" | "." | "..") {
        return Err(Error::malformed_path(value, "empty or dot path segment"));
    }
    Ok(url::form_urlencoded::byte_serialize(value.as_bytes()).collect())
}

#[derive(Clone)]
pub struct WolfyClient {
    client: reqwest::Client,
    media_client: reqwest::Client,
    base_url: Url,
    media_url: Url,
    default_headers: Arc<HeaderMap>,
    social_referer: HeaderValue,
    api_log_file: Option<Arc<PathBuf>>,
}

impl fmt::Debug for WolfyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the session cookie lives in the jar and is never printed
        f.debug_struct("WolfyClient")
            .field("base_url", &self.base_url.as_str())
            .field("media_url", &self.media_url.as_str())
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl WolfyClient {
    /// Connect to wolfy.net with the default configuration.
    ///
    /// The token is checked with a call to the self profile; any failure
    /// there is returned as [`Error::InvalidSession`].
    pub async fn connect(token: &str) -> Result<Self> {
        ClientBuilder::new().connect(token).await
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn media_url(&self) -> &Url {
        &self.media_url
    }

    /// Headers sent with every request unless a call overrides them
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub(crate) fn social_referer(&self) -> &HeaderValue {
        &self.social_referer
    }

    pub(crate) async fn validate_session(&self) -> Result<()> {
        match self.self_info().await {
            Ok(info) => {
                debug!("Session valid for {}", info.user.username);
                Ok(())
            }
            Err(e) => {
                warn!("Session check failed: {}", e);
                Err(Error::InvalidSession(Box::new(e)))
            }
        }
    }

    /// Defaults first, then the request's own entries on top
    fn merged_headers(&self, overrides: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::clone(&self.default_headers);
        for (name, value) in overrides {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    /// Send a request and return the body once the status is 2xx.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = resolve_path(&self.base_url, &request.path)?;
        let mut headers = self.merged_headers(&request.headers);
        if let Some(content_type) = request.body.content_type() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        let body_summary = self.api_log_file.as_ref().map(|_| request.body.log_summary());
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url.clone()).headers(headers);
        if !matches!(request.body, Body::Empty) {
            builder = builder.body(request.body.into_bytes());
        }

        let response = builder.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        trace!(
            "Response status: {} ({:?}, {} bytes)",
            status,
            response_headers.get(CONTENT_TYPE),
            body.len()
        );

        if let Some(path) = &self.api_log_file {
            let text = String::from_utf8_lossy(&body);
            log_api_call(path, request.method.as_str(), url.as_str(), body_summary.as_deref(), status, Some(&text));
        }

        if !status.is_success() {
            return Err(Error::Api {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ApiResponse {
            status,
            headers: response_headers,
            body,
        })
    }

    /// Send a request and decode the body if the server declares it as JSON
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Payload<T>> {
        self.execute(request).await?.decode()
    }

    /// Like [`send`](Self::send), but a non-JSON success body is an error
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.send(request).await?.into_json()
    }

    /// GET against the public renderer, without the session cookie
    pub(crate) async fn fetch_media(&self, url: Url) -> Result<Vec<u8>> {
        debug!("GET {} (sessionless)", url);

        let mut request = self.media_client.get(url.clone());
        if let Some(user_agent) = self.default_headers.get(USER_AGENT) {
            request = request.header(USER_AGENT, user_agent.clone());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_body = match response.text().await {
                Ok(text) => text,
                Err(e) => format!(
                    "{} (could not read response: {e})",
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            };
            if let Some(path) = &self.api_log_file {
                log_api_call(path, "GET", url.as_str(), None, status, Some(&error_body));
            }
            return Err(Error::Api { status, body: error_body });
        }

        let image = response.bytes().await?.to_vec();
        if let Some(path) = &self.api_log_file {
            let summary = format!("<{} bytes>", image.len());
            log_api_call(path, "GET", url.as_str(), None, status, Some(&summary));
        }
        Ok(image)
    }
}

fn log_api_call(
    path: &Path,
    method: &str,
    url: &str,
    body: Option<&str>,
    response_status: StatusCode,
    response_body: Option<&str>,
) {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let log_entry = format!(
        "\n=== API CALL [{timestamp}] ===\n\
         Method: {method}\n\
         URL: {url}\n\
         Request Body: {request_body}\n\
         Response Status: {response_status}\n\
         Response Body: {response_body}\n\
         ========================================\n",
        request_body = body.unwrap_or("None"),
        response_body = response_body.unwrap_or("Not captured")
    );

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(mut file) => {
            if let Err(e) = file.write_all(log_entry.as_bytes()) {
                warn!("Failed to write API log {}: {}", path.display(), e);
            }
        }
        Err(e) => warn!("Failed to open API log {}: {}", path.display(), e),
    }
}

/// Builds a [`WolfyClient`] from a [`WolfyConfig`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: WolfyConfig,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            config: WolfyConfig::default(),
        }
    }

    pub fn from_config(config: WolfyConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.api.base_url = base_url.into();
        self
    }

    pub fn media_url(mut self, media_url: impl Into<String>) -> Self {
        self.config.api.media_url = media_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.headers.user_agent = user_agent.into();
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.config.headers.referer = referer.into();
        self
    }

    pub fn social_referer(mut self, referer: impl Into<String>) -> Self {
        self.config.headers.social_referer = referer.into();
        self
    }

    /// Append a record of every call to `path`
    pub fn api_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.logging.api_log_file = Some(path.into());
        self
    }

    /// Build the client and validate the session with a probe call
    pub async fn connect(self, token: &str) -> Result<WolfyClient> {
        let client = self.build_unchecked(token)?;
        client.validate_session().await?;
        Ok(client)
    }

    pub(crate) fn build_unchecked(self, token: &str) -> Result<WolfyClient> {
        self.config.validate()?;

        let token = token.trim();
        if token.is_empty() || token.chars().any(|c| c.is_control() || c.is_whitespace() || c == ';' || c == ',') {
            return Err(Error::config("session token is empty or not a valid cookie value"));
        }

        let base_url = Url::parse(&self.config.api.base_url)
            .map_err(|e| Error::config(format!("invalid base_url: {e}")))?;
        let media_url = Url::parse(&self.config.api.media_url)
            .map_err(|e| Error::config(format!("invalid media_url: {e}")))?;

        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(&format!("{}={}", crate::SESSION_COOKIE, token), &base_url);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, header_value("user_agent", &self.config.headers.user_agent)?);
        default_headers.insert(REFERER, header_value("referer", &self.config.headers.referer)?);
        let social_referer = header_value("social_referer", &self.config.headers.social_referer)?;

        let client = reqwest::Client::builder().cookie_provider(jar).build()?;
        let media_client = reqwest::Client::builder().build()?;

        Ok(WolfyClient {
            client,
            media_client,
            base_url,
            media_url,
            default_headers: Arc::new(default_headers),
            social_referer,
            api_log_file: self.config.logging.api_log_file.map(Arc::new),
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::config(format!("{name} is not a valid header value: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://wolfy.net/api/").unwrap()
    }

    #[test]
    fn leading_slash_stays_under_api_prefix() {
        let url = resolve_path(&base(), "/leaderboard/player/self").unwrap();
        assert_eq!(url.as_str(), "https://wolfy.net/api/leaderboard/player/self");

        let url = resolve_path(&base(), "shop/dailyOffers").unwrap();
        assert_eq!(url.as_str(), "https://wolfy.net/api/shop/dailyOffers");
    }

    #[test]
    fn resolved_paths_keep_the_base_origin() {
        for path in [
            "user",
            "//evil.example/steal",
            "///evil.example",
            "../../outside",
            "slot/1?x=y#frag",
            "social/autocomplete/a%20b",
        ] {
            let url = resolve_path(&base(), path).unwrap();
            assert_eq!(url.origin(), base().origin(), "path {path:?} escaped to {url}");
        }
    }

    #[test]
    fn absolute_urls_to_other_origins_are_rejected() {
        let err = resolve_path(&base(), "https://evil.example/api/user").unwrap_err();
        assert!(matches!(err, Error::MalformedPath { .. }));

        let err = resolve_path(&base(), "http://wolfy.net/api/user").unwrap_err();
        assert!(matches!(err, Error::MalformedPath { .. }));
    }

    #[test]
    fn unparseable_paths_are_malformed() {
        let err = resolve_path(&base(), "http://[::1").unwrap_err();
        assert!(matches!(err, Error::MalformedPath { .. }));
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("Bob Smith").unwrap(), "Bob%20Smith");
        assert_eq!(encode_segment("a/b?c").unwrap(), "a%2Fb%3Fc");
        assert_eq!(encode_segment("plain-id_42").unwrap(), "plain-id_42");
        assert_eq!(encode_segment("a+b").unwrap(), "a%2Bb");
        assert_eq!(encode_segment("...").unwrap(), "...");
    }

    #[test]
    fn query_escape_uses_plus_for_spaces() {
        assert_eq!(query_escape("bob smith/&x").unwrap(), "bob+smith%2F%26x");
    }

    #[test]
    fn empty_and_dot_segments_are_rejected() {
        for value in ["", ".", ".."] {
            let err = encode_segment(value).unwrap_err();
            assert!(matches!(err, Error::MalformedPath { .. }), "{value:?} gave {err:?}");
            assert!(query_escape(value).is_err());
        }
    }

    #[test]
    fn overrides_do_not_touch_defaults() {
        let client = ClientBuilder::new().build_unchecked("token").unwrap();
        let before = client.default_headers().clone();

        let overrides = ApiRequest::get("social/friends")
            .header(REFERER, HeaderValue::from_static("https://wolfy.net/fr/play"))
            .headers;
        let merged = client.merged_headers(&overrides);

        assert_eq!(merged.get(REFERER).unwrap(), "https://wolfy.net/fr/play");
        assert_eq!(merged.get(USER_AGENT), before.get(USER_AGENT));
        assert_eq!(client.default_headers(), &before);
        assert_eq!(client.default_headers().get(REFERER).unwrap(), crate::DEFAULT_REFERER);
    }

    #[test]
    fn invalid_tokens_are_rejected_before_any_request() {
        assert!(matches!(ClientBuilder::new().build_unchecked(""), Err(Error::Config(_))));
        assert!(matches!(ClientBuilder::new().build_unchecked("a;b"), Err(Error::Config(_))));
    }

    #[test]
    fn debug_output_omits_session() {
        let client = ClientBuilder::new().build_unchecked("super-secret").unwrap();
        let printed = format!("{client:?}");
        assert!(printed.contains("wolfy.net/api/"));
        assert!(!printed.contains("super-secret"));
    }
}
