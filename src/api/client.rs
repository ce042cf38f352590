//
//  crowdin-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Crowdin API
//!
//! This module provides the request/response funnel every Crowdin service
//! goes through.
//!
//! ## Features
//!
//! - Endpoint resolution against `api.crowdin.com` or an Enterprise
//!   organization host (`{organization}.api.crowdin.com`)
//! - Request construction: JSON bodies, raw upload bodies, bearer token,
//!   `User-Agent`, caller-supplied header overrides
//! - Pre-flight validation of mutating request bodies
//! - A single response funnel: `204` short-circuit, error-shape decoding
//!   for 4xx/5xx, best-effort pagination parsing and body decoding
//!
//! ## Flow
//!
//! ```text
//! service method
//!   -> pre-flight validation      (Error::Validation)
//!   -> new_request / new_upload_request
//!        -> resolve                (Error::InvalidPath)
//!        -> encode body            (Error::Encode)
//!        -> header overrides       (Error::InvalidHeader)
//!   -> execute
//!        -> transport              (Error::Transport)
//!        -> 204                    (Ok, no body)
//!        -> 4xx/5xx                (Error::Api)
//!        -> pagination + decode    (Error::Decode)
//! ```
//!
//! Nothing is retried and nothing is cached; every call is one round trip.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Body, Client, Method, Request, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::api::common::{
    parse_pagination, validate_update_requests, Error, ErrorResponse, Response, Result,
    UpdateRequest, Validate, ValidationError,
};
use crate::api::services::{BranchesService, ProjectsService, StoragesService};
use crate::auth::AccessToken;
use crate::config::ClientConfig;

/// Path of the GraphQL endpoint. Errors from it use the GraphQL error shape.
pub const GRAPHQL_PATH: &str = "/api/graphql";

/// Whether `path` targets the GraphQL endpoint, allowing a path prefix in
/// the base URL and a trailing slash.
fn is_graphql_path(path: &str) -> bool {
    path.trim_end_matches('/').ends_with(GRAPHQL_PATH)
}

/// A fallible header override applied to a request under construction.
///
/// Overrides run in order after the default headers are set, so a later
/// override of the same header wins. An override that fails aborts request
/// construction.
pub type HeaderOption = Box<dyn Fn(&mut HeaderMap) -> Result<()> + Send + Sync>;

/// Builds a [`HeaderOption`] that sets `name` to `value`.
///
/// The name and value are checked when the override runs; an invalid one
/// fails with [`Error::InvalidHeader`].
///
/// # Example
///
/// ```rust,ignore
/// use crowdin_client::api::client::with_header;
///
/// let request = client.new_upload_request(
///     Method::POST,
///     "/api/v2/storages",
///     bytes,
///     &[with_header("Content-Type", "image/png")],
/// )?;
/// ```
pub fn with_header(name: impl Into<String>, value: impl Into<String>) -> HeaderOption {
    let name = name.into();
    let value = value.into();

    Box::new(move |headers: &mut HeaderMap| {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidHeader(format!("invalid header name {:?}", name)))?;
        let header_value = HeaderValue::from_str(&value)
            .map_err(|_| Error::InvalidHeader(format!("invalid value for header {:?}", name)))?;
        headers.insert(header_name, header_value);
        Ok(())
    })
}

/// The main HTTP client for the Crowdin and Crowdin Enterprise APIs.
///
/// The client is immutable once built and cheap to clone; clones share the
/// underlying connection pool. It holds no per-call state, so one instance
/// can serve any number of concurrent calls.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use crowdin_client::api::CrowdinClient;
///
/// // Crowdin
/// let client = CrowdinClient::new("personal-access-token")?;
///
/// // Crowdin Enterprise
/// let enterprise = CrowdinClient::builder("personal-access-token")
///     .organization("acme")
///     .build()?;
/// ```
///
/// # Services
///
/// Resource-specific calls live on service façades borrowed from the client:
///
/// ```rust,ignore
/// let (projects, response) = client.projects().list(None).await?;
/// println!("{} projects at offset {:?}", projects.len(), response.pagination);
/// ```
#[derive(Debug, Clone)]
pub struct CrowdinClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL with the organization rewrite already applied
    base_url: Url,
    /// Bearer token sent with every request
    token: AccessToken,
    /// `User-Agent` header value
    user_agent: HeaderValue,
}

/// Builder for [`CrowdinClient`].
///
/// Obtained from [`CrowdinClient::builder`]. Every setter is optional.
pub struct ClientBuilder {
    token: String,
    config: ClientConfig,
    http: Option<Client>,
}

impl ClientBuilder {
    /// Targets a Crowdin Enterprise organization (`{name}.api.crowdin.com`).
    pub fn organization(mut self, name: impl Into<String>) -> Self {
        self.config.organization = Some(name.into());
        self
    }

    /// Overrides the API origin. Mostly useful for tests and proxies.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Uses a caller-configured `reqwest::Client` as the transport.
    ///
    /// Timeouts, proxies and TLS settings of the given client apply to every
    /// request; the Crowdin client adds none of its own.
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validates the settings and builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty token, an unusable base URL or
    /// organization, an invalid `User-Agent`, or a default HTTP client that
    /// cannot be created.
    pub fn build(self) -> Result<CrowdinClient> {
        let token = AccessToken::new(&self.token)?;
        let base_url = self.config.effective_base_url()?;
        let user_agent = HeaderValue::from_str(&self.config.user_agent).map_err(|_| {
            Error::Config(format!("invalid user agent {:?}", self.config.user_agent))
        })?;
        let http = match self.http {
            Some(http) => http,
            None => Client::builder()
                .build()
                .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?,
        };

        debug!(base_url = %base_url, "crowdin client configured");

        Ok(CrowdinClient {
            http,
            base_url,
            token,
            user_agent,
        })
    }
}

impl CrowdinClient {
    /// Creates a client for `api.crowdin.com` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Starts building a client authenticated with `token`.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            token: token.into(),
            config: ClientConfig::default(),
            http: None,
        }
    }

    /// Creates a client from a [`ClientConfig`].
    pub fn from_config(token: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        ClientBuilder {
            token: token.into(),
            config: config.clone(),
            http: None,
        }
        .build()
    }

    /// Returns the base URL relative paths are resolved against.
    ///
    /// For an Enterprise client this already includes the organization
    /// subdomain.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Project operations.
    pub fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(self)
    }

    /// Branch operations.
    pub fn branches(&self) -> BranchesService<'_> {
        BranchesService::new(self)
    }

    /// Storage (file upload) operations.
    pub fn storages(&self) -> StoragesService<'_> {
        StoragesService::new(self)
    }

    // -------------------------------------------------------------------------
    // Endpoint resolution and request construction
    // -------------------------------------------------------------------------

    /// Resolves a relative API path (optionally with a query string) into
    /// an absolute URL, with the usual URL reference-resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is not a valid URL reference.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|source| Error::InvalidPath {
            path: path.to_string(),
            source,
        })
    }

    /// Builds a request with an optional JSON body.
    ///
    /// Sets `User-Agent`, `Authorization: Bearer ...` and, when a body is
    /// given, `Content-Type: application/json`; then applies `headers` in
    /// order. Nothing is sent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`], [`Error::Encode`], or whatever a header
    /// override returns.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: &[HeaderOption],
    ) -> Result<Request> {
        let url = self.resolve(path)?;
        let mut request = Request::new(method, url);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(Body::from(bytes));
        }

        self.apply_headers(request.headers_mut(), headers)?;
        Ok(request)
    }

    /// Builds a request whose body is sent as-is, without JSON encoding.
    ///
    /// `Content-Type` defaults to `application/octet-stream` unless one of
    /// the `headers` overrides already set it.
    pub fn new_upload_request(
        &self,
        method: Method,
        path: &str,
        body: impl Into<Body>,
        headers: &[HeaderOption],
    ) -> Result<Request> {
        let url = self.resolve(path)?;
        let mut request = Request::new(method, url);

        self.apply_headers(request.headers_mut(), headers)?;
        request
            .headers_mut()
            .entry(CONTENT_TYPE)
            .or_insert_with(|| HeaderValue::from_static("application/octet-stream"));
        *request.body_mut() = Some(body.into());

        Ok(request)
    }

    fn apply_headers(&self, headers: &mut HeaderMap, overrides: &[HeaderOption]) -> Result<()> {
        headers.insert(USER_AGENT, self.user_agent.clone());
        self.token.apply_to_headers(headers);
        overrides.iter().try_for_each(|apply| apply(&mut *headers))
    }

    // -------------------------------------------------------------------------
    // Transport execution
    // -------------------------------------------------------------------------

    /// Sends `request` and decodes a successful body into `T`.
    ///
    /// Returns `None` for a `204 No Content` response; no decoding is
    /// attempted in that case.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the call or body read fails
    /// - [`Error::Api`] for a 4xx/5xx status, with the decoded error body
    /// - [`Error::Decode`] if the body is not valid JSON or not a `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<(Option<T>, Response)> {
        self.dispatch(request, true).await
    }

    /// Sends `request` and discards any successful body.
    ///
    /// Error handling and pagination parsing are the same as for
    /// [`execute`](Self::execute).
    pub async fn execute_empty(&self, request: Request) -> Result<Response> {
        let (_, response) = self.dispatch::<IgnoredAny>(request, false).await?;
        Ok(response)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: Request,
        decode: bool,
    ) -> Result<(Option<T>, Response)> {
        let method = request.method().clone();
        let graphql = is_graphql_path(request.url().path());

        debug!(method = %method, url = %request.url(), "sending request");
        let http_response = self.http.execute(request).await?;

        let status = http_response.status();
        let mut response = Response::new(status, http_response.headers().clone());
        let body = http_response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if status == StatusCode::NO_CONTENT {
            return Ok((None, response));
        }

        if status.is_client_error() || status.is_server_error() {
            let error = ErrorResponse::decode(status.as_u16(), &body, graphql);
            debug!(error = %error, "request failed");
            return Err(Error::Api {
                error,
                response: Box::new(response),
            });
        }

        if (method == Method::GET || method == Method::POST) && !body.is_empty() {
            match parse_pagination(&body) {
                Ok(pagination) => response.pagination = pagination,
                Err(source) => {
                    return Err(Error::Decode {
                        source,
                        response: Box::new(response),
                    })
                }
            }
        }

        if !decode {
            return Ok((None, response));
        }

        match serde_json::from_slice::<T>(&body) {
            Ok(value) => Ok((Some(value), response)),
            Err(source) => Err(Error::Decode {
                source,
                response: Box::new(response),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Verb helpers with pre-flight validation
    // -------------------------------------------------------------------------

    /// Makes a `GET` request and decodes the response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<(Option<T>, Response)> {
        let request = self.new_request::<()>(Method::GET, path, None, &[])?;
        self.execute(request).await
    }

    /// Makes a `POST` request with a validated JSON body.
    ///
    /// # Errors
    ///
    /// A missing body is rejected with [`Error::Validation`], as is a body
    /// whose [`Validate::validate`] fails. Neither reaches the network.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<(Option<T>, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + Validate + ?Sized,
    {
        let body = body.ok_or_else(|| ValidationError::new("body cannot be nil"))?;
        body.validate()?;

        let request = self.new_request(Method::POST, path, Some(body), &[])?;
        self.execute(request).await
    }

    /// Makes a `PUT` request. Unlike `POST`, the body may be absent.
    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<(Option<T>, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + Validate + ?Sized,
    {
        if let Some(body) = body {
            body.validate()?;
        }

        let request = self.new_request(Method::PUT, path, body, &[])?;
        self.execute(request).await
    }

    /// Makes a `PATCH` request with a list of update operations.
    ///
    /// # Errors
    ///
    /// An empty list fails with `"body cannot be empty or nil"`; otherwise
    /// each operation is validated in order and the first failure is
    /// returned. No request is sent in either case.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        ops: &[UpdateRequest],
    ) -> Result<(Option<T>, Response)> {
        validate_update_requests(ops)?;

        let request = self.new_request(Method::PATCH, path, Some(ops), &[])?;
        self.execute(request).await
    }

    /// Makes a `PATCH` request with a single validated object body.
    ///
    /// A few endpoints take an object rather than a list of operations.
    pub async fn patch_object<T, B>(&self, path: &str, body: &B) -> Result<(Option<T>, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + Validate + ?Sized,
    {
        body.validate()?;

        let request = self.new_request(Method::PATCH, path, Some(body), &[])?;
        self.execute(request).await
    }

    /// Makes a `DELETE` request.
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let request = self.new_request::<()>(Method::DELETE, path, None, &[])?;
        self.execute_empty(request).await
    }

    /// Makes a `POST` request with a raw body, e.g. a file upload.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl Into<Body>,
        headers: &[HeaderOption],
    ) -> Result<(Option<T>, Response)> {
        let request = self.new_upload_request(Method::POST, path, body, headers)?;
        self.execute(request).await
    }
}
