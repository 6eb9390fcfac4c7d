use std::path::Path;
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::Method;
use reqwest::{multipart, Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::session::Session;
use crate::{Credentials, Error, Result};

/// Base URL for the Copy REST API.
pub const DEFAULT_RESOURCES_URL: &str = "https://api.copy.com/rest";

/// Translates verb + relative path + form values into a signed request
/// through the owned [`Session`], and decodes JSON responses on demand.
///
/// Immutable after construction and cheap to clone; clones share the
/// underlying connection pool, so one `Client` can serve several services
/// (or tasks) at once.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    resources_url: String,
    session: Session,
}

impl Client {
    /// The client most programs want: default transport against the public
    /// Copy endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Client::from_parts(
            HttpClient::new(),
            DEFAULT_RESOURCES_URL,
            Session::new(credentials),
        )
    }

    /// Like [`Client::new`], but every call is bounded by `timeout`, from
    /// connect until the response body has finished.
    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Client::from_parts(
            http,
            DEFAULT_RESOURCES_URL,
            Session::new(credentials),
        ))
    }

    /// Full control: an explicit transport (pool, proxy, timeout settings),
    /// base resource URL and a preconfigured [`Session`] (pinned signing
    /// parameters, strict body signing).
    pub fn from_parts(http: HttpClient, resources_url: &str, session: Session) -> Self {
        Client {
            http,
            resources_url: resources_url.trim_end_matches('/').to_owned(),
            session,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = Url::parse(&format!("{}/{}", self.resources_url, path))?;
        Ok(url)
    }

    /// Issues a signed request and hands back the raw response, leaving all
    /// status handling to the caller.
    ///
    /// Only GET, POST, PUT and DELETE are dispatched; any other verb fails
    /// before the network is touched.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<Response> {
        let endpoint = self.endpoint(path)?;
        debug!(%method, %endpoint, "dispatching request");
        match method.as_str() {
            "GET" => self.session.get(&self.http, endpoint, form).await,
            "POST" => self.session.post(&self.http, endpoint, form).await,
            "PUT" => self.session.put(&self.http, endpoint, form).await,
            "DELETE" => self.session.delete(&self.http, endpoint, form).await,
            _ => Err(Error::UnsupportedMethod(method)),
        }
    }

    /// Issues the request, translates status >= 400 into [`Error::Status`]
    /// and decodes the buffered body into `T`. Decode failures are reported
    /// as [`Error::Decode`], never swallowed.
    pub async fn request_json<T>(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.request(method, path, form).await?;
        let response = error_for_status(response).await?;
        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;
        Ok(decoded)
    }

    /// Issues the request and discards the body after the status check.
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<()> {
        let response = self.request(method, path, form).await?;
        error_for_status(response).await?;
        Ok(())
    }

    /// GET whose body is intentionally left unconsumed so the caller can
    /// stream large payloads without buffering them; dropping the response
    /// releases the connection.
    pub async fn request_content(&self, path: &str) -> Result<Response> {
        let response = self.request(Method::GET, path, &[]).await?;
        error_for_status(response).await
    }

    /// Uploads a local file as a single multipart part named `file`.
    ///
    /// The whole file is buffered in memory before sending; the provider
    /// caps single uploads at 1 GB and documents chunked uploading as
    /// planned, so there is no streaming or resumability here. The OAuth
    /// header is signed with no body parameters, like every other write.
    pub async fn request_multipart(
        &self,
        local_path: &Path,
        upload_path: &str,
        filename: &str,
    ) -> Result<Response> {
        let endpoint = self.endpoint(upload_path)?;
        let bytes = tokio::fs::read(local_path).await?;
        debug!(%endpoint, size = bytes.len(), "uploading multipart body");

        let part = multipart::Part::bytes(bytes).file_name(filename.to_owned());
        let form = multipart::Form::new().part("file", part);
        let auth = self.session.authorization(&Method::POST, &endpoint, "");
        let request = self
            .http
            .post(endpoint)
            .header(AUTHORIZATION, auth)
            .multipart(form);
        let response = self.session.execute(request).await?;
        error_for_status(response).await
    }
}

/// Uniform status-to-error translation: any response with status >= 400
/// becomes [`Error::Status`] carrying the code and the body for diagnostics;
/// 2xx/3xx pass through regardless of body shape.
pub(crate) async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.as_u16() >= 400 {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Status {
            code: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
