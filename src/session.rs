use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use reqwest::{Client as HttpClient, RequestBuilder, Response};
use url::Url;

use crate::signer::{Signer, SigningParams};
use crate::{Credentials, Error, Result};

/// Custom header the Copy API requires on every call.
pub const API_VERSION_HEADER: &str = "X-Api-Version";
/// Value for [`API_VERSION_HEADER`].
pub const API_VERSION: &str = "1";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Signs and executes one HTTP request at a time.
///
/// Owns the credential pairs and the signing parameters; stateless between
/// requests (nonce and timestamp are computed per signature, nothing is
/// cached or refreshed).
///
/// Per-verb contract:
/// - `GET`: form parameters become the query string; the signature base is
///   computed against the query-stripped URL with the full query signed as
///   OAuth parameters.
/// - `POST`/`PUT`: form parameters are form-url-encoded into the body. The
///   body is left out of the signature unless [`Session::sign_body`] is
///   enabled; a query string already on the URL is always signed.
/// - `DELETE`: no body. A query string already on the URL is rejected as
///   ambiguous; form parameters are signed and appended as the query.
#[derive(Debug, Clone)]
pub struct Session {
    credentials: Credentials,
    params: SigningParams,
    sign_body: bool,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Session::with_params(credentials, SigningParams::new())
    }

    pub fn with_params(credentials: Credentials, params: SigningParams) -> Self {
        Session {
            credentials,
            params,
            sign_body: false,
        }
    }

    /// Bind form-encoded write bodies into the signature, as OAuth 1.0a
    /// strictly requires. The Copy API accepts writes whose body is not
    /// signed, so this is off by default.
    pub fn sign_body(mut self, strict: bool) -> Self {
        self.sign_body = strict;
        self
    }

    pub async fn get(
        &self,
        http: &HttpClient,
        mut url: Url,
        form: &[(&str, &str)],
    ) -> Result<Response> {
        append_query(&mut url, form);
        let auth = self.authorization(&Method::GET, &url, "");
        self.execute(http.get(url).header(AUTHORIZATION, auth)).await
    }

    pub async fn post(
        &self,
        http: &HttpClient,
        url: Url,
        form: &[(&str, &str)],
    ) -> Result<Response> {
        self.write(http, Method::POST, url, form).await
    }

    pub async fn put(
        &self,
        http: &HttpClient,
        url: Url,
        form: &[(&str, &str)],
    ) -> Result<Response> {
        self.write(http, Method::PUT, url, form).await
    }

    pub async fn delete(
        &self,
        http: &HttpClient,
        mut url: Url,
        form: &[(&str, &str)],
    ) -> Result<Response> {
        if url.query().map_or(false, |q| !q.is_empty()) {
            return Err(Error::AmbiguousQuery);
        }
        append_query(&mut url, form);
        let auth = self.authorization(&Method::DELETE, &url, "");
        self.execute(http.delete(url).header(AUTHORIZATION, auth))
            .await
    }

    async fn write(
        &self,
        http: &HttpClient,
        method: Method,
        url: Url,
        form: &[(&str, &str)],
    ) -> Result<Response> {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in form {
            serializer.append_pair(key, value);
        }
        let body = serializer.finish();
        let auth = self.authorization(&method, &url, &body);
        let request = http
            .request(method, url)
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body);
        self.execute(request).await
    }

    /// Computes the `Authorization` header for `url` as it will go on the
    /// wire. Query parameters are always part of the signature; `body` joins
    /// them only when `sign_body` is set.
    pub(crate) fn authorization(&self, method: &Method, url: &Url, body: &str) -> String {
        let signer = Signer::new(&self.credentials, &self.params);
        match url.query() {
            None | Some("") => {
                let payload = if self.sign_body { body } else { "" };
                let mut stripped = url.clone();
                stripped.set_query(None);
                signer.authorization(method, stripped, payload, false)
            }
            Some(query) => {
                let payload = if self.sign_body && !body.is_empty() {
                    format!("{}&{}", query, body)
                } else {
                    query.to_owned()
                };
                let mut stripped = url.clone();
                stripped.set_query(None);
                signer.authorization(method, stripped, &payload, true)
            }
        }
    }

    /// Attaches the fixed Copy API headers and performs the round trip.
    /// Transport failures surface unmodified; no retry.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .header(API_VERSION_HEADER, API_VERSION)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Ok(response)
    }
}

fn append_query(url: &mut Url, form: &[(&str, &str)]) {
    if form.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in form {
        pairs.append_pair(key, value);
    }
}
