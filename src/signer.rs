use std::borrow::Cow;

use http::Method;
use oauth1_request::signer::Signer as OAuthSigner;
use oauth1_request::{HmacSha1, Options};
use url::Url;

use crate::Credentials;

const OAUTH_PREFIX: &str = "oauth_";

/// Overrides for the generated `oauth_*` parameters.
///
/// Nonce and timestamp are normally generated fresh for every signature;
/// pinning them makes signatures reproducible, which is how the signing
/// tests verify against published HMAC-SHA1 vectors.
#[derive(Debug, Clone, Default)]
pub struct SigningParams {
    nonce: Option<Cow<'static, str>>,
    timestamp: Option<u64>,
    version: bool,
}

impl SigningParams {
    pub fn new() -> Self {
        Default::default()
    }

    /// Pin the `oauth_nonce` value.
    pub fn nonce<T>(self, nonce: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        SigningParams {
            nonce: Some(nonce.into()),
            ..self
        }
    }

    /// Pin the `oauth_timestamp` value.
    pub fn timestamp(self, timestamp: u64) -> Self {
        SigningParams {
            timestamp: Some(timestamp),
            ..self
        }
    }

    /// Emit `oauth_version="1.0"` in the header. The Copy API does not
    /// require it, so it is off by default.
    pub fn version(self, version: bool) -> Self {
        SigningParams { version, ..self }
    }

    fn options<'a>(&'a self, access_token: &'a str) -> Options<'a> {
        let mut opt = Options::new();
        // items must be added in alphabetical order
        if let Some(ref nonce) = self.nonce {
            opt.nonce(nonce.as_ref());
        }
        if let Some(timestamp) = self.timestamp {
            opt.timestamp(timestamp);
        }
        opt.token(access_token);
        opt.version(self.version);
        opt
    }
}

/// Produces the OAuth 1.0a `Authorization` header value for one request.
///
/// HMAC-SHA1 over the canonical base string of method + normalized URL +
/// parameters. `payload` is a form-encoded parameter set bound into the
/// signature: the final query string in query mode, or the request body
/// when body signing is enabled.
#[derive(Debug, Clone)]
pub struct Signer<'a> {
    credentials: &'a Credentials,
    params: &'a SigningParams,
}

impl<'a> Signer<'a> {
    pub fn new(credentials: &'a Credentials, params: &'a SigningParams) -> Self {
        Signer {
            credentials,
            params,
        }
    }

    /// `url` must already be stripped of its query string; in query mode the
    /// query travels in `payload` instead, per the OAuth 1.0a base-string
    /// rules.
    pub fn authorization(
        &self,
        method: &Method,
        url: Url,
        payload: &str,
        query_mode: bool,
    ) -> String {
        let (app_token, app_secret) = self.credentials.app_pair();
        let (access_token, access_secret) = self.credentials.access_pair();
        let options = self.params.options(access_token);

        // Destructure the payload and sort; the oauth_* parameters must be
        // merged into the base string at their alphabetical position, so a
        // marker entry splits the sorted set in two around the "oauth_" key.
        let parsed: Vec<(Cow<str>, Cow<str>)> =
            url::form_urlencoded::parse(payload.as_bytes()).collect();
        let marker = vec![(Cow::from(OAUTH_PREFIX), Cow::from(""))];
        let mut sorted = [parsed, marker].concat();
        sorted.sort();

        let mut halves = sorted.splitn(2, |(k, _)| k == &OAUTH_PREFIX);
        let before_oauth = halves.next().unwrap_or_default();
        let after_oauth = halves.next().unwrap_or_default();

        let mut signer = if query_mode {
            OAuthSigner::with_signature_method(
                HmacSha1,
                method.as_str(),
                url,
                app_secret,
                Some(access_secret),
            )
        } else {
            OAuthSigner::form_with_signature_method(
                HmacSha1,
                method.as_str(),
                url,
                app_secret,
                Some(access_secret),
            )
        };

        for (key, value) in before_oauth {
            if !key.starts_with(OAUTH_PREFIX) {
                signer.parameter(key, value);
            }
        }
        let mut signer = signer.oauth_parameters(app_token, &options);
        for (key, value) in after_oauth {
            if !key.starts_with(OAUTH_PREFIX) {
                signer.parameter(key, value);
            }
        }

        signer.finish().authorization
    }
}
