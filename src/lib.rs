/*!
copyclient: the Copy.com cloud storage REST API for Rust.

# Overview

This library wraps the Copy REST API: authenticated file operations
(metadata, content download, multipart upload, rename, move, delete),
user-profile retrieval and update, and shared-link management. Every request
carries an OAuth 1.0a `Authorization` header signed with HMAC-SHA1, built on
the [oauth1-request](https://crates.io/crates/oauth1-request) crate over a
[reqwest](https://crates.io/crates/reqwest) transport.

Construct one [`Client`] per program run from an explicit [`Credentials`]
value, then hand clones of it to the resource services ([`FileService`],
[`UserService`], [`LinkService`]) that expose the domain operations.

# How to use

## Fetching and updating the profile

```no_run
use copyclient::{Client, Credentials, UserService};

# async fn run() -> Result<(), copyclient::Error> {
// APP_TOKEN, APP_SECRET, ACCESS_TOKEN, ACCESS_SECRET
let credentials = Credentials::from_env()?;
let client = Client::new(credentials);

let users = UserService::new(client);
let mut user = users.get().await?;
println!("{} {} <{}>", user.first_name, user.last_name, user.email);
println!(
    "stored: {} of {} bytes",
    user.storage.used, user.storage.quota
);

user.first_name = "Chuck".to_owned();
user.last_name = "Norris".to_owned();
let updated = users.update(&user).await?;
println!("now known as {} {}", updated.first_name, updated.last_name);
# Ok(()) }
```

## Downloading a file

```no_run
use copyclient::{Client, Credentials, FileService};

# async fn run() -> Result<(), copyclient::Error> {
let credentials = Credentials::from_env()?;
let files = FileService::new(Client::new(credentials));

// the body is streamed; buffer it here for brevity
let response = files.get_file("Documents/notes.txt").await?;
let bytes = response.bytes().await.map_err(copyclient::Error::Transport)?;
tokio::fs::write("notes.txt", &bytes).await?;
# Ok(()) }
```

## Uploading a file

```no_run
use copyclient::{Client, Credentials, FileService};

# async fn run() -> Result<(), copyclient::Error> {
let credentials = Credentials::new(
    "[APP_TOKEN]",
    "[APP_SECRET]",
    "[ACCESS_TOKEN]",
    "[ACCESS_SECRET]",
)?;
let files = FileService::new(Client::new(credentials));

files
    .upload_file("local.txt", "test/uploads/remote.txt", true)
    .await?;
let meta = files.meta("test/uploads/remote.txt").await?;
println!("uploaded {} ({} bytes)", meta.name, meta.size);
# Ok(()) }
```

Errors print well on standard error; CLI wrappers typically `eprintln!` the
error and exit non-zero.
*/
mod client;
mod error;
mod files;
mod links;
mod secrets;
mod session;
mod signer;
mod users;

pub use client::{Client, DEFAULT_RESOURCES_URL};
pub use error::{Error, Result};
pub use files::{Count, Creator, FileService, Meta, Revision, ThumbOriginalDimensions};
pub use links::{Link, LinkService, Recipient};
pub use secrets::{
    Credentials, ACCESS_SECRET_ENV, ACCESS_TOKEN_ENV, APP_SECRET_ENV, APP_TOKEN_ENV,
};
pub use session::{Session, API_VERSION, API_VERSION_HEADER};
pub use signer::{Signer, SigningParams};
pub use users::{Email, Storage, User, UserService};

// re-exported so callers can name the transport types we hand back
pub use reqwest;

/// Where users authorize an application and obtain access tokens.
pub const AUTH_URL: &str = "https://www.copy.com/applications/authorize";
