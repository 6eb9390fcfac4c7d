//! Uploads a local file, overwriting any remote file at the target path:
//!
//! ```text
//! cargo run --example upload -- <local path> <remote path>
//! ```

use std::env;
use std::path::Path;
use std::process;

use copyclient::{Client, Credentials, Error, FileService};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let mut args = env::args().skip(1);
    let (local_path, remote_path) = match (args.next(), args.next()) {
        (Some(local), Some(remote)) => (local, remote),
        _ => {
            eprintln!("usage: upload <local path> <remote path>");
            process::exit(2);
        }
    };

    if !Path::new(&local_path).exists() {
        eprintln!("{}: no such file", local_path);
        process::exit(2);
    }

    let credentials = Credentials::from_env()?;
    let files = FileService::new(Client::new(credentials));

    files.upload_file(&local_path, &remote_path, true).await?;
    println!("uploaded {} to {}", local_path, remote_path);
    Ok(())
}
