//! Downloads a remote file to the local filesystem:
//!
//! ```text
//! cargo run --example download -- <remote path> <local path>
//! ```

use std::env;
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
    let (remote_path, local_path) = match (args.next(), args.next()) {
        (Some(remote), Some(local)) => (remote, local),
        _ => {
            eprintln!("usage: download <remote path> <local path>");
            process::exit(2);
        }
    };

    let credentials = Credentials::from_env()?;
    let files = FileService::new(Client::new(credentials));

    let response = files.get_file(&remote_path).await?;
    let bytes = response.bytes().await.map_err(Error::Transport)?;
    tokio::fs::write(&local_path, &bytes).await?;
    println!("wrote {} bytes to {}", bytes.len(), local_path);
    Ok(())
}
