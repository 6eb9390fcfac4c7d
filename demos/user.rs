//! Prints the authenticated user's profile. With two arguments the first
//! and last name are updated before printing again:
//!
//! ```text
//! cargo run --example user -- Chuck Norris
//! ```
//!
//! Credentials come from APP_TOKEN, APP_SECRET, ACCESS_TOKEN and
//! ACCESS_SECRET.

use std::env;
use std::process;

use copyclient::{Client, Credentials, UserService};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), copyclient::Error> {
    let credentials = Credentials::from_env()?;
    let users = UserService::new(Client::new(credentials));

    let mut user = users.get().await?;
    println!("User: {} {}", user.first_name, user.last_name);
    println!("Email: {}", user.email);
    let megabyte = 1024.0 * 1024.0;
    println!(
        "Stored(MB): {:.2} of {:.2}",
        user.storage.used as f64 / megabyte,
        user.storage.quota as f64 / megabyte
    );

    let mut args = env::args().skip(1);
    if let (Some(first_name), Some(last_name)) = (args.next(), args.next()) {
        user.first_name = first_name;
        user.last_name = last_name;
        let updated = users.update(&user).await?;
        println!("User: {} {}", updated.first_name, updated.last_name);
    }
    Ok(())
}
