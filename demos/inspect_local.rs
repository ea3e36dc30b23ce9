//! Inspecting files through a traced backend.
//!
//! Runs every attribute query for one path and prints the serialized result.
//! Commands go through `sh -c` on this machine, wrapped in a `TracingLayer`
//! so each command shows up in the log.
//!
//! Run with: `cargo run --example inspect_local -- /etc/hosts linux`
//!
//! The second argument is the OS family whose commands to use (default:
//! `local`, which reads the filesystem directly).

use remote_file::*;
use std::sync::Arc;

fn main() -> Result<(), FileError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/etc/hosts".to_string());
    let family: OsFamily = args
        .next()
        .as_deref()
        .unwrap_or("local")
        .parse()
        .unwrap_or_default();

    let backend: Arc<dyn Backend> =
        Arc::new(LocalBackend::new().layer(TracingLayer::new("inspect_local")));

    for follow in [true, false] {
        let file = open_file(family, Arc::clone(&backend), path.as_str(), follow);

        println!("== {family} {path} (follow_symlink = {follow})");
        println!("symlink:  {}", file.is_symlink()?);
        println!("mounted:  {}", file.is_mounted()?);
        println!("md5:      {}", file.md5sum().as_deref().unwrap_or("-"));
        println!("sha256:   {}", file.sha256sum().as_deref().unwrap_or("-"));

        match file.to_json() {
            Ok(json) => println!(
                "{}",
                serde_json::to_string_pretty(&json)
                    .map_err(|e| FileError::Serialization(e.to_string()))?
            ),
            Err(e) => println!("cannot serialize: {e}"),
        }
    }

    Ok(())
}
