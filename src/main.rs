use std::io;

use anyhow::Result;
use tracing::info;

use tictac_protocol::ProtocolEngine;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("tictac starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    ProtocolEngine::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
