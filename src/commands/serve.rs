//! Serve the results API over HTTP

use marvin::runner::CheckRunner;
use marvin::server::tiny_http;

/// Start the HTTP server and block until interrupted
pub fn serve(runner: CheckRunner, port: u16) -> anyhow::Result<()> {
    tiny_http::serve(runner, port)
}
