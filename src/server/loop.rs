// Server loop module
// Serial accept-handle loop: one connection is fully served before the next accept

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use crate::config::AppState;
use crate::logger;

/// Accept and serve connections forever, strictly one at a time.
///
/// Accept errors are logged and the loop keeps going.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                logger::log_connection_accepted(&peer_addr);
                serve_connection(stream, peer_addr, &state).await;
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
