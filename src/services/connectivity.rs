//! Reachability pre-flight for explicit refreshes
//!
//! Advisory only: a positive answer does not guarantee the subsequent fetch
//! succeeds, and a negative one means the caller must skip the network call
//! and surface a notice instead.

use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Probe network reachability by opening a TCP connection to `addr`
///
/// Blocks the awaiting caller for at most `bound`; the bound covers DNS
/// resolution and the connect. No definitive answer in time counts as
/// unreachable.
pub async fn is_reachable(addr: &str, bound: Duration) -> bool {
    match timeout(bound, TcpStream::connect(addr)).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            debug!("Connectivity probe to {} failed: {}", addr, err);
            false
        }
        Err(_) => {
            debug!("Connectivity probe to {} timed out after {:?}", addr, bound);
            false
        }
    }
}
