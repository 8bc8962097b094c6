//! Acknowledged-request header.
//!
//! Every request that mutates cluster state is prefixed with the timeouts the
//! coordinating node honors while waiting for the change to be applied and
//! acknowledged. The fields are opaque to request bodies; they only travel.

use std::time::Duration;

use bytes::{Bytes, BytesMut};

use crate::error::Result;
use crate::protocol::stream::{read_vlong, write_vlong, Readable, Writeable};

/// Default master-node and acknowledgement timeout.
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckHeader {
    /// How long to wait for the master node to accept the request.
    pub master_timeout: Duration,
    /// How long to wait for nodes to acknowledge the change.
    pub ack_timeout: Duration,
}

impl Default for AckHeader {
    fn default() -> Self {
        Self {
            master_timeout: DEFAULT_ACK_TIMEOUT,
            ack_timeout: DEFAULT_ACK_TIMEOUT,
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl Writeable for AckHeader {
    fn write_to(&self, out: &mut BytesMut) -> Result<()> {
        write_vlong(out, millis(self.master_timeout));
        write_vlong(out, millis(self.ack_timeout));
        Ok(())
    }
}

impl Readable for AckHeader {
    fn read_from(buf: &mut Bytes) -> Result<Self> {
        let master_timeout = Duration::from_millis(read_vlong(buf)?);
        let ack_timeout = Duration::from_millis(read_vlong(buf)?);
        Ok(Self {
            master_timeout,
            ack_timeout,
        })
    }
}
