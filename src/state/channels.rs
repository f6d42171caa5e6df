//! Channel list state.

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use crate::net::types::Channel;

/// Shared channel list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ChannelsState {
    pub items: Vec<Channel>,
    pub loading: bool,
    pub error: Option<String>,
}
