//! Message Channel
//!
//! Named request channels between an embedding host (for example an
//! authoring environment) and the page. Messages queue per subscriber
//! until drained.

use std::collections::HashMap;

/// Subscription handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Queued message
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub channel: String,
    pub data: serde_json::Value,
}

/// Channel registry
#[derive(Debug, Default)]
pub struct MessageChannel {
    channels: HashMap<String, Vec<SubscriptionId>>,
    pending: Vec<(SubscriptionId, ChannelMessage)>,
    next_id: u64,
}

impl MessageChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to request messages on `channel`
    pub fn subscribe(&mut self, channel: &str) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.channels.entry(channel.to_string()).or_default().push(id);
        tracing::debug!("subscribed {:?} to {}", id, channel);
        id
    }

    /// Drop a subscription and its undelivered messages
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        for subs in self.channels.values_mut() {
            subs.retain(|&s| s != id);
        }
        self.pending.retain(|(sub, _)| *sub != id);
    }

    /// Post to every subscriber of `channel`; returns how many were reached
    pub fn post(&mut self, channel: &str, data: serde_json::Value) -> usize {
        let Some(subscribers) = self.channels.get(channel) else {
            tracing::trace!("no subscribers on {}", channel);
            return 0;
        };

        let message = ChannelMessage {
            channel: channel.to_string(),
            data,
        };
        for &sub in subscribers {
            self.pending.push((sub, message.clone()));
        }
        subscribers.len()
    }

    /// Drain the messages queued for `id`, oldest first
    pub fn take(&mut self, id: SubscriptionId) -> Vec<ChannelMessage> {
        let (mine, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|(sub, _)| *sub == id);
        self.pending = rest;
        mine.into_iter().map(|(_, message)| message).collect()
    }
}
