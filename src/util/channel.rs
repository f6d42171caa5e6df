//! Channel identity helpers.
//!
//! Channels are addressed either by numeric Telegram ids (`-100...`) or by
//! public usernames; the two need different presentation and API forms.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

/// Label shown for numeric-id channels without a human-readable name.
const PRIVATE_CHANNEL_LABEL: &str = "Частный канал";

/// True when `channel` is a numeric Telegram channel id rather than a
/// username.
pub fn is_channel_id(channel: &str) -> bool {
    if channel.starts_with('-') {
        return true;
    }
    !channel.is_empty() && channel.chars().all(|c| c.is_ascii_digit())
}

/// Normalize a channel reference into the form the Telegram API expects:
/// numeric ids pass through, usernames gain a leading `@`.
pub fn normalize_channel_id(channel: &str) -> Option<String> {
    if channel.is_empty() {
        return None;
    }
    if is_channel_id(channel) || channel.starts_with('@') {
        return Some(channel.to_owned());
    }
    Some(format!("@{channel}"))
}

/// Human-facing channel label: the configured name (or a private-channel
/// placeholder) for numeric ids, `@username` for public channels.
pub fn channel_display_name(channel: &str, name: Option<&str>) -> String {
    if is_channel_id(channel) {
        return name
            .filter(|name| !name.is_empty())
            .unwrap_or(PRIVATE_CHANNEL_LABEL)
            .to_owned();
    }
    if channel.starts_with('@') {
        channel.to_owned()
    } else {
        format!("@{channel}")
    }
}
