use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::config::{Config, Resources};
use crate::gateway::{Gateway, GatewayError};
use crate::roster::Roster;
use crate::BotContext;

pub const BOT_ID: &str = "7";
pub const CHANNEL_ID: &str = "100";
pub const GUILD_ID: &str = "200";

pub fn test_context() -> BotContext {
    BotContext::new(Resources {
        config: Config {
            token: "token".to_string(),
            channel_id: CHANNEL_ID.to_string(),
            guild_id: GUILD_ID.to_string(),
        },
        admins: Roster::parse("Admin1 12345\n"),
        roles: Roster::parse("Gamers 222\nArtists 333\n"),
        bans: Roster::default(),
    })
}

/// In-memory gateway that records every sent message.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<(String, String)>>,
    member_roles: Vec<String>,
    fail_lookups: bool,
    fail_next_send: AtomicBool,
}

impl RecordingGateway {
    pub fn with_member_roles(role_ids: &[&str]) -> Self {
        Self {
            member_roles: role_ids.iter().map(|id| id.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_lookups: true,
            ..Default::default()
        }
    }

    pub fn failing_sends_once() -> Self {
        Self {
            fail_next_send: AtomicBool::new(true),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Gateway for RecordingGateway {
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<(), GatewayError> {
        if self.fail_next_send.swap(false, Ordering::SeqCst) {
            return Err(GatewayError::InvalidId {
                kind: "channel",
                value: channel_id.to_string(),
            });
        }

        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn member_role_ids(
        &self,
        guild_id: &str,
        _user_id: &str,
    ) -> Result<Vec<String>, GatewayError> {
        if self.fail_lookups {
            return Err(GatewayError::InvalidId {
                kind: "guild",
                value: guild_id.to_string(),
            });
        }

        Ok(self.member_roles.clone())
    }
}
