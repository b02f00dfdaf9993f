use std::sync::Arc;

use serenity::all::{ChannelId, GuildId, Http, UserId};

use crate::commands::{dispatch, Invocation};
use crate::BotContext;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid {kind} id {value:?}")]
    InvalidId { kind: &'static str, value: String },

    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        GatewayError::Discord(Box::new(err))
    }
}

/// Outbound side of the messaging gateway.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<(), GatewayError>;

    /// Role ids the user currently holds in the guild, in the order reported
    /// by the gateway.
    async fn member_role_ids(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Vec<String>, GatewayError>;
}

/// A message as received from the gateway.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    pub author_id: String,
    pub channel_id: String,
    pub content: String,
}

pub fn mention(user_id: &str) -> String {
    format!("<@{user_id}>")
}

/// Filters a message and, if it qualifies, runs it as a command and sends the
/// reply to the monitored channel.
///
/// Messages written by the bot itself and messages from any other channel are
/// dropped before dispatch. Send failures are logged only.
pub async fn handle_event(
    bot: &BotContext,
    gateway: &dyn Gateway,
    own_id: &str,
    event: &InboundEvent,
) {
    if event.author_id == own_id {
        tracing::debug!("Ignoring own message.");
        return;
    }

    let monitored = &bot.config.channel_id;
    if event.channel_id != *monitored {
        tracing::debug!(
            "Channel {} is not the monitored channel {}. Ignoring message from {}.",
            event.channel_id,
            monitored,
            event.author_id
        );
        return;
    }

    let inv = Invocation {
        bot,
        gateway,
        author_id: &event.author_id,
    };
    let Some(reply) = dispatch(&event.content, &inv).await else {
        return;
    };

    let text = format!("{} {}", mention(&event.author_id), reply);
    if let Err(e) = gateway.send_text(monitored, &text).await {
        tracing::error!("Failed to send reply to channel {}: {:?}", monitored, e);
    }
}

fn parse_id(kind: &'static str, value: &str) -> Result<u64, GatewayError> {
    value
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| GatewayError::InvalidId {
            kind,
            value: value.to_string(),
        })
}

/// [`Gateway`] backed by serenity's HTTP client.
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl Gateway for SerenityGateway {
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<(), GatewayError> {
        let channel_id = ChannelId::new(parse_id("channel", channel_id)?);
        channel_id.say(&*self.http, text).await?;
        Ok(())
    }

    async fn member_role_ids(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Vec<String>, GatewayError> {
        let guild_id = GuildId::new(parse_id("guild", guild_id)?);
        let user_id = UserId::new(parse_id("user", user_id)?);

        let member = self.http.get_member(guild_id, user_id).await?;
        Ok(member.roles.iter().map(ToString::to_string).collect())
    }
}
