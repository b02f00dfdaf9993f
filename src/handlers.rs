use std::sync::Arc;

use serenity::all::{ActivityData, Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::gateway::{handle_event, InboundEvent, SerenityGateway};
use crate::BotContext;

pub struct Handler {
    pub bot: Arc<BotContext>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected!", ready.user.name);

        ctx.set_activity(Some(ActivityData::listening("!help")));
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let own_id = ctx.cache.current_user().id.to_string();
        let event = InboundEvent {
            author_id: msg.author.id.to_string(),
            channel_id: msg.channel_id.to_string(),
            content: msg.content,
        };

        let gateway = SerenityGateway::new(ctx.http.clone());
        handle_event(&self.bot, &gateway, &own_id, &event).await;
    }
}
