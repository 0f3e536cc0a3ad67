use crate::bot::BotState;
use crate::telegram::MessageRef;
use crate::types::error::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, info, warn};

/// Route an inline-button press.
///
/// The originating message is edited to show the target screen, then the
/// press is acknowledged. The acknowledgment happens exactly once even when
/// the data is unknown or the edit fails. An edit failure takes precedence
/// over an acknowledgment failure; the latter is logged so it is never lost.
pub async fn dispatch_callback(q: CallbackQuery, state: Arc<BotState>) -> Result<()> {
    let data = q.data.as_deref().unwrap_or_default();
    debug!(
        callback_data = %data,
        sender_id = q.from.id.0,
        "Dispatching callback query"
    );

    let target = q.message.as_ref().map(|m| MessageRef {
        chat_id: m.chat().id,
        message_id: m.id(),
    });

    let edited = match (state.router.handle_action(data), target) {
        (Some(screen), Some(target)) => {
            state
                .gateway
                .edit(target, &screen.body, &screen.keyboard)
                .await
        }
        (Some(_), None) => {
            debug!(callback_data = %data, "Callback has no message to edit");
            Ok(())
        }
        (None, _) => {
            info!(callback_data = %data, "Ignoring unknown callback action");
            Ok(())
        }
    };

    let acknowledged = state.gateway.acknowledge(&q.id).await;
    if let Err(e) = &acknowledged {
        warn!(callback_data = %data, error = %e, "Failed to acknowledge callback");
    }

    edited.and(acknowledged)
}
