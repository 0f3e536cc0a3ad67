//! Slash-command handler
//!
//! Commands are not bound to a displayed message, so the screen is always
//! sent as a new message.

use crate::bot::{BotState, Command};
use crate::types::error::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, info};

pub async fn handle_command(msg: Message, cmd: Command, state: Arc<BotState>) -> Result<()> {
    debug!(
        chat_id = msg.chat.id.0,
        sender_id = ?msg.from.as_ref().map(|u| u.id.0),
        command = cmd.name(),
        payload = cmd.payload(),
        "Handling command"
    );

    let Some(screen) = state.router.handle_command(cmd.name()) else {
        info!(command = cmd.name(), "No screen for command, ignoring");
        return Ok(());
    };

    state
        .gateway
        .send(msg.chat.id, &screen.body, &screen.keyboard)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::handlers::fixtures;
    use crate::menu::MenuRouter;
    use crate::telegram::gateway::mock::{MockAction, MockGateway};
    use teloxide::utils::command::BotCommands;

    fn state_with(gateway: Arc<MockGateway>, contact: &str) -> Arc<BotState> {
        Arc::new(BotState::new(MenuRouter::new(contact), gateway))
    }

    #[tokio::test]
    async fn test_start_sends_main_menu() {
        let gateway = Arc::new(MockGateway::new());
        let state = state_with(gateway.clone(), "@kashsh00");

        handle_command(fixtures::message("/start"), Command::Start(String::new()), state)
            .await
            .unwrap();

        let actions = gateway.recorded_actions();
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            MockAction::Send { chat_id, text, keyboard } => {
                assert_eq!(*chat_id, fixtures::CHAT_ID);
                assert!(text.contains("Welcome to Canva Pro Premium Access Bot!"));
                assert_eq!(
                    keyboard.layout(),
                    vec![
                        vec!["plans", "buy"],
                        vec!["trial", "reviews"],
                        vec!["whyus", "help"],
                    ]
                );
            }
            other => panic!("expected send, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deep_link_start_sends_welcome() {
        let gateway = Arc::new(MockGateway::new());
        let state = state_with(gateway.clone(), "@kashsh00");
        let cmd = Command::parse("/start promo123", "bot").unwrap();

        handle_command(fixtures::message("/start promo123"), cmd, state)
            .await
            .unwrap();

        let actions = gateway.recorded_actions();
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            MockAction::Send { text, .. } if text.contains("Welcome to Canva Pro Premium Access Bot!")
        ));
    }

    #[tokio::test]
    async fn test_help_includes_contact() {
        let gateway = Arc::new(MockGateway::new());
        let state = state_with(gateway.clone(), "@canva_desk");

        handle_command(fixtures::message("/help"), Command::Help(String::new()), state)
            .await
            .unwrap();

        let actions = gateway.recorded_actions();
        assert!(matches!(
            &actions[0],
            MockAction::Send { text, .. } if text.contains("@canva_desk")
        ));
    }

    #[tokio::test]
    async fn test_command_never_edits_or_acknowledges() {
        let gateway = Arc::new(MockGateway::new());
        let state = state_with(gateway.clone(), "@kashsh00");

        for cmd in [
            Command::Start(String::new()),
            Command::Plans(String::new()),
            Command::Buy(String::new()),
            Command::WhyUs(String::new()),
            Command::Reviews(String::new()),
            Command::Help(String::new()),
        ] {
            handle_command(fixtures::message("/x"), cmd, state.clone())
                .await
                .unwrap();
        }

        let actions = gateway.recorded_actions();
        assert_eq!(actions.len(), 6);
        assert!(actions.iter().all(|a| matches!(a, MockAction::Send { .. })));
    }

    #[tokio::test]
    async fn test_send_failure_propagates() {
        let gateway =
            Arc::new(MockGateway::new().with_send_result(Err("network down".to_string())));
        let state = state_with(gateway.clone(), "@kashsh00");

        let result = handle_command(
            fixtures::message("/plans"),
            Command::Plans(String::new()),
            state,
        )
        .await;

        let err = tokio_test::assert_err!(result);
        assert!(err.is_transient());
        assert!(err.to_string().contains("network down"));
        assert_eq!(gateway.recorded_actions().len(), 1);
    }
}
