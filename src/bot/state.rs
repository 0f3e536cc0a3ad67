use crate::menu::MenuRouter;
use crate::telegram::MessagingGateway;
use std::sync::Arc;

/// Dependencies shared by every handler invocation
pub struct BotState {
    pub router: MenuRouter,
    pub gateway: Arc<dyn MessagingGateway>,
}

impl BotState {
    pub fn new(router: MenuRouter, gateway: Arc<dyn MessagingGateway>) -> Self {
        Self { router, gateway }
    }
}
