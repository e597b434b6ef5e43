//! BoxBot -- object-safe dynamic dispatch wrapper for Bot.
//!
//! Same blanket-impl pattern as `BoxLlmProvider`.

use std::future::Future;
use std::pin::Pin;

use parley_types::chat::Message;

use super::{AskRequest, Bot, BotError};

/// Object-safe version of [`Bot`] with boxed futures.
pub trait BotDyn: Send + Sync {
    fn name(&self) -> &str;

    fn ask_boxed<'a>(
        &'a self,
        request: AskRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<Message, BotError>> + Send + 'a>>;
}

impl<T: Bot> BotDyn for T {
    fn name(&self) -> &str {
        Bot::name(self)
    }

    fn ask_boxed<'a>(
        &'a self,
        request: AskRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<Message, BotError>> + Send + 'a>> {
        Box::pin(self.ask(request))
    }
}

/// Type-erased bot, so the application can pick a variant at runtime.
pub struct BoxBot {
    inner: Box<dyn BotDyn + Send + Sync>,
}

impl BoxBot {
    pub fn new<T: Bot + 'static>(bot: T) -> Self {
        Self {
            inner: Box::new(bot),
        }
    }
}

impl Bot for BoxBot {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn ask(&self, request: AskRequest<'_>) -> Result<Message, BotError> {
        self.inner.ask_boxed(request).await
    }
}
