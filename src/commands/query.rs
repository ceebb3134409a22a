use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::di::ServiceContainer;
use crate::interactor::query_interactor::QueryInteractorImpl;
use crate::presenter::query_presenter::{QueryPresenter, QueryPresenterImpl};
use crate::view::query_view::TelegramQueryView;

/// Handles plain text messages as address lookups
pub async fn receive_address_query(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let interactor = Arc::new(QueryInteractorImpl::new(services.resolver()));
    let view = Arc::new(TelegramQueryView::new(bot, msg.chat.id));
    let presenter = QueryPresenterImpl::new(interactor, view);

    presenter.handle_text(text).await
}
