//! The example site served by the `hole` binary.

pub mod guestbook;
pub mod pages;

use std::sync::Arc;

use futures::FutureExt;

use crate::gopher::router::Router;
use guestbook::Guestbook;

/// Builds the router with every page of the site.
pub fn router(book: Arc<Guestbook>) -> Router {
    let mut router = Router::new();
    router
        .route("/", |ctx| pages::home(ctx).boxed())
        .route("/about", |ctx| pages::about(ctx).boxed())
        .route("/friends", |ctx| pages::friends(ctx).boxed())
        .route("/guestbook", move |ctx| {
            pages::guestbook(Arc::clone(&book), ctx).boxed()
        })
        .route("/links", |ctx| pages::links(ctx).boxed());
    router
}
