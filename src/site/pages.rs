//! Page handlers for the hole.

use std::sync::Arc;

use tracing::warn;

use crate::gopher::context::Context;
use crate::site::guestbook::Guestbook;

pub const BANNER: &str = r" _____                _   _
| ____|_   _____ _ __| |_( )___
|  _| \ \ / / _ \ '__| __|// __|
| |___ \ V /  __/ |  | |_  \__ \
|_____| \_/ \___|_|   \__| |___/

  ____             _                 _   _       _
 / ___| ___  _ __ | |__   ___ _ __  | | | | ___ | | ___
| |  _ / _ \| '_ \| '_ \ / _ \ '__| | |_| |/ _ \| |/ _ \
| |_| | (_) | |_) | | | |  __/ |    |  _  | (_) | |  __/
 \____|\___/| .__/|_| |_|\___|_|    |_| |_|\___/|_|\___|
            |_|";

pub const NO_ENTRIES: &str = "No entries yet! Sign the guestbook to be the first one!";

async fn banner(ctx: &mut Context) -> anyhow::Result<()> {
    ctx.info(BANNER).await
}

pub async fn home(ctx: &mut Context) -> anyhow::Result<()> {
    banner(ctx).await?;
    ctx.info(
        "# Home

Welcome to my hole! Yes, 'hole' really is the word people use for a
site on the gopher protocol. This one is meant to be a more permanent
spot on the smolweb.

This space is pretty empty right now, but I hope to fill it with a bit
more content over time.

## Menu:
",
    )
    .await?;
    ctx.directory("About this hole", "/about").await?;
    ctx.directory("Projects", "/projects").await?;
    ctx.directory("Friends with holes", "/friends").await?;
    ctx.directory("Interesting Gopher Sites", "/links").await?;

    ctx.info("").await?;
    ctx.search("Sign my guestbook", "/guestbook").await?;
    ctx.directory("View my guestbook", "/guestbook").await?;
    ctx.info("").await?;
    ctx.link("My website", "https://evertpot.com/").await?;
    ctx.link("My mastodon", "https://indieweb.social/evert").await?;
    ctx.link("Link to source on Github", "https://github.com/evert/hole")
        .await
}

pub async fn about(ctx: &mut Context) -> anyhow::Result<()> {
    banner(ctx).await?;
    ctx.title("# About this hole").await?;
    ctx.info(
        "
I have always been fascinated by protocols. Gopher was past its heyday
when I got online, but gopher:// links still turned up now and then
back when every major browser understood them.
",
    )
    .await?;
    ctx.link("My original Gopher server", "https://evertpot.com/100/")
        .await?;

    ctx.info(
        "
A gopher server needs its own IP address (there are no vhosts on
gopher), so a permanent site waited until there was a homelab to run
it on. These days gopher is less of a novelty and more of a respite
from a web overrun by ads and short form content.

The server is open source, feel free to fork it and dig your own hole.
",
    )
    .await?;
    ctx.link("Server source on Github", "https://github.com/evert/hole")
        .await?;

    ctx.info(
        "
So what is this going to be? Probably a slightly more casual and
personal space than the blog.
",
    )
    .await?;
    ctx.link("My HTTP blog", "https://evertpot.com/").await?;
    ctx.info("").await?;

    ctx.directory("Go back to home", "/").await
}

pub async fn friends(ctx: &mut Context) -> anyhow::Result<()> {
    banner(ctx).await?;
    ctx.info(
        "# Friends with holes

No friends with holes to link to yet. Here's hoping this changes in
the future!",
    )
    .await?;

    ctx.directory("Go back to home", "/").await
}

pub async fn links(ctx: &mut Context) -> anyhow::Result<()> {
    banner(ctx).await?;
    ctx.info("# Interesting Gopher Sites").await?;
    ctx.link("Steven Frank's Gopher Site", "gopher://stevenf.com/")
        .await?;
    ctx.info("").await?;
    ctx.directory("Go back to home", "/").await
}

/// Shows the guestbook. A query signs it first.
pub async fn guestbook(book: Arc<Guestbook>, ctx: &mut Context) -> anyhow::Result<()> {
    banner(ctx).await?;

    let message = ctx.query().map(str::to_owned);
    if let Some(message) = &message {
        ctx.info(&format!("Thanks for signing my guestbook, \"{}\"!", message))
            .await?;
        book.sign(message).await?;
    }

    ctx.info("").await?;
    ctx.info("# Guestbook\n").await?;
    let entries = match book.entries().await {
        Ok(Some(entries)) => entries,
        Ok(None) => NO_ENTRIES.to_string(),
        Err(e) => {
            warn!(error = %e, "Could not read guestbook");
            NO_ENTRIES.to_string()
        }
    };
    ctx.info(&entries).await?;

    ctx.info("").await?;
    if message.is_none() {
        ctx.search("Sign my guestbook", "/guestbook").await?;
    }

    ctx.directory("Go back to home", "/").await
}
