use futures::future::BoxFuture;

use crate::gopher::context::Context;

/// Display text of the fallback error line.
pub const NOT_FOUND: &str = "Page not found!";

type Handler =
    Box<dyn for<'a> Fn(&'a mut Context) -> BoxFuture<'a, anyhow::Result<()>> + Send + Sync>;

struct Route {
    path: String,
    handler: Handler,
}

/// Exact-match selector routing.
///
/// Routes are kept in registration order and the first one whose path
/// equals the request path wins. Registering the same path twice is allowed,
/// but the second handler is never reached.
///
/// The table is filled before the server starts and only read afterwards.
///
/// # Example
///
/// ```ignore
/// let mut router = Router::new();
/// router.route("/", |ctx| home(ctx).boxed());
/// ```
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for requests whose path is exactly `path`.
    pub fn route<F>(&mut self, path: impl Into<String>, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut Context) -> BoxFuture<'a, anyhow::Result<()>>
            + Send
            + Sync
            + 'static,
    {
        self.routes.push(Route {
            path: path.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Registered paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Runs the handler for the request in `ctx`, or the not-found page.
    ///
    /// Handler errors are returned untouched; whatever the handler already
    /// wrote stays on the wire.
    pub async fn dispatch(&self, ctx: &mut Context) -> anyhow::Result<()> {
        match self.routes.iter().find(|r| r.path == ctx.path()) {
            Some(route) => (route.handler)(ctx).await,
            None => not_found(ctx).await,
        }
    }
}

async fn not_found(ctx: &mut Context) -> anyhow::Result<()> {
    ctx.error(NOT_FOUND).await?;
    ctx.directory("Go back to home", "/").await
}
