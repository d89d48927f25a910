use std::sync::Arc;

use hole::config::ServerConfig;
use hole::gopher::context::{Context, INFO_WIDTH};
use hole::gopher::item::ItemType;
use hole::gopher::parser::parse_line;
use hole::gopher::request::Request;
use tokio::io::{AsyncReadExt, DuplexStream};

fn context(path: &str, query: Option<&str>) -> (Context, DuplexStream) {
    let (tx, rx) = tokio::io::duplex(64 * 1024);
    let server = Arc::new(ServerConfig {
        host: "gopher.test".to_string(),
        port: 7070,
        bind: None,
    });
    let request = Request::new(path, query.map(str::to_string));
    (Context::new(request, server, tx), rx)
}

async fn finish(ctx: Context, mut rx: DuplexStream) -> Vec<String> {
    ctx.close().await.unwrap();
    let mut out = String::new();
    rx.read_to_string(&mut out).await.unwrap();
    out.split_inclusive("\r\n").map(str::to_string).collect()
}

#[tokio::test]
async fn test_context_exposes_request() {
    let (ctx, _rx) = context("guestbook", Some("hi"));

    assert_eq!(ctx.path(), "/guestbook");
    assert_eq!(ctx.query(), Some("hi"));
    assert_eq!(ctx.server().port, 7070);
}

#[tokio::test]
async fn test_info_single_line() {
    let (mut ctx, rx) = context("/", None);
    ctx.info("hello").await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(lines, vec!["ihello\t\thost.invalid\t0\r\n"]);
}

#[tokio::test]
async fn test_info_empty_text_is_blank_line() {
    let (mut ctx, rx) = context("/", None);
    ctx.info("").await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(lines, vec!["i\t\thost.invalid\t0\r\n"]);
}

#[tokio::test]
async fn test_info_wraps_and_splits() {
    let long = "x".repeat(150);
    let text = format!("{}\nshort\n", long);

    let (mut ctx, rx) = context("/", None);
    ctx.info(&text).await.unwrap();

    let lines = finish(ctx, rx).await;
    let displays: Vec<String> = lines
        .iter()
        .map(|l| parse_line(l.as_bytes()).unwrap())
        .inspect(|l| assert_eq!(l.item_type, ItemType::Info))
        .map(|l| l.display)
        .collect();

    // 150 chars -> 70 + 70 + 10, then "short", then the trailing empty segment
    assert_eq!(displays.len(), 5);
    assert!(displays.iter().all(|d| d.len() <= INFO_WIDTH));
    assert_eq!(displays[..3].concat(), long);
    assert_eq!(displays[3], "short");
    assert_eq!(displays[4], "");
}

#[tokio::test]
async fn test_info_exact_width_is_not_split() {
    let (mut ctx, rx) = context("/", None);
    ctx.info(&"y".repeat(INFO_WIDTH)).await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(lines.len(), 1);
}

#[tokio::test]
async fn test_title_line() {
    let (mut ctx, rx) = context("/", None);
    ctx.title("# About").await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(lines, vec!["i# About\tTITLE\thost.invalid\t0\r\n"]);
}

#[tokio::test]
async fn test_directory_uses_server_defaults() {
    let (mut ctx, rx) = context("/", None);
    ctx.directory("About", "/about").await.unwrap();
    ctx.remote_directory("Elsewhere", "/", Some("other.host"), None)
        .await
        .unwrap();
    ctx.remote_directory("Port only", "/p", None, Some(70))
        .await
        .unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(
        lines,
        vec![
            "1About\t/about\tgopher.test\t7070\r\n",
            "1Elsewhere\t/\tother.host\t7070\r\n",
            "1Port only\t/p\tgopher.test\t70\r\n",
        ]
    );
}

#[tokio::test]
async fn test_link_gopher_root_defaults_to_directory() {
    let (mut ctx, rx) = context("/", None);
    ctx.link("Steven", "gopher://stevenf.com/").await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(lines, vec!["1Steven\t\tstevenf.com\t70\r\n"]);
}

#[tokio::test]
async fn test_link_gopher_with_type_and_port() {
    let (mut ctx, rx) = context("/", None);
    ctx.link("Notes", "gopher://example.org:7071/0/notes.txt")
        .await
        .unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(lines, vec!["0Notes\t/notes.txt\texample.org\t7071\r\n"]);
}

#[tokio::test]
async fn test_link_other_scheme_is_html() {
    let (mut ctx, rx) = context("/", None);
    ctx.link("Site", "https://example.com/page").await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(
        lines,
        vec!["hSite\tURL:https://example.com/page\thost.invalid\t0\r\n"]
    );
}

#[tokio::test]
async fn test_link_rejects_invalid_url() {
    let (mut ctx, _rx) = context("/", None);

    assert!(ctx.link("Broken", "not a url").await.is_err());
}

#[tokio::test]
async fn test_error_and_search_lines() {
    let (mut ctx, rx) = context("/", None);
    ctx.error("Oops").await.unwrap();
    ctx.search("Sign my guestbook", "/guestbook").await.unwrap();

    let lines = finish(ctx, rx).await;
    assert_eq!(
        lines,
        vec![
            "3Oops\t\thost.invalid\t0\r\n",
            "7Sign my guestbook\t/guestbook\tgopher.test\t7070\r\n",
        ]
    );
}
