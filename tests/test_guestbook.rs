use std::sync::Arc;

use chrono::DateTime;
use hole::site::guestbook::Guestbook;

#[tokio::test]
async fn test_entries_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let book = Guestbook::new(dir.path().join("guestbook.txt"));

    assert_eq!(book.entries().await.unwrap(), None);
}

#[tokio::test]
async fn test_sign_appends_timestamped_entry() {
    let dir = tempfile::tempdir().unwrap();
    let book = Guestbook::new(dir.path().join("guestbook.txt"));

    let entry = book.sign("Hello!").await.unwrap();
    book.sign("Second").await.unwrap();

    let contents = book.entries().await.unwrap().unwrap();
    assert!(contents.starts_with(&entry));

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let (timestamp, message) = lines[0].split_once(" - ").unwrap();
    assert_eq!(message, "Hello!");
    assert!(timestamp.ends_with('Z'));
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(lines[1].ends_with(" - Second"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signs_do_not_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let book = Arc::new(Guestbook::new(dir.path().join("guestbook.txt")));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let book = Arc::clone(&book);
        tasks.push(tokio::spawn(async move {
            book.sign(&format!("visitor {}", i)).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let contents = book.entries().await.unwrap().unwrap();
    let mut messages: Vec<&str> = contents
        .lines()
        .map(|l| l.split_once(" - ").unwrap().1)
        .collect();
    messages.sort();

    let mut expected: Vec<String> = (0..20).map(|i| format!("visitor {}", i)).collect();
    expected.sort();
    assert_eq!(messages, expected);
}
