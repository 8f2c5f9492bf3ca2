use crate::CookieFile;
use crate::cookie_file::split_cookie_header;

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use tempfile::TempDir;

fn url() -> Url {
    Url::parse("http://127.0.0.1:7701").unwrap()
}

#[test]
fn given_header_when_split_then_pairs_without_blanks() {
    let pairs: Vec<&str> = split_cookie_header("token=abc; ; theme=dark;junk").collect();
    assert_eq!(pairs, vec!["token=abc", "theme=dark"]);
}

#[test]
fn given_jar_with_cookie_when_persist_and_restore_then_new_jar_sends_it() {
    let temp = TempDir::new().unwrap();
    let file = CookieFile::new(temp.path().join("user.cookies"));
    let jar = Jar::default();
    jar.add_cookie_str("token=abc", &url());

    file.persist(&jar, &url()).unwrap();
    let fresh = Jar::default();
    let restored = file.restore(&fresh, &url()).unwrap();

    assert_eq!(restored, 1);
    let header = fresh.cookies(&url()).unwrap();
    assert_eq!(header.to_str().unwrap(), "token=abc");
}

#[test]
fn given_empty_jar_when_persist_then_file_removed() {
    let temp = TempDir::new().unwrap();
    let file = CookieFile::new(temp.path().join("user.cookies"));
    std::fs::write(file.path(), "token=stale").unwrap();

    file.persist(&Jar::default(), &url()).unwrap();

    assert!(!file.path().exists());
}

#[test]
fn given_no_file_when_restore_then_zero() {
    let temp = TempDir::new().unwrap();
    let file = CookieFile::new(temp.path().join("user.cookies"));

    assert_eq!(file.restore(&Jar::default(), &url()).unwrap(), 0);
}

#[test]
fn given_cookie_with_attributes_when_persist_then_only_pair_written() {
    let temp = TempDir::new().unwrap();
    let file = CookieFile::new(temp.path().join("user.cookies"));
    let jar = Jar::default();
    jar.add_cookie_str("token=abc; Max-Age=3600; Path=/; HttpOnly", &url());

    file.persist(&jar, &url()).unwrap();

    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "token=abc");
}

#[test]
fn given_saved_cookie_when_clear_then_file_removed_and_restore_empty() {
    let temp = TempDir::new().unwrap();
    let file = CookieFile::new(temp.path().join("user.cookies"));
    std::fs::write(file.path(), "token=abc").unwrap();

    file.clear().unwrap();

    assert!(!file.path().exists());
    assert_eq!(file.restore(&Jar::default(), &url()).unwrap(), 0);
}
