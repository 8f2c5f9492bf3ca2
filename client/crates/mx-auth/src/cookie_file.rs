//! Persistence of the session cookie between process runs.
//!
//! A browser keeps the cookie in its credential store; a terminal client has
//! to carry it across invocations itself. The file holds the `Cookie` header
//! value the jar would send to the base URL, nothing else.
//!
//! `Expires`, `Max-Age` and `Secure` are not kept: a restored cookie lives
//! until the server replaces or clears it, or until `clear` runs on logout.

use crate::cache::{CacheError, CacheResult, remove_if_exists, write_atomic};

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

#[derive(Debug, Clone)]
pub struct CookieFile {
    path: PathBuf,
}

impl CookieFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed `jar` with the cookies saved for `url`. Returns how many were added.
    pub fn restore(&self, jar: &Jar, url: &Url) -> CacheResult<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| CacheError::file_read(self.path.clone(), e))?;

        let mut restored = 0;
        for pair in split_cookie_header(&contents) {
            jar.add_cookie_str(pair, url);
            restored += 1;
        }

        debug!("Restored {restored} cookie(s) from {:?}", self.path);
        Ok(restored)
    }

    /// Save what the jar would send to `url`; remove the file when it would send nothing.
    pub fn persist(&self, jar: &Jar, url: &Url) -> CacheResult<()> {
        let header = jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
            .filter(|value| !value.trim().is_empty());

        match header {
            Some(value) => write_atomic(&self.path, value.as_bytes()),
            None => remove_if_exists(&self.path),
        }
    }

    pub fn clear(&self) -> CacheResult<()> {
        remove_if_exists(&self.path)
    }
}

/// `a=1; b=2` -> `["a=1", "b=2"]`, dropping blanks and entries without `=`
pub(crate) fn split_cookie_header(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty() && pair.contains('='))
}
