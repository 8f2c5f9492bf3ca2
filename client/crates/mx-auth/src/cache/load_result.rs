use mx_core::Identity;

/// Result of reading the cache - distinguishes "absent" from "corrupt".
#[derive(Debug, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if the file exists but could not be used
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn is_corrupted(&self) -> bool {
        self.corruption_error.is_some()
    }
}
