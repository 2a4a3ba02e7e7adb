//! Core trait for the mail-protocol side of a check.

/// Fetches unread message counts of one account's folders.
///
/// Built once per account and reused for every check.
pub trait UnreadCounter: Send + Sync + 'static {
    /// Error returned when a folder could not be queried.
    type Error: std::error::Error + error_classifier::HasCause + Send + Sync + 'static;

    /// Query the number of unread messages in a folder.
    fn unread_count<'a>(
        &'a self,
        folder: &'a str,
    ) -> impl std::future::Future<Output = Result<u32, Self::Error>> + Send + 'a;
}

