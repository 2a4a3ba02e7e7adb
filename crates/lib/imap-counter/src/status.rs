//! Unread counter query.

/// Query the number of unseen messages in a folder.
pub async fn fetch_unread<S>(
    session: &mut async_imap::Session<S>,
    folder: &str,
) -> Result<u32, async_imap::error::Error>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    let status = session.status(folder, "(UNSEEN)").await?;
    Ok(status.unseen.unwrap_or(0))
}
