/// Announcement destinations
mod vk;

use std::future::Future;

use crate::error::PublishError;
use crate::models::PostReceipt;

pub use vk::VkWall;

/// Somewhere an announcement can be posted.
///
/// Every successful call creates a new post; there is no deduplication.
pub trait PublishGateway {
    /// Post `text` on the wall owned by `owner_id` (negative for a community)
    fn publish(
        &self,
        text: &str,
        owner_id: i64,
    ) -> impl Future<Output = Result<PostReceipt, PublishError>> + Send;
}
