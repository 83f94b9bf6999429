use crate::error::ResponderError;
use crate::notification::Notification;
use async_trait::async_trait;

use rusoto_core::Region;
use rusoto_sns::{PublishInput, Sns, SnsClient};
use tracing::debug;

pub struct SnsTopicClient {
    client: SnsClient,
}

#[async_trait]
pub trait Publish: Send + Sync {
    async fn publish(
        &self,
        topic_arn: &str,
        notification: &Notification,
    ) -> Result<(), ResponderError>;
}

#[async_trait]
impl Publish for SnsTopicClient {
    async fn publish(
        &self,
        topic_arn: &str,
        notification: &Notification,
    ) -> Result<(), ResponderError> {
        let response = self
            .client
            .publish(PublishInput {
                topic_arn: Some(topic_arn.to_string()),
                subject: Some(notification.subject.clone()),
                message: notification.message.clone(),
                ..Default::default()
            })
            .await?;
        debug!(message_id = ?response.message_id, "published notification");
        Ok(())
    }
}

impl SnsTopicClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(SnsClient::new(region))
    }

    pub fn new_with_client(client: SnsClient) -> Self {
        SnsTopicClient { client }
    }
}
