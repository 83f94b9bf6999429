use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::ec2_instance_client::Reboot;
use crate::error::ResponderError;
use crate::event::normalize_payload;
use crate::notification::Notification;
use crate::response::Response;
use crate::sns_topic_client::Publish;

const REBOOTED_BODY: &str = "Instance rebooted and notification sent.";

/// Reboots the configured instance once per invocation and reports the
/// outcome to the configured topic.
pub struct Responder<R, P> {
    config: Config,
    ec2: R,
    sns: P,
}

impl<R, P> Responder<R, P>
where
    R: Reboot,
    P: Publish,
{
    pub fn new(config: Config, ec2: R, sns: P) -> Self {
        Responder { config, ec2, sns }
    }

    /// Any error from the reboot or the success notification becomes a 500
    /// response. Only a failed failure notification is returned as `Err`.
    pub async fn respond(&self, event: &Value) -> Result<Response, ResponderError> {
        info!(%event, "Lambda function triggered by event");
        let payload = normalize_payload(event);
        info!(%payload, "normalized trigger payload");

        match self.reboot_and_notify().await {
            Ok(()) => Ok(Response::ok(REBOOTED_BODY)),
            Err(error) => {
                error!(
                    %error,
                    "Error rebooting EC2 instance or sending SNS notification"
                );
                let notification = Notification::reboot_failed(&self.config.instance_id, &error);
                if let Err(publish_error) =
                    self.sns.publish(&self.config.topic_arn, &notification).await
                {
                    error!(error = %publish_error, "failed to send error notification");
                    return Err(publish_error);
                }
                Ok(Response::error(&format!("Error: {}", error)))
            }
        }
    }

    async fn reboot_and_notify(&self) -> Result<(), ResponderError> {
        let instance_id = &self.config.instance_id;
        self.ec2.reboot_instance(instance_id).await?;
        info!(instance_id = %instance_id, "EC2 instance reboot initiated successfully");

        self.sns
            .publish(&self.config.topic_arn, &Notification::rebooted(instance_id))
            .await?;
        info!(topic_arn = %self.config.topic_arn, "SNS notification sent");
        Ok(())
    }
}
