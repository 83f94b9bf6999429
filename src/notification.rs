pub const REBOOTED_SUBJECT: &str = "[EC2 Alert] Instance Rebooted";
pub const REBOOT_FAILED_SUBJECT: &str = "[EC2 Alert] Error during instance reboot";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub subject: String,
    pub message: String,
}

impl Notification {
    pub fn rebooted(instance_id: &str) -> Self {
        Notification {
            subject: REBOOTED_SUBJECT.to_string(),
            message: format!(
                "EC2 instance {} has been successfully rebooted by the Lambda function.",
                instance_id
            ),
        }
    }

    pub fn reboot_failed(instance_id: &str, error: &dyn std::error::Error) -> Self {
        Notification {
            subject: REBOOT_FAILED_SUBJECT.to_string(),
            message: format!(
                "An error occurred while trying to reboot EC2 instance {}: {}",
                instance_id, error
            ),
        }
    }
}
