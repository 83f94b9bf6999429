use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{Ec2, Ec2Client};

use crate::error::ResponderError;
use rusoto_ec2::RebootInstancesRequest;

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[async_trait]
pub trait Reboot: Send + Sync {
    async fn reboot_instance(&self, instance_id: &str) -> Result<(), ResponderError>;
}

#[async_trait]
impl Reboot for Ec2InstanceClient {
    async fn reboot_instance(&self, instance_id: &str) -> Result<(), ResponderError> {
        let request = RebootInstancesRequest {
            instance_ids: vec![instance_id.to_string()],
            ..RebootInstancesRequest::default()
        };

        self.client
            .reboot_instances(request)
            .await
            .map_err(ResponderError::RebootError)
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Ec2Client::new(region))
    }

    pub fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }
}
