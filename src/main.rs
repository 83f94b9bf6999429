mod config;
mod ec2_instance_client;
mod error;
mod event;
mod notification;
mod responder;
mod response;
mod sns_topic_client;

use std::sync::Arc;

use anyhow::{anyhow, Context as _};
use chrono::Utc;
use lambda_runtime::{handler_fn, Context};
use rusoto_core::Region;
use serde_json::Value;
use tracing::{info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::ec2_instance_client::Ec2InstanceClient;
use crate::responder::Responder;
use crate::sns_topic_client::SnsTopicClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env().context("failed to load responder configuration")?;
    let responder = Arc::new(Responder::new(
        config,
        Ec2InstanceClient::new(Region::default()),
        SnsTopicClient::new(Region::default()),
    ));

    lambda_runtime::run(handler_fn(move |event: Value, context: Context| {
        let responder = Arc::clone(&responder);
        let span = info_span!(
            "invocation",
            request_id = %context.request_id,
            invoked_at = %Utc::now().to_rfc3339(),
        );
        async move {
            responder
                .respond(&event)
                .await
                .map_err(lambda_runtime::Error::from)
        }
        .instrument(span)
    }))
    .await
    .map_err(|error| anyhow!(error))?;
    Ok(())
}
