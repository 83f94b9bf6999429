use crate::error::ResponderError;

const INSTANCE_ID: &str = "INSTANCE_ID";
const SNS_TOPIC_ARN: &str = "SNS_TOPIC_ARN";

/// Identifiers fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub instance_id: String,
    pub topic_arn: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ResponderError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ResponderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            instance_id: Self::required(&lookup, INSTANCE_ID)?,
            topic_arn: Self::required(&lookup, SNS_TOPIC_ARN)?,
        })
    }

    fn required<F>(lookup: &F, name: &'static str) -> Result<String, ResponderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ResponderError::MissingConfig(name))
    }
}
