use std::future::Future;

use aws_sdk_sns::error::DisplayErrorContext;
use tracing::{error, info};

use crate::error::PublishError;

/// A topic the finished notification can be published to.
pub trait Publisher {
    fn publish(&self, message: &str, subject: &str) -> impl Future<Output = Result<(), PublishError>> + Send;
}

/// SNS client bound to one topic.
#[derive(Debug, Clone)]
pub struct Sns {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl Sns {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }

    /// Build a client from the Lambda's ambient AWS credentials and region.
    pub async fn from_env(topic_arn: String) -> Self {
        let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_sns::Client::new(&shared), topic_arn)
    }
}

impl Publisher for Sns {
    async fn publish(&self, message: &str, subject: &str) -> Result<(), PublishError> {
        let result = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await;
        match result {
            Ok(output) => {
                info!(message_id = output.message_id().unwrap_or_default(), "Published message to SNS");
                Ok(())
            }
            Err(e) => {
                let detail = DisplayErrorContext(&e).to_string();
                error!(error = %detail, topic = %self.topic_arn, "Failed to publish to SNS");
                Err(PublishError::Sns(detail))
            }
        }
    }
}
