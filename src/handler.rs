use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::pipeline::{Outcome, Pipeline};
use crate::sns::Publisher;
use crate::sportsdata::GameSource;

pub const SUCCESS_BODY: &str = "Message published to SNS successfully";
pub const FETCH_ERROR_BODY: &str = "Error fetching data";
pub const PUBLISH_ERROR_BODY: &str = "Error publishing to SNS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl From<&Outcome> for Response {
    fn from(outcome: &Outcome) -> Self {
        let (status_code, body) = match outcome {
            Outcome::Published { .. } => (200, SUCCESS_BODY),
            Outcome::FetchFailed(_) => (500, FETCH_ERROR_BODY),
            Outcome::PublishFailed(_) => (500, PUBLISH_ERROR_BODY),
        };
        Response { status_code, body: body.to_string() }
    }
}

/// Lambda entry point. The event payload carries nothing we use; failures are
/// reported through the response status rather than as invocation errors.
#[instrument(skip(pipeline, event), fields(request_id = %event.context.request_id))]
pub async fn handler<S, P>(pipeline: &Pipeline<S, P>, event: LambdaEvent<Value>) -> Result<Response, Error>
where
    S: GameSource + Sync,
    P: Publisher + Sync,
{
    let outcome = pipeline.run().await;
    Ok(Response::from(&outcome))
}
