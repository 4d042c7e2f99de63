use crate::form::{FormValues, ServerNote};
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const ORDER_ENDPOINT: &str = "http://localhost:9009/api/order";

/// Wire shape of an order: camelCase keys, toppings as catalog ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl From<FormValues> for OrderPayload {
    fn from(values: FormValues) -> OrderPayload {
        OrderPayload {
            full_name: values.full_name,
            size: values.size,
            toppings: values.toppings,
        }
    }
}

/// Both the success and the error reply carry a single message field,
/// surfaced to the user verbatim.
#[derive(Debug, Deserialize)]
struct ServerReply {
    message: String,
}

/// Sends the order and maps every possible outcome onto a `ServerNote`.
/// Transport and decode errors are folded into the failure path; nothing
/// is retried.
pub async fn place_order(payload: &OrderPayload) -> ServerNote {
    match send(payload).await {
        Ok(note) => note,
        Err(err) => ServerNote::Failure(err.to_string()),
    }
}

async fn send(payload: &OrderPayload) -> Result<ServerNote> {
    let response = reqwest::Client::new()
        .post(ORDER_ENDPOINT)
        .json(payload)
        .send()
        .await?;
    let accepted = response.status().is_success();
    let body = response.text().await?;
    parse_reply(accepted, &body)
}

/// Turns a raw reply body into a note
///
/// # Parameters
/// accepted: whether the response status was 2xx
/// body: the raw JSON reply body
///
/// # Returns
/// The server's message as a success or failure note, or an error if the
/// body does not hold a message field
fn parse_reply(accepted: bool, body: &str) -> Result<ServerNote> {
    let reply: ServerReply = serde_json::from_str(body)?;
    Ok(if accepted {
        ServerNote::Success(reply.message)
    } else {
        ServerNote::Failure(reply.message)
    })
}
