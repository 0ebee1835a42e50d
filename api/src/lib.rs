use serde::{Deserialize, Serialize};

pub mod admin;
pub mod app;
pub mod broadcast;
pub mod category;
pub mod client;
pub mod device;
pub mod plan;

pub const API_ROOT: &str = "/dashboard/api";

pub const GENERIC_FAILURE: &str = "The request could not be completed";

// every endpoint answers with the same envelope
//
// success: false is a rejection from the backend, and callers are expected to treat
// it exactly like a transport error (see into_result())
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> anyhow::Result<T> {
        let message = self
            .message
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| String::from(GENERIC_FAILURE));

        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(anyhow::Error::msg(format!("{message}: empty response"))),
            (false, _) => Err(anyhow::Error::msg(message)),
        }
    }
}

// endpoint!(UpdatePlan) expands into
//
//   pub async fn update_plan(req: &UpdatePlanReq) -> anyhow::Result<UpdatePlanResp>
//
// which posts the request to /dashboard/api/UpdatePlan and unwraps the envelope
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(format!("{}/{}", $crate::API_ROOT, stringify!([<$name:camel>])).as_str())
                    .json(&req.clone())?
                    .send()
                    .await?;

                if !resp.ok() {
                    return Err(anyhow::Error::msg(resp.text().await?));
                }

                resp.json::<$crate::ApiResponse<[<$name:camel Resp>]>>()
                    .await?
                    .into_result()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_response_surfaces_backend_message() {
        let resp: ApiResponse<u64> =
            serde_json::from_str(r#"{"success": false, "message": "plan name taken"}"#).unwrap();

        let err = resp.into_result().unwrap_err();
        assert_eq!(err.to_string(), "plan name taken");
    }

    #[test]
    fn rejected_response_without_message_uses_generic_text() {
        let resp: ApiResponse<u64> = serde_json::from_str(r#"{"success": false}"#).unwrap();

        assert_eq!(resp.into_result().unwrap_err().to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn accepted_response_yields_data() {
        let resp: ApiResponse<u64> =
            serde_json::from_str(r#"{"success": true, "data": 42}"#).unwrap();

        assert_eq!(resp.into_result().unwrap(), 42);
    }

    #[test]
    fn accepted_response_missing_data_is_a_failure() {
        let resp: ApiResponse<u64> = serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(resp.into_result().is_err());
    }
}
