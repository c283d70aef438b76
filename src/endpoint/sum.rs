//! Typed adapter binding the sum service to the endpoint shape.

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::{Endpoint, EndpointError, Failer};
use crate::service::{ServiceError, SumService};

/// Wire request for the sum operation. Immutable once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumRequest {
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: i64,
}

/// Wire response for the sum operation.
///
/// `Err` crosses the wire as the error's stable message, empty for none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumResponse {
    #[serde(rename = "V")]
    pub v: i64,
    #[serde(rename = "Err", with = "err_string")]
    pub err: Option<ServiceError>,
}

impl Failer for SumResponse {
    fn failed(&self) -> Option<ServiceError> {
        self.err
    }
}

mod err_string {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::service::ServiceError;

    pub fn serialize<S: Serializer>(
        err: &Option<ServiceError>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match err {
            Some(e) => serializer.serialize_str(&e.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ServiceError>, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "" => Ok(None),
            "integer overflow" => Ok(Some(ServiceError::IntOverflow)),
            other => Err(D::Error::custom(format!("unrecognized service error: {other}"))),
        }
    }
}

/// Narrows the wire request, invokes the service chain, and widens the
/// result back into a wire response.
pub struct SumEndpoint<S> {
    service: S,
}

impl<S> SumEndpoint<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl<S: SumService> Endpoint for SumEndpoint<S> {
    type Request = SumRequest;
    type Response = SumResponse;

    fn call(
        &self,
        request: SumRequest,
    ) -> impl Future<Output = Result<SumResponse, EndpointError>> + Send {
        async move {
            match self.service.sum(request.x, request.y).await {
                Ok(v) => Ok(SumResponse { v, err: None }),
                // A recognized domain error never fails the endpoint call;
                // it rides inside the response for the transport to map.
                Err(e) => Ok(SumResponse { v: 0, err: Some(e) }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::StatelessService;

    #[tokio::test]
    async fn test_adapter_widens_success() {
        let endpoint = SumEndpoint::new(StatelessService::new());
        let response = endpoint.call(SumRequest { x: 5, y: 7 }).await.unwrap();
        assert_eq!(response, SumResponse { v: 12, err: None });
        assert!(response.failed().is_none());
    }

    #[tokio::test]
    async fn test_adapter_embeds_domain_error() {
        let endpoint = SumEndpoint::new(StatelessService::new());
        let response = endpoint.call(SumRequest { x: i64::MAX, y: 1 }).await.unwrap();
        assert_eq!(response.v, 0);
        assert_eq!(response.failed(), Some(ServiceError::IntOverflow));
    }

    #[test]
    fn test_request_round_trip() {
        let request = SumRequest { x: 5, y: -7 };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, r#"{"X":5,"Y":-7}"#);
        let decoded: SumRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_response_err_field_encoding() {
        let ok = SumResponse { v: 12, err: None };
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"V":12,"Err":""}"#);

        let overflow = SumResponse { v: 0, err: Some(ServiceError::IntOverflow) };
        let encoded = serde_json::to_string(&overflow).unwrap();
        assert_eq!(encoded, r#"{"V":0,"Err":"integer overflow"}"#);
        let decoded: SumResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, overflow);
    }

    #[test]
    fn test_response_rejects_unknown_error_tag() {
        let result = serde_json::from_str::<SumResponse>(r#"{"V":0,"Err":"out of cheese"}"#);
        assert!(result.is_err());
    }
}
