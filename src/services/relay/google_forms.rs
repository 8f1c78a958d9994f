use std::time::Duration;

use async_trait::async_trait;

use super::LeadRelay;
use crate::errors::TransportError;
use crate::services::mapping::ExternalPayload;

pub struct GoogleFormsRelay {
    url: String,
    client: reqwest::Client,
}

impl GoogleFormsRelay {
    pub fn new(url: String, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl LeadRelay for GoogleFormsRelay {
    async fn submit(&self, payload: &ExternalPayload) -> Result<(), TransportError> {
        // The collector does not answer cross-origin callers in a usable way, so
        // its status and body are dropped unread. 4xx/5xx look like success.
        let resp = self.client.post(&self.url).form(payload).send().await?;

        tracing::debug!(status = %resp.status(), "relay answered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadForm;
    use crate::services::mapping::map_to_external_payload;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> ExternalPayload {
        map_to_external_payload(&LeadForm {
            name: "Dana Ruiz".to_string(),
            phone: "5551234567".to_string(),
            dental_work_type: "implants".to_string(),
            timeframe: "researching".to_string(),
        })
    }

    fn relay(url: String) -> GoogleFormsRelay {
        GoogleFormsRelay::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_posts_form_encoded_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/formResponse"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(
                "entry.141213607=Dana+Ruiz&entry.607915724=5551234567\
                 &entry.348284541=Dental+Implants&entry.199398544=Just+researching+options",
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = relay(format!("{}/formResponse", server.uri()))
            .submit(&payload())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_server_errors_are_not_observed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let result = relay(format!("{}/formResponse", server.uri()))
            .submit(&payload())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        // Port 1 on loopback has nothing listening.
        let result = relay("http://127.0.0.1:1/formResponse".to_string())
            .submit(&payload())
            .await;
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
