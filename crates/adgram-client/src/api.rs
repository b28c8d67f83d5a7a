use crate::config::MarketConfig;
use crate::error::ClientResult;
use crate::types::{
    AuthResponse, CampaignResponse, ChannelResponse, ChannelsResponse, DealCreateResponse,
    DealsResponse, Envelope, NewCampaign, NewChannel, NewDeal, TransitionRequest,
    TransitionResponse,
};
use crate::{Campaign, Channel, DealCreated, User};
use adgram_proto::{ApiError, ApiResult, Deal, DealApi, TransitionOutcome};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

/// HTTP client for the marketplace backend.
pub struct MarketClient {
    client: Client,
    config: MarketConfig,
}

impl MarketClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MarketConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        let config = MarketConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Classify a non-2xx response: the backend reports logical rejections as
    /// 4xx with a `{success: false, error}` body, so probe for that before
    /// falling back to a transport error.
    async fn read_failure(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if let Ok(envelope) = serde_json::from_str::<Envelope>(&body) {
            if let Some(message) = envelope.error {
                return ApiError::Rejected(message);
            }
        }

        ApiError::Transport(format!("{status} - {body}"))
    }

    /// Auto-register (or look up) the configured telegram identity.
    pub async fn auth(&self) -> ApiResult<User> {
        info!("Authenticating telegram id {}", self.config.telegram_id);

        let response = self
            .client
            .post(self.url("/api/auth"))
            .json(&serde_json::json!({ "telegram_id": self.config.telegram_id }))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: AuthResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "authentication refused".to_string()),
            ));
        }
        body.user
            .ok_or_else(|| ApiError::Decode("missing user in auth response".to_string()))
    }

    /// List marketplace channels, sorted by subscribers server-side.
    pub async fn list_channels(&self) -> ApiResult<Vec<Channel>> {
        let response = self
            .client
            .get(self.url("/api/channels"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: ChannelsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "channel listing refused".to_string()),
            ));
        }
        debug!("Fetched {} channels", body.channels.len());
        Ok(body.channels)
    }

    /// Register a channel for the configured identity.
    pub async fn register_channel(&self, channel: &NewChannel) -> ApiResult<Channel> {
        info!("Registering channel {}", channel.username);

        let response = self
            .client
            .post(self.url("/api/channels"))
            .json(channel)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: ChannelResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "channel registration refused".to_string()),
            ));
        }
        body.channel
            .ok_or_else(|| ApiError::Decode("missing channel in response".to_string()))
    }

    /// Create an advertising campaign.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> ApiResult<Campaign> {
        info!("Creating campaign '{}'", campaign.title);

        let response = self
            .client
            .post(self.url("/api/campaign/create"))
            .json(campaign)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: CampaignResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "campaign creation refused".to_string()),
            ));
        }
        body.campaign
            .ok_or_else(|| ApiError::Decode("missing campaign in response".to_string()))
    }

    /// Open a deal between a campaign and a channel. The deal becomes visible
    /// through subsequent `/api/deals` fetches.
    pub async fn create_deal(&self, deal: &NewDeal) -> ApiResult<DealCreated> {
        info!("Creating deal for channel {}", deal.channel_id);

        let response = self
            .client
            .post(self.url("/api/deal/create"))
            .json(deal)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: DealCreateResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "deal creation refused".to_string()),
            ));
        }
        body.deal
            .ok_or_else(|| ApiError::Decode("missing deal in response".to_string()))
    }
}

#[async_trait]
impl DealApi for MarketClient {
    async fn fetch_deals(&self) -> ApiResult<Vec<Deal>> {
        debug!("Fetching deals from {}", self.config.base_url);

        let response = self
            .client
            .get(self.url("/api/deals"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_failure(response).await);
        }

        let body: DealsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !body.success {
            return Err(ApiError::Rejected(
                body.error.unwrap_or_else(|| "deal fetch refused".to_string()),
            ));
        }

        debug!("Fetched {} deals", body.deals.len());
        Ok(body.deals.into_iter().map(Deal::from).collect())
    }

    async fn request_transition(
        &self,
        deal_id: i64,
        target_state: &str,
    ) -> ApiResult<TransitionOutcome> {
        info!("Requesting transition of deal {deal_id} to '{target_state}'");

        let request = TransitionRequest {
            state: target_state.to_string(),
            telegram_id: self.config.telegram_id,
        };

        let response = self
            .client
            .post(self.url(&format!("/api/deal/{deal_id}/transition")))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // Rejections arrive as 400/404 with the same JSON shape, so decode
        // before looking at the status code.
        let reply: TransitionResponse = match serde_json::from_str(&body) {
            Ok(reply) => reply,
            Err(e) if status.is_success() => return Err(ApiError::Decode(e.to_string())),
            Err(_) => return Err(ApiError::Transport(format!("{status} - {body}"))),
        };

        if reply.success {
            Ok(TransitionOutcome::Applied {
                description: reply.transition,
            })
        } else {
            Ok(TransitionOutcome::Rejected {
                message: reply
                    .error
                    .unwrap_or_else(|| "Transition was not accepted".to_string()),
            })
        }
    }
}
