//! REST client for the Six Cities backend.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::domain::{
    ApiError, Credentials, FavoriteStatus, NewReview, Offer, OfferDetails, Review, User,
};
use crate::infra::app_config::AppConfig;
use crate::infra::token::TokenStorage;

/// Header carrying the auth token on every request.
pub const TOKEN_HEADER: &str = "X-Token";

/// Backend operations the store needs. Each call is one round trip.
#[async_trait]
pub trait OffersApi: Send + Sync {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError>;
    async fn fetch_offer(&self, offer_id: &str) -> Result<OfferDetails, ApiError>;
    async fn fetch_nearby(&self, offer_id: &str) -> Result<Vec<Offer>, ApiError>;
    async fn fetch_reviews(&self, offer_id: &str) -> Result<Vec<Review>, ApiError>;
    async fn post_review(&self, offer_id: &str, review: &NewReview) -> Result<Review, ApiError>;
    async fn fetch_favorites(&self) -> Result<Vec<Offer>, ApiError>;
    async fn set_favorite_status(
        &self,
        offer_id: &str,
        status: FavoriteStatus,
    ) -> Result<Offer, ApiError>;
    async fn check_auth(&self) -> Result<User, ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute<'a> {
    Offers,
    Offer(&'a str),
    Nearby(&'a str),
    Reviews(&'a str),
    Favorites,
    FavoriteStatus(&'a str, FavoriteStatus),
    Login,
    Logout,
}

impl ApiRoute<'_> {
    pub fn path(&self) -> String {
        match self {
            Self::Offers => "/offers".to_string(),
            Self::Offer(id) => format!("/offers/{id}"),
            Self::Nearby(id) => format!("/offers/{id}/nearby"),
            Self::Reviews(id) => format!("/offers/{id}/reviews"),
            Self::Favorites => "/favorites".to_string(),
            Self::FavoriteStatus(id, status) => {
                format!("/favorites/{id}/{}", status.as_path_segment())
            }
            Self::Login => "/login".to_string(),
            Self::Logout => "/logout".to_string(),
        }
    }
}

/// `OffersApi` over HTTP. The stored token is attached when present.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    tokens: TokenStorage,
}

impl HttpApi {
    pub fn new(config: &AppConfig, tokens: TokenStorage) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, route: ApiRoute<'_>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, route.path());
        let builder = self.client.request(method, url);
        let token = self.tokens.get();
        if token.is_empty() {
            builder
        } else {
            builder.header(TOKEN_HEADER, token)
        }
    }

    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl OffersApi for HttpApi {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.fetch_json(self.request(Method::GET, ApiRoute::Offers))
            .await
    }

    async fn fetch_offer(&self, offer_id: &str) -> Result<OfferDetails, ApiError> {
        self.fetch_json(self.request(Method::GET, ApiRoute::Offer(offer_id)))
            .await
    }

    async fn fetch_nearby(&self, offer_id: &str) -> Result<Vec<Offer>, ApiError> {
        self.fetch_json(self.request(Method::GET, ApiRoute::Nearby(offer_id)))
            .await
    }

    async fn fetch_reviews(&self, offer_id: &str) -> Result<Vec<Review>, ApiError> {
        self.fetch_json(self.request(Method::GET, ApiRoute::Reviews(offer_id)))
            .await
    }

    async fn post_review(&self, offer_id: &str, review: &NewReview) -> Result<Review, ApiError> {
        self.fetch_json(
            self.request(Method::POST, ApiRoute::Reviews(offer_id))
                .json(review),
        )
        .await
    }

    async fn fetch_favorites(&self) -> Result<Vec<Offer>, ApiError> {
        self.fetch_json(self.request(Method::GET, ApiRoute::Favorites))
            .await
    }

    async fn set_favorite_status(
        &self,
        offer_id: &str,
        status: FavoriteStatus,
    ) -> Result<Offer, ApiError> {
        self.fetch_json(self.request(Method::POST, ApiRoute::FavoriteStatus(offer_id, status)))
            .await
    }

    async fn check_auth(&self) -> Result<User, ApiError> {
        self.fetch_json(self.request(Method::GET, ApiRoute::Login))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.fetch_json(self.request(Method::POST, ApiRoute::Login).json(credentials))
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, ApiRoute::Logout))
            .await
            .map(|_| ())
    }
}
