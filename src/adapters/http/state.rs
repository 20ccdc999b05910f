//! Shared state for the HTTP adapter.

use std::sync::Arc;

use crate::application::handlers::{
    CreateSubscriptionHandler, DeleteSubscriptionHandler, GetDashboardHandler, GetProfileHandler,
    GetSubscriptionDetailHandler, ListSubscriptionsHandler, SignInHandler, SignUpHandler,
    UpdateSubscriptionHandler,
};
use crate::ports::{AuthApi, SubscriptionApi};

/// Dependencies shared by every route. Handlers are built per request.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SubscriptionApi>,
    pub auth: Arc<dyn AuthApi>,
    pub default_currency: String,
}

impl AppState {
    pub fn new(
        api: Arc<dyn SubscriptionApi>,
        auth: Arc<dyn AuthApi>,
        default_currency: impl Into<String>,
    ) -> Self {
        Self {
            api,
            auth,
            default_currency: default_currency.into(),
        }
    }

    pub fn profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.api.clone())
    }

    pub fn sign_in_handler(&self) -> SignInHandler {
        SignInHandler::new(self.auth.clone())
    }

    pub fn sign_up_handler(&self) -> SignUpHandler {
        SignUpHandler::new(self.auth.clone())
    }

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.api.clone(), self.default_currency.clone())
    }

    pub fn list_handler(&self) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(self.api.clone())
    }

    pub fn detail_handler(&self) -> GetSubscriptionDetailHandler {
        GetSubscriptionDetailHandler::new(self.api.clone())
    }

    pub fn create_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.api.clone())
    }

    pub fn update_handler(&self) -> UpdateSubscriptionHandler {
        UpdateSubscriptionHandler::new(self.api.clone())
    }

    pub fn delete_handler(&self) -> DeleteSubscriptionHandler {
        DeleteSubscriptionHandler::new(self.api.clone())
    }
}
