//! ListSubscriptionsHandler - Query handler for the subscriptions table.

use std::sync::Arc;

use crate::application::handlers::SubscriptionError;
use crate::domain::subscription::{normalize_all, NormalizedSubscription, SubscriptionView};
use crate::ports::{AccessToken, SubscriptionApi};

/// Fetches and normalizes every subscription of the token's owner.
///
/// Shared by all views that list subscriptions so the fallback rules are
/// applied in exactly one place.
pub(crate) async fn load_subscriptions(
    api: &dyn SubscriptionApi,
    token: &AccessToken,
) -> Result<Vec<NormalizedSubscription>, SubscriptionError> {
    let account = api.current_account(token).await?;
    let raws = api.list_for_user(token, &account.id).await?;
    let subscriptions = normalize_all(&raws);

    tracing::debug!(
        user_id = %account.id,
        count = subscriptions.len(),
        "Loaded subscriptions"
    );
    Ok(subscriptions)
}

/// Query to list the caller's subscriptions.
#[derive(Debug, Clone)]
pub struct ListSubscriptionsQuery {
    pub token: AccessToken,
}

pub struct ListSubscriptionsHandler {
    api: Arc<dyn SubscriptionApi>,
}

impl ListSubscriptionsHandler {
    pub fn new(api: Arc<dyn SubscriptionApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<Vec<SubscriptionView>, SubscriptionError> {
        let subscriptions = load_subscriptions(self.api.as_ref(), &query.token).await?;
        Ok(SubscriptionView::project_all(subscriptions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::InMemorySubscriptionApi;
    use crate::ports::ApiError;
    use serde_json::json;

    fn query() -> ListSubscriptionsQuery {
        ListSubscriptionsQuery {
            token: AccessToken::new("valid-token").unwrap(),
        }
    }

    #[tokio::test]
    async fn lists_normalized_views_in_upstream_order() {
        let api = InMemorySubscriptionApi::new()
            .with_account("valid-token", "u1")
            .with_record(json!({ "_id": "a", "renewaltDate": "2024-05-01" }))
            .with_record(json!({ "id": "b", "status": "bogus" }));
        let handler = ListSubscriptionsHandler::new(Arc::new(api));

        let views = handler.handle(query()).await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].subscription.id_str(), Some("a"));
        assert_eq!(views[0].subscription.renewal_date.as_deref(), Some("2024-05-01"));
        assert_eq!(views[1].status_label, "Inactive");
    }

    #[tokio::test]
    async fn invalid_token_is_unauthorized() {
        let api = InMemorySubscriptionApi::new().with_account("other-token", "u1");
        let handler = ListSubscriptionsHandler::new(Arc::new(api));

        let result = handler.handle(query()).await;
        assert!(matches!(result, Err(SubscriptionError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn upstream_failures_propagate() {
        let api = InMemorySubscriptionApi::new()
            .with_account("valid-token", "u1")
            .with_error(ApiError::from_status(500, "boom"));
        let handler = ListSubscriptionsHandler::new(Arc::new(api));

        let result = handler.handle(query()).await;
        assert!(matches!(result, Err(SubscriptionError::Upstream(_))));
    }
}
