#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use crate::domain::subscription::{
        normalize, normalize_all, BillingFrequency, RawSubscriptionRecord, SubscriptionStatus,
    };

    fn raw(value: serde_json::Value) -> RawSubscriptionRecord {
        serde_json::from_value(value).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Identifier reconciliation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn store_id_wins_over_id() {
        let sub = normalize(&raw(json!({ "_id": "store-1", "id": "client-1" })));
        assert_eq!(sub.id_str(), Some("store-1"));
    }

    #[test]
    fn blank_store_id_falls_back_to_id() {
        let sub = normalize(&raw(json!({ "_id": "  ", "id": "client-1" })));
        assert_eq!(sub.id_str(), Some("client-1"));
    }

    #[test]
    fn numeric_id_is_rendered_as_text() {
        let sub = normalize(&raw(json!({ "id": 1234 })));
        assert_eq!(sub.id_str(), Some("1234"));
    }

    #[test]
    fn missing_identifier_is_absent() {
        let sub = normalize(&raw(json!({ "name": "Orphan" })));
        assert!(sub.id.is_none());
        assert_eq!(sub.name, "Orphan");
        assert_eq!(serde_json::to_value(&sub).unwrap()["id"], serde_json::Value::Null);
    }

    #[test]
    fn literal_unknown_is_a_real_identifier() {
        let sub = normalize(&raw(json!({ "_id": "unknown" })));
        assert_eq!(sub.id_str(), Some("unknown"));
        assert_ne!(sub, normalize(&raw(json!({}))));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Renewal date reconciliation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn misspelled_renewal_date_is_used_as_fallback() {
        let sub = normalize(&raw(json!({ "_id": "a", "renewaltDate": "2024-05-01" })));
        assert_eq!(sub.renewal_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn correctly_spelled_renewal_date_wins() {
        let sub = normalize(&raw(json!({
            "_id": "a",
            "renewalDate": "2024-05-01",
            "renewaltDate": "2023-01-01"
        })));
        assert_eq!(sub.renewal_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn null_renewal_date_falls_back_to_misspelling() {
        let sub = normalize(&raw(json!({
            "_id": "a",
            "renewalDate": null,
            "renewaltDate": "2024-07-01"
        })));
        assert_eq!(sub.renewal_date.as_deref(), Some("2024-07-01"));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Defaults
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn empty_record_gets_all_defaults() {
        let sub = normalize(&RawSubscriptionRecord::default());
        assert_eq!(sub.name, "");
        assert_eq!(sub.price, 0.0);
        assert_eq!(sub.frequency, BillingFrequency::Monthly);
        assert_eq!(sub.status, SubscriptionStatus::Inactive);
        assert!(sub.currency.is_none());
        assert!(sub.renewal_date.is_none());
        assert!(sub.category.is_none());
    }

    #[test]
    fn unknown_status_and_frequency_fall_back() {
        let sub = normalize(&raw(json!({
            "_id": "a",
            "status": "paused",
            "frequency": "quarterly"
        })));
        assert_eq!(sub.status, SubscriptionStatus::Inactive);
        assert_eq!(sub.frequency, BillingFrequency::Monthly);
    }

    #[test]
    fn negative_or_non_numeric_price_becomes_zero() {
        assert_eq!(normalize(&raw(json!({ "price": -5 }))).price, 0.0);
        assert_eq!(normalize(&raw(json!({ "price": "abc" }))).price, 0.0);
        assert_eq!(normalize(&raw(json!({ "price": "12.50" }))).price, 12.5);
    }

    #[test]
    fn blank_category_is_absent() {
        let sub = normalize(&raw(json!({ "_id": "a", "category": "  " })));
        assert!(sub.category.is_none());
    }

    #[test]
    fn full_record_is_carried_over() {
        let sub = normalize(&raw(json!({
            "_id": "65f0",
            "name": " Netflix ",
            "price": 15.99,
            "currency": "USD",
            "frequency": "monthly",
            "renewalDate": "2024-06-05T00:00:00.000Z",
            "startDate": "2024-05-06T00:00:00.000Z",
            "status": "active",
            "category": "entertainment",
            "paymentMethod": "Visa",
            "createdAt": "2024-05-06T10:00:00.000Z"
        })));

        assert_eq!(sub.name, "Netflix");
        assert_eq!(sub.price, 15.99);
        assert_eq!(sub.currency.as_deref(), Some("USD"));
        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(sub.payment_method.as_deref(), Some("Visa"));
        assert_eq!(sub.created_at.as_deref(), Some("2024-05-06T10:00:00.000Z"));
    }

    #[test]
    fn normalize_all_preserves_order() {
        let subs = normalize_all(&[
            raw(json!({ "_id": "first" })),
            raw(json!({ "id": "second" })),
        ]);
        let ids: Vec<_> = subs.iter().map(|s| s.id_str()).collect();
        assert_eq!(ids, vec![Some("first"), Some("second")]);
    }

    #[test]
    fn serializes_with_canonical_field_names() {
        let sub = normalize(&raw(json!({ "_id": "a", "renewaltDate": "2024-05-01" })));
        let value = serde_json::to_value(&sub).unwrap();
        assert_eq!(value["id"], json!("a"));
        assert_eq!(value["renewalDate"], json!("2024-05-01"));
        assert!(value.get("_id").is_none());
        assert!(value.get("renewaltDate").is_none());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn only_store_id_is_kept(store_id in "[a-f0-9]{1,24}") {
            let sub = normalize(&raw(json!({ "_id": store_id.clone() })));
            prop_assert_eq!(sub.id_str(), Some(store_id.as_str()));
        }

        #[test]
        fn only_id_is_kept(id in "[a-zA-Z0-9-]{1,24}") {
            let sub = normalize(&raw(json!({ "id": id.clone() })));
            prop_assert_eq!(sub.id_str(), Some(id.as_str()));
        }

        #[test]
        fn store_id_always_wins(store_id in "[a-f0-9]{1,24}", id in "[g-z]{1,24}") {
            let sub = normalize(&raw(json!({ "_id": store_id.clone(), "id": id })));
            prop_assert_eq!(sub.id_str(), Some(store_id.as_str()));
        }

        #[test]
        fn renewal_date_spelling_precedence(
            correct in "20[0-9]{2}-0[1-9]-1[0-9]",
            misspelled in "19[0-9]{2}-0[1-9]-2[0-8]",
        ) {
            let only_typo = normalize(&raw(json!({ "renewaltDate": misspelled.clone() })));
            prop_assert_eq!(only_typo.renewal_date.as_deref(), Some(misspelled.as_str()));

            let both = normalize(&raw(json!({
                "renewalDate": correct.clone(),
                "renewaltDate": misspelled
            })));
            prop_assert_eq!(both.renewal_date.as_deref(), Some(correct.as_str()));
        }

        #[test]
        fn price_is_never_negative(price in proptest::num::f64::ANY) {
            let sub = normalize(&raw(json!({ "price": price })));
            prop_assert!(sub.price >= 0.0 && sub.price.is_finite());
        }
    }
}
