//! Order to event mapping.

use std::collections::BTreeMap;
use std::sync::Arc;

use cartbridge_core::settings::SyncSettings;
use cartbridge_core::to_major_units;
use cartbridge_entities::commerce::{LineItem, Money, Order, OrderState};
use cartbridge_entities::marketing::{EventAttributes, EventData, EventRequest, Metric};

/// Metric recorded when an order is placed
pub const PLACED_ORDER_METRIC: &str = "Placed Order";
/// Metric recorded per ordered line item
pub const ORDERED_PRODUCT_METRIC: &str = "Ordered Product";
/// Metric recorded when an order completes
pub const FULFILLED_ORDER_METRIC: &str = "Fulfilled Order";
/// Metric recorded when an order is cancelled
pub const CANCELLED_ORDER_METRIC: &str = "Cancelled Order";

/// Maps commerce orders to marketing event bodies.
pub struct OrderMapper {
    settings: Arc<SyncSettings>,
}

impl OrderMapper {
    pub fn new(settings: Arc<SyncSettings>) -> Self {
        Self { settings }
    }

    fn locale(&self) -> Option<&str> {
        self.settings.default_locale.as_deref()
    }

    /// Events for a freshly placed order: one `Placed Order` plus one
    /// `Ordered Product` per line item. Orders without a customer email
    /// cannot be attributed to a profile and yield nothing.
    pub fn placed_order_events(&self, order: &Order) -> Vec<EventRequest> {
        let Some(profile) = self.profile_of(order) else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(1 + order.line_items.len());
        events.push(self.order_event(order, &profile, PLACED_ORDER_METRIC, &order.id));
        for line_item in &order.line_items {
            events.push(self.line_item_event(order, &profile, line_item));
        }
        events
    }

    /// Events for an order state transition; only terminal transitions are
    /// interesting to marketing.
    pub fn state_change_events(&self, order: &Order) -> Vec<EventRequest> {
        let metric = match order.order_state {
            OrderState::Complete => FULFILLED_ORDER_METRIC,
            OrderState::Cancelled => CANCELLED_ORDER_METRIC,
            _ => return Vec::new(),
        };

        let Some(profile) = self.profile_of(order) else {
            return Vec::new();
        };

        // Unique per order and transition so re-deliveries do not double-count
        let unique_id = format!("{}:{}", order.id, metric);
        vec![self.order_event(order, &profile, metric, &unique_id)]
    }

    fn profile_of(&self, order: &Order) -> Option<BTreeMap<String, String>> {
        let email = order.customer_email.as_deref()?;

        let mut profile = BTreeMap::new();
        profile.insert("$email".to_string(), email.to_string());
        if let Some(address) = &order.billing_address {
            if let Some(first_name) = &address.first_name {
                profile.insert("$first_name".to_string(), first_name.clone());
            }
            if let Some(last_name) = &address.last_name {
                profile.insert("$last_name".to_string(), last_name.clone());
            }
        }
        Some(profile)
    }

    fn order_event(
        &self,
        order: &Order,
        profile: &BTreeMap<String, String>,
        metric: &str,
        unique_id: &str,
    ) -> EventRequest {
        let item_names: Vec<&str> = order
            .line_items
            .iter()
            .map(|line_item| line_item.name.resolve(self.locale()))
            .collect();

        EventRequest {
            data: EventData {
                kind: "event".to_string(),
                attributes: EventAttributes {
                    profile: profile.clone(),
                    metric: Metric {
                        name: metric.to_string(),
                    },
                    properties: serde_json::json!({
                        "order_id": order.id,
                        "currency": order.total_price.currency_code,
                        "items": item_names,
                    }),
                    time: order.created_at,
                    value: Some(major_units(&order.total_price)),
                    unique_id: unique_id.to_string(),
                },
            },
        }
    }

    fn line_item_event(
        &self,
        order: &Order,
        profile: &BTreeMap<String, String>,
        line_item: &LineItem,
    ) -> EventRequest {
        EventRequest {
            data: EventData {
                kind: "event".to_string(),
                attributes: EventAttributes {
                    profile: profile.clone(),
                    metric: Metric {
                        name: ORDERED_PRODUCT_METRIC.to_string(),
                    },
                    properties: serde_json::json!({
                        "order_id": order.id,
                        "product": line_item.name.resolve(self.locale()),
                        "product_id": line_item.product_id,
                        "quantity": line_item.quantity,
                    }),
                    time: order.created_at,
                    value: Some(major_units(&line_item.total_price)),
                    unique_id: line_item.id.clone(),
                },
            },
        }
    }
}

fn major_units(money: &Money) -> f64 {
    to_major_units(money.cent_amount, money.fraction_digits, &money.currency_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(state: &str, email: Option<&str>) -> Order {
        let mut value = serde_json::json!({
            "id": "order-1",
            "totalPrice": {"currencyCode": "EUR", "centAmount": 5998},
            "lineItems": [
                {
                    "id": "line-1",
                    "name": {"en-US": "Shoes"},
                    "quantity": 1,
                    "totalPrice": {"currencyCode": "EUR", "centAmount": 4999},
                    "productId": "prod-1"
                },
                {
                    "id": "line-2",
                    "name": {"en-US": "Socks"},
                    "quantity": 2,
                    "totalPrice": {"currencyCode": "EUR", "centAmount": 999}
                }
            ],
            "orderState": state,
            "createdAt": "2024-05-01T12:00:00Z"
        });
        if let Some(email) = email {
            value["customerEmail"] = serde_json::json!(email);
        }
        serde_json::from_value(value).unwrap()
    }

    fn mapper() -> OrderMapper {
        OrderMapper::new(Arc::new(SyncSettings::default()))
    }

    #[test]
    fn test_placed_order_yields_order_plus_line_item_events() {
        let events = mapper().placed_order_events(&order("Open", Some("jan@example.com")));

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].data.attributes.metric.name, PLACED_ORDER_METRIC);
        assert_eq!(events[0].data.attributes.value, Some(59.98));
        assert_eq!(events[0].data.attributes.unique_id, "order-1");
        assert_eq!(
            events[1].data.attributes.metric.name,
            ORDERED_PRODUCT_METRIC
        );
        assert_eq!(events[1].data.attributes.unique_id, "line-1");
        assert_eq!(events[2].data.attributes.unique_id, "line-2");
    }

    #[test]
    fn test_order_without_email_yields_no_events() {
        assert!(mapper()
            .placed_order_events(&order("Open", None))
            .is_empty());
    }

    #[test]
    fn test_completed_order_maps_to_fulfilled_metric() {
        let events = mapper().state_change_events(&order("Complete", Some("jan@example.com")));

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].data.attributes.metric.name,
            FULFILLED_ORDER_METRIC
        );
        assert_eq!(
            events[0].data.attributes.unique_id,
            "order-1:Fulfilled Order"
        );
    }

    #[test]
    fn test_cancelled_order_maps_to_cancelled_metric() {
        let events = mapper().state_change_events(&order("Cancelled", Some("jan@example.com")));
        assert_eq!(
            events[0].data.attributes.metric.name,
            CANCELLED_ORDER_METRIC
        );
    }

    #[test]
    fn test_intermediate_state_change_yields_no_events() {
        assert!(mapper()
            .state_change_events(&order("Confirmed", Some("jan@example.com")))
            .is_empty());
    }

    #[test]
    fn test_event_time_comes_from_the_order_not_the_clock() {
        let events = mapper().placed_order_events(&order("Open", Some("jan@example.com")));
        assert_eq!(
            events[0].data.attributes.time.to_rfc3339(),
            "2024-05-01T12:00:00+00:00"
        );
    }
}
