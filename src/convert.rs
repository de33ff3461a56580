//! Entity to DTO mapping. Absent input maps to absent output.

use crate::dto::{OrderDto, ProductDto};
use crate::model::{Order, Product};

pub fn product_to_dto(product: Option<&Product>) -> Option<ProductDto> {
    product.map(ProductDto::from)
}

pub fn order_to_dto(order: Option<&Order>) -> Option<OrderDto> {
    order.map(OrderDto::from)
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name.clone(),
            price: p.price,
        }
    }
}

impl From<&Order> for OrderDto {
    fn from(o: &Order) -> Self {
        OrderDto {
            id: o.id,
            customer_name: o.customer_name.clone(),
            quantity: o.quantity,
            order_date: o.order_date,
            product: product_to_dto(o.product.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn widget() -> Product {
        Product {
            id: 1,
            name: "Widget".into(),
            price: 9.99,
        }
    }

    #[test]
    fn absent_product_and_order_map_to_none() {
        assert_eq!(product_to_dto(None), None);
        assert_eq!(order_to_dto(None), None);
    }

    #[test]
    fn product_fields_are_copied() {
        let dto = product_to_dto(Some(&widget())).unwrap();
        assert_eq!(
            dto,
            ProductDto {
                id: 1,
                name: "Widget".into(),
                price: 9.99
            }
        );
    }

    #[test]
    fn order_without_product_has_null_nested_product() {
        let order = Order {
            id: 4,
            customer_name: "Bob".into(),
            quantity: 1,
            order_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            product: None,
        };
        let dto = order_to_dto(Some(&order)).unwrap();
        assert_eq!(dto.product, None);

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["product"].is_null());
        assert_eq!(json["customerName"], "Bob");
    }

    #[test]
    fn order_json_uses_camel_case_and_nests_product() {
        let order = Order {
            id: 1,
            customer_name: "Alice".into(),
            quantity: 3,
            order_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            product: Some(widget()),
        };
        let json = serde_json::to_value(OrderDto::from(&order)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "customerName": "Alice",
                "quantity": 3,
                "orderDate": "2024-05-01T12:30:00Z",
                "product": {"id": 1, "name": "Widget", "price": 9.99}
            })
        );
    }
}
