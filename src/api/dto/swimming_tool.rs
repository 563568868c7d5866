//! Swimming tool DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

use super::non_empty_str;
use crate::error::{AppError, AppResult};
use crate::models::SwimmingTool;

const MISSING_FIELDS: &str = "Missing required fields: productName or price.";
const INVALID_PRICE: &str = "Price must be a positive number.";

/// Request body for creating or replacing a swimming tool.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(example = json!({ "productName": "Kickboard", "price": 19.99 }))]
pub struct SwimmingToolRequest {
    #[serde(rename = "productName")]
    #[schema(value_type = String)]
    pub product_name: Option<Value>,
    #[schema(value_type = f64, minimum = 0.0)]
    pub price: Option<Value>,
}

impl SwimmingToolRequest {
    /// `productName` must be a non-empty string and `price` a JSON number
    /// greater than zero. A falsy price other than `0` (`null`, `false`,
    /// `""`) counts as missing; any other non-numeric price is a price error.
    pub fn into_tool(self) -> AppResult<SwimmingTool> {
        let price = self.price.filter(|p| {
            !matches!(p, Value::Null | Value::Bool(false)) && p.as_str() != Some("")
        });
        let (Some(product_name), Some(price)) = (non_empty_str(&self.product_name), price) else {
            return Err(AppError::bad_request(MISSING_FIELDS));
        };

        let price = price
            .as_f64()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| AppError::bad_request(INVALID_PRICE))?;

        Ok(SwimmingTool {
            id: None,
            product_name: product_name.to_string(),
            price,
        })
    }
}

/// Stored swimming tool as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SwimmingToolResponse {
    #[serde(rename = "_id")]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Whole prices render without a fractional part.
    #[schema(value_type = f64)]
    pub price: Number,
}

impl From<SwimmingTool> for SwimmingToolResponse {
    fn from(tool: SwimmingTool) -> Self {
        Self {
            id: tool.id.map(|id| id.to_hex()).unwrap_or_default(),
            product_name: tool.product_name,
            price: price_number(tool.price),
        }
    }
}

fn price_number(price: f64) -> Number {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT {
        Number::from(price as i64)
    } else {
        Number::from_f64(price).unwrap_or_else(|| Number::from(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn request(body: Value) -> SwimmingToolRequest {
        serde_json::from_value(body).unwrap()
    }

    fn message(result: AppResult<SwimmingTool>) -> String {
        match result {
            Err(AppError::BadRequest { message }) => message,
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_tool() {
        let tool = request(json!({ "productName": "Fins", "price": 25.5 }))
            .into_tool()
            .unwrap();
        assert_eq!(tool.product_name, "Fins");
        assert_eq!(tool.price, 25.5);
    }

    #[test]
    fn test_missing_fields() {
        for body in [
            json!({ "price": 10 }),
            json!({ "productName": "", "price": 10 }),
            json!({ "productName": "Fins" }),
            json!({ "productName": "Fins", "price": null }),
            json!({ "productName": "Fins", "price": false }),
            json!({ "productName": "Fins", "price": "" }),
            json!({}),
        ] {
            assert_eq!(message(request(body).into_tool()), MISSING_FIELDS);
        }
    }

    #[test]
    fn test_invalid_price() {
        for price in [json!(0), json!(-3), json!(-0.5), json!("free"), json!("10"), json!(true)] {
            let body = json!({ "productName": "Fins", "price": price });
            assert_eq!(message(request(body).into_tool()), INVALID_PRICE);
        }
    }

    #[test]
    fn test_response_price_rendering() {
        let whole = SwimmingToolResponse::from(SwimmingTool {
            id: None,
            product_name: "Cap".to_string(),
            price: 12.0,
        });
        assert_eq!(serde_json::to_value(&whole).unwrap()["price"], json!(12));

        let fractional = SwimmingToolResponse::from(SwimmingTool {
            id: None,
            product_name: "Cap".to_string(),
            price: 12.25,
        });
        assert_eq!(serde_json::to_value(&fractional).unwrap()["price"], json!(12.25));
    }

    proptest! {
        #[test]
        fn prop_positive_prices_accepted(price in 0.01f64..1_000_000.0) {
            let body = json!({ "productName": "Goggles", "price": price });
            prop_assert_eq!(request(body).into_tool().unwrap().price, price);
        }

        #[test]
        fn prop_non_positive_prices_rejected(price in -1_000_000.0f64..=0.0) {
            let body = json!({ "productName": "Goggles", "price": price });
            prop_assert_eq!(message(request(body).into_tool()), INVALID_PRICE);
        }
    }
}
