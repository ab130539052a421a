//! This file defines the `Category` type and the classifier that assigns a
//! category to a transaction, along with the route handler that exposes the
//! classifier over HTTP.
//! A category describes the type of spending a transaction represents, e.g.,
//! 'Food' or 'Transport'.

use std::fmt::Display;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::Error;

/// The label assigned to a transaction to describe the type of spending.
///
/// Serializes to the exact label strings the API promises, e.g.,
/// [Category::RechargeAndInternet] becomes "Recharge & Internet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Category {
    /// Ride shares, public transport and flights.
    Transport,

    /// Restaurants and food delivery.
    Food,

    /// Supermarket and grocery shopping.
    Groceries,

    /// Recurring streaming and media services.
    Subscriptions,

    /// Mobile recharges and internet plans.
    #[serde(rename = "Recharge & Internet")]
    RechargeAndInternet,

    /// Rent and boarding.
    Rent,

    /// Household bills such as electricity and gas.
    Utilities,

    /// No keyword matched and the amount was large.
    #[serde(rename = "Big Purchase")]
    BigPurchase,

    /// No keyword matched and the amount was small.
    #[serde(rename = "Small Spend")]
    SmallSpend,

    /// No keyword matched and the amount was unremarkable.
    Other,
}

impl Category {
    /// The category label as shown to the client.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Food => "Food",
            Category::Groceries => "Groceries",
            Category::Subscriptions => "Subscriptions",
            Category::RechargeAndInternet => "Recharge & Internet",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::BigPurchase => "Big Purchase",
            Category::SmallSpend => "Small Spend",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The keyword lists for each category, checked in declaration order.
///
/// The first list containing a substring of the lower-cased title wins,
/// regardless of how many later lists would also match.
const KEYWORD_RULES: [(Category, &[&str]); 7] = [
    (
        Category::Transport,
        &["uber", "ola", "bus", "train", "metro", "flight", "uber auto"],
    ),
    (
        Category::Food,
        &["zomato", "swiggy", "restaurant", "pizza", "burger", "food"],
    ),
    (
        Category::Groceries,
        &["grocery", "groceries", "mart", "supermarket"],
    ),
    (
        Category::Subscriptions,
        &["netflix", "spotify", "subscription", "prime video", "ott"],
    ),
    (
        Category::RechargeAndInternet,
        &["recharge", "data", "internet", "wifi"],
    ),
    (Category::Rent, &["rent", "pg", "hostel"]),
    (
        Category::Utilities,
        &["electricity", "water bill", "gas", "bill"],
    ),
];

/// Titles matching no keyword list with an amount at or above this are a big purchase.
const BIG_PURCHASE_THRESHOLD: f64 = 5000.0;

/// Titles matching no keyword list with an amount at or below this are a small spend.
const SMALL_SPEND_THRESHOLD: f64 = 100.0;

/// Assign a category to a transaction based on its `title` and `amount`.
///
/// Keywords are matched case-insensitively as substrings, so a title such as
/// "Uberexpress" still matches "uber". The amount is only consulted when no
/// keyword list matches, in which case it decides between
/// [Category::BigPurchase], [Category::SmallSpend] and [Category::Other].
///
/// This function is total: every combination of title and amount maps to a
/// category.
pub fn categorize(title: &str, amount: f64) -> Category {
    let title = title.to_lowercase();

    for (category, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| title.contains(keyword)) {
            return category;
        }
    }

    if amount >= BIG_PURCHASE_THRESHOLD {
        Category::BigPurchase
    } else if amount <= SMALL_SPEND_THRESHOLD {
        Category::SmallSpend
    } else {
        Category::Other
    }
}

/// The transaction details to categorize.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategorizeData {
    /// The free-text description of the transaction.
    pub title: String,

    /// How much was spent. Fractional amounts are allowed.
    pub amount: f64,
}

/// The category assigned to a transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    /// The category label.
    pub category: Category,
}

/// A route handler for assigning a spending category to a transaction.
///
/// Responds with [Error::MalformedInput] if the request body is not a JSON
/// object with a string `title` and a numeric `amount`.
pub async fn categorize_endpoint(data: Result<Json<CategorizeData>, JsonRejection>) -> Response {
    let Json(data) = match data {
        Ok(data) => data,
        Err(rejection) => return Error::MalformedInput(rejection.body_text()).into_response(),
    };

    let category = categorize(&data.title, data.amount);

    (StatusCode::OK, Json(CategoryData { category })).into_response()
}


#[cfg(test)]
mod category_tests {
    use serde_json::json;

    use crate::category::Category;

    const ALL_CATEGORIES: [Category; 10] = [
        Category::Transport,
        Category::Food,
        Category::Groceries,
        Category::Subscriptions,
        Category::RechargeAndInternet,
        Category::Rent,
        Category::Utilities,
        Category::BigPurchase,
        Category::SmallSpend,
        Category::Other,
    ];

    #[test]
    fn multi_word_labels_serialize_with_spaces() {
        assert_eq!(
            serde_json::to_value(Category::RechargeAndInternet).unwrap(),
            json!("Recharge & Internet")
        );
        assert_eq!(
            serde_json::to_value(Category::BigPurchase).unwrap(),
            json!("Big Purchase")
        );
        assert_eq!(
            serde_json::to_value(Category::SmallSpend).unwrap(),
            json!("Small Spend")
        );
    }

    #[test]
    fn display_agrees_with_serialized_label() {
        for category in ALL_CATEGORIES {
            let serialized = serde_json::to_value(category).unwrap();
            let label = serialized.as_str().expect("label should be a string");

            assert_eq!(
                category.to_string(),
                label,
                "Display and serde disagree for {category:?}"
            );
        }
    }

    #[test]
    fn labels_round_trip_through_serde() {
        for category in ALL_CATEGORIES {
            let serialized = serde_json::to_string(&category).unwrap();
            let deserialized: Category = serde_json::from_str(&serialized).unwrap();

            assert_eq!(category, deserialized);
        }
    }
}
