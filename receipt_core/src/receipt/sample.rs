//! Bundled demo receipts.

use std::collections::BTreeSet;

use super::types::{LineItem, Receipt};

const CARD_4242: &str = "Credit Card ending in 4242";

fn tags(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|t| (*t).to_string()).collect()
}

/// The five sample receipts, in their canonical order.
#[must_use]
pub fn sample_receipts() -> Vec<Receipt> {
    vec![
        Receipt {
            receipt_id: "rec_001".to_string(),
            timestamp: "2024-11-10T10:15:00Z".to_string(),
            merchant: "Patagonia".to_string(),
            location: "Boulder, CO".to_string(),
            total: 89.99,
            items: vec![LineItem::new("Better Sweater Jacket", "Clothing", 89.99, 1)],
            payment_method: CARD_4242.to_string(),
            tags: tags(&["clothing", "outdoor gear"]),
            carbon_footprint: 22.3,
        },
        Receipt {
            receipt_id: "rec_002".to_string(),
            timestamp: "2024-11-12T19:45:00Z".to_string(),
            merchant: "The Kitchen".to_string(),
            location: "Boulder, CO".to_string(),
            total: 67.50,
            items: vec![
                LineItem::new("Farm Bowl", "Food - Entree", 18.00, 1),
                LineItem::new("Salmon Salad", "Food - Entree", 22.00, 1),
                LineItem::new("House Wine", "Drinks - Alcohol", 12.00, 2),
            ],
            payment_method: CARD_4242.to_string(),
            tags: tags(&["dining", "restaurant", "date night"]),
            carbon_footprint: 8.7,
        },
        Receipt {
            receipt_id: "rec_003".to_string(),
            timestamp: "2024-10-28T14:20:00Z".to_string(),
            merchant: "REI".to_string(),
            location: "Denver, CO".to_string(),
            total: 156.78,
            items: vec![
                LineItem::new("Hiking Boots", "Outdoor Gear", 129.99, 1),
                LineItem::new("Wool Socks", "Clothing", 18.99, 1),
                LineItem::new("Water Bottle", "Outdoor Gear", 24.99, 1),
            ],
            payment_method: CARD_4242.to_string(),
            tags: tags(&["outdoor gear", "hiking"]),
            carbon_footprint: 45.2,
        },
        Receipt {
            receipt_id: "rec_004".to_string(),
            timestamp: "2024-11-01T08:30:00Z".to_string(),
            merchant: "Starbucks".to_string(),
            location: "Boulder, CO".to_string(),
            total: 12.85,
            items: vec![
                LineItem::new("Oat Milk Latte", "Drinks - Coffee", 6.25, 1),
                LineItem::new("Breakfast Sandwich", "Food - Breakfast", 6.60, 1),
            ],
            payment_method: "Apple Pay".to_string(),
            tags: tags(&["coffee", "breakfast"]),
            carbon_footprint: 2.1,
        },
        Receipt {
            receipt_id: "rec_005".to_string(),
            timestamp: "2024-11-15T16:00:00Z".to_string(),
            merchant: "Target".to_string(),
            location: "Boulder, CO".to_string(),
            total: 234.67,
            items: vec![
                LineItem::new("Throw Pillows", "Home Decor", 39.99, 2),
                LineItem::new("Candles", "Home Decor", 24.99, 3),
                LineItem::new("Dog Treats", "Pet Supplies", 18.99, 1),
                LineItem::new("Shampoo", "Personal Care", 14.99, 1),
            ],
            payment_method: "Debit Card".to_string(),
            tags: tags(&["home", "pet supplies", "personal care"]),
            carbon_footprint: 15.8,
        },
    ]
}
