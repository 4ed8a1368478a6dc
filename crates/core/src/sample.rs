//! Hard-coded sample data.
//!
//! The storefront catalog and the admin store are independent data sets:
//! the admin store is seeded with three of the catalog's products under its
//! own IDs, stock levels and descriptions.

use chrono::NaiveDate;

use crate::admin::{AdminStore, Inquiry, Product};
use crate::catalog::{Catalog, CatalogProduct};
use crate::types::{Category, Email, InquiryId, InquiryStatus, Price, ProductId};

/// Image shown for every sample product.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

struct Entry {
    id: i32,
    name: &'static str,
    cents: i64,
    rating: f32,
    reviews: u32,
    category: Category,
    in_stock: bool,
    description: &'static str,
    features: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
}

impl Entry {
    fn build(&self) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            price: Price::usd_cents(self.cents),
            rating: self.rating,
            reviews: self.reviews,
            image: PLACEHOLDER_IMAGE.to_string(),
            category: self.category,
            in_stock: self.in_stock,
            description: self.description.to_string(),
            features: self.features.iter().map(|f| (*f).to_string()).collect(),
            specifications: self
                .specifications
                .iter()
                .map(|(label, value)| ((*label).to_string(), (*value).to_string()))
                .collect(),
        }
    }
}

const CATALOG: [Entry; 12] = [
    Entry {
        id: 1,
        name: "Premium Wireless Headphones with Noise Cancellation",
        cents: 19_999,
        rating: 4.5,
        reviews: 1234,
        category: Category::Electronics,
        in_stock: true,
        description: "Experience premium sound quality with our advanced wireless headphones featuring active noise cancellation technology. Perfect for music lovers and professionals who demand the best audio experience.",
        features: &[
            "Active Noise Cancellation",
            "30-hour battery life",
            "Premium leather ear cups",
            "Bluetooth 5.0 connectivity",
            "Quick charge technology",
            "Built-in microphone",
        ],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-WH-001"),
            ("Weight", "250g"),
            ("Frequency Response", "20Hz - 20kHz"),
            ("Impedance", "32 ohms"),
            ("Battery Life", "30 hours"),
        ],
    },
    Entry {
        id: 2,
        name: "Smart Fitness Watch with Heart Rate Monitor",
        cents: 14_999,
        rating: 4.3,
        reviews: 856,
        category: Category::Wearables,
        in_stock: true,
        description: "Track workouts, sleep and heart rate around the clock. Built-in GPS maps your runs without a phone.",
        features: &[
            "Continuous heart rate monitoring",
            "Built-in GPS",
            "Water resistant to 50m",
            "7-day battery life",
        ],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-FW-002"),
            ("Display", "1.4\" AMOLED"),
            ("Battery Life", "7 days"),
        ],
    },
    Entry {
        id: 3,
        name: "Professional Camera Lens 50mm f/1.8",
        cents: 29_999,
        rating: 4.8,
        reviews: 432,
        category: Category::Photography,
        in_stock: false,
        description: "A fast prime lens for portraits and low light. Sharp edge to edge with smooth background blur.",
        features: &["f/1.8 maximum aperture", "Silent autofocus motor", "Metal mount"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-CL-050"),
            ("Focal Length", "50mm"),
            ("Weight", "185g"),
        ],
    },
    Entry {
        id: 4,
        name: "Ergonomic Office Chair with Lumbar Support",
        cents: 39_999,
        rating: 4.6,
        reviews: 678,
        category: Category::Furniture,
        in_stock: true,
        description: "All-day comfort with adjustable lumbar support, armrests and seat depth.",
        features: &[
            "Adjustable lumbar support",
            "4D armrests",
            "Breathable mesh back",
            "Tilt lock",
        ],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-OC-004"),
            ("Max Load", "150kg"),
            ("Seat Height", "44 - 54cm"),
        ],
    },
    Entry {
        id: 5,
        name: "Portable Bluetooth Speaker Waterproof",
        cents: 7_999,
        rating: 4.4,
        reviews: 923,
        category: Category::Audio,
        in_stock: true,
        description: "Room-filling sound in a rugged, waterproof body you can take anywhere.",
        features: &["IPX7 waterproof", "12-hour battery life", "Stereo pairing"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-BS-005"),
            ("Output", "20W"),
            ("Battery Life", "12 hours"),
        ],
    },
    Entry {
        id: 6,
        name: "Gaming Mechanical Keyboard RGB Backlit",
        cents: 12_999,
        rating: 4.7,
        reviews: 567,
        category: Category::Gaming,
        in_stock: true,
        description: "Tactile mechanical switches with per-key RGB lighting and an aluminium frame.",
        features: &[
            "Hot-swappable switches",
            "Per-key RGB lighting",
            "N-key rollover",
            "Detachable USB-C cable",
        ],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-KB-006"),
            ("Layout", "Full size"),
            ("Switches", "Tactile brown"),
        ],
    },
    Entry {
        id: 7,
        name: "4K Webcam for Streaming and Video Calls",
        cents: 8_999,
        rating: 4.2,
        reviews: 345,
        category: Category::Electronics,
        in_stock: true,
        description: "Crisp 4K video with auto light correction and dual noise-reducing microphones.",
        features: &["4K at 30fps", "Auto light correction", "Privacy shutter"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-WC-007"),
            ("Field of View", "90 degrees"),
        ],
    },
    Entry {
        id: 8,
        name: "Wireless Charging Pad Fast Charge",
        cents: 3_999,
        rating: 4.1,
        reviews: 789,
        category: Category::Electronics,
        in_stock: true,
        description: "Slim Qi charging pad that fast-charges phones and earbuds.",
        features: &["15W fast charging", "Foreign object detection", "Non-slip surface"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-CP-008"),
            ("Output", "15W"),
        ],
    },
    Entry {
        id: 9,
        name: "Professional Studio Microphone",
        cents: 15_999,
        rating: 4.6,
        reviews: 234,
        category: Category::Audio,
        in_stock: true,
        description: "Large-diaphragm condenser microphone for vocals, podcasts and streaming.",
        features: &["Cardioid pickup pattern", "Zero-latency monitoring", "Shock mount included"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-SM-009"),
            ("Sample Rate", "48kHz"),
        ],
    },
    Entry {
        id: 10,
        name: "Smart Home Security Camera",
        cents: 11_999,
        rating: 4.3,
        reviews: 567,
        category: Category::Electronics,
        in_stock: true,
        description: "1080p indoor and outdoor camera with night vision and motion alerts.",
        features: &["Night vision", "Motion alerts", "Two-way audio", "Weatherproof"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-SC-010"),
            ("Resolution", "1080p"),
        ],
    },
    Entry {
        id: 11,
        name: "Wireless Gaming Mouse RGB",
        cents: 6_999,
        rating: 4.5,
        reviews: 890,
        category: Category::Gaming,
        in_stock: true,
        description: "Lightweight wireless mouse with a precision sensor and customizable lighting.",
        features: &["26,000 DPI sensor", "70-hour battery life", "Six programmable buttons"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-GM-011"),
            ("Weight", "63g"),
        ],
    },
    Entry {
        id: 12,
        name: "Standing Desk Converter",
        cents: 24_999,
        rating: 4.4,
        reviews: 123,
        category: Category::Furniture,
        in_stock: false,
        description: "Turn any desk into a standing desk with smooth gas-spring height adjustment.",
        features: &["Gas-spring lift", "Two-tier design", "Fits dual monitors"],
        specifications: &[
            ("Brand", "PurpleShop"),
            ("Model", "PS-SD-012"),
            ("Height Range", "15 - 50cm"),
        ],
    },
];

/// The twelve-product storefront catalog.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(CATALOG.iter().map(Entry::build).collect())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn email(address: &str) -> Option<Email> {
    Email::parse(address).ok()
}

/// The admin store's initial three products and three inquiries.
#[must_use]
pub fn admin_store() -> AdminStore {
    let products = vec![
        Product {
            id: ProductId::new(1),
            name: "Premium Wireless Headphones with Noise Cancellation".to_string(),
            category: Category::Electronics,
            price: Price::usd_cents(19_999),
            stock: 45,
            inquiries: 12,
            description: "High-quality wireless headphones with active noise cancellation technology"
                .to_string(),
            created_at: date(2024, 1, 10),
        },
        Product {
            id: ProductId::new(2),
            name: "Smart Fitness Watch with Heart Rate Monitor".to_string(),
            category: Category::Wearables,
            price: Price::usd_cents(14_999),
            stock: 0,
            inquiries: 8,
            description: "Advanced fitness tracking with heart rate monitoring and GPS".to_string(),
            created_at: date(2024, 1, 8),
        },
        Product {
            id: ProductId::new(3),
            name: "Gaming Mechanical Keyboard RGB Backlit".to_string(),
            category: Category::Gaming,
            price: Price::usd_cents(12_999),
            stock: 23,
            inquiries: 15,
            description: "Mechanical keyboard with RGB backlighting for gaming enthusiasts"
                .to_string(),
            created_at: date(2024, 1, 5),
        },
    ];

    let seed = [
        (
            1,
            1,
            "John Doe",
            "john@example.com",
            "+1 234 567 8900",
            "Interested in bulk purchase for office use. Can you provide a discount for 50+ units?",
            date(2024, 1, 15),
            InquiryStatus::Pending,
        ),
        (
            2,
            2,
            "Jane Smith",
            "jane@example.com",
            "+1 234 567 8901",
            "Need more details about battery life and water resistance rating.",
            date(2024, 1, 14),
            InquiryStatus::Responded,
        ),
        (
            3,
            3,
            "Mike Johnson",
            "mike@example.com",
            "+1 234 567 8902",
            "When will this be back in stock? I need it for my gaming setup.",
            date(2024, 1, 13),
            InquiryStatus::Pending,
        ),
    ];

    let inquiries = seed
        .into_iter()
        .filter_map(|(id, product, name, address, phone, message, date, status)| {
            Some(Inquiry {
                id: InquiryId::new(id),
                product_id: ProductId::new(product),
                customer_name: name.to_string(),
                email: email(address)?,
                phone: phone.to_string(),
                message: message.to_string(),
                date,
                status,
            })
        })
        .collect();

    AdminStore::new(products, inquiries)
}
