//! # Suite Catalog
//!
//! The resort's six suites. Static, read-only, built once on first access.
//!
//! ```text
//! ┌────────────┬──────────────────────────┬────────┬─────────┐
//! │ id         │ name                     │ sleeps │ $/night │
//! ├────────────┼──────────────────────────┼────────┼─────────┤
//! │ suite-1    │ Ocean Breeze Suite       │   4    │   425   │
//! │ suite-2    │ Garden Terrace Suite     │   2    │   350   │
//! │ suite-3    │ Mountain View Suite      │   4    │   475   │
//! │ suite-4    │ Serenity Suite           │   2    │   325   │
//! │ suite-5    │ Poolside Paradise Suite  │   6    │   525   │
//! │ suite-6    │ Sunset Vista Suite       │   4    │   450   │
//! └────────────┴──────────────────────────┴────────┴─────────┘
//! ```

use std::sync::OnceLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{GalleryImage, Suite};

static SUITES: OnceLock<Vec<Suite>> = OnceLock::new();

/// All suites in display order.
pub fn all() -> &'static [Suite] {
    SUITES.get_or_init(build_catalog)
}

/// Looks a suite up by its identifier.
pub fn find(id: &str) -> Option<&'static Suite> {
    all().iter().find(|s| s.id == id)
}

/// Like [`find`], but reports an unknown id as an error.
pub fn get(id: &str) -> CoreResult<&'static Suite> {
    find(id).ok_or_else(|| CoreError::SuiteNotFound(id.to_string()))
}

fn image(n: u8) -> String {
    format!("assets/suite-{n}.jpg")
}

fn suite(
    n: u8,
    name: &str,
    sleeps: u32,
    price_per_night: i64,
    description: &str,
    amenities: [&str; 8],
    gallery: [(u8, &str); 6],
) -> Suite {
    Suite {
        id: format!("suite-{n}"),
        name: name.to_string(),
        sleeps,
        price_per_night,
        description: description.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        image: image(n),
        gallery: gallery
            .iter()
            .map(|(img, alt)| GalleryImage {
                src: image(*img),
                alt: alt.to_string(),
            })
            .collect(),
    }
}

fn build_catalog() -> Vec<Suite> {
    vec![
        suite(
            1,
            "Ocean Breeze Suite",
            4,
            425,
            "Wake up to breathtaking ocean views in this spacious suite featuring a king bed, \
             elegant sitting area, and floor-to-ceiling windows that flood the space with natural \
             light. The perfect retreat for those seeking luxury and tranquility.",
            [
                "King size bed with premium linens",
                "Private ocean-view balcony",
                "Marble bathroom with soaking tub",
                "Mini-bar and coffee station",
                "Complimentary Wi-Fi",
                "Daily housekeeping",
                "Flat-screen TV with streaming",
                "Air conditioning",
            ],
            [
                (1, "Bedroom with ocean view"),
                (2, "Luxury bathroom with soaking tub"),
                (3, "Kitchen and dining area"),
                (4, "Living room with balcony access"),
                (5, "Private balcony with ocean view"),
                (6, "Spa bathroom with dual vanities"),
            ],
        ),
        suite(
            2,
            "Garden Terrace Suite",
            2,
            350,
            "A contemporary haven with a private terrace overlooking lush gardens. This suite \
             combines modern comfort with natural beauty, featuring an open-plan design and \
             spa-like amenities for the ultimate relaxation experience.",
            [
                "Queen size bed with luxury bedding",
                "Private garden terrace",
                "Walk-in shower with rainfall head",
                "Kitchenette with essentials",
                "Complimentary Wi-Fi",
                "Daily housekeeping",
                "Smart TV with streaming",
                "Climate control",
            ],
            [
                (2, "Garden terrace bedroom"),
                (1, "Private garden terrace"),
                (4, "Spa-inspired bathroom"),
                (3, "Kitchenette with essentials"),
                (5, "Garden view from terrace"),
                (6, "Walk-in shower with rainfall head"),
            ],
        ),
        suite(
            3,
            "Mountain View Suite",
            4,
            475,
            "Immerse yourself in panoramic mountain vistas from this premium suite. Featuring \
             spacious accommodations with a separate sitting area, this retreat offers the \
             perfect blend of luxury and natural beauty.",
            [
                "King size bed with mountain views",
                "Separate living area with sofa bed",
                "Jetted tub with mountain views",
                "Full mini-bar service",
                "Complimentary Wi-Fi",
                "Twice-daily housekeeping",
                "Premium entertainment system",
                "Heated floors",
            ],
            [
                (3, "Mountain view bedroom"),
                (5, "Separate living area with sofa bed"),
                (6, "Jetted tub with mountain views"),
                (1, "King bed with mountain views"),
                (2, "Full mini-bar service area"),
                (4, "Premium entertainment system"),
            ],
        ),
        suite(
            4,
            "Serenity Suite",
            2,
            325,
            "Find your peace in this elegantly designed suite with garden views. Thoughtfully \
             appointed with modern amenities and calming decor, it's the ideal space for couples \
             seeking a romantic getaway.",
            [
                "Queen size bed with garden views",
                "Spa-inspired bathroom",
                "Private reading nook",
                "Coffee and tea station",
                "Complimentary Wi-Fi",
                "Daily housekeeping",
                "Streaming entertainment",
                "Individual climate control",
            ],
            [
                (4, "Serenity bedroom with garden views"),
                (2, "Spa-inspired bathroom"),
                (1, "Private reading nook"),
                (3, "Coffee and tea station"),
                (5, "Garden view from window"),
                (6, "Individual climate control panel"),
            ],
        ),
        suite(
            5,
            "Poolside Paradise Suite",
            6,
            525,
            "The largest of our accommodations, this family-friendly suite overlooks the resort \
             pool and features multiple sleeping areas. Perfect for groups or families wanting to \
             stay together while enjoying luxury amenities.",
            [
                "King bed plus queen sofa bed",
                "Pool and resort views",
                "Two full bathrooms",
                "Kitchenette with dining area",
                "Complimentary Wi-Fi",
                "Daily housekeeping",
                "Multiple entertainment areas",
                "Private pool access",
            ],
            [
                (5, "Poolside paradise bedroom"),
                (3, "Two full bathrooms"),
                (4, "Kitchenette with dining area"),
                (1, "King bed plus queen sofa bed"),
                (2, "Pool and resort views"),
                (6, "Multiple entertainment areas"),
            ],
        ),
        suite(
            6,
            "Sunset Vista Suite",
            4,
            450,
            "Experience magical sunsets from this westward-facing suite. With its elegant \
             furnishings, warm atmosphere, and stunning views, this suite offers an unforgettable \
             retreat for discerning guests.",
            [
                "King size bed with sunset views",
                "Private sunset-viewing balcony",
                "Luxurious bathroom with dual vanities",
                "Premium mini-bar",
                "Complimentary Wi-Fi",
                "Daily housekeeping",
                "High-end entertainment system",
                "Personalized climate control",
            ],
            [
                (6, "Sunset vista bedroom"),
                (1, "Private sunset-viewing balcony"),
                (5, "Luxurious bathroom with dual vanities"),
                (2, "Premium mini-bar area"),
                (3, "Sunset view from balcony"),
                (4, "High-end entertainment system"),
            ],
        ),
    ]
}
