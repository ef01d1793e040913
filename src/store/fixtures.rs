//! Seed data for tests and for running the demo binary without a configured
//! backend. These used to live as module-level arrays scattered across the
//! pages; keeping them as explicit constructors means nothing depends on
//! hidden globals.

use crate::models::{
    Article, Badge, Drivetrain, StaticPage, Vehicle, VehicleCategory,
};
use chrono::{DateTime, TimeZone, Utc};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// The showroom's six demo vehicles, newest first.
pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            name: "BMW M4 Competition".to_string(),
            vehicle_type: "Sports Coupe".to_string(),
            category: VehicleCategory::Sports,
            price: 84_995.0,
            image: "/f4.avif".to_string(),
            badge: Some(Badge::NewArrival),
            year: 2024,
            mileage: 0,
            horsepower: Some(503.0),
            acceleration: Some("3.8s".to_string()),
            mpg: Some("22 MPG".to_string()),
            drivetrain: Some(Drivetrain::RWD),
            featured: true,
            created_at: day(2024, 6, 6),
        },
        Vehicle {
            id: 2,
            name: "Tesla Model S Plaid".to_string(),
            vehicle_type: "Electric Sedan".to_string(),
            category: VehicleCategory::Electric,
            price: 129_990.0,
            image: "/f5.avif".to_string(),
            badge: Some(Badge::Electric),
            year: 2024,
            mileage: 0,
            horsepower: Some(1020.0),
            acceleration: Some("1.99s".to_string()),
            mpg: Some("396 mi Range".to_string()),
            drivetrain: Some(Drivetrain::AWD),
            featured: true,
            created_at: day(2024, 6, 5),
        },
        Vehicle {
            id: 3,
            name: "Porsche 911 Turbo S".to_string(),
            vehicle_type: "Sports Coupe".to_string(),
            category: VehicleCategory::Sports,
            price: 216_100.0,
            image: "/f6.jpg".to_string(),
            badge: Some(Badge::Limited),
            year: 2024,
            mileage: 0,
            horsepower: Some(640.0),
            acceleration: Some("2.6s".to_string()),
            mpg: Some("20 MPG".to_string()),
            drivetrain: Some(Drivetrain::AWD),
            featured: true,
            created_at: day(2024, 6, 4),
        },
        Vehicle {
            id: 4,
            name: "Mercedes-Benz S-Class".to_string(),
            vehicle_type: "Luxury Sedan".to_string(),
            category: VehicleCategory::Sedans,
            price: 115_000.0,
            image: "/v2.jpg".to_string(),
            badge: Some(Badge::Luxury),
            year: 2024,
            mileage: 0,
            horsepower: Some(429.0),
            acceleration: Some("4.4s".to_string()),
            mpg: Some("25 MPG".to_string()),
            drivetrain: Some(Drivetrain::AWD),
            featured: false,
            created_at: day(2024, 6, 3),
        },
        Vehicle {
            id: 5,
            name: "Range Rover Sport".to_string(),
            vehicle_type: "Luxury SUV".to_string(),
            category: VehicleCategory::Suvs,
            price: 95_000.0,
            image: "/v3.webp".to_string(),
            badge: Some(Badge::Popular),
            year: 2024,
            mileage: 0,
            horsepower: Some(355.0),
            acceleration: Some("6.3s".to_string()),
            mpg: Some("21 MPG".to_string()),
            drivetrain: Some(Drivetrain::AWD),
            featured: false,
            created_at: day(2024, 6, 2),
        },
        Vehicle {
            id: 6,
            name: "Ford F-150 Raptor".to_string(),
            vehicle_type: "Performance Truck".to_string(),
            category: VehicleCategory::Trucks,
            price: 75_000.0,
            image: "/v1.jpg".to_string(),
            badge: Some(Badge::OffRoad),
            year: 2024,
            mileage: 0,
            horsepower: Some(450.0),
            acceleration: Some("5.1s".to_string()),
            mpg: Some("18 MPG".to_string()),
            drivetrain: Some(Drivetrain::FourWd),
            featured: false,
            created_at: day(2024, 6, 1),
        },
    ]
}

/// The showroom's six demo articles, newest first.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "The Future of Electric Vehicles: What to Expect in 2024".to_string(),
            excerpt: Some(
                "Explore the upcoming trends and technological advancements in the \
                 electric vehicle market."
                    .to_string(),
            ),
            content: None,
            category: Some("Electric Vehicles".to_string()),
            author: Some("Sarah Johnson".to_string()),
            image: Some("/a1.avif".to_string()),
            featured: true,
            created_at: day(2023, 5, 12),
        },
        Article {
            id: 2,
            title: "The Art of Preserving Automotive Excellence".to_string(),
            excerpt: Some(
                "Master the refined techniques of maintaining your prestigious \
                 high-performance vehicle."
                    .to_string(),
            ),
            content: None,
            category: Some("Maintenance".to_string()),
            author: Some("Michael Chen".to_string()),
            image: Some("/a2.avif".to_string()),
            featured: true,
            created_at: day(2023, 4, 28),
        },
        Article {
            id: 3,
            title: "The Connoisseur's Guide to Luxury Automobiles".to_string(),
            excerpt: Some(
                "Make an informed decision when purchasing your next luxury vehicle."
                    .to_string(),
            ),
            content: None,
            category: Some("Buying Guide".to_string()),
            author: Some("David Rodriguez".to_string()),
            image: Some("/a3.avif".to_string()),
            featured: false,
            created_at: day(2023, 3, 15),
        },
        Article {
            id: 4,
            title: "Autonomous Driving: The Road to Self-Driving Cars".to_string(),
            excerpt: Some(
                "Dive deep into the world of autonomous vehicles and the technology \
                 shaping transportation."
                    .to_string(),
            ),
            content: None,
            category: Some("Technology".to_string()),
            author: Some("Emily Watson".to_string()),
            image: Some("/f2.webp".to_string()),
            featured: false,
            created_at: day(2023, 2, 20),
        },
        Article {
            id: 5,
            title: "Luxury Car Market Trends: What's Hot in 2024".to_string(),
            excerpt: Some(
                "Analyze the latest trends in the luxury automotive market.".to_string(),
            ),
            content: None,
            category: Some("Market Analysis".to_string()),
            author: Some("Robert Kim".to_string()),
            image: Some("/f1.webp".to_string()),
            featured: false,
            created_at: day(2023, 1, 18),
        },
        Article {
            id: 6,
            title: "Sustainable Luxury: Eco-Friendly Supercars".to_string(),
            excerpt: Some(
                "Discover how luxury manufacturers are embracing sustainability \
                 without compromising performance."
                    .to_string(),
            ),
            content: None,
            category: Some("Sustainability".to_string()),
            author: Some("Lisa Thompson".to_string()),
            image: Some("/f4.avif".to_string()),
            featured: false,
            created_at: day(2022, 12, 10),
        },
    ]
}

/// Static informational pages that participate in global search.
pub fn static_pages() -> Vec<StaticPage> {
    vec![
        StaticPage {
            title: "Services".to_string(),
            url: "/services".to_string(),
        },
        StaticPage {
            title: "About Us".to_string(),
            url: "/about".to_string(),
        },
        StaticPage {
            title: "Contact".to_string(),
            url: "/contact".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_positive() {
        let vehicles = seed_vehicles();
        let mut ids: Vec<i64> = vehicles.iter().map(|v| v.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vehicles.len());
        assert!(ids.iter().all(|id| *id > 0));
    }

    #[test]
    fn seeds_are_ordered_newest_first() {
        for pair in seed_vehicles().windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        for pair in seed_articles().windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
