//! The built-in project catalog shown before any visitor submits an estate.

use crate::listing::{
    ImageRef, Listing, ListingId, ListingStatus, Specifications, Timeline, TransactionType,
};

struct Entry {
    title: &'static str,
    price: &'static str,
    location: &'static str,
    image: &'static str,
    status: ListingStatus,
    description: &'static str,
    features: [&'static str; 8],
    // (duration, area, team size)
    timeline: (&'static str, &'static str, &'static str),
    milestone: Milestone,
    // (type, floors, units, parking)
    specs: (&'static str, &'static str, &'static str, &'static str),
}

enum Milestone {
    Completed(&'static str),
    CompletionDate(&'static str),
    StartDate(&'static str),
}

fn entries() -> [Entry; 6] {
    [
        Entry {
            title: "Skyline Haven",
            price: "₹12,50,000",
            location: "Mumbai, India",
            image: "project_img_1",
            status: ListingStatus::Completed,
            description: "Skyline Haven is a luxurious residential complex offering breathtaking sea views. The project features state-of-the-art amenities including a rooftop infinity pool, smart home automation, and sustainable energy solutions.",
            features: [
                "Modern Architecture",
                "Sustainable Materials",
                "Smart Home Integration",
                "Landscaped Gardens",
                "Energy Efficient",
                "Premium Finishes",
                "Rooftop Infinity Pool",
                "24/7 Security",
            ],
            timeline: ("12 Months", "5,000 Sq. Ft.", "50+ Members"),
            milestone: Milestone::Completed("2023"),
            specs: ("Residential Complex", "15", "40", "Underground Parking"),
        },
        Entry {
            title: "Vista Verde",
            price: "₹13,20,000",
            location: "Delhi, India",
            image: "project_img_2",
            status: ListingStatus::InProgress,
            description: "Vista Verde is an eco-friendly residential project designed with sustainability at its core, featuring green roofs, rainwater harvesting, and solar panel integration.",
            features: [
                "Eco-Friendly Design",
                "Green Roof System",
                "Rainwater Harvesting",
                "Solar Panel Integration",
                "Natural Ventilation",
                "Recycled Materials",
                "Community Garden",
                "EV Charging Stations",
            ],
            timeline: ("14 Months", "4,200 Sq. Ft.", "40+ Members"),
            milestone: Milestone::CompletionDate("Q4 2024"),
            specs: ("Eco-Residential", "8", "24", "Electric Vehicle Charging"),
        },
        Entry {
            title: "Serenity Suites",
            price: "₹11,50,000",
            location: "Bhubaneswar, India",
            image: "project_img_3",
            status: ListingStatus::Completed,
            description: "A premium commercial and residential mixed-use development downtown, with luxury apartments, retail spaces, and corporate offices.",
            features: [
                "Mixed-Use Development",
                "Luxury Apartments",
                "Retail Spaces",
                "Corporate Offices",
                "Fitness Center",
                "Conference Facilities",
                "Underground Parking",
                "High-Speed Connectivity",
            ],
            timeline: ("18 Months", "8,500 Sq. Ft.", "75+ Members"),
            milestone: Milestone::Completed("2022"),
            specs: ("Mixed-Use Development", "22", "Commercial + Residential", "Multi-level Underground"),
        },
        Entry {
            title: "Central Square",
            price: "₹14,50,000",
            location: "Chennai, India",
            image: "project_img_4",
            status: ListingStatus::Planned,
            description: "Central Square is an urban development that combines living, working, and leisure spaces in a single integrated community.",
            features: [
                "Integrated Community",
                "Co-Working Spaces",
                "Shopping Complex",
                "Entertainment Zone",
                "Sports Facilities",
                "Healthcare Center",
                "Educational Spaces",
                "Public Transport Hub",
            ],
            timeline: ("24 Months", "12,000 Sq. Ft.", "100+ Members"),
            milestone: Milestone::StartDate("Q1 2024"),
            specs: ("Urban Development", "25", "Mixed Use", "Smart Parking System"),
        },
        Entry {
            title: "Oceanfront Oasis",
            price: "₹12,90,000",
            location: "Bangalore, India",
            image: "project_img_5",
            status: ListingStatus::Completed,
            description: "Luxury beachfront condominiums with direct ocean access, a private beach, and world-class amenities.",
            features: [
                "Beachfront Location",
                "Private Beach Access",
                "Ocean View Apartments",
                "Marina Facilities",
                "Spa & Wellness Center",
                "Fine Dining Restaurant",
                "Yacht Club Membership",
                "Concierge Service",
            ],
            timeline: ("20 Months", "6,800 Sq. Ft.", "60+ Members"),
            milestone: Milestone::Completed("2023"),
            specs: ("Beachfront Condominiums", "18", "35", "Valet Parking"),
        },
        Entry {
            title: "Mountain Retreat",
            price: "₹11,95,000",
            location: "Pune, India",
            image: "project_img_6",
            status: ListingStatus::InProgress,
            description: "A sustainable mountain retreat for nature lovers, with eco-friendly construction, panoramic views, and adventure facilities.",
            features: [
                "Mountain Views",
                "Eco-Friendly Construction",
                "Adventure Facilities",
                "Fireplace Lounges",
                "Hot Springs",
                "Hiking Trails",
                "Wildlife Observation",
                "Sustainable Energy",
            ],
            timeline: ("16 Months", "3,500 Sq. Ft.", "35+ Members"),
            milestone: Milestone::CompletionDate("Q3 2024"),
            specs: ("Mountain Resort", "4", "15 Villas", "Open Parking"),
        },
    ]
}

/// Built-in listings in catalog order, with ids 1..=N.
pub fn builtin_listings() -> Vec<Listing> {
    entries()
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            let (duration, area, team_size) = e.timeline;
            let mut timeline = Timeline {
                duration: duration.into(),
                area: area.into(),
                team_size: team_size.into(),
                ..Default::default()
            };
            match e.milestone {
                Milestone::Completed(v) => timeline.completed = Some(v.into()),
                Milestone::CompletionDate(v) => timeline.completion_date = Some(v.into()),
                Milestone::StartDate(v) => timeline.start_date = Some(v.into()),
            }
            let (kind, floors, units, parking) = e.specs;
            Listing {
                id: ListingId(i as u64 + 1),
                title: e.title.into(),
                location: e.location.into(),
                price: e.price.into(),
                base_price: None,
                status: Some(e.status),
                description: Some(e.description.into()),
                features: e.features.iter().map(|f| f.to_string()).collect(),
                timeline: Some(timeline),
                specifications: Some(Specifications {
                    kind: kind.into(),
                    floors: floors.into(),
                    units: units.into(),
                    parking: parking.into(),
                }),
                image: ImageRef::Bundled(e.image.into()),
                is_user_listed: false,
                property_type: Some(kind.into()),
                bedrooms: None,
                transaction_type: Some(TransactionType::Sale),
            }
        })
        .collect()
}
