//! Property records and the mock catalogs rendered by the browse, detail and
//! "my properties" screens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image used whenever a listing has no photos or a photo fails to load.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1200&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    ForRent,
    ForSale,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 2] = [ListingStatus::ForRent, ListingStatus::ForSale];

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::ForRent => "For Rent",
            ListingStatus::ForSale => "For Sale",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ListingStatus::ForRent => "status-badge--rent",
            ListingStatus::ForSale => "status-badge--sale",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Townhouse,
    Condo,
    Penthouse,
    Villa,
    Studio,
}

impl PropertyType {
    /// Types offered by the browse filter drawer.
    pub const FILTERABLE: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Townhouse,
        PropertyType::Condo,
    ];

    /// Types offered by the listing creation form.
    pub const LISTABLE: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Penthouse,
        PropertyType::Villa,
        PropertyType::Studio,
        PropertyType::Townhouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Condo => "Condo",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Villa => "Villa",
            PropertyType::Studio => "Studio",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::LISTABLE
            .iter()
            .chain(Self::FILTERABLE.iter())
            .copied()
            .find(|kind| kind.label() == label)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Amenity labels offered by the browse filter drawer.
pub const FILTER_AMENITIES: [&str; 10] = [
    "Parking",
    "Pool",
    "Gym",
    "Garden",
    "Security",
    "Pet Friendly",
    "Balcony",
    "Air Conditioning",
    "Elevator",
    "Furnished",
];

/// The 36 Nigerian states plus the Federal Capital Territory.
pub const NIGERIAN_STATES: [&str; 37] = [
    "Abia",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nasarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
    "FCT - Abuja",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Display string, e.g. `₦2,500,000/yr`.
    pub price: String,
    pub location: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    /// Floor area in square feet.
    pub area: u32,
    pub status: ListingStatus,
    pub is_favorite: bool,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub property_type: PropertyType,
    #[serde(default)]
    pub description: String,
}

impl Property {
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_IMAGE)
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// Contact card shown on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Landlord {
    pub name: &'static str,
    pub avatar: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub rating: f32,
    pub listings: u32,
}

pub const DEFAULT_LANDLORD: Landlord = Landlord {
    name: "John Smith",
    avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100",
    phone: "+1 (555) 123-4567",
    email: "john.smith@findmyhome.com",
    rating: 4.8,
    listings: 12,
};

struct Seed {
    id: &'static str,
    title: &'static str,
    price: &'static str,
    location: &'static str,
    bedrooms: u8,
    bathrooms: u8,
    area: u32,
    status: ListingStatus,
    is_favorite: bool,
    images: &'static [&'static str],
    amenities: &'static [&'static str],
    property_type: PropertyType,
    description: &'static str,
}

impl Seed {
    fn build(&self) -> Property {
        Property {
            id: self.id.to_string(),
            title: self.title.to_string(),
            price: self.price.to_string(),
            location: self.location.to_string(),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            status: self.status,
            is_favorite: self.is_favorite,
            images: self.images.iter().map(|s| s.to_string()).collect(),
            amenities: self.amenities.iter().map(|s| s.to_string()).collect(),
            property_type: self.property_type,
            description: self.description.to_string(),
        }
    }
}

const BROWSE_SEEDS: [Seed; 6] = [
    Seed {
        id: "1",
        title: "Luxury Apartment in Lekki Phase 1",
        price: "₦2,500,000/yr",
        location: "Lekki, Lagos",
        bedrooms: 2,
        bathrooms: 2,
        area: 1200,
        status: ListingStatus::ForRent,
        is_favorite: false,
        images: &[
            "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1484154218962-a197022b5858?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Parking", "Gym", "Pool"],
        property_type: PropertyType::Apartment,
        description: "Bright serviced apartment minutes from the Lekki toll gate, with a shared pool, gym and 24-hour power.",
    },
    Seed {
        id: "2",
        title: "Family House in Gwarinpa",
        price: "₦85,000,000",
        location: "Gwarinpa, FCT - Abuja",
        bedrooms: 4,
        bathrooms: 3,
        area: 2800,
        status: ListingStatus::ForSale,
        is_favorite: true,
        images: &[
            "https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Garden", "Garage", "Security"],
        property_type: PropertyType::House,
        description: "Detached family home on a quiet close with a landscaped garden, double garage and gated estate security.",
    },
    Seed {
        id: "3",
        title: "Cozy Studio in Yaba",
        price: "₦1,800,000/yr",
        location: "Yaba, Lagos",
        bedrooms: 1,
        bathrooms: 1,
        area: 650,
        status: ListingStatus::ForRent,
        is_favorite: false,
        images: &[
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1493809842364-78817add7ffb?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Pet Friendly", "Balcony"],
        property_type: PropertyType::Apartment,
        description: "Compact studio close to the tech hub, with a private balcony and a pet-friendly landlord.",
    },
    Seed {
        id: "4",
        title: "Spacious Townhouse in Enugu",
        price: "₦3,200,000/yr",
        location: "Independence Layout, Enugu",
        bedrooms: 3,
        bathrooms: 2,
        area: 1850,
        status: ListingStatus::ForRent,
        is_favorite: false,
        images: &[
            "https://images.unsplash.com/photo-1449844908441-8829872d2607?auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Parking", "Garden", "Air Conditioning"],
        property_type: PropertyType::Townhouse,
        description: "Three-storey townhouse with a small garden, fitted air conditioning and off-street parking.",
    },
    Seed {
        id: "5",
        title: "Executive Condo in Port Harcourt",
        price: "₦120,000,000",
        location: "GRA Phase 2, Rivers",
        bedrooms: 3,
        bathrooms: 2,
        area: 1600,
        status: ListingStatus::ForSale,
        is_favorite: true,
        images: &[
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Pool", "Gym", "Elevator", "Security"],
        property_type: PropertyType::Condo,
        description: "Executive condominium in the GRA with lift access, a residents' pool and gym, and round-the-clock security.",
    },
    Seed {
        id: "6",
        title: "Charming Cottage in Ibadan",
        price: "₦2,800,000/yr",
        location: "Bodija, Oyo",
        bedrooms: 2,
        bathrooms: 1,
        area: 1100,
        status: ListingStatus::ForRent,
        is_favorite: false,
        images: &[
            "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1505142468610-359e7d316be0?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Garden", "Pet Friendly", "Furnished"],
        property_type: PropertyType::House,
        description: "Furnished cottage in Bodija with a walled garden. Pets welcome.",
    },
];

const OWNED_SEEDS: [Seed; 2] = [
    Seed {
        id: "mp1",
        title: "3-Bed Apartment in Lekki",
        price: "₦2,500,000/yr",
        location: "Lekki Phase 1, Lagos",
        bedrooms: 3,
        bathrooms: 2,
        area: 1450,
        status: ListingStatus::ForRent,
        is_favorite: false,
        images: &[
            "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Parking", "Gym"],
        property_type: PropertyType::Apartment,
        description: "Your listing. Three bedrooms, two bathrooms, covered parking and a residents' gym.",
    },
    Seed {
        id: "mp2",
        title: "Family House in Gwarinpa",
        price: "₦85,000,000",
        location: "Gwarinpa, FCT - Abuja",
        bedrooms: 4,
        bathrooms: 3,
        area: 2800,
        status: ListingStatus::ForSale,
        is_favorite: true,
        images: &[
            "https://images.unsplash.com/photo-1570129477492-45c003edd2be?auto=format&fit=crop&w=1200&q=80",
        ],
        amenities: &["Garden", "Garage"],
        property_type: PropertyType::House,
        description: "Your listing. Four-bedroom family house with a garden and garage.",
    },
];

/// Candidates shown on the browse screen.
pub fn browse_catalog() -> Vec<Property> {
    BROWSE_SEEDS.iter().map(Seed::build).collect()
}

/// Listings owned by the signed-in user.
pub fn owned_catalog() -> Vec<Property> {
    OWNED_SEEDS.iter().map(Seed::build).collect()
}

/// Look a property up across every mock catalog.
pub fn find_property(id: &str) -> Option<Property> {
    BROWSE_SEEDS
        .iter()
        .chain(OWNED_SEEDS.iter())
        .find(|seed| seed.id == id)
        .map(Seed::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<String> = browse_catalog()
            .into_iter()
            .chain(owned_catalog())
            .map(|p| p.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn find_property_covers_both_catalogs() {
        assert_eq!(find_property("3").unwrap().title, "Cozy Studio in Yaba");
        assert_eq!(find_property("mp1").unwrap().bedrooms, 3);
        assert!(find_property("999").is_none());
    }

    #[test]
    fn cover_image_falls_back_when_no_photos() {
        let mut property = browse_catalog().remove(0);
        assert_ne!(property.cover_image(), "");
        property.images.clear();
        assert_eq!(property.cover_image(), FALLBACK_IMAGE);
    }

    #[test]
    fn property_type_labels_round_trip() {
        for kind in PropertyType::LISTABLE {
            assert_eq!(PropertyType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(PropertyType::from_label("Condo"), Some(PropertyType::Condo));
        assert_eq!(PropertyType::from_label("Castle"), None);
    }
}
