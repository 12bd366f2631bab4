//! Fixed reference vocabularies accepted by the market endpoint.
//!
//! All entries are stored upper-case; callers upper-case their input before
//! checking membership.

pub const FRUIT_COMMODITIES: &[&str] = &[
    "APPLES",
    "APRICOTS",
    "AVOCADOS",
    "BANANAS",
    "BLACKBERRIES",
    "BLUEBERRIES",
    "CANTALOUPS",
    "CHERRIES",
    "CRANBERRIES",
    "GRAPEFRUIT",
    "GRAPES",
    "HONEYDEWS",
    "KIWIFRUIT",
    "LEMONS",
    "LIMES",
    "MANGOES",
    "NECTARINES",
    "ORANGES",
    "PAPAYA",
    "PEACHES",
    "PEARS",
    "PINEAPPLES",
    "PLUMS",
    "POMEGRANATES",
    "RASPBERRIES",
    "STRAWBERRIES",
    "TANGERINES",
    "WATERMELONS",
];

pub const ONIONS_AND_POTATOES_COMMODITIES: &[&str] = &[
    "ONIONS DRY",
    "ONIONS GREEN",
    "POTATOES",
    "POTATOES, RED",
    "POTATOES, RUSSET",
    "POTATOES, YELLOW",
    "SWEET POTATOES",
];

pub const VEGETABLES_COMMODITIES: &[&str] = &[
    "ARTICHOKES",
    "ASPARAGUS",
    "BEANS",
    "BEETS",
    "BROCCOLI",
    "BRUSSELS SPROUTS",
    "CABBAGE",
    "CARROTS",
    "CAULIFLOWER",
    "CELERY",
    "CORN-SWEET",
    "CUCUMBERS",
    "EGGPLANT",
    "GARLIC",
    "KALE GREENS",
    "LETTUCE, GREEN LEAF",
    "LETTUCE, ICEBERG",
    "LETTUCE, RED LEAF",
    "LETTUCE, ROMAINE",
    "MUSHROOMS",
    "OKRA",
    "PEAS GREEN",
    "PEPPERS, BELL TYPE",
    "PEPPERS, CHILE",
    "RADISHES",
    "SPINACH",
    "SQUASH",
    "TOMATOES",
    "TOMATOES, CHERRY",
];

pub const HERBS_COMMODITIES: &[&str] = &[
    "BASIL",
    "CHIVES",
    "CILANTRO",
    "DILL",
    "MINT",
    "OREGANO",
    "PARSLEY",
    "ROSEMARY",
    "SAGE",
    "TARRAGON",
    "THYME",
];

pub const ORNAMENTALS_COMMODITIES: &[&str] = &[
    "CARNATIONS",
    "CHRYSANTHEMUMS",
    "GERANIUMS",
    "LILIES",
    "POINSETTIAS",
    "ROSES",
    "TULIPS",
];

pub const HEMP_COMMODITIES: &[&str] = &["HEMP FIBER", "HEMP FLOWER", "HEMP GRAIN", "HEMP SEED"];

/// Commodity classes (`CLASS` in the market payload). `ALL` disables the filter.
pub const COMMODITY_CLASSES: &[&str] = &[
    "ALL",
    "FRUIT",
    "ONIONS AND POTATOES",
    "VEGETABLES",
    "HERBS",
    "ORNAMENTALS",
    "HEMP",
];

/// Reporting regions (`REGN` in the market payload).
pub const COMMODITY_REGIONS: &[&str] = &[
    "NATIONAL",
    "NORTHEAST",
    "SOUTHEAST",
    "MIDWEST",
    "SOUTH CENTRAL",
    "SOUTHWEST",
    "NORTHWEST",
    "ALASKA",
    "HAWAII",
];

/// The six commodity lists. Every commodity belongs to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommodityCategory {
    Fruit,
    OnionsAndPotatoes,
    Vegetables,
    Herbs,
    Ornamentals,
    Hemp,
}

impl CommodityCategory {
    pub const ALL: [CommodityCategory; 6] = [
        CommodityCategory::Fruit,
        CommodityCategory::OnionsAndPotatoes,
        CommodityCategory::Vegetables,
        CommodityCategory::Herbs,
        CommodityCategory::Ornamentals,
        CommodityCategory::Hemp,
    ];

    pub fn commodities(&self) -> &'static [&'static str] {
        match self {
            CommodityCategory::Fruit => FRUIT_COMMODITIES,
            CommodityCategory::OnionsAndPotatoes => ONIONS_AND_POTATOES_COMMODITIES,
            CommodityCategory::Vegetables => VEGETABLES_COMMODITIES,
            CommodityCategory::Herbs => HERBS_COMMODITIES,
            CommodityCategory::Ornamentals => ORNAMENTALS_COMMODITIES,
            CommodityCategory::Hemp => HEMP_COMMODITIES,
        }
    }

    /// The entry of [`COMMODITY_CLASSES`] this category reports under.
    pub fn class_name(&self) -> &'static str {
        match self {
            CommodityCategory::Fruit => "FRUIT",
            CommodityCategory::OnionsAndPotatoes => "ONIONS AND POTATOES",
            CommodityCategory::Vegetables => "VEGETABLES",
            CommodityCategory::Herbs => "HERBS",
            CommodityCategory::Ornamentals => "ORNAMENTALS",
            CommodityCategory::Hemp => "HEMP",
        }
    }

    /// Finds the category listing `commodity` (exact, upper-case match).
    pub fn of(commodity: &str) -> Option<CommodityCategory> {
        Self::ALL
            .into_iter()
            .find(|category| validate_membership(commodity, category.commodities()))
    }
}

/// Case-sensitive membership check against a reference list.
pub fn validate_membership(value: &str, reference: &[&str]) -> bool {
    reference.contains(&value)
}

pub fn is_commodity(commodity: Option<&str>) -> bool {
    match commodity {
        Some(c) => CommodityCategory::of(&c.to_uppercase()).is_some(),
        None => false,
    }
}

pub fn is_commodity_class(class: Option<&str>) -> bool {
    match class {
        Some(c) => validate_membership(&c.to_uppercase(), COMMODITY_CLASSES),
        None => false,
    }
}

pub fn is_commodity_region(region: Option<&str>) -> bool {
    match region {
        Some(r) => validate_membership(&r.to_uppercase(), COMMODITY_REGIONS),
        None => false,
    }
}

/// Every commodity across all six lists, sorted.
pub fn all_commodities() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = CommodityCategory::ALL
        .iter()
        .flat_map(|category| category.commodities().iter().copied())
        .collect();
    all.sort_unstable();
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_commodity_is_in_exactly_one_category() {
        for commodity in all_commodities() {
            let hits = CommodityCategory::ALL
                .iter()
                .filter(|c| c.commodities().contains(&commodity))
                .count();
            assert_eq!(hits, 1, "{} listed {} times", commodity, hits);
            assert!(is_commodity(Some(commodity)));
        }
    }

    #[test]
    fn is_commodity_uppercases_input() {
        assert!(is_commodity(Some("lettuce, green leaf")));
        assert!(is_commodity(Some("Apples")));
        assert!(is_commodity(Some("hemp seed")));
    }

    #[test]
    fn is_commodity_rejects_unknown_and_none() {
        assert!(!is_commodity(None));
        assert!(!is_commodity(Some("")));
        assert!(!is_commodity(Some("DRAGONFRUIT")));
        // categories are not commodities
        assert!(!is_commodity(Some("FRUIT")));
    }

    #[test]
    fn class_and_region_predicates() {
        assert!(is_commodity_class(Some("all")));
        assert!(is_commodity_class(Some("Onions and Potatoes")));
        assert!(!is_commodity_class(Some("grains")));
        assert!(!is_commodity_class(None));

        assert!(is_commodity_region(Some("national")));
        assert!(is_commodity_region(Some("South Central")));
        assert!(!is_commodity_region(Some("Atlantis")));
        assert!(!is_commodity_region(None));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(validate_membership("NATIONAL", COMMODITY_REGIONS));
        assert!(!validate_membership("National", COMMODITY_REGIONS));
    }

    #[test]
    fn every_category_class_is_a_known_class() {
        for category in CommodityCategory::ALL {
            assert!(validate_membership(category.class_name(), COMMODITY_CLASSES));
        }
    }

    #[test]
    fn category_lookup() {
        assert_eq!(
            CommodityCategory::of("LETTUCE, GREEN LEAF"),
            Some(CommodityCategory::Vegetables)
        );
        assert_eq!(CommodityCategory::of("BASIL"), Some(CommodityCategory::Herbs));
        assert_eq!(CommodityCategory::of("basil"), None);
    }
}
