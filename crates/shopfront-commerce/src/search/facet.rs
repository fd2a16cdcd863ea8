//! Filter facets and the shopper's selections.

use crate::config::SearchConfig;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A named price range on the price facet.
///
/// The two middle buckets both include 5000, so a product priced exactly
/// ₹5,000 belongs to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    /// Below ₹1,000.
    Under1000,
    /// ₹1,000 to ₹5,000 inclusive.
    From1000To5000,
    /// ₹5,000 to ₹10,000 inclusive.
    From5000To10000,
    /// Above ₹10,000.
    Over10000,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 4] = [
        PriceBucket::Under1000,
        PriceBucket::From1000To5000,
        PriceBucket::From5000To10000,
        PriceBucket::Over10000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::Under1000 => "Under \u{20b9}1,000",
            PriceBucket::From1000To5000 => "\u{20b9}1,000 - \u{20b9}5,000",
            PriceBucket::From5000To10000 => "\u{20b9}5,000 - \u{20b9}10,000",
            PriceBucket::Over10000 => "Over \u{20b9}10,000",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, CommerceError> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == label)
            .ok_or_else(|| CommerceError::UnknownPriceBucket(label.to_string()))
    }

    /// Whether `price` falls inside this bucket.
    pub fn contains(&self, price: &Money) -> bool {
        let rupees = |n: i64| Money::from_rupees(n).paise;
        let amount = price.paise;
        match self {
            PriceBucket::Under1000 => amount < rupees(1000),
            PriceBucket::From1000To5000 => amount >= rupees(1000) && amount <= rupees(5000),
            PriceBucket::From5000To10000 => amount >= rupees(5000) && amount <= rupees(10000),
            PriceBucket::Over10000 => amount > rupees(10000),
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum whole-star rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RatingThreshold(u8);

impl RatingThreshold {
    pub fn new(stars: u8) -> Result<Self, CommerceError> {
        if (1..=5).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(CommerceError::InvalidRatingThreshold(stars.to_string()))
        }
    }

    /// Parse the checkbox value (`"4"`).
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        let stars: u8 = s
            .trim()
            .parse()
            .map_err(|_| CommerceError::InvalidRatingThreshold(s.to_string()))?;
        Self::new(stars)
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        format!("{}\u{2605} & up", self.0)
    }
}

/// The selected values of one facet.
///
/// Ordered, so that toggling a value twice restores the exact prior state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection<T: Ord> {
    selected: BTreeSet<T>,
}

impl<T: Ord> Default for FacetSelection<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone> FacetSelection<T> {
    /// Flip membership of `value`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.selected.remove(&value) {
            false
        } else {
            self.selected.insert(value);
            true
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.selected.contains(value)
    }

    /// No selection means the facet does not constrain results.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.selected.iter()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Selections across all three facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub categories: FacetSelection<String>,
    pub ratings: FacetSelection<RatingThreshold>,
    pub prices: FacetSelection<PriceBucket>,
}

impl FilterSelection {
    /// Total number of selected options.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.ratings.len() + self.prices.len()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.ratings.clear();
        self.prices.clear();
    }

    pub fn is_selected(&self, option: &FacetOption) -> bool {
        match option {
            FacetOption::Category(c) => self.categories.contains(c),
            FacetOption::Rating(r) => self.ratings.contains(r),
            FacetOption::Price(p) => self.prices.contains(p),
        }
    }
}

/// One checkbox in the filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FacetOption {
    Category(String),
    Rating(RatingThreshold),
    Price(PriceBucket),
}

impl FacetOption {
    pub fn label(&self) -> String {
        match self {
            FacetOption::Category(c) => c.clone(),
            FacetOption::Rating(r) => r.label(),
            FacetOption::Price(p) => p.label().to_string(),
        }
    }

    /// Stable key for rendering lists.
    pub fn key(&self) -> String {
        match self {
            FacetOption::Category(c) => format!("category:{}", c),
            FacetOption::Rating(r) => format!("rating:{}", r.stars()),
            FacetOption::Price(p) => format!("price:{:?}", p),
        }
    }
}

/// A titled group of checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    pub title: &'static str,
    pub options: Vec<FacetOption>,
}

/// Sidebar groups in display order: Department, Customer Rating, Price.
///
/// Rating values outside 1..=5 are skipped.
pub fn facet_groups(config: &SearchConfig) -> Vec<FacetGroup> {
    vec![
        FacetGroup {
            title: "Department",
            options: config
                .categories
                .iter()
                .cloned()
                .map(FacetOption::Category)
                .collect(),
        },
        FacetGroup {
            title: "Customer Rating",
            options: config
                .ratings
                .iter()
                .filter_map(|r| RatingThreshold::new(*r).ok())
                .map(FacetOption::Rating)
                .collect(),
        },
        FacetGroup {
            title: "Price",
            options: PriceBucket::ALL.into_iter().map(FacetOption::Price).collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::parse_price;

    #[test]
    fn test_bucket_ranges() {
        let p = |s: &str| parse_price(s).unwrap();
        assert!(PriceBucket::Under1000.contains(&p("999")));
        assert!(!PriceBucket::Under1000.contains(&p("1,000")));
        assert!(PriceBucket::From1000To5000.contains(&p("1,000")));
        assert!(PriceBucket::Over10000.contains(&p("10,000.01")));
        assert!(!PriceBucket::Over10000.contains(&p("10,000")));
        assert!(PriceBucket::From5000To10000.contains(&p("10,000")));
    }

    #[test]
    fn test_middle_buckets_overlap_at_5000() {
        let price = parse_price("\u{20b9}5,000").unwrap();
        assert!(PriceBucket::From1000To5000.contains(&price));
        assert!(PriceBucket::From5000To10000.contains(&price));
        assert!(!PriceBucket::Under1000.contains(&price));
        assert!(!PriceBucket::Over10000.contains(&price));
    }

    #[test]
    fn test_bucket_label_roundtrip() {
        for bucket in PriceBucket::ALL {
            assert_eq!(PriceBucket::from_label(bucket.label()).unwrap(), bucket);
        }
        assert!(matches!(
            PriceBucket::from_label("Over 9000"),
            Err(CommerceError::UnknownPriceBucket(_))
        ));
    }

    #[test]
    fn test_rating_threshold_parse() {
        assert_eq!(RatingThreshold::parse("4").unwrap().stars(), 4);
        assert!(RatingThreshold::parse("0").is_err());
        assert!(RatingThreshold::parse("6").is_err());
        assert!(RatingThreshold::parse("four").is_err());
        assert_eq!(RatingThreshold::new(3).unwrap().label(), "3\u{2605} & up");
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = FacetSelection::default();
        selection.toggle("Books".to_string());
        selection.toggle("Electronics".to_string());
        let before = selection.clone();

        assert!(!selection.toggle("Books".to_string()));
        assert!(selection.toggle("Books".to_string()));
        assert_eq!(selection, before);

        assert!(selection.toggle("Fashion".to_string()));
        assert!(!selection.toggle("Fashion".to_string()));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_filter_selection_counts() {
        let mut selection = FilterSelection::default();
        selection.categories.toggle("Books".to_string());
        selection.ratings.toggle(RatingThreshold::new(4).unwrap());
        selection.prices.toggle(PriceBucket::Under1000);
        assert_eq!(selection.active_count(), 3);
        assert!(selection.is_selected(&FacetOption::Price(PriceBucket::Under1000)));
        assert!(!selection.is_selected(&FacetOption::Category("Beauty".to_string())));
        selection.clear();
        assert_eq!(selection.active_count(), 0);
    }

    #[test]
    fn test_facet_groups_from_config() {
        let groups = facet_groups(&SearchConfig::default());
        let titles: Vec<_> = groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Department", "Customer Rating", "Price"]);
        assert_eq!(groups[0].options.len(), 8);
        assert_eq!(groups[1].options[0].label(), "4\u{2605} & up");
        assert_eq!(groups[2].options.len(), 4);
    }

    #[test]
    fn test_option_keys_are_unique() {
        let keys: std::collections::HashSet<_> = facet_groups(&SearchConfig::default())
            .into_iter()
            .flat_map(|g| g.options)
            .map(|o| o.key())
            .collect();
        assert_eq!(keys.len(), 8 + 4 + 4);
        assert!(keys.contains("rating:4"));
        assert!(keys.contains("category:Home & Kitchen"));
    }

    #[test]
    fn test_facet_groups_skip_bad_ratings() {
        let config = SearchConfig {
            categories: vec![],
            ratings: vec![0, 2, 9],
        };
        let groups = facet_groups(&config);
        assert_eq!(groups[1].options, vec![FacetOption::Rating(RatingThreshold::new(2).unwrap())]);
    }
}
