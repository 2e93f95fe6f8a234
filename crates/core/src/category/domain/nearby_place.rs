use std::str::FromStr;

use super::expense_category::ExpenseCategory;

/// Point-of-interest kinds reported by the place-search collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    Restaurant,
    Cafe,
    Bakery,
    Brewery,
    Winery,
    Distillery,
    FoodMarket,
    Nightlife,
    Airport,
    PublicTransport,
    CarRental,
    GasStation,
    EvCharger,
    Parking,
    Marina,
    Store,
    Pharmacy,
    Laundry,
    Beauty,
    AutomotiveRepair,
    AnimalService,
    Hotel,
    Campground,
    RvPark,
    Museum,
    AmusementPark,
    Aquarium,
    Zoo,
    NationalPark,
    Park,
    Beach,
    Castle,
    Fortress,
    Landmark,
    NationalMonument,
    Planetarium,
    Theater,
    MovieTheater,
    MusicVenue,
    ConventionCenter,
    Fairground,
    Stadium,
    Library,
    Bank,
    Hospital,
    Police,
    School,
}

const NAMES: &[(&str, PlaceKind)] = &[
    ("restaurant", PlaceKind::Restaurant),
    ("cafe", PlaceKind::Cafe),
    ("bakery", PlaceKind::Bakery),
    ("brewery", PlaceKind::Brewery),
    ("winery", PlaceKind::Winery),
    ("distillery", PlaceKind::Distillery),
    ("food_market", PlaceKind::FoodMarket),
    ("nightlife", PlaceKind::Nightlife),
    ("airport", PlaceKind::Airport),
    ("public_transport", PlaceKind::PublicTransport),
    ("car_rental", PlaceKind::CarRental),
    ("gas_station", PlaceKind::GasStation),
    ("ev_charger", PlaceKind::EvCharger),
    ("parking", PlaceKind::Parking),
    ("marina", PlaceKind::Marina),
    ("store", PlaceKind::Store),
    ("pharmacy", PlaceKind::Pharmacy),
    ("laundry", PlaceKind::Laundry),
    ("beauty", PlaceKind::Beauty),
    ("automotive_repair", PlaceKind::AutomotiveRepair),
    ("animal_service", PlaceKind::AnimalService),
    ("hotel", PlaceKind::Hotel),
    ("campground", PlaceKind::Campground),
    ("rv_park", PlaceKind::RvPark),
    ("museum", PlaceKind::Museum),
    ("amusement_park", PlaceKind::AmusementPark),
    ("aquarium", PlaceKind::Aquarium),
    ("zoo", PlaceKind::Zoo),
    ("national_park", PlaceKind::NationalPark),
    ("park", PlaceKind::Park),
    ("beach", PlaceKind::Beach),
    ("castle", PlaceKind::Castle),
    ("fortress", PlaceKind::Fortress),
    ("landmark", PlaceKind::Landmark),
    ("national_monument", PlaceKind::NationalMonument),
    ("planetarium", PlaceKind::Planetarium),
    ("theater", PlaceKind::Theater),
    ("movie_theater", PlaceKind::MovieTheater),
    ("music_venue", PlaceKind::MusicVenue),
    ("convention_center", PlaceKind::ConventionCenter),
    ("fairground", PlaceKind::Fairground),
    ("stadium", PlaceKind::Stadium),
    ("library", PlaceKind::Library),
    ("bank", PlaceKind::Bank),
    ("hospital", PlaceKind::Hospital),
    ("police", PlaceKind::Police),
    ("school", PlaceKind::School),
];

impl PlaceKind {
    /// The expense category a visit to this kind of place usually means,
    /// or `None` for places that don't imply spending.
    pub fn expense_category(self) -> Option<ExpenseCategory> {
        use PlaceKind::*;
        match self {
            Restaurant | Cafe | Bakery | Brewery | Winery | Distillery | FoodMarket | Nightlife => {
                Some(ExpenseCategory::Food)
            }
            Airport | PublicTransport | CarRental | GasStation | EvCharger | Parking | Marina => {
                Some(ExpenseCategory::Transport)
            }
            Store | Pharmacy | Laundry | Beauty | AutomotiveRepair | AnimalService => {
                Some(ExpenseCategory::Shopping)
            }
            Hotel | Campground | RvPark => Some(ExpenseCategory::Accommodation),
            Museum | AmusementPark | Aquarium | Zoo | NationalPark | Park | Beach | Castle
            | Fortress | Landmark | NationalMonument | Planetarium | Theater | MovieTheater
            | MusicVenue | ConventionCenter | Fairground | Stadium | Library => {
                Some(ExpenseCategory::Sightseeing)
            }
            Bank | Hospital | Police | School => None,
        }
    }

    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}

impl FromStr for PlaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        NAMES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| format!("unknown place kind '{s}'"))
    }
}

/// The nearest categorised place around the traveller.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPlaceSignal {
    pub category: ExpenseCategory,
    pub distance_meters: f64,
    pub name: Option<String>,
}

/// One raw search hit from the place collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub kind: PlaceKind,
    pub distance_meters: f64,
    pub name: Option<String>,
}

/// Picks the closest candidate whose kind maps to an expense category.
pub fn nearest_place(candidates: &[PlaceCandidate]) -> Option<NearbyPlaceSignal> {
    let nearest = candidates
        .iter()
        .filter_map(|c| c.kind.expense_category().map(|category| (c, category)))
        .min_by(|(a, _), (b, _)| a.distance_meters.total_cmp(&b.distance_meters))?;

    let (candidate, category) = nearest;
    log::debug!(
        "Nearest place: {} ({}, {category}) at {:.0}m",
        candidate.name.as_deref().unwrap_or("unknown"),
        candidate.kind.name(),
        candidate.distance_meters
    );
    Some(NearbyPlaceSignal {
        category,
        distance_meters: candidate.distance_meters.max(0.0),
        name: candidate.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidate(kind: PlaceKind, distance: f64, name: &str) -> PlaceCandidate {
        PlaceCandidate {
            kind,
            distance_meters: distance,
            name: Some(name.to_string()),
        }
    }

    #[rstest]
    #[case::restaurant(PlaceKind::Restaurant, Some(ExpenseCategory::Food))]
    #[case::nightlife(PlaceKind::Nightlife, Some(ExpenseCategory::Food))]
    #[case::airport(PlaceKind::Airport, Some(ExpenseCategory::Transport))]
    #[case::marina(PlaceKind::Marina, Some(ExpenseCategory::Transport))]
    #[case::pharmacy(PlaceKind::Pharmacy, Some(ExpenseCategory::Shopping))]
    #[case::rv_park(PlaceKind::RvPark, Some(ExpenseCategory::Accommodation))]
    #[case::museum(PlaceKind::Museum, Some(ExpenseCategory::Sightseeing))]
    #[case::library(PlaceKind::Library, Some(ExpenseCategory::Sightseeing))]
    #[case::bank(PlaceKind::Bank, None)]
    #[case::hospital(PlaceKind::Hospital, None)]
    fn test_expense_category_mapping(
        #[case] kind: PlaceKind,
        #[case] expected: Option<ExpenseCategory>,
    ) {
        assert_eq!(kind.expense_category(), expected);
    }

    #[test]
    fn test_every_kind_has_a_name_that_parses_back() {
        for (name, kind) in NAMES {
            assert_eq!(kind.name(), *name);
            assert_eq!(name.parse::<PlaceKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_parse_accepts_dashes_and_case() {
        assert_eq!(
            "Public-Transport".parse::<PlaceKind>().unwrap(),
            PlaceKind::PublicTransport
        );
    }

    #[test]
    fn test_nearest_place_picks_closest_mapped_candidate() {
        let candidates = vec![
            candidate(PlaceKind::Museum, 120.0, "Louvre"),
            candidate(PlaceKind::Bank, 5.0, "BNP"),
            candidate(PlaceKind::Cafe, 40.0, "Café de Flore"),
        ];
        let signal = nearest_place(&candidates).unwrap();
        assert_eq!(signal.category, ExpenseCategory::Food);
        assert_eq!(signal.name.as_deref(), Some("Café de Flore"));
        assert_eq!(signal.distance_meters, 40.0);
    }

    #[test]
    fn test_nearest_place_none_when_nothing_maps() {
        let candidates = vec![candidate(PlaceKind::Police, 10.0, "Préfecture")];
        assert!(nearest_place(&candidates).is_none());
        assert!(nearest_place(&[]).is_none());
    }
}
