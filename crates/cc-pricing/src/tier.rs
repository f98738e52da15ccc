use cc_core::PricingTier;

/// Find the tier that prices `quantity`.
///
/// Tiers are scanned in the order given and the first one whose range
/// contains the quantity wins, so earlier tiers override later ones when
/// ranges overlap. Ranges are not checked for gaps or overlaps.
pub fn find_matching_tier(tiers: &[PricingTier], quantity: f64) -> Option<&PricingTier> {
    tiers.iter().find(|tier| tier.contains(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_tiers() -> Vec<PricingTier> {
        vec![
            PricingTier::new(1.0, Some(10.0), 50.0),
            PricingTier::new(11.0, Some(50.0), 40.0),
            PricingTier::new(51.0, None, 30.0),
        ]
    }

    #[test]
    fn test_matches_containing_tier() {
        let tiers = standard_tiers();
        assert_eq!(find_matching_tier(&tiers, 1.0).unwrap().price_per_unit, Some(50.0));
        assert_eq!(find_matching_tier(&tiers, 10.0).unwrap().price_per_unit, Some(50.0));
        assert_eq!(find_matching_tier(&tiers, 11.0).unwrap().price_per_unit, Some(40.0));
        assert_eq!(find_matching_tier(&tiers, 5000.0).unwrap().price_per_unit, Some(30.0));
    }

    #[test]
    fn test_no_match_outside_ranges() {
        let tiers = standard_tiers();
        assert!(find_matching_tier(&tiers, -3.0).is_none());
        assert!(find_matching_tier(&tiers, 0.0).is_none());
        // Fractional quantity in the gap between 10 and 11
        assert!(find_matching_tier(&tiers, 10.5).is_none());
        assert!(find_matching_tier(&[], 5.0).is_none());
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let tiers = vec![
            PricingTier::new(1.0, None, 45.0),
            PricingTier::new(1.0, Some(10.0), 50.0),
        ];
        assert_eq!(find_matching_tier(&tiers, 5.0).unwrap().price_per_unit, Some(45.0));
    }

    #[test]
    fn test_unique_match_on_gapless_ranges() {
        let tiers = standard_tiers();
        for quantity in 1..=200 {
            let matches = tiers
                .iter()
                .filter(|tier| tier.contains(quantity as f64))
                .count();
            assert_eq!(matches, 1);
            assert!(find_matching_tier(&tiers, quantity as f64).is_some());
        }
    }
}
