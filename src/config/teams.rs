//! Franchise pages scraped for player headshots.

/// URL slugs of the team pages under the official teams section
pub fn team_slugs() -> Vec<&'static str> {
    vec![
        "chennai-super-kings",
        "delhi-capitals",
        "gujarat-titans",
        "kolkata-knight-riders",
        "lucknow-super-giants",
        "mumbai-indians",
        "punjab-kings",
        "rajasthan-royals",
        "royal-challengers-bangalore",
        "sunrisers-hyderabad",
    ]
}
