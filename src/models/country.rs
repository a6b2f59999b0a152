//! Country resolution from international calling codes
//!
//! Phone numbers are matched literally against a static table of calling-code
//! prefixes. The longest matching prefix wins, so `+1242...` resolves to the
//! Bahamas rather than to the `+1` USA/Canada entry.

/// Country name used when no prefix matches
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Built-in calling-code table (prefix, country)
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    // North America
    ("+1", "USA/Canada"),
    ("+1242", "Bahamas"),
    ("+1246", "Barbados"),
    ("+1264", "Anguilla"),
    ("+1268", "Antigua and Barbuda"),
    ("+1284", "British Virgin Islands"),
    ("+1345", "Cayman Islands"),
    ("+1441", "Bermuda"),
    ("+1473", "Grenada"),
    ("+1649", "Turks and Caicos"),
    ("+1664", "Montserrat"),
    ("+1721", "Sint Maarten"),
    ("+1758", "Saint Lucia"),
    ("+1767", "Dominica"),
    ("+1784", "Saint Vincent & Grenadines"),
    ("+1849", "Dominican Republic"),
    ("+1868", "Trinidad and Tobago"),
    ("+1869", "Saint Kitts and Nevis"),
    ("+1876", "Jamaica"),
    ("+1939", "Puerto Rico"),
    // Europe
    ("+44", "UK"),
    ("+33", "France"),
    ("+49", "Germany"),
    ("+39", "Italy"),
    ("+34", "Spain"),
    ("+351", "Portugal"),
    ("+352", "Luxembourg"),
    ("+353", "Ireland"),
    ("+31", "Netherlands"),
    ("+32", "Belgium"),
    ("+41", "Switzerland"),
    ("+43", "Austria"),
    ("+46", "Sweden"),
    ("+47", "Norway"),
    ("+45", "Denmark"),
    ("+358", "Finland"),
    ("+30", "Greece"),
    ("+48", "Poland"),
    ("+420", "Czech Republic"),
    ("+36", "Hungary"),
    ("+40", "Romania"),
    ("+359", "Bulgaria"),
    ("+385", "Croatia"),
    ("+381", "Serbia"),
    ("+386", "Slovenia"),
    ("+421", "Slovakia"),
    ("+370", "Lithuania"),
    ("+371", "Latvia"),
    ("+372", "Estonia"),
    ("+7", "Russia/Kazakhstan"),
    ("+380", "Ukraine"),
    ("+90", "Turkey"),
    // Asia & Oceania
    ("+86", "China"),
    ("+91", "India"),
    ("+81", "Japan"),
    ("+82", "South Korea"),
    ("+61", "Australia"),
    ("+64", "New Zealand"),
    ("+62", "Indonesia"),
    ("+63", "Philippines"),
    ("+65", "Singapore"),
    ("+66", "Thailand"),
    ("+84", "Vietnam"),
    ("+60", "Malaysia"),
    ("+886", "Taiwan"),
    ("+852", "Hong Kong"),
    ("+92", "Pakistan"),
    ("+94", "Sri Lanka"),
    ("+880", "Bangladesh"),
    ("+977", "Nepal"),
    ("+95", "Myanmar"),
    // Middle East
    ("+971", "UAE"),
    ("+966", "Saudi Arabia"),
    ("+972", "Israel"),
    ("+98", "Iran"),
    ("+964", "Iraq"),
    ("+974", "Qatar"),
    ("+965", "Kuwait"),
    ("+968", "Oman"),
    ("+962", "Jordan"),
    ("+961", "Lebanon"),
    // Africa
    ("+20", "Egypt"),
    ("+27", "South Africa"),
    ("+234", "Nigeria"),
    ("+254", "Kenya"),
    ("+212", "Morocco"),
    ("+213", "Algeria"),
    ("+216", "Tunisia"),
    ("+251", "Ethiopia"),
    ("+233", "Ghana"),
    ("+225", "Ivory Coast"),
    ("+255", "Tanzania"),
    ("+256", "Uganda"),
    ("+260", "Zambia"),
    ("+263", "Zimbabwe"),
    // South America
    ("+55", "Brazil"),
    ("+54", "Argentina"),
    ("+57", "Colombia"),
    ("+56", "Chile"),
    ("+51", "Peru"),
    ("+58", "Venezuela"),
    ("+593", "Ecuador"),
    ("+591", "Bolivia"),
    ("+595", "Paraguay"),
    ("+598", "Uruguay"),
    // Central America
    ("+52", "Mexico"),
    ("+507", "Panama"),
    ("+506", "Costa Rica"),
    ("+503", "El Salvador"),
    ("+502", "Guatemala"),
    ("+504", "Honduras"),
    ("+505", "Nicaragua"),
];

/// Longest-prefix lookup over a calling-code table
#[derive(Debug, Clone, Copy)]
pub struct CountryResolver {
    table: &'static [(&'static str, &'static str)],
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::new(COUNTRY_CODES)
    }
}

impl CountryResolver {
    /// Create a resolver over a custom table
    pub const fn new(table: &'static [(&'static str, &'static str)]) -> Self {
        Self { table }
    }

    /// Resolve a phone number to a country name
    ///
    /// Returns [`UNKNOWN_COUNTRY`] when no prefix matches. Among equally long
    /// matches the first table entry wins.
    pub fn resolve(&self, phone: &str) -> &'static str {
        self.table
            .iter()
            .filter(|(prefix, _)| !prefix.is_empty() && phone.starts_with(prefix))
            .fold(None::<&(&str, &str)>, |best, entry| match best {
                Some(current) if current.0.len() >= entry.0.len() => Some(current),
                _ => Some(entry),
            })
            .map(|(_, country)| *country)
            .unwrap_or(UNKNOWN_COUNTRY)
    }
}

/// Resolve a phone number against the built-in table
pub fn resolve_country(phone: &str) -> &'static str {
    CountryResolver::default().resolve(phone)
}
