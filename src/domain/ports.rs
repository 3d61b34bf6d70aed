//! Static port directory and the fallback country list.

use super::shipment::PortSelection;

/// Value of the "Other / not listed" option in a port select.
pub const MANUAL_PORT: &str = "__manual";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Port {
    pub slug: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryPorts {
    pub code: &'static str,
    pub label: &'static str,
    pub ports: &'static [Port],
}

const fn port(slug: &'static str, label: &'static str) -> Port {
    Port { slug, label }
}

pub static PORT_DIRECTORY: &[CountryPorts] = &[
    CountryPorts {
        code: "AE",
        label: "United Arab Emirates",
        ports: &[
            port("dubai", "Jebel Ali, Dubai (AEDXB)"),
            port("abu-dhabi", "Abu Dhabi (AEAUH)"),
            port("jebel-ali", "Jebel Ali (AEJEA)"),
        ],
    },
    CountryPorts {
        code: "AU",
        label: "Australia",
        ports: &[port("melbourne", "Melbourne (AUMEL)"), port("sydney", "Sydney (AUSYD)")],
    },
    CountryPorts {
        code: "BE",
        label: "Belgium",
        ports: &[port("antwerp", "Antwerp (BEANR)"), port("zeebrugge", "Zeebrugge (BEZEE)")],
    },
    CountryPorts {
        code: "BR",
        label: "Brazil",
        ports: &[
            port("santos", "Santos (BRSSZ)"),
            port("rio-de-janeiro", "Rio de Janeiro (BRRIO)"),
        ],
    },
    CountryPorts {
        code: "CN",
        label: "China",
        ports: &[
            port("shanghai", "Shanghai (CNSHA)"),
            port("tianjin", "Tianjin (CNTJG)"),
            port("ningbo", "Ningbo (CNNGB)"),
        ],
    },
    CountryPorts {
        code: "DE",
        label: "Germany",
        ports: &[
            port("hamburg", "Hamburg (DEHAM)"),
            port("bremerhaven", "Bremerhaven (DEBRV)"),
        ],
    },
    CountryPorts {
        code: "ES",
        label: "Spain",
        ports: &[port("valencia", "Valencia (ESVLC)"), port("barcelona", "Barcelona (ESBCN)")],
    },
    CountryPorts {
        code: "IN",
        label: "India",
        ports: &[
            port("mumbai", "Mumbai (INBOM)"),
            port("chennai", "Chennai (INMAA)"),
            port("vizag", "Visakhapatnam (INVTZ)"),
            port("kolkata", "Kolkata (INCCU)"),
        ],
    },
    CountryPorts {
        code: "LK",
        label: "Sri Lanka",
        ports: &[port("colombo", "Colombo (LKCMB)")],
    },
    CountryPorts {
        code: "MY",
        label: "Malaysia",
        ports: &[
            port("tanjung-pelepas", "Tanjung Pelepas (MYTPP)"),
            port("port-klang", "Port Klang (MYPKG)"),
        ],
    },
    CountryPorts {
        code: "NL",
        label: "Netherlands",
        ports: &[
            port("rotterdam", "Rotterdam (NLRTM)"),
            port("amsterdam", "Amsterdam (NLAMS)"),
        ],
    },
    CountryPorts {
        code: "OM",
        label: "Oman",
        ports: &[port("salalah", "Salalah (OMSLL)")],
    },
    CountryPorts {
        code: "SG",
        label: "Singapore",
        ports: &[port("singapore", "Singapore (SGSIN)")],
    },
    CountryPorts {
        code: "US",
        label: "United States",
        ports: &[
            port("los-angeles", "Los Angeles (USLAX)"),
            port("long-beach", "Long Beach (USLGB)"),
            port("new-york", "New York / NJ (USNYC)"),
            port("miami", "Miami (USMIA)"),
            port("chicago", "Chicago (USCHI)"),
        ],
    },
    CountryPorts {
        code: "ZA",
        label: "South Africa",
        ports: &[port("durban", "Durban (ZADUR)"), port("cape-town", "Cape Town (ZACPT)")],
    },
];

/// Ports for an ISO alpha-2 country code; empty for countries we have no
/// directory entry for.
pub fn ports_for(country_code: &str) -> &'static [Port] {
    PORT_DIRECTORY
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(country_code.trim()))
        .map(|entry| entry.ports)
        .unwrap_or(&[])
}

/// Label for a known port slug, searched across the whole directory.
pub fn port_label(slug: &str) -> Option<&'static str> {
    PORT_DIRECTORY
        .iter()
        .flat_map(|entry| entry.ports.iter())
        .find(|port| port.slug == slug)
        .map(|port| port.label)
}

/// `(code, label)` pairs used when the country service is unreachable.
/// Sorted by label.
pub fn fallback_countries() -> Vec<(&'static str, &'static str)> {
    let mut countries: Vec<_> = PORT_DIRECTORY
        .iter()
        .map(|entry| (entry.code, entry.label))
        .collect();
    countries.sort_by(|a, b| a.1.cmp(b.1));
    countries
}

/// Lowercase, collapse every run of characters outside `[a-z0-9]` into a
/// single `-`, and strip leading/trailing dashes.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Resolve what the user picked for one end of the lane.
///
/// A directory pick wins over manual text. The manual text only counts when
/// the select is empty or set to [`MANUAL_PORT`].
pub fn resolve_port_selection(selected: &str, manual: &str) -> PortSelection {
    let selected = selected.trim();
    if !selected.is_empty() && selected != MANUAL_PORT {
        let label = port_label(selected).unwrap_or(selected);
        return PortSelection::new(selected, label);
    }

    let manual = manual.trim();
    if !manual.is_empty() {
        return PortSelection::new(slugify(manual), manual);
    }

    PortSelection::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports_for_known_and_unknown_countries() {
        let slugs: Vec<_> = ports_for("nl").iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["rotterdam", "amsterdam"]);
        assert!(ports_for("FR").is_empty());
        assert!(ports_for("").is_empty());
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("  Port of Spain!! "), "port-of-spain");
        assert_eq!(slugify("Kaohsiung / TW--KHH"), "kaohsiung-tw-khh");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("Hamburg"), "hamburg");
    }

    #[test]
    fn directory_selection_wins_over_manual_text() {
        let port = resolve_port_selection("singapore", "ignored");
        assert_eq!(port, PortSelection::new("singapore", "Singapore (SGSIN)"));
    }

    #[test]
    fn manual_entry_is_slugged() {
        let port = resolve_port_selection(MANUAL_PORT, "  Port Louis ");
        assert_eq!(port, PortSelection::new("port-louis", "Port Louis"));
    }

    #[test]
    fn nothing_selected_is_empty() {
        assert!(resolve_port_selection("", "   ").is_empty());
        assert!(resolve_port_selection(MANUAL_PORT, "").is_empty());
    }

    #[test]
    fn fallback_countries_are_sorted_by_label() {
        let countries = fallback_countries();
        assert_eq!(countries.len(), PORT_DIRECTORY.len());
        assert!(countries.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(countries[0], ("AU", "Australia"));
    }
}
