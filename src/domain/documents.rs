//! Trade-document requirements per country, filtered by shipping mode.

use thiserror::Error;

use super::shipment::slug_from_str;

/// Mode axis of the document matrix. Import and export workflows sit next
/// to the freight modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentMode {
    Sea,
    Air,
    Imports,
    Exports,
}

impl DocumentMode {
    pub const ALL: [DocumentMode; 4] = [
        DocumentMode::Sea,
        DocumentMode::Air,
        DocumentMode::Imports,
        DocumentMode::Exports,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DocumentMode::Sea => "sea",
            DocumentMode::Air => "air",
            DocumentMode::Imports => "imports",
            DocumentMode::Exports => "exports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentMode::Sea => "Sea Freight",
            DocumentMode::Air => "Air Freight",
            DocumentMode::Imports => "Imports",
            DocumentMode::Exports => "Exports",
        }
    }
}

slug_from_str!(DocumentMode);

/// Select value for "no mode filter".
pub const ALL_MODES: &str = "all";

/// `None` means every mode.
pub fn mode_filter_label(mode: Option<DocumentMode>) -> &'static str {
    mode.map_or("All Modes", |mode| mode.label())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentRequirement {
    pub document: &'static str,
    pub typical_use: &'static str,
    pub issuer: &'static str,
    pub link_label: &'static str,
    pub link_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryDocuments {
    pub id: &'static str,
    pub name: &'static str,
    pub corridor: &'static str,
    pub modes: &'static [DocumentMode],
    pub quick_checklist: &'static [&'static str],
    pub requirements: &'static [DocumentRequirement],
}

impl CountryDocuments {
    pub fn covers(&self, mode: Option<DocumentMode>) -> bool {
        mode.map_or(true, |mode| self.modes.contains(&mode))
    }
}

/// Why a lookup produced no documents.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DocumentLookupError {
    #[error(
        "We couldn't find requirements for the selected country yet. Please choose another option."
    )]
    UnknownCountry,
    #[error("We haven't mapped {mode} requirements for {country} yet. Try another mode.")]
    ModeNotMapped {
        country: &'static str,
        mode: &'static str,
    },
}

/// Why the quick checklist cannot be shown.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("Select a country to see the quick checklist.")]
    NoCountry,
    #[error("We have not mapped {mode} workflows for {country}. Try another mode.")]
    ModeNotMapped {
        country: &'static str,
        mode: &'static str,
    },
    #[error("Checklist will be available soon.")]
    Unavailable,
}

/// Requirements table for one country under a mode filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequirementsTable {
    pub country: &'static CountryDocuments,
    pub mode_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickChecklist {
    pub title: String,
    pub items: &'static [&'static str],
}

pub const CHECKLIST_SOURCE_NOTE: &str =
    "Source: Official customs, trade and partner agency portals linked above.";

pub fn document_country(id: &str) -> Option<&'static CountryDocuments> {
    DOCUMENT_MATRIX.iter().find(|country| country.id == id)
}

/// First country of the matrix, used as the initial selection.
pub fn default_document_country() -> Option<&'static CountryDocuments> {
    DOCUMENT_MATRIX.first()
}

/// Parse a mode select value. Empty, `all` and unknown values mean no filter.
pub fn parse_mode_filter(raw: &str) -> Option<DocumentMode> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(ALL_MODES) {
        return None;
    }
    raw.parse().ok()
}

pub fn requirements_for(
    country_id: &str,
    mode: Option<DocumentMode>,
) -> Result<RequirementsTable, DocumentLookupError> {
    let country = document_country(country_id).ok_or(DocumentLookupError::UnknownCountry)?;
    if !country.covers(mode) {
        return Err(DocumentLookupError::ModeNotMapped {
            country: country.name,
            mode: mode_filter_label(mode),
        });
    }
    Ok(RequirementsTable {
        country,
        mode_label: mode_filter_label(mode),
    })
}

pub fn quick_checklist(
    country_id: &str,
    mode: Option<DocumentMode>,
) -> Result<QuickChecklist, ChecklistError> {
    let country = document_country(country_id).ok_or(ChecklistError::NoCountry)?;
    if !country.covers(mode) {
        return Err(ChecklistError::ModeNotMapped {
            country: country.name,
            mode: mode_filter_label(mode),
        });
    }
    if country.quick_checklist.is_empty() {
        return Err(ChecklistError::Unavailable);
    }
    Ok(QuickChecklist {
        title: format!("Checklist for {} ({})", country.name, mode_filter_label(mode)),
        items: country.quick_checklist,
    })
}

pub static DOCUMENT_MATRIX: &[CountryDocuments] = &[
    CountryDocuments {
        id: "india",
        name: "India",
        corridor: "Nhava Sheva (JNPT), Mundra, Chennai",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Exports],
        quick_checklist: &[
            "Commercial Invoice with HS and GST compliance – see ICEGATE valuation guidance.",
            "Packing List carton-wise for customs inspection.",
            "Shipping Bill submitted electronically via ICEGATE before port entry.",
            "Carrier issued Bill of Lading or Air Waybill for proof of shipment.",
            "Certificate of Origin from DGFT/chamber for FTA benefits (e-COO portal).",
            "Export Declaration (GR/SDF equivalents) filed with Authorized Dealer bank per RBI rules.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice",
                typical_use: "Customs valuation, buyer payment documentation",
                issuer: "Exporter / Company",
                link_label: "ICEGATE Guidelines",
                link_url: "https://icegate.gov.in",
            },
            DocumentRequirement {
                document: "Packing List",
                typical_use: "Physical examination & load planning",
                issuer: "Exporter / Company",
                link_label: "CBIC Export Procedures",
                link_url: "https://www.cbic.gov.in",
            },
            DocumentRequirement {
                document: "Shipping Bill",
                typical_use: "Primary export declaration at port",
                issuer: "Indian Customs via broker/exporter",
                link_label: "ICEGATE – Shipping Bill",
                link_url: "https://icegate.gov.in",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Title transfer & shipment proof",
                issuer: "Shipping line / Freight forwarder / Airline",
                link_label: "Directorate General of Shipping",
                link_url: "https://www.dgshipping.gov.in",
            },
            DocumentRequirement {
                document: "Certificate of Origin",
                typical_use: "Claim preferential duty at destination",
                issuer: "DGFT / Chamber of Commerce",
                link_label: "DGFT e-COO Portal",
                link_url: "https://coo.dgft.gov.in",
            },
            DocumentRequirement {
                document: "Export Declaration (GR/SDF)",
                typical_use: "Foreign exchange compliance with RBI",
                issuer: "Authorized Dealer Bank & Exporter",
                link_label: "RBI Export FAQs",
                link_url: "https://rbi.org.in",
            },
        ],
    },
    CountryDocuments {
        id: "united-states",
        name: "United States",
        corridor: "Ports: New York/New Jersey, Los Angeles, Savannah",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice with value, terms, HS code (CBP).",
            "Packing List for CBP inspection and terminal handling.",
            "Carrier Bill of Lading or Air Waybill for arrival notice.",
            "ISF 10+2 security filing for ocean shipments before loading.",
            "CBP Entry (3461/7501) filed via customs broker in ACE.",
            "Partner agency filings (FDA/USDA) when applicable.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice",
                typical_use: "CBP customs entry & duty assessment",
                issuer: "Exporter / Foreign Supplier",
                link_label: "US CBP",
                link_url: "https://www.cbp.gov",
            },
            DocumentRequirement {
                document: "Packing List",
                typical_use: "CBP inspection & deconsolidation",
                issuer: "Exporter / Foreign Supplier",
                link_label: "CBP Trade",
                link_url: "https://www.cbp.gov/trade",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Arrival notice & cargo release",
                issuer: "Carrier / NVOCC / Airline",
                link_label: "Federal Maritime Commission",
                link_url: "https://www.fmc.gov",
            },
            DocumentRequirement {
                document: "ISF 10+2",
                typical_use: "Security filing for ocean cargo",
                issuer: "US Importer / Customs Broker",
                link_label: "CBP ISF 10+2",
                link_url: "https://www.cbp.gov/border-security/ports-entry/cargo-security/importer-security-filing-102",
            },
            DocumentRequirement {
                document: "Customs Entry (CBP 3461/7501)",
                typical_use: "Formal import clearance",
                issuer: "US Customs Broker / Importer",
                link_label: "CBP Basic Importing",
                link_url: "https://www.cbp.gov/trade/basic-import-export",
            },
            DocumentRequirement {
                document: "FDA / USDA / Partner Agency Docs",
                typical_use: "Regulatory clearance for controlled goods",
                issuer: "US FDA / USDA / Relevant agency",
                link_label: "US FDA Import Basics",
                link_url: "https://www.fda.gov/industry/import-basics",
            },
        ],
    },
    CountryDocuments {
        id: "european-union",
        name: "European Union",
        corridor: "Ports: Rotterdam, Hamburg, Antwerp",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List for customs declaration/VAT.",
            "Carrier Bill of Lading or Air Waybill for delivery order.",
            "ENS / ICS2 security filing before arrival.",
            "EU SAD customs declaration lodged via broker.",
            "EUR.1 / REX / Certificate of origin for preferential duty.",
            "Product specific certificates (health, phytosanitary, CE).",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "Customs declaration base, VAT & duty calc",
                issuer: "Exporter",
                link_label: "EU Taxation & Customs",
                link_url: "https://taxation-customs.ec.europa.eu",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Proof of shipment, release at port",
                issuer: "Carrier / Freight Forwarder",
                link_label: "Port of Rotterdam",
                link_url: "https://www.portofrotterdam.com",
            },
            DocumentRequirement {
                document: "ENS (ICS2)",
                typical_use: "Pre-arrival safety/security filing",
                issuer: "Carrier / Representative",
                link_label: "ICS2 Security Filing",
                link_url: "https://taxation-customs.ec.europa.eu/customs-4/customs-security/import-control-system-2-ics2_en",
            },
            DocumentRequirement {
                document: "EU Customs Declaration (SAD)",
                typical_use: "Release into free circulation or regimes",
                issuer: "Customs Broker / Importer",
                link_label: "EU Customs Procedures",
                link_url: "https://taxation-customs.ec.europa.eu/customs-4/customs-procedures_en",
            },
            DocumentRequirement {
                document: "Certificates (EUR.1 / REX / Origin)",
                typical_use: "Preferential duty & FTA claims",
                issuer: "Exporter / Competent authority",
                link_label: "EU Preferential Origin",
                link_url: "https://taxation-customs.ec.europa.eu/customs-4/preferential-origins_en",
            },
            DocumentRequirement {
                document: "Product-Specific Certificates",
                typical_use: "Health/phytosanitary/CE compliance",
                issuer: "Competent Authorities / Labs",
                link_label: "EU Sanitary Rules",
                link_url: "https://ec.europa.eu/info/food-farming-fisheries/farming/international-cooperation/trade_en",
            },
        ],
    },
    CountryDocuments {
        id: "united-kingdom",
        name: "United Kingdom",
        corridor: "Ports: Felixstowe, Southampton, London Gateway",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List per HMRC guidance.",
            "Bill of Lading/AWB for UK Border Force release.",
            "CDS customs declaration via broker/trader.",
            "UK Certificate of Origin / EUR.1 from chamber when required.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "UK customs declaration data",
                issuer: "Exporter",
                link_label: "HMRC Customs Declaration Guidance",
                link_url: "https://www.gov.uk/guidance/filling-in-your-customs-declaration",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Evidence of carriage & release",
                issuer: "Carrier / Freight Forwarder",
                link_label: "UK Border Force",
                link_url: "https://www.gov.uk/government/organisations/border-force",
            },
            DocumentRequirement {
                document: "CDS Customs Declaration",
                typical_use: "Entry into HMRC CDS system",
                issuer: "Customs broker / Importer",
                link_label: "Get access to CDS",
                link_url: "https://www.gov.uk/guidance/get-access-to-the-customs-declaration-service",
            },
            DocumentRequirement {
                document: "Certificate of Origin / EUR.1",
                typical_use: "Preferential duty or buyer requirement",
                issuer: "British Chambers of Commerce",
                link_label: "British Chambers Export Docs",
                link_url: "https://www.britishchambers.org.uk/page/export-documentation",
            },
        ],
    },
    CountryDocuments {
        id: "canada",
        name: "Canada",
        corridor: "Ports: Vancouver, Prince Rupert, Montreal",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice or Canada Customs Invoice (CBSA).",
            "Packing List for CBSA / CFIA inspection.",
            "Carrier Bill of Lading or Air Waybill.",
            "Customs Declaration (B3) filed via broker/importer in CARM.",
            "CUSMA/phytosanitary certificates when commodity requires.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice / Canada Customs Invoice",
                typical_use: "Import valuation & CBSA assessment",
                issuer: "Exporter / Importer",
                link_label: "CBSA Importing",
                link_url: "https://www.cbsa-asfc.gc.ca/import/menu-eng.html",
            },
            DocumentRequirement {
                document: "Packing List",
                typical_use: "Inspection & de-stuffing",
                issuer: "Exporter",
                link_label: "CBSA Programs",
                link_url: "https://www.cbsa-asfc.gc.ca/prog/ccp-pcc/menu-eng.html",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest & release",
                issuer: "Carrier",
                link_label: "Port of Vancouver",
                link_url: "https://www.portvancouver.com",
            },
            DocumentRequirement {
                document: "Customs Declaration (B3)",
                typical_use: "Entry into Canada (CARM/CCS)",
                issuer: "Customs broker / Importer",
                link_label: "CBSA CARM",
                link_url: "https://www.cbsa-asfc.gc.ca/prog/carm-gcra/menu-eng.html",
            },
            DocumentRequirement {
                document: "Certificates (CUSMA, Phyto, CFIA)",
                typical_use: "Reduced duty or sanitary clearance",
                issuer: "Authorized bodies / CFIA",
                link_label: "CFIA Import Guidance",
                link_url: "https://inspection.canada.ca",
            },
        ],
    },
    CountryDocuments {
        id: "australia",
        name: "Australia",
        corridor: "Ports: Sydney, Melbourne, Brisbane",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List (Australian Border Force).",
            "Bill of Lading or Air Waybill for ICS filing.",
            "Import Declaration (N10/N20) via Integrated Cargo System.",
            "Biosecurity treatment or phytosanitary certificates (DAFF).",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "ABF import declaration",
                issuer: "Exporter",
                link_label: "Australian Border Force",
                link_url: "https://www.abf.gov.au/importing-exporting-and-manufacturing/importing",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest submission & delivery order",
                issuer: "Carrier",
                link_label: "Integrated Cargo System",
                link_url: "https://www.abf.gov.au/help-and-support/ics",
            },
            DocumentRequirement {
                document: "Import Declaration (ICS)",
                typical_use: "Formal entry (N10/N20)",
                issuer: "Customs broker / Importer",
                link_label: "ICS Lodgement",
                link_url: "https://www.abf.gov.au/help-and-support/ics",
            },
            DocumentRequirement {
                document: "Biosecurity Certificates",
                typical_use: "DAFF clearance (phytosanitary/treatment)",
                issuer: "Department of Agriculture / Competent labs",
                link_label: "DAFF Biosecurity",
                link_url: "https://www.agriculture.gov.au/biosecurity-trade/import",
            },
        ],
    },
    CountryDocuments {
        id: "china",
        name: "China",
        corridor: "Ports: Shanghai, Ningbo, Shenzhen",
        modes: &[
            DocumentMode::Sea,
            DocumentMode::Air,
            DocumentMode::Imports,
            DocumentMode::Exports,
        ],
        quick_checklist: &[
            "Commercial Invoice & Packing List aligned with GACC requirements.",
            "Bill of Lading / Air Waybill for manifest & release.",
            "CIQ / GACC declarations for regulated goods.",
            "Import/Export licenses, CCC or product registrations when required.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "GACC customs clearance",
                issuer: "Exporter",
                link_label: "China Customs",
                link_url: "https://english.customs.gov.cn",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest submission & delivery order",
                issuer: "Carrier",
                link_label: "Port of Shanghai",
                link_url: "https://www.portshanghai.com.cn/en",
            },
            DocumentRequirement {
                document: "CIQ / GACC Declaration",
                typical_use: "Inspection & quarantine compliance",
                issuer: "GACC / CIQ",
                link_label: "GACC",
                link_url: "https://www.gacc.gov.cn",
            },
            DocumentRequirement {
                document: "Import/Export License & CCC certificate",
                typical_use: "Market access for regulated goods",
                issuer: "MOFCOM / SAMR",
                link_label: "MOFCOM Trade",
                link_url: "http://english.mofcom.gov.cn",
            },
        ],
    },
    CountryDocuments {
        id: "japan",
        name: "Japan",
        corridor: "Ports: Tokyo, Yokohama, Osaka",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List per Japan Customs.",
            "Bill of Lading / Air Waybill for NACCS submission.",
            "Import Declaration via NACCS (broker).",
            "Certificates (fumigation, agriculture, PSE) per commodity.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "Japan Customs entry data",
                issuer: "Exporter",
                link_label: "Japan Customs",
                link_url: "https://www.customs.go.jp/english/index.htm",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Transport evidence & NACCS filing",
                issuer: "Carrier",
                link_label: "NACCS",
                link_url: "https://www.naccs.jp/english/",
            },
            DocumentRequirement {
                document: "Import Declaration",
                typical_use: "Release into Japan via NACCS",
                issuer: "Customs broker / Importer",
                link_label: "NACCS User Guide",
                link_url: "https://www.naccs.jp/english/service/",
            },
            DocumentRequirement {
                document: "Certificates (PSE, Phyto, MAFF)",
                typical_use: "Commodity-specific compliance",
                issuer: "MAFF / METI / Labs",
                link_label: "MAFF Trade",
                link_url: "https://www.maff.go.jp/e/index.html",
            },
        ],
    },
    CountryDocuments {
        id: "singapore",
        name: "Singapore",
        corridor: "Port of Singapore & Changi Airfreight Centre",
        modes: &[
            DocumentMode::Sea,
            DocumentMode::Air,
            DocumentMode::Imports,
            DocumentMode::Exports,
        ],
        quick_checklist: &[
            "Commercial Invoice & Packing List for Singapore Customs.",
            "Bill of Lading / Air Waybill for manifest submission in TradeNet.",
            "Permit applications lodged via TradeNet.",
            "Agency certificates (SFA, IMDA) for restricted goods.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "Baseline customs data",
                issuer: "Exporter",
                link_label: "Singapore Customs",
                link_url: "https://www.customs.gov.sg",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest & delivery order",
                issuer: "Carrier",
                link_label: "MPA Singapore",
                link_url: "https://www.mpa.gov.sg",
            },
            DocumentRequirement {
                document: "TradeNet Permit",
                typical_use: "Import/export permit clearance",
                issuer: "Trader / Declaring agent",
                link_label: "TradeNet",
                link_url: "https://www.customs.gov.sg/businesses/permit-declaration",
            },
            DocumentRequirement {
                document: "Agency Certificates",
                typical_use: "Regulated commodities clearance (SFA, IMDA)",
                issuer: "Competent agencies",
                link_label: "Singapore Food Agency",
                link_url: "https://www.sfa.gov.sg",
            },
        ],
    },
    CountryDocuments {
        id: "united-arab-emirates",
        name: "United Arab Emirates",
        corridor: "Ports: Jebel Ali, Khalifa Port, Dubai Airport",
        modes: &[
            DocumentMode::Sea,
            DocumentMode::Air,
            DocumentMode::Imports,
            DocumentMode::Exports,
        ],
        quick_checklist: &[
            "Commercial Invoice & Packing List attested as per UAE customs.",
            "Bill of Lading / Air Waybill for manifest submission.",
            "Import/Export declarations lodged via single window (Dubai Trade).",
            "Certificate of Origin via local chamber portals.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "Customs valuation & inspection",
                issuer: "Exporter",
                link_label: "Dubai Customs",
                link_url: "https://www.dubaicustoms.gov.ae",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest filing & delivery order",
                issuer: "Carrier",
                link_label: "Dubai Trade",
                link_url: "https://www.dubaitrade.ae",
            },
            DocumentRequirement {
                document: "Import/Export Declaration",
                typical_use: "Single window clearance",
                issuer: "Trader / Broker",
                link_label: "Dubai Trade Portal",
                link_url: "https://www.dubaitrade.ae",
            },
            DocumentRequirement {
                document: "Certificate of Origin",
                typical_use: "Destination compliance / duty preference",
                issuer: "Dubai Chamber / Local chambers",
                link_label: "Dubai Chamber",
                link_url: "https://www.dubaichamber.com",
            },
        ],
    },
    CountryDocuments {
        id: "saudi-arabia",
        name: "Saudi Arabia",
        corridor: "Ports: Jeddah Islamic Port, Dammam, Riyadh Air Cargo",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List registered on FASAH.",
            "Bill of Lading / Air Waybill uploaded through single window.",
            "SABER/SASO certificates for regulated products.",
            "Customs declaration filed via ZATCA.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "FASAH registration & customs valuation",
                issuer: "Exporter",
                link_label: "FASAH",
                link_url: "https://www.fasah.sa/",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest submission",
                issuer: "Carrier",
                link_label: "Saudi Ports Authority (MAWANI)",
                link_url: "https://www.mawani.gov.sa",
            },
            DocumentRequirement {
                document: "SASO / SABER Certificates",
                typical_use: "Product conformity",
                issuer: "SASO certified bodies",
                link_label: "SABER Platform",
                link_url: "https://saber.sa",
            },
            DocumentRequirement {
                document: "Customs Declaration",
                typical_use: "ZATCA clearance & duty payment",
                issuer: "Customs broker / Importer",
                link_label: "ZATCA Customs",
                link_url: "https://www.zatca.gov.sa/en/RulesRegulations/Taxes/Pages/Customs.aspx",
            },
        ],
    },
    CountryDocuments {
        id: "brazil",
        name: "Brazil",
        corridor: "Ports: Santos, Paranaguá, Rio de Janeiro",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List (Portuguese translation when requested).",
            "Bill of Lading / Air Waybill recorded in Siscomex.",
            "Import Declaration (DI/DUIMP) via Siscomex.",
            "ANVISA/MAPA certificates for regulated goods.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "Receita Federal customs entry",
                issuer: "Exporter",
                link_label: "Receita Federal",
                link_url: "https://www.gov.br/receitafederal/pt-br",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest record in Siscomex",
                issuer: "Carrier",
                link_label: "Port of Santos",
                link_url: "https://www.portodesantos.com.br",
            },
            DocumentRequirement {
                document: "Import Declaration (DI/DUIMP)",
                typical_use: "Formal customs clearance",
                issuer: "Customs broker / Importer",
                link_label: "Siscomex",
                link_url: "https://www.gov.br/receitafederal/pt-br/assuntos/siscomex",
            },
            DocumentRequirement {
                document: "ANVISA / MAPA Certificates",
                typical_use: "Health & agriculture compliance",
                issuer: "Competent agencies",
                link_label: "ANVISA",
                link_url: "https://www.gov.br/anvisa/pt-br",
            },
        ],
    },
    CountryDocuments {
        id: "mexico",
        name: "Mexico",
        corridor: "Ports: Manzanillo, Veracruz, Lazaro Cardenas",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List per SAT guidance.",
            "Bill of Lading / Air Waybill for pedimento filing.",
            "Pedimento customs entry via VUCEM.",
            "NOM/COFEPRIS/SENASICA certificates when applicable.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "SAT customs entry data",
                issuer: "Exporter",
                link_label: "SAT",
                link_url: "https://www.sat.gob.mx",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Pedimento reference & manifest",
                issuer: "Carrier",
                link_label: "Mexican Customs",
                link_url: "https://www.aduanas.gob.mx",
            },
            DocumentRequirement {
                document: "Pedimento (Customs Entry)",
                typical_use: "Formal clearance via broker",
                issuer: "Customs broker / Importer",
                link_label: "VUCEM",
                link_url: "https://www.ventanillaunica.gob.mx",
            },
            DocumentRequirement {
                document: "NOM / COFEPRIS / SENASICA Certificates",
                typical_use: "Product conformity & sanitary approvals",
                issuer: "Relevant agency",
                link_label: "COFEPRIS",
                link_url: "https://www.gob.mx/cofepris",
            },
        ],
    },
    CountryDocuments {
        id: "south-africa",
        name: "South Africa",
        corridor: "Ports: Durban, Cape Town, Port Elizabeth",
        modes: &[DocumentMode::Sea, DocumentMode::Air, DocumentMode::Imports],
        quick_checklist: &[
            "Commercial Invoice & Packing List aligned with SARS.",
            "Bill of Lading / Air Waybill for manifest & release.",
            "Customs Clearance (DA500/SAD 500) via broker.",
            "Permits/certificates (DAFF, NRCS) for regulated goods.",
        ],
        requirements: &[
            DocumentRequirement {
                document: "Commercial Invoice & Packing List",
                typical_use: "SARS customs valuation",
                issuer: "Exporter",
                link_label: "SARS Customs & Excise",
                link_url: "https://www.sars.gov.za/customs-and-excise",
            },
            DocumentRequirement {
                document: "Bill of Lading / Air Waybill",
                typical_use: "Manifest, release & delivery order",
                issuer: "Carrier",
                link_label: "Transnet National Ports Authority",
                link_url: "https://www.transnetnationalportsauthority.net",
            },
            DocumentRequirement {
                document: "Customs Clearance (SAD 500)",
                typical_use: "Entry into South Africa",
                issuer: "Customs broker / Importer",
                link_label: "SARS Clearance",
                link_url: "https://www.sars.gov.za/customs-and-excise/importing-exporting",
            },
            DocumentRequirement {
                document: "Permits / Certificates (DAFF, NRCS)",
                typical_use: "Commodity-specific compliance",
                issuer: "DAFF / NRCS",
                link_label: "Department of Agriculture",
                link_url: "https://www.dalrrd.gov.za",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_ids_are_unique_and_complete() {
        let mut ids: Vec<_> = DOCUMENT_MATRIX.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 14);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DOCUMENT_MATRIX.len());

        for country in DOCUMENT_MATRIX {
            assert!(!country.modes.is_empty(), "{} has no modes", country.id);
            assert!(!country.requirements.is_empty(), "{} has no documents", country.id);
            for req in country.requirements {
                assert!(req.link_url.starts_with("https://"), "{}", req.link_url);
            }
        }
    }

    #[test]
    fn first_country_is_the_default_selection() {
        assert_eq!(default_document_country().map(|c| c.id), Some("india"));
    }

    #[test]
    fn mode_filter_parsing() {
        assert_eq!(parse_mode_filter("all"), None);
        assert_eq!(parse_mode_filter(""), None);
        assert_eq!(parse_mode_filter("Exports"), Some(DocumentMode::Exports));
        assert_eq!(parse_mode_filter("rail"), None);
        assert_eq!(mode_filter_label(None), "All Modes");
        assert_eq!(mode_filter_label(Some(DocumentMode::Sea)), "Sea Freight");
    }

    #[test]
    fn all_modes_shows_full_table() {
        let table = requirements_for("united-states", None).unwrap();
        assert_eq!(table.country.name, "United States");
        assert_eq!(table.mode_label, "All Modes");
        assert_eq!(table.country.requirements.len(), 6);
        assert_eq!(table.country.requirements[3].document, "ISF 10+2");
    }

    #[test]
    fn unmapped_mode_has_empty_state_message() {
        let err = requirements_for("india", Some(DocumentMode::Imports)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "We haven't mapped Imports requirements for India yet. Try another mode."
        );

        let err = quick_checklist("united-kingdom", Some(DocumentMode::Exports)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "We have not mapped Exports workflows for United Kingdom. Try another mode."
        );
    }

    #[test]
    fn unknown_country_messages() {
        assert_eq!(
            requirements_for("atlantis", None),
            Err(DocumentLookupError::UnknownCountry)
        );
        assert_eq!(quick_checklist("", None), Err(ChecklistError::NoCountry));
        assert_eq!(
            ChecklistError::NoCountry.to_string(),
            "Select a country to see the quick checklist."
        );
    }

    #[test]
    fn checklist_for_mapped_mode() {
        let checklist = quick_checklist("singapore", Some(DocumentMode::Exports)).unwrap();
        assert_eq!(checklist.title, "Checklist for Singapore (Exports)");
        assert_eq!(checklist.items.len(), 4);

        let all = quick_checklist("india", None).unwrap();
        assert_eq!(all.title, "Checklist for India (All Modes)");
        assert!(all.items[2].starts_with("Shipping Bill"));
    }
}
