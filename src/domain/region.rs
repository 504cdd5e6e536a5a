// src/domain/region.rs

/// Label the UI and the query string use for "no region filter".
pub const ALL_REGIONS: &str = "전체";

/// Supply-area labels as the API spells them in `SUBSCRPT_AREA_CODE_NM`,
/// paired with their area code.
pub const REGIONS: &[(&str, &str)] = &[
    ("서울", "100"),
    ("강원", "200"),
    ("대전", "300"),
    ("충남", "312"),
    ("세종", "338"),
    ("충북", "360"),
    ("인천", "400"),
    ("경기", "410"),
    ("광주", "500"),
    ("전남", "513"),
    ("전북", "560"),
    ("부산", "600"),
    ("경남", "621"),
    ("울산", "680"),
    ("제주", "690"),
    ("대구", "700"),
    ("경북", "712"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    /// Interpret raw user input. Blank input and the ALL sentinel mean no
    /// filter; anything else must be one of the known labels.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_REGIONS {
            return Ok(RegionFilter::All);
        }

        if is_known_region(raw) {
            Ok(RegionFilter::Only(raw.to_string()))
        } else {
            Err(format!("unknown region: {raw}"))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RegionFilter::All => ALL_REGIONS,
            RegionFilter::Only(name) => name,
        }
    }

    /// Value for the upstream `cond[SUBSCRPT_AREA_CODE_NM::EQ]` parameter.
    pub fn as_condition(&self) -> Option<&str> {
        match self {
            RegionFilter::All => None,
            RegionFilter::Only(name) => {
                let name = name.trim();
                if name.is_empty() || name == ALL_REGIONS {
                    None
                } else {
                    Some(name)
                }
            }
        }
    }

    pub fn matches(&self, region_name: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(name) => name == region_name,
        }
    }
}

pub fn is_known_region(label: &str) -> bool {
    REGIONS.iter().any(|(name, _)| *name == label)
}

pub fn area_code(label: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, code)| *code)
}
