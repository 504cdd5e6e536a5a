// src/domain/announcement.rs

use chrono::NaiveDate;

/// Composite key of a notice: (house management number, notice number).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnouncementId {
    pub house_manage_no: String,
    pub pblanc_no: String,
}

impl AnnouncementId {
    pub fn new(house_manage_no: impl Into<String>, pblanc_no: impl Into<String>) -> Self {
        Self {
            house_manage_no: house_manage_no.into(),
            pblanc_no: pblanc_no.into(),
        }
    }

    /// Relative link to the detail page of this notice.
    pub fn detail_path(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("house", &self.house_manage_no)
            .append_pair("notice", &self.pblanc_no)
            .finish();
        format!("/announcement?{query}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// One housing-subscription notice, normalized from the API response.
///
/// Text fields are empty strings when the API left them out; dates are
/// `None` when absent or unparseable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub name: String,
    pub recruitment_date: Option<NaiveDate>,
    pub announcement_date: Option<NaiveDate>,
    pub region_name: String,

    pub house_type_code: String,
    pub house_type_name: String,
    pub house_detail_type_name: String,

    pub supply_address: String,
    pub total_households: u32,
    pub business_entity: String,
    pub builder: String,

    pub contact_org_name: String,
    pub phone_number: String,
    pub info_url: String,
    pub homepage_url: String,

    pub contract_period: ContractPeriod,
    pub move_in_month: String,
}

impl Announcement {
    /// Minimal record for fixtures.
    #[cfg(test)]
    pub fn new(
        id: AnnouncementId,
        name: impl Into<String>,
        recruitment_date: Option<NaiveDate>,
        announcement_date: Option<NaiveDate>,
        region_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            recruitment_date,
            announcement_date,
            region_name: region_name.into(),
            house_type_code: String::new(),
            house_type_name: String::new(),
            house_detail_type_name: String::new(),
            supply_address: String::new(),
            total_households: 0,
            business_entity: String::new(),
            builder: String::new(),
            contact_org_name: String::new(),
            phone_number: String::new(),
            info_url: String::new(),
            homepage_url: String::new(),
            contract_period: ContractPeriod::default(),
            move_in_month: String::new(),
        }
    }
}

/// Parse an API date. The service mixes `YYYY-MM-DD` and `YYYYMMDD`.
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y.%m.%d"))
        .ok()
}

/// Format a date the way request parameters and forms expect it.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
