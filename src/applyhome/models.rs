use crate::domain::announcement::parse_api_date;
use crate::domain::{Announcement, AnnouncementId, ContractPeriod};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// response
//  ├── page / perPage / totalCount / currentCount   (ignored)
//  ├── matchCount            (authoritative for paging)
//  └── data[]
//       ├── HOUSE_MANAGE_NO, PBLANC_NO
//       ├── HOUSE_NM
//       ├── RCRIT_PBLANC_DE, PRZWNER_PRESNATN_DE
//       ├── SUBSCRPT_AREA_CODE_NM
//       └── ...display fields

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default, rename = "matchCount", deserialize_with = "lenient_count")]
    pub match_count: u64,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub data: Vec<RawAnnouncement>,
}

/// One row as the service sends it. Every field is optional upstream and
/// some arrive as numbers on one day and strings on the next.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RawAnnouncement {
    #[serde(default, deserialize_with = "lenient_string")]
    pub house_manage_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pblanc_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub house_nm: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rcrit_pblanc_de: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub przwner_presnatn_de: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subscrpt_area_code_nm: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub house_secd: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub house_secd_nm: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub house_dtl_secd_nm: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub hssply_adres: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub tot_suply_hshldco: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bsns_mby_nm: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cnstrct_entrps_nm: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub mdhs_telno: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pblanc_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rcrit_pblanc_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hmpg_adres: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub cntrct_cncls_bgnde: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cntrct_cncls_endde: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mvn_prearnge_ym: String,
}

impl From<RawAnnouncement> for Announcement {
    fn from(raw: RawAnnouncement) -> Self {
        let info_url = if raw.pblanc_url.is_empty() {
            raw.rcrit_pblanc_url
        } else {
            raw.pblanc_url
        };

        // The service has no separate contact-organization field; the
        // business entity is who answers the listed number.
        let contact_org_name = raw.bsns_mby_nm.clone();

        Announcement {
            id: AnnouncementId::new(raw.house_manage_no, raw.pblanc_no),
            name: raw.house_nm,
            recruitment_date: parse_api_date(&raw.rcrit_pblanc_de),
            announcement_date: parse_api_date(&raw.przwner_presnatn_de),
            region_name: raw.subscrpt_area_code_nm,
            house_type_code: raw.house_secd,
            house_type_name: raw.house_secd_nm,
            house_detail_type_name: raw.house_dtl_secd_nm,
            supply_address: raw.hssply_adres,
            total_households: u32::try_from(raw.tot_suply_hshldco).unwrap_or(u32::MAX),
            business_entity: raw.bsns_mby_nm,
            builder: raw.cnstrct_entrps_nm,
            contact_org_name,
            phone_number: raw.mdhs_telno,
            info_url,
            homepage_url: raw.hmpg_adres,
            contract_period: ContractPeriod {
                start: parse_api_date(&raw.cntrct_cncls_bgnde),
                end: parse_api_date(&raw.cntrct_cncls_endde),
            },
            move_in_month: raw.mvn_prearnge_ym,
        }
    }
}

/// Strings, numbers and booleans become text; null and anything nested
/// become empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Non-negative integers, also when sent as numeric strings. Anything else
/// counts as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().unwrap_or(0),
        _ => 0,
    })
}

/// `data` may be missing, null, or an array.
fn lenient_rows<'de, D>(deserializer: D) -> Result<Vec<RawAnnouncement>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<RawAnnouncement>>::deserialize(deserializer)?.unwrap_or_default())
}
