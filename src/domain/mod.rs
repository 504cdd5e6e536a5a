pub mod announcement;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod presets;
pub mod region;
pub mod status;

pub use announcement::{Announcement, AnnouncementId, ContractPeriod};
pub use filter::{filter_announcements, FilterCommand, FilterState, Period, StatusMask};
pub use pagination::{paginate, Page};
pub use presets::PeriodPreset;
pub use region::RegionFilter;
pub use status::{sale_status, SaleStatus};
