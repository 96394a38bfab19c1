//! Holiday table provision.
//!
//! Holiday tables are curated literal data; no movable-feast algorithm is
//! applied. A [`HolidaySource`] supplies tables by year and a
//! [`HolidayProvider`] turns "no data for this year" into a flagged fallback.

mod provider;
mod source;

pub use provider::HolidayProvider;
pub use source::{HolidaySource, StaticHolidaySource};
