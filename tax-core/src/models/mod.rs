mod bracket_schedule;
mod federal_config;
mod filer_profile;
mod filing_status;
mod jurisdiction;
mod tax_outcome;

pub use bracket_schedule::{Bracket, BracketSchedule, BracketScheduleError};
pub use federal_config::FederalConfig;
pub use filer_profile::FilerProfile;
pub use filing_status::{ByStatus, FilingStatus};
pub use jurisdiction::{
    FederalDeduction, FlatTaxConfig, GainsDeduction, IncomeTreatment, Jurisdiction,
    JurisdictionConfig, JurisdictionRule, Relief,
};
pub use tax_outcome::TaxOutcome;
