//! # calpart-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| B["Date"]
//!     S["YYYY-MM-DD"] -->|".parse()"| B
//!     B -->|".add_days()"| B
//!     B -->|".add_months()"| B
//!     B -->|"month_starts()"| C["Vec of month boundaries"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use calpart_calendar::{Date, month_starts};
//!
//! let start = Date::new(2016, 1, 4).unwrap();
//! let next_week = start.add_days(7).unwrap(); // 2016-01-11
//!
//! // Month offsets clamp to the last valid day
//! let feb = Date::new(2016, 1, 31).unwrap().add_months(1).unwrap(); // 2016-02-29
//!
//! // Boundaries of Feb and Mar 2016
//! let bounds = month_starts(start.first_of_next_month().unwrap(), 2).unwrap();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date value type and arithmetic |
//! | `sequence` | Month boundary sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod sequence;

pub use date::Date;
pub use error::CalendarError;
pub use sequence::month_starts;
