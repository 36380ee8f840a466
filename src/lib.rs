//! Chinese zodiac (生肖) lookup from a birth date or an age.
//!
//! The lunar year is approximated with a fixed February 20 cutoff rather
//! than a real lunar calendar, so dates between late January and
//! February 20 can be one sign off.

pub mod age;
pub mod card;
pub mod date;
pub mod error;
pub mod form;
pub mod lunar;
pub mod resolver;
pub mod zodiac;

pub use error::ValidationError;
pub use resolver::{InputMode, Resolution, resolve, resolve_detailed, resolve_on};
pub use zodiac::{Zodiac, ZodiacResult, zodiac_index};
