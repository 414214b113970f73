pub mod agenda;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod locale;
pub mod lunar;
pub mod range;
pub mod render;
pub mod view;

pub use engine::Engine;
pub use format::{DualCalendar, FormatKind, FormatRequest, FormattedLabel};
pub use locale::Locale;
pub use lunar::{HijriCalendar, HijriKind, LunarCalendar, LunarDate};
pub use range::DateRange;
