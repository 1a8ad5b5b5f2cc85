mod currency;
mod dates;
mod presentation;

pub use currency::Currency;
pub use dates::{display_date, short_date, time_of_day};
pub(crate) use dates::{hm, ymd};
pub use presentation::{Emphasis, Presentation};
