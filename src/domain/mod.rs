pub mod availability;
pub mod booking;
pub mod calendar;
pub mod locale;
pub mod navigation;
pub mod period;
pub mod pricing;
pub mod selection;

pub use availability::*;
pub use booking::*;
pub use calendar::*;
pub use locale::*;
pub use navigation::*;
pub use period::*;
pub use pricing::*;
pub use selection::*;
