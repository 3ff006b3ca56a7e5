mod economy;
mod session;

pub use economy::{
    AUTO_CLICK_BASE_PERIOD, AUTO_CLICK_LEVEL_DECREMENT, AUTO_CLICK_MIN_PERIOD,
    CLICK_PRODUCTION_DIVISOR, EconomyState, MAX_DELTA_SECONDS, TickReport,
    auto_click_period_for_level,
};
pub use session::Session;
