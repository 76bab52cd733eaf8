use maud::{html, Markup};
use crate::model::LocationSpot;

// Popup content builders

pub const CURRENCY_SYMBOL: &str = "₹";
pub const AVAILABLE_COLOR: &str = "green";
pub const UNAVAILABLE_COLOR: &str = "red";

// Hourly rate, shortest decimal form: 50.0 -> "₹50/hr". -0 prints as 0.
pub const format_price: fn(f64) -> String =
    |price| {
        let price = if price == 0.0 { 0.0 } else { price };
        format!("{}{}/hr", CURRENCY_SYMBOL, price)
    };

pub const availability_label: fn(bool) -> &'static str =
    |available| if available { "Available" } else { "Not Available" };

pub const availability_style: fn(bool) -> String =
    |available| {
        let color = if available { AVAILABLE_COLOR } else { UNAVAILABLE_COLOR };
        format!("color:{};", color)
    };

/// Popup for a single spot: name, rate, hours and an availability badge.
///
/// Every field goes through the template's escaping, so spot text cannot
/// inject markup into the page.
pub fn popup_markup(spot: &LocationSpot) -> Markup {
    html! {
        b { (spot.location) }
        br;
        (format_price(spot.price))
        br;
        "Timings: " (spot.timings)
        br;
        span style=(availability_style(spot.available)) { (availability_label(spot.available)) }
    }
}
