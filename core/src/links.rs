//! Outbound contact links.

use crate::query::encode_component;

pub const CLINIC_PHONE: &str = "+255123456789";
pub const CLINIC_EMAIL: &str = "info@drdonald.co.tz";
pub const WHATSAPP_GREETING: &str =
    "Hello Dr. Donald, I would like to inquire about a procedure.";

/// Chat link with the greeting pre-filled, used by the floating button.
pub fn whatsapp_link() -> String {
    whatsapp_link_with(CLINIC_PHONE, WHATSAPP_GREETING)
}

pub fn whatsapp_link_with(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={}", encode_component(message))
}

/// Plain chat link without a pre-filled message.
pub fn whatsapp_chat_link() -> String {
    format!("https://wa.me/{CLINIC_PHONE}")
}

pub fn tel_link() -> String {
    format!("tel:{CLINIC_PHONE}")
}

pub fn mailto_link() -> String {
    format!("mailto:{CLINIC_EMAIL}")
}
