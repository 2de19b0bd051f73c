use log::Level;

pub const BRAND: &str = "JinaMatrix";
pub const BRAND_TLD: &str = ".in";

pub const CONTACT_EMAIL: &str = "m.nath190702@gmail.com";
pub const PHONE_DISPLAY: &str = "+91 95312 73486";
pub const PHONE_LINK: &str = "tel:+919531273486";
pub const WHATSAPP_LINK: &str = "https://wa.me/919531273486";
pub const LINKEDIN_LINK: &str = "https://www.linkedin.com/in/monoswee-nath/";
pub const LINKEDIN_NAME: &str = "Monoswee Nath";

pub fn mailto_link() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Scroll misses and view switches while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_points_at_contact_email() {
        assert_eq!(mailto_link(), "mailto:m.nath190702@gmail.com");
    }

    #[test]
    fn phone_link_matches_whatsapp_number() {
        let digits = PHONE_LINK.trim_start_matches("tel:+");
        assert!(WHATSAPP_LINK.ends_with(digits));
    }
}
