//! Input and device helpers

use game_core::VirtualButton;

const MOBILE_AGENTS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Touch devices get virtual buttons and vibration
pub fn is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|agent| ua.contains(agent))
}

/// Map a button name (or its element id) to a virtual button
pub fn parse_button(name: &str) -> Option<VirtualButton> {
    match name {
        "left" | "left-btn" => Some(VirtualButton::Left),
        "right" | "right-btn" => Some(VirtualButton::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mobile() {
        assert!(is_mobile(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(is_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(!is_mobile(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36"
        ));
    }

    #[test]
    fn test_parse_button() {
        assert_eq!(parse_button("left-btn"), Some(VirtualButton::Left));
        assert_eq!(parse_button("right"), Some(VirtualButton::Right));
        assert_eq!(parse_button("up"), None);
    }
}
