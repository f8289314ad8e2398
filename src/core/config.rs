//! Build-time configuration
//!
//! `build.rs` exports `LED_TICK_MS` (tick period of the LED task). The blink
//! interval itself is a runtime parameter (`BLINK_INTERVAL`).

/// Tick period used when `LED_TICK_MS` is absent or malformed
pub const DEFAULT_TICK_MS: u64 = 100;

/// Raw tick period from the build environment
const LED_TICK_MS: &str = env!("LED_TICK_MS");

/// Parse a tick period in milliseconds; zero is rejected
pub fn parse_tick_ms(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(ms),
    }
}

/// LED task tick period in milliseconds
pub fn tick_period_ms() -> u64 {
    parse_tick_ms(LED_TICK_MS).unwrap_or(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tick_ms() {
        assert_eq!(parse_tick_ms("250"), Some(250));
        assert_eq!(parse_tick_ms(" 20 "), Some(20));
        assert_eq!(parse_tick_ms("0"), None);
        assert_eq!(parse_tick_ms("fast"), None);
        assert_eq!(parse_tick_ms(""), None);
    }

    #[test]
    fn test_tick_period_nonzero() {
        assert!(tick_period_ms() > 0);
    }
}
