use std::env;

fn main() {
    // LED task tick period in milliseconds (optional, default: 100)
    // The blink half-period is BLINK_INTERVAL ticks of this period.
    match env::var("LED_TICK_MS") {
        Ok(ms) if ms.trim().parse::<u64>().map(|v| v > 0).unwrap_or(false) => {
            println!("cargo:rustc-env=LED_TICK_MS={}", ms.trim());
            println!("cargo:warning=Using LED_TICK_MS from environment: {}", ms.trim());
        }
        Ok(ms) => {
            println!("cargo:rustc-env=LED_TICK_MS=100");
            println!(
                "cargo:warning=Ignoring invalid LED_TICK_MS '{}', using 100",
                ms
            );
        }
        Err(_) => {
            println!("cargo:rustc-env=LED_TICK_MS=100");
        }
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=LED_TICK_MS");
}
