//! Delays used by the simulated flows, and a portable async sleep.

/// Splash stages: preferences, config, services, finalize.
pub const SPLASH_STEP_DELAYS_MS: [u64; 4] = [500, 300, 400, 600];
/// Minimum time the splash stays up before routing.
pub const SPLASH_MIN_DISPLAY_MS: u64 = 3_000;
/// How long the share/save confirmation stays visible.
pub const TOAST_MS: u64 = 2_500;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_stages_fit_inside_minimum_display() {
        let total: u64 = SPLASH_STEP_DELAYS_MS.iter().sum();
        assert!(total <= SPLASH_MIN_DISPLAY_MS);
    }
}
