// Hard ceiling applied to every simulated delay.
pub const MAX_DELAY_MS: u64 = 30_000;

// Per-endpoint delay rules: the fallback when the request is unusable and the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    pub default_ms: u64,
    pub max_ms: u64,
}

// A resolved delay for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRequest {
    pub requested_ms: u64,
    pub effective_ms: u64,
}

impl DelayPolicy {
    pub const TTFB: Self = Self::with_default(1000);
    pub const RESPONSE_TIME: Self = Self::with_default(2000);
    pub const DOM_LOAD: Self = Self::with_default(1500);
    // The error catalog only waits when asked to.
    pub const ERROR_PAGE: Self = Self::with_default(0);

    pub const fn with_default(default_ms: u64) -> Self {
        Self {
            default_ms,
            max_ms: MAX_DELAY_MS,
        }
    }

    // Resolve a raw path/query value into requested and clamped delays.
    pub fn resolve(&self, raw: Option<&str>) -> DelayRequest {
        let requested_ms = raw
            .and_then(parse_delay_ms)
            .unwrap_or(self.default_ms);

        DelayRequest {
            requested_ms,
            effective_ms: requested_ms.min(self.max_ms),
        }
    }
}

// Accept only non-negative integers; digit strings past u64 saturate.
fn parse_delay_ms(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(trimmed.parse::<u64>().unwrap_or(u64::MAX))
}
