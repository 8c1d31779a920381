use std::{env, net::IpAddr, time::Duration};

use crate::interface_adapters::state::FailureTimings;

// Runtime/server settings, all read from the environment.

pub fn http_port() -> u16 {
    env::var("PLAYGROUND_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn http_host() -> IpAddr {
    env::var("PLAYGROUND_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn post_error_delay() -> Duration {
    millis_from_env("POST_ERROR_DELAY_MS", 100)
}

pub fn async_fault_delay() -> Duration {
    millis_from_env("ASYNC_FAULT_DELAY_MS", 1000)
}

pub fn failure_timings() -> FailureTimings {
    FailureTimings {
        post_error_delay: post_error_delay(),
        async_fault_delay: async_fault_delay(),
    }
}

fn millis_from_env(key: &str, default_ms: u64) -> Duration {
    let millis = env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_variable_is_unset_then_default_millis_apply() {
        let delay = millis_from_env("PLAYGROUND_TEST_UNSET_DELAY_MS", 250);

        assert_eq!(delay, Duration::from_millis(250));
    }
}
