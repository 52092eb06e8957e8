//! Failure propagation demo
//!
//! Pushes a batch of items through three frames (probe, parse, load).
//! One item reports a configurable status; if that status is failed, the
//! context raised in `parse_item` is re-raised by every frame above it and
//! the final trace is printed.
//!
//! # Environment Variables
//!
//! - `PROPAGATE_ITEMS=8` - Number of items in the batch
//! - `PROPAGATE_FAIL_AT=5` - Index of the item that reports `PROPAGATE_CODE`
//! - `PROPAGATE_CODE=ERR_PARSE` - Reserved code name (try `INFO_EXPIRED` or `WARN_STILL_RUNNING`)
//! - `PROPAGATE_STRICT=1` - Stop the batch at the first failure instead of skipping the item
//! - `RUST_LOG=serror=trace` - Show the raise / re-raise events

mod env;

use std::process::ExitCode;

use serror::{
    break_if_failed, codes, continue_if_failed, here, raise, raise_if_failed, FailureContext,
    FailureExt, SResult, StatusCode,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::env::{env_get, env_get_bool};

// PROPAGATE_FAIL_AT=2 PROPAGATE_STRICT=1 RUST_LOG=serror=trace cargo run -p serror-propagate
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    println!("=== serror propagate demo ===\n");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ctx) => {
            eprint!("{}", ctx);
            return ExitCode::FAILURE;
        }
    };

    info!(
        items = config.items,
        fail_at = config.fail_at,
        code = %config.code,
        strict = config.strict,
        "starting batch"
    );

    let batch = run_batch(&config);

    println!(
        "processed {} of {} items, total = {}",
        batch.processed, config.items, batch.total
    );

    for ctx in &batch.failures {
        println!(
            "\nfailure {:?}, raised as {:?}, {} steps:",
            ctx.current_code(),
            ctx.first().code,
            ctx.len()
        );
        print!("{}", ctx.trace());
    }

    if batch.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

struct Config {
    items: u32,
    fail_at: u32,
    code: StatusCode,
    strict: bool,
}

impl Config {
    fn from_env() -> SResult<Self> {
        let name: String = env_get("PROPAGATE_CODE", "ERR_PARSE".to_string());
        let code = match codes::by_name(&name) {
            Some(code) => code,
            None => raise!(codes::ERR_INVALID_DATA, "PROPAGATE_CODE: `{}` is not a reserved code", name),
        };

        Ok(Config {
            items: env_get("PROPAGATE_ITEMS", 8),
            fail_at: env_get("PROPAGATE_FAIL_AT", 5),
            code,
            strict: env_get_bool("PROPAGATE_STRICT", false),
        })
    }
}

#[derive(Default)]
struct Batch {
    processed: u32,
    total: u64,
    failures: Vec<FailureContext>,
}

/// Frame 1: a low-level call that reports a bare status.
fn probe(index: u32, config: &Config) -> StatusCode {
    if index == config.fail_at {
        config.code
    } else {
        codes::SUCCESS
    }
}

/// Frame 2: turns a failed status into a context. Info codes pass through.
fn parse_item(index: u32, config: &Config) -> SResult<u64> {
    let status = probe(index, config);
    raise_if_failed!(status, "item {} is malformed", index);
    if status.is_info() {
        debug!(index, %status, "informational status, continuing");
    }
    Ok(u64::from(index) * 10)
}

/// Frame 3: adds what was being loaded.
fn load_item(index: u32, config: &Config) -> SResult<u64> {
    parse_item(index, config)
        .reraise_with(codes::ERR_INVALID_DATA, || format!("cannot load item {}", index))
}

/// Frame 4: drives the batch. Failed items end up in `failures`.
fn run_batch(config: &Config) -> Batch {
    let mut batch = Batch::default();

    for index in 0..config.items {
        let status = match load_item(index, config) {
            Ok(value) => {
                batch.total += value;
                codes::SUCCESS
            }
            Err(ctx) => {
                let code = ctx.current_code();
                warn!(index, %code, "item failed");
                let step = format!("batch step {} of {}", index + 1, config.items);
                batch.failures.push(ctx.reraised(here!(), codes::ERR_EXECUTE, step));
                code
            }
        };

        if config.strict {
            break_if_failed!(status);
        } else {
            continue_if_failed!(status);
        }
        batch.processed += 1;
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(items: u32, fail_at: u32, code: StatusCode, strict: bool) -> Config {
        Config { items, fail_at, code, strict }
    }

    #[test]
    fn clean_batch() {
        let batch = run_batch(&config(4, 99, codes::ERR_PARSE, false));
        assert_eq!(batch.processed, 4);
        assert_eq!(batch.total, 60);
        assert!(batch.failures.is_empty());
    }

    #[test]
    fn lenient_batch_skips_failed_item() {
        let batch = run_batch(&config(5, 2, codes::ERR_PARSE, false));
        assert_eq!(batch.processed, 4);
        assert_eq!(batch.failures.len(), 1);

        let ctx = &batch.failures[0];
        let steps: Vec<_> = ctx.entries().iter().map(|e| e.code).collect();
        assert_eq!(steps, [codes::ERR_PARSE, codes::ERR_INVALID_DATA, codes::ERR_EXECUTE]);
        assert_eq!(ctx.first().message, "item 2 is malformed");
        assert_eq!(ctx.last().message, "batch step 3 of 5");
    }

    #[test]
    fn strict_batch_stops() {
        let batch = run_batch(&config(5, 1, codes::WARN_STILL_RUNNING, true));
        assert_eq!(batch.processed, 1);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].first().code, codes::WARN_STILL_RUNNING);
    }

    #[test]
    fn info_status_is_not_a_failure() {
        let batch = run_batch(&config(3, 1, codes::INFO_EXPIRED, true));
        assert_eq!(batch.processed, 3);
        assert!(batch.failures.is_empty());
    }
}
