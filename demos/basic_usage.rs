//! Basic logger usage example
//!
//! Logs to the file named by `RELEASE_LOG_FILE`, or to a temporary file when
//! it is unset, and mirrors lines to the console.
//!
//! Run with: cargo run --example basic_usage

use release_log::prelude::*;
use release_log::LOG_TARGET_ENV;

fn main() -> Result<()> {
    println!("=== Release Log - Basic Usage Example ===\n");

    let mut config = LoggerConfig::from_env();
    if config.log_target().is_none() {
        let path = std::env::temp_dir().join("release_log_demo.log");
        println!("{} is unset, logging to {}", LOG_TARGET_ENV, path.display());
        config = config.with_log_target(path);
    }

    let logger = Logger::builder()
        .config(config)
        .min_level(LogLevel::Debug)
        .appender(ConsoleAppender::new())
        .build();

    println!("1. Logging at different levels:");
    let watch = Stopwatch::start();
    logger.log_debug("Resolving build candidates")?;
    logger.log_info("Tagging repositories")?;
    logger.log_warn("Mirror sync slower than usual")?;
    logger.log_error("Signing step failed; see above");

    println!("\n2. Formatting durations:");
    for secs in [0, 59, 60, 3661, 7322] {
        println!("   {:>5}s -> {}", secs, format_duration(secs));
    }
    logger.log_info(format!("Demo finished in {}", watch.formatted()))?;

    println!("\n3. Logging without a target:");
    let unconfigured = Logger::default();
    if let Err(e) = unconfigured.log_info("goes nowhere") {
        println!("   log_info failed as expected: {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
