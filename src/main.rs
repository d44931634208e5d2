// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Factordots CLI entrypoint.
//!
//! Serves the web form over HTTP at `http://<host>:<port>/` until interrupted.

use std::error::Error;

use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use factordots::config::Config;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--host <addr>] [--port <port>] [--max-count <n>] [--max-number <n>] \
         [--max-points <n>] [--seed <n>] [--log-level <level>]\n\n\
         Serves the form at `http://<host>:<port>/` (default 127.0.0.1:8050).\n\
         --max-count limits how many numbers one page may show; --max-number limits the largest \
         number;\n--max-points limits the total dots drawn on one page.\n\
         --seed fixes dot colors so the same request always renders the same image.\n\n\
         Every flag can also be set with a FACTORDOTS_* environment variable (HOST, PORT, \
         MAX_COUNT,\nMAX_NUMBER, MAX_POINTS, SEED, LOG); flags win over the environment."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    host: Option<String>,
    port: Option<u16>,
    max_count: Option<u64>,
    max_number: Option<u64>,
    max_points: Option<u64>,
    seed: Option<u64>,
    log_level: Option<Level>,
}

impl CliOptions {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(max_count) = self.max_count {
            config.limits.max_count = max_count;
        }
        if let Some(max_number) = self.max_number {
            config.limits.max_number = max_number;
        }
        if let Some(max_points) = self.max_points {
            config.limits.max_points = max_points;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--host" => {
                let raw = args.next().ok_or(())?;
                set_once(&mut options.host, raw)?;
            }
            "--port" => {
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                set_once(&mut options.port, port)?;
            }
            "--max-count" => {
                let raw = args.next().ok_or(())?;
                let max_count: u64 = raw.parse().map_err(|_| ())?;
                if max_count == 0 {
                    return Err(());
                }
                set_once(&mut options.max_count, max_count)?;
            }
            "--max-number" => {
                let raw = args.next().ok_or(())?;
                let max_number: u64 = raw.parse().map_err(|_| ())?;
                if max_number == 0 {
                    return Err(());
                }
                set_once(&mut options.max_number, max_number)?;
            }
            "--max-points" => {
                let raw = args.next().ok_or(())?;
                let max_points: u64 = raw.parse().map_err(|_| ())?;
                if max_points == 0 {
                    return Err(());
                }
                set_once(&mut options.max_points, max_points)?;
            }
            "--seed" => {
                let raw = args.next().ok_or(())?;
                let seed: u64 = raw.parse().map_err(|_| ())?;
                set_once(&mut options.seed, seed)?;
            }
            "--log-level" => {
                let raw = args.next().ok_or(())?;
                let level: Level = raw.parse().map_err(|_| ())?;
                set_once(&mut options.log_level, level)?;
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "factordots".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let mut config = Config::from_env()?;
        options.apply(&mut config);

        SubscriberBuilder::default().with_target(false).with_max_level(config.log_level).init();

        let state = factordots::web::AppState::from_config(&config);
        let router = factordots::web::router(state);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
            let local_addr = listener.local_addr()?;
            tracing::info!(
                addr = %local_addr,
                max_count = config.limits.max_count,
                max_number = config.limits.max_number,
                max_points = config.limits.max_points,
                seeded = config.seed.is_some(),
                "listening"
            );

            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    if let Err(err) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %err, "failed to listen for shutdown signal");
                        std::future::pending::<()>().await;
                    }
                    tracing::info!("shutting down");
                })
                .await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("factordots: {err}");
        std::process::exit(1);
    }
}
