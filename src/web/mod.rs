// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP surface.
//!
//! Serves the input form at `/`, renders the requested numbers on `POST /` and exposes the raw
//! layout of a single number as JSON at `/api/layout/{n}`.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::Config;
use crate::input::RenderLimits;

pub mod handlers;
mod html;

/// Shared, read-only request context.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    limits: RenderLimits,
    seed: Option<u64>,
}

impl AppState {
    pub fn new(limits: RenderLimits, seed: Option<u64>) -> Self {
        Self { inner: Arc::new(AppStateInner { limits, seed }) }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.limits, config.seed)
    }

    pub fn limits(&self) -> &RenderLimits {
        &self.inner.limits
    }

    pub fn seed(&self) -> Option<u64> {
        self.inner.seed
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .route("/api/layout/{n}", get(handlers::layout))
        .with_state(state)
}
