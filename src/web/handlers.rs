// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::input::{parse_range, parse_single, InputError};
use crate::layout::layout_number;
use crate::model::NumberRange;
use crate::render::{render_page, RandomColors, RenderError, RenderedPage};

use super::html::{index_page, result_page};
use super::AppState;

/// Body of `POST /`; each of the two forms on the index page submits one field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlotForm {
    pub range: Option<String>,
    pub single: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: String,
}

pub async fn index() -> Html<String> {
    Html(index_page(None))
}

pub async fn health() -> &'static str {
    "ok"
}

/// Validates the submitted field and answers with either the rendered grid or the form plus
/// an error message.
pub async fn submit(State(state): State<AppState>, Form(form): Form<PlotForm>) -> Response {
    let parsed = if let Some(text) = form.range.as_deref() {
        parse_range(text, state.limits())
    } else if let Some(text) = form.single.as_deref() {
        parse_single(text, state.limits())
    } else {
        return Html(index_page(None)).into_response();
    };

    let range = match parsed {
        Ok(range) => range,
        Err(err) => return rejected(&form, &err),
    };

    let seed = state.seed();
    let started = Instant::now();
    let rendered = tokio::task::spawn_blocking(move || render_range(range, seed)).await;

    match rendered {
        Ok(Ok(page)) => {
            tracing::info!(
                start = range.start(),
                end = range.end(),
                count = range.count(),
                rows = page.grid().rows(),
                bytes = page.png().len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "rendered page"
            );
            Html(result_page(range, &page.to_base64())).into_response()
        }
        Ok(Err(err)) => {
            tracing::error!(%range, error = %err, "render failed");
            internal_error()
        }
        Err(err) => {
            tracing::error!(%range, error = %err, "render task failed");
            internal_error()
        }
    }
}

/// `GET /api/layout/{n}`: the dot coordinates for one number.
pub async fn layout(State(state): State<AppState>, Path(n): Path<u64>) -> Response {
    if n == 0 {
        return json_error(StatusCode::BAD_REQUEST, InputError::InvalidNumber.to_string());
    }
    let max_number = state.limits().max_number;
    if n > max_number {
        let err = InputError::NumberTooLarge { max_number };
        return json_error(StatusCode::BAD_REQUEST, err.to_string());
    }

    tracing::debug!(n, "layout requested");
    Json(layout_number(n)).into_response()
}

pub(crate) fn render_range(
    range: NumberRange,
    seed: Option<u64>,
) -> Result<RenderedPage, RenderError> {
    match seed {
        Some(seed) => render_page(range, &mut RandomColors::seeded(seed)),
        None => render_page(range, &mut RandomColors::from_entropy()),
    }
}

fn rejected(form: &PlotForm, err: &InputError) -> Response {
    let mode = if form.range.is_some() { "range" } else { "single" };
    tracing::warn!(mode, error = %err, "rejected input");
    Html(index_page(Some(&err.to_string()))).into_response()
}

fn internal_error() -> Response {
    let body = index_page(Some("Something went wrong. Please try again."));
    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}

fn json_error(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}
