// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::NumberRange;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:960px;padding:0 1rem}\
form{margin:1rem 0}\
.error{color:#b00020;border:1px solid #b00020;padding:.5rem 1rem}\
img{max-width:100%}";

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// The input form, optionally with an error message above it.
pub(crate) fn index_page(error: Option<&str>) -> String {
    let mut body = String::from("<h1>Factor dots</h1>\n");
    if let Some(error) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }
    body.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"single\">Number</label>\n\
         <input id=\"single\" name=\"single\" type=\"text\" placeholder=\"12\">\n\
         <button type=\"submit\">Draw</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/\">\n\
         <label for=\"range\">Range</label>\n\
         <input id=\"range\" name=\"range\" type=\"text\" placeholder=\"5-10\">\n\
         <button type=\"submit\">Draw</button>\n\
         </form>\n",
    );
    page("Factor dots", &body)
}

/// The rendered grid as an inline PNG.
pub(crate) fn result_page(range: NumberRange, png_base64: &str) -> String {
    let body = format!(
        "<h1>Factor dots: {range}</h1>\n\
         <img src=\"data:image/png;base64,{png_base64}\" alt=\"Dot patterns for {range}\">\n\
         <p><a href=\"/\">Draw more</a></p>\n"
    );
    page(&format!("Factor dots: {range}"), &body)
}
