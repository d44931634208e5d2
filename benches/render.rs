// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use factordots::render::{render_page, RandomColors};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.page`, `render.base64`
// - Case IDs come from `fixtures::Case::id` and must not be renamed.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.page");
    for case in fixtures::Case::ALL {
        let range = case.range();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut colors = RandomColors::seeded(fixtures::COLOR_SEED);
                let page = render_page(black_box(range), &mut colors).expect("render_page");
                black_box(page.png().len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.base64");
    let page = render_page(
        fixtures::Case::FullPage.range(),
        &mut RandomColors::seeded(fixtures::COLOR_SEED),
    )
    .expect("render_page");
    group.bench_function(fixtures::Case::FullPage.id(), move |b| {
        b.iter(|| black_box(page.to_base64()).len())
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
