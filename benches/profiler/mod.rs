// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Reads `IDEF0_BENCH_<name>`, falling back to `default` when unset or unparsable.
fn knob<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(format!("IDEF0_BENCH_{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

/// Criterion with a flamegraph profiler attached.
///
/// Knobs: `IDEF0_BENCH_PROFILE_HZ`, `IDEF0_BENCH_SAMPLES`, `IDEF0_BENCH_WARMUP_SECS`,
/// `IDEF0_BENCH_MEASURE_SECS`. Routing runs are short, so the defaults stay small.
pub fn criterion() -> Criterion {
    let hz = knob::<i32>("PROFILE_HZ", 250).clamp(1, 1000);
    let samples = knob::<usize>("SAMPLES", 40).max(10);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(knob("WARMUP_SECS", 2)))
        .measurement_time(Duration::from_secs(knob("MEASURE_SECS", 4)))
        .with_profiler(PProfProfiler::new(hz, Output::Flamegraph(None)))
}
