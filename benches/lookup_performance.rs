// benches/lookup_performance.rs
//! Benchmarks for hresult_registry lookup and logging paths
//!
//! Measures wall time through criterion and per-iteration allocations through
//! stats_alloc. Resolution of a raw status field must not touch the heap.

use criterion::{BenchmarkId, Bencher, Criterion, black_box, criterion_group, criterion_main};
use hresult_registry::{E_FAIL, HResult, StatusError, catalog, from_code, lookup_name, resolve};

// ============================================================================
// Allocation Tracking with stats_alloc
// ============================================================================

use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

#[derive(Debug, Clone, Copy)]
struct MemStats {
    allocated: usize,
    alloc_count: usize,
    dealloc_count: usize,
}

impl MemStats {
    fn from_region(start: &stats_alloc::Stats, end: &stats_alloc::Stats) -> Self {
        Self {
            allocated: end.bytes_allocated.saturating_sub(start.bytes_allocated),
            alloc_count: end.allocations.saturating_sub(start.allocations),
            dealloc_count: end.deallocations.saturating_sub(start.deallocations),
        }
    }

    fn print(&self, label: &str) {
        println!(
            "\n┌─ Memory: {} ─────────────────────────────────\n\
             │ Allocated:     {:>8} bytes  ({} allocs)\n\
             │ Deallocations: {:>8}\n\
             └────────────────────────────────────────────────────────",
            label, self.allocated, self.alloc_count, self.dealloc_count
        );
    }
}

/// Run `f` under criterion and report the worst allocation count seen.
fn bench_with_mem<F>(b: &mut Bencher<'_>, label: &str, mut f: F)
where
    F: FnMut(),
{
    let mut worst: Option<MemStats> = None;

    b.iter(|| {
        let region = Region::new(GLOBAL);
        let start = region.change();
        f();
        let stats = MemStats::from_region(&start, &region.change());

        if worst.is_none_or(|w| stats.alloc_count > w.alloc_count) {
            worst = Some(stats);
        }
    });

    if let Some(stats) = worst {
        stats.print(label);
    }
}

/// Fail the run outright if a lookup path allocates.
fn assert_no_alloc<F: FnMut()>(label: &str, mut f: F) {
    let region = Region::new(GLOBAL);
    let start = region.change();
    for _ in 0..1_000 {
        f();
    }
    let stats = MemStats::from_region(&start, &region.change());
    assert_eq!(stats.alloc_count, 0, "{} allocated {} bytes", label, stats.allocated);
}

// ============================================================================
// LOOKUP BENCHMARKS
// ============================================================================

fn bench_from_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_code");

    for (label, code) in [
        ("hit_null", 0x8000_4005u32),
        ("hit_win32", 0x8007_0057),
        ("hit_rpc", 0x8001_0108),
        ("miss", 0xFFFF_FFFF),
        ("success", 0),
    ] {
        assert_no_alloc(label, || {
            black_box(from_code(black_box(code)));
        });
        group.bench_with_input(BenchmarkId::from_parameter(label), &code, |b, &code| {
            b.iter(|| black_box(from_code(black_box(code))))
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for (label, code) in [("known", 0x8000_4005u32), ("unknown", 0x8007_06BA), ("success", 0)] {
        assert_no_alloc(label, || {
            let _ = black_box(resolve(black_box(code)));
        });
        group.bench_with_input(BenchmarkId::from_parameter(label), &code, |b, &code| {
            bench_with_mem(b, label, || {
                let _ = black_box(resolve(black_box(code)));
            })
        });
    }

    group.finish();
}

fn bench_full_catalog_sweep(c: &mut Criterion) {
    let codes: Vec<u32> = catalog().iter().map(|entry| entry.code()).collect();

    c.bench_function("resolve_every_catalog_code", |b| {
        b.iter(|| {
            for &code in &codes {
                black_box(from_code(black_box(code)));
            }
        })
    });
}

fn bench_win32_mapping(c: &mut Criterion) {
    c.bench_function("from_win32_then_resolve", |b| {
        b.iter(|| {
            let _ = black_box(HResult::from_win32(black_box(5)).ok());
        })
    });
}

fn bench_lookup_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_name");

    for name in ["E_FAIL", "SEC_E_NO_SPM", "NOT_A_CODE"] {
        assert_no_alloc(name, || {
            black_box(lookup_name(black_box(name)));
        });
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, &name| {
            b.iter(|| black_box(lookup_name(black_box(name))))
        });
    }

    group.finish();
}

// ============================================================================
// LOGGING BENCHMARKS
// ============================================================================

fn bench_status_log_write(c: &mut Criterion) {
    let err = StatusError::from(&E_FAIL)
        .with_metadata("interface", "IRemoteSCMActivator")
        .with_metadata("opnum", "4");

    let mut group = c.benchmark_group("status_log");

    group.bench_function("write_to", |b| {
        let mut buffer = String::with_capacity(512);
        bench_with_mem(b, "Status Log Text", || {
            buffer.clear();
            let _ = err.with_status_log(|log| log.write_to(&mut buffer));
            black_box(&buffer);
        })
    });

    group.bench_function("write_json_to", |b| {
        let mut buffer = String::with_capacity(512);
        bench_with_mem(b, "Status Log JSON", || {
            buffer.clear();
            let _ = err.with_status_log(|log| log.write_json_to(&mut buffer));
            black_box(&buffer);
        })
    });

    group.finish();
}

fn bench_metadata_attach(c: &mut Criterion) {
    c.bench_function("resolve_with_inline_metadata", |b| {
        bench_with_mem(b, "Inline Metadata", || {
            let err = resolve(black_box(0x8001_011F))
                .unwrap_err()
                .with_metadata("interface", "IObjectExporter")
                .with_metadata("opnum", "5");
            black_box(err);
        })
    });
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(
    lookup_benches,
    bench_from_code,
    bench_resolve,
    bench_full_catalog_sweep,
    bench_win32_mapping,
    bench_lookup_name,
);

criterion_group!(logging_benches, bench_status_log_write, bench_metadata_attach);

criterion_main!(lookup_benches, logging_benches);
