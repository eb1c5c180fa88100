use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lint_core::config::LintConfig;
use lint_core::context::FixMode;
use lint_core::driver::LintDriver;
use lint_diagnostics::SourceFile;
use lint_semantic::build;

const SAMPLE: &str = r#"
const std = @import("std");

pub const Point = struct {
    x: f64,
    y: f64,

    pub fn length(self: Point) f64 {
        return std.math.sqrt(self.x * self.x + self.y * self.y);
    }
};

fn clamp(value: i32, lo: i32, hi: i32) i32 {
    var result = value;
    if (result < lo) {
        result = lo;
    } else if (result > hi) {
        result = hi;
    }
    return result;
}

pub fn main() void {
    const origin = Point{ .x = 0, .y = 0 };
    const clamped = clamp(10, 0, 5);
    std.debug.print("{} {}\n", .{ origin.length(), clamped });
}
"#;

fn bench_build(source: &str) {
    let _ = build(&SourceFile::new(source, None));
}

fn bench_lint(source: &str) {
    let semantic = build(&SourceFile::new(source, None)).expect("clean build");
    let config = LintConfig::new();
    let _ = LintDriver::new(&config, FixMode::Disabled).run(&semantic);
}

fn sample_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_file");
    group
        .throughput(Throughput::Bytes(SAMPLE.len() as u64))
        .bench_function("semantic_build", |b| b.iter(|| bench_build(black_box(SAMPLE))))
        .bench_function("full_lint", |b| b.iter(|| bench_lint(black_box(SAMPLE))));
    group.finish();
}

criterion_group!(benches, sample_pipeline);
criterion_main!(benches);
