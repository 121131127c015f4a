use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    cli::bench_process_char,
    cli::bench_dispatch_line,
    cli::bench_show_help
);
criterion_main!(benches);
