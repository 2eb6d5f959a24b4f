//! Criterion benchmarks for the scalar/string field-emission primitives.
//!
//! Run with:
//!   cargo bench --bench text_primitives

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fbjson_printer::{field, PrintOptions, Printer, TableDescriptor};

mod support {
    include!("../e2e/support.rs");
}
use support::Buf;

fn numbers_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_vector_field::<i32>(printer, desc, 0, "numbers");
}

fn numbers_buffer(len: usize) -> Vec<u8> {
    let values: Vec<i32> = (0..len as i32).map(|i| i * 7 - 3).collect();
    let mut buf = Buf::new(None);
    let vec_start = buf.write_i32_vector(&values);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    buf.finish(table)
}

fn strings_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::string_field(printer, desc, 0, "text");
}

fn string_buffer(len: usize) -> Vec<u8> {
    let text: String = "the quick brown fox ".chars().cycle().take(len).collect();
    let mut buf = Buf::new(None);
    let s = buf.write_string(&text);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, s);
    buf.finish(table)
}

fn bench_scalar_vectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_vector_field");
    for &len in &[16usize, 256, 4096] {
        let data = numbers_buffer(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("i32", len), &data, |b, data| {
            b.iter(|| {
                let mut out = Vec::with_capacity(data.len() * 4);
                let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
                fbjson_printer::table_as_root(&mut printer, data, None, numbers_callback);
                printer.finish()
            })
        });
    }
    group.finish();
}

fn bench_quoted_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_field");
    for &len in &[32usize, 1024, 32768] {
        let data = string_buffer(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("ascii", len), &data, |b, data| {
            b.iter(|| {
                let mut out = Vec::with_capacity(data.len() + 16);
                let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
                fbjson_printer::table_as_root(&mut printer, data, None, strings_callback);
                printer.finish()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scalar_vectors, bench_quoted_strings);
criterion_main!(benches);
