//! Criterion benchmarks for table/vector traversal: vtable resolution,
//! recursion-budget bookkeeping, and nested-object emission cost.
//!
//! Run with:
//!   cargo bench --bench traversal

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fbjson_printer::{field, PrintOptions, Printer, TableDescriptor};

mod support {
    include!("../e2e/support.rs");
}
use support::Buf;

fn item_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<i32>(printer, desc, 0, "value", 0);
}

fn items_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::table_vector_field(printer, desc, 0, "items", item_callback);
}

fn table_vector_buffer(len: usize) -> Vec<u8> {
    let mut buf = Buf::new(None);
    let item_vtable = buf.write_vtable(8, &[4]);
    let mut items = Vec::with_capacity(len);
    for i in 0..len {
        let item = buf.start_table(item_vtable);
        buf.i32(i as i32);
        items.push(item);
    }
    let (vec_start, slots) = buf.reserve_offset_vector(len);
    for (slot, item) in slots.into_iter().zip(items) {
        buf.link(slot, item);
    }
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let field_slot = buf.pos();
    buf.u32(0);
    buf.link(field_slot, vec_start);
    buf.finish(table)
}

fn node_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<i32>(printer, desc, 0, "value", 0);
    field::table_field(printer, desc, 1, "next", node_callback);
}

fn chain_buffer(depth: usize) -> Vec<u8> {
    let mut buf = Buf::new(None);
    let mut next: Option<usize> = None;
    for i in (0..depth).rev() {
        let has_next = next.is_some();
        let vtable = buf.write_vtable(12, &[4, if has_next { 8 } else { 0 }]);
        let table = buf.start_table(vtable);
        buf.i32(i as i32);
        if let Some(target) = next {
            let slot = buf.pos();
            buf.u32(0);
            buf.link(slot, target);
        }
        next = Some(table);
    }
    buf.finish(next.expect("depth must be > 0"))
}

fn bench_table_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_vector_field");
    for &len in &[16usize, 256, 4096] {
        let data = table_vector_buffer(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("items", len), &data, |b, data| {
            b.iter(|| {
                let mut out = Vec::with_capacity(data.len() * 2);
                let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
                fbjson_printer::table_as_root(&mut printer, data, None, items_callback);
                printer.finish()
            })
        });
    }
    group.finish();
}

fn bench_recursive_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_field_recursion");
    for &depth in &[8usize, 32, 64] {
        let data = chain_buffer(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &data, |b, data| {
            b.iter(|| {
                let options = PrintOptions {
                    max_levels: depth as u32 + 1,
                    ..Default::default()
                };
                let mut out = Vec::with_capacity(data.len() * 2);
                let mut printer = Printer::for_writer(&mut out, options);
                fbjson_printer::table_as_root(&mut printer, data, None, node_callback);
                printer.finish()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table_vector, bench_recursive_chain);
criterion_main!(benches);
