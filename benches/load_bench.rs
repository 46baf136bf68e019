use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use rres::{CompressionType, FileHeader, InfoHeader, ResourceType};
use std::io::Write;
use tempfile::NamedTempFile;

const ENTRIES: u16 = 64;

fn build_container(data: &[u8], deflate: bool) -> NamedTempFile {
    let payload = if deflate {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    } else {
        data.to_vec()
    };
    let comp = if deflate { CompressionType::Deflate } else { CompressionType::None };

    let mut buf = Vec::new();
    FileHeader::new(ENTRIES).write(&mut buf).unwrap();
    for id in 0..ENTRIES {
        InfoHeader {
            id,
            data_type:   ResourceType::Raw as u8,
            comp_type:   comp as u8,
            data_size:   payload.len() as u32,
            uncomp_size: data.len() as u32,
            ..Default::default()
        }
        .write(&mut buf)
        .unwrap();
        buf.extend_from_slice(&payload);
    }

    let mut f = NamedTempFile::new().unwrap();
    f.write_all(&buf).unwrap();
    f
}

fn bench_load(c: &mut Criterion) {
    let data: Vec<u8> = (0u8..=255).cycle().take(256 * 1024).collect();
    let stored = build_container(&data, false);
    let deflated = build_container(&data, true);

    c.bench_function("load_first_256k_stored", |b| {
        b.iter(|| rres::load_first(black_box(stored.path())))
    });
    c.bench_function("load_last_of_64_stored", |b| {
        b.iter(|| rres::load_by_id(black_box(stored.path()), (ENTRIES - 1) as i32))
    });
    c.bench_function("load_last_of_64_deflate", |b| {
        b.iter(|| rres::load_by_id(black_box(deflated.path()), (ENTRIES - 1) as i32))
    });
}

fn bench_list(c: &mut Criterion) {
    let stored = build_container(&[7u8; 4096], false);
    c.bench_function("list_64_entries", |b| {
        b.iter(|| rres::list_entries(black_box(stored.path())).unwrap())
    });
}

criterion_group!(benches, bench_load, bench_list);
criterion_main!(benches);
