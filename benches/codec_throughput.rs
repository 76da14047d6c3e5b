//! Throughput of request decode and response encode for typical graphs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maltego_codec::{Entity, EntityField, TransformRequest, TransformResponse, UiMessage};

fn request_document(entity_count: usize) -> Vec<u8> {
    let mut entities = String::new();
    for i in 0..entity_count {
        entities.push_str(&format!(
            "<Entity Type=\"maltego.Domain\"><Value>host{i}.example.com</Value></Entity>"
        ));
    }
    format!(
        "<MaltegoMessage><MaltegoTransformRequestMessage>\
         <Entities>{entities}</Entities>\
         <Limits SoftLimit=\"500\" HardLimit=\"10000\"/>\
         </MaltegoTransformRequestMessage></MaltegoMessage>"
    )
    .into_bytes()
}

fn sample_response(entity_count: usize) -> TransformResponse {
    let entities = (0..entity_count)
        .map(|i| {
            let mut entity = Entity::new("maltego.IPv4Address", format!("10.0.{}.{}", i / 256, i % 256));
            entity.weight = Some(100);
            entity.fields.push(EntityField::new("source", "dns"));
            entity
        })
        .collect();
    TransformResponse::with_ui_messages(entities, vec![UiMessage::inform("done")])
}

fn bench_request_decode(c: &mut Criterion) {
    let small = request_document(10);
    let large = request_document(500);

    c.bench_function("request_decode_10_entities", |b| {
        b.iter(|| TransformRequest::<Entity>::from_xml(black_box(&small)).unwrap())
    });
    c.bench_function("request_decode_500_entities", |b| {
        b.iter(|| TransformRequest::<Entity>::from_xml(black_box(&large)).unwrap())
    });
}

fn bench_response_encode(c: &mut Criterion) {
    let small = sample_response(10);
    let large = sample_response(500);

    c.bench_function("response_encode_10_entities", |b| {
        b.iter(|| black_box(&small).to_xml(false).unwrap())
    });
    c.bench_function("response_encode_500_entities", |b| {
        b.iter(|| black_box(&large).to_xml(false).unwrap())
    });
}

criterion_group!(benches, bench_request_decode, bench_response_encode);
criterion_main!(benches);
