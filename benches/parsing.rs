//! Benchmarks for message parsing, encoding, and multipart fragmenting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ircwire::multipart::{Buffering, Fragmenter, FragmenterConfig, Payload};
use ircwire::Message;

const SIMPLE_MESSAGE: &str = "PING :irc.example.com";
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";
const TAGGED_MESSAGE: &str =
    "@time=2023-01-01T00:00:00.000Z;msgid=abc123;+example/tag=value :nick!user@host PRIVMSG #channel :Hello with tags!";
const COMPLEX_TAGS: &str = "@time=2023-01-01T12:00:00Z;msgid=msg-12345;+draft/reply=parent-id;batch=batch001;account=username :nick!user@host.example.com PRIVMSG #long-channel-name :This is a longer message with more content to parse";
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("message parsing");

    for (name, raw) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("prefixed_privmsg", PREFIX_MESSAGE),
        ("tagged_privmsg", TAGGED_MESSAGE),
        ("complex_tags", COMPLEX_TAGS),
        ("numeric_reply", NUMERIC_RESPONSE),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            b.iter(|| black_box(Message::parse(black_box(raw)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("message encoding");

    let messages: Vec<(&str, Message)> = vec![
        ("simple_ping", Message::parse(SIMPLE_MESSAGE).unwrap()),
        ("prefixed_privmsg", Message::parse(PREFIX_MESSAGE).unwrap()),
        ("tagged_privmsg", Message::parse(TAGGED_MESSAGE).unwrap()),
        ("numeric_reply", Message::parse(NUMERIC_RESPONSE).unwrap()),
    ];

    for (name, message) in &messages {
        group.bench_with_input(BenchmarkId::from_parameter(name), message, |b, message| {
            b.iter(|| black_box(message.encode()));
        });
    }

    group.finish();
}

fn benchmark_fragmenting(c: &mut Criterion) {
    let mut group = c.benchmark_group("multipart fragmenting");

    for size_kib in [1usize, 16, 64] {
        let payload = "x".repeat(size_kib * 1024);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kib}kib")),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let fragmenter = Fragmenter::new(
                        Payload::Text(payload.clone()),
                        FragmenterConfig::default(),
                    );
                    let parts: Vec<_> = fragmenter.collect();
                    black_box(parts)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_encoding,
    benchmark_fragmenting
);
criterion_main!(benches);
