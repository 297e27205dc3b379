use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

const INVITE: &[u8] = b"INVITE sip:bob@biloxi.example.com SIP/2.0\r\n\
Via: SIP/2.0/TCP client.atlanta.example.com:5060;ttl=65;branch=z9hG4bK74bf9\r\n\
Max-Forwards: 70\r\n\
From: Alice <sip:alice@atlanta.example.com>;tag=9fxced76sl\r\n\
To: Bob <sip:bob@biloxi.example.com>\r\n\
Call-ID: 3848276298220188511@atlanta.example.com\r\n\
CSeq: 2 INVITE\r\n\
Contact: <sip:alice@client.atlanta.example.com;transport=tcp>\r\n\
Diversion: Carol <sip:carol@atlanta.example.com>;privacy=off;reason=no-answer;counter=1;screen=no\r\n\
P-Asserted-Identity: Alice <sip:alice@atlanta.example.com>\r\n\
Content-Type: application/sdp\r\n\
Content-Length: 151\r\n\
User-Agent: X-Lite release 1104o stamp 56125\r\n\r\n\
v=0\r\n\
o=alice 2890844526 2890844526 IN IP4 client.atlanta.example.com\r\n\
s=-\r\n\
c=IN IP4 192.0.2.101\r\n\
t=0 0\r\n\
m=audio 49172 RTP/AVP 0\r\n\
a=rtpmap:0 PCMU/8000\r\n";

fn bench_parse_sip_msg(c: &mut Criterion) {
    c.bench_function("parse invite with sdp", |b| {
        b.iter(|| {
            let msg = sipparse::parse_message(black_box(INVITE)).unwrap();
            black_box(msg);
        });
    });
}

fn bench_parse_header(c: &mut Criterion) {
    c.bench_function("parse via header", |b| {
        b.iter(|| {
            let hdr = sipparse::parse_header(black_box(
                "Via: SIP/2.0/UDP pc33.atlanta.com:5060;received=192.0.2.4;branch=z9hG4bK776asdhds;rport",
            ))
            .unwrap();
            black_box(hdr);
        });
    });
}

fn bench_parse_uri(c: &mut Criterion) {
    c.bench_function("parse sip uri", |b| {
        b.iter(|| {
            let uri = sipparse::parse_uri(black_box("sips:alice:secret@[2001:db8::10]:5061;transport=tcp;lr?subject=x"))
                .unwrap();
            black_box(uri);
        });
    });
}

criterion_group!(benches, bench_parse_sip_msg, bench_parse_header, bench_parse_uri);
criterion_main!(benches);
