use std::collections::HashSet;

use assert_matches::assert_matches;
use sipparse::headers::{Header, HeaderKind};
use sipparse::matching::Matches;
use sipparse::{parse_header, Error};

const CANONICAL: &[&str] = &[
    "Accept: application/sdp;level=1, text/html",
    "Accept-Encoding: gzip;q=0.5, identity",
    "Accept-Language: da, en-gb;q=0.8",
    "Alert-Info: <http://www.example.com/sounds/moo.wav>;appearance=2",
    "Allow: INVITE, ACK, BYE",
    "Allow-Events: presence, dialog",
    "Authentication-Info: nextnonce=\"47364c23432d2e131a5fb210812c\"",
    "Authorization: Digest username=\"Alice\", realm=\"atlanta.com\", nonce=\"84a4cc6f\", \
     uri=\"sip:bob@biloxi.com\", response=\"7587245234b3434cc3412213e5f113a5432\", algorithm=MD5",
    "Call-ID: a84b4c76e66710@pc33.atlanta.com",
    "Call-Info: <http://wwww.example.com/alice/photo.jpg>;purpose=icon",
    "Contact: Mr. Watson <sip:watson@worcester.bell-telephone.com>;q=0.7",
    "Content-Disposition: session;handling=required",
    "Content-Encoding: gzip",
    "Content-Language: fr",
    "Content-Length: 349",
    "Content-Type: application/sdp",
    "CSeq: 4711 INVITE",
    "Date: Sat, 13 Nov 2010 23:29:00 GMT",
    "Error-Info: <sip:not-in-service-recording@atlanta.com>",
    "Event: presence;id=1",
    "Expires: 7200",
    "From: Alice <sip:alice@atlanta.com>;tag=1928301774",
    "In-Reply-To: 70710@saturn.bell-tel.com, 17320@saturn.bell-tel.com",
    "Max-Forwards: 70",
    "MIME-Version: 1.0",
    "Min-Expires: 60",
    "Organization: Boxes by Bob",
    "Priority: emergency",
    "Proxy-Authenticate: Digest realm=\"atlanta.com\", nonce=\"wf84f1ceczx41ae6cbe5aea9c8e88d359\", \
     stale=FALSE, algorithm=MD5",
    "Proxy-Authorization: Digest username=\"Alice\", realm=\"atlanta.com\", response=\"42ce3cef44b22f50c6a6071bc8\"",
    "Proxy-Require: foo",
    "Record-Route: <sip:server10.biloxi.com;lr>, <sip:bigbox3.site3.atlanta.com;lr>",
    "Reply-To: Bob <sip:bob@biloxi.com>",
    "Require: 100rel",
    "Retry-After: 18000;duration=3600",
    "Route: <sip:bigbox3.site3.atlanta.com;lr>",
    "Server: HomeServer v2",
    "Subject: Need more boxes",
    "Supported: 100rel",
    "Timestamp: 54 0.5",
    "To: Bob <sip:bob@biloxi.com>;tag=a6c85cf",
    "Unsupported: foo",
    "User-Agent: Softphone Beta1.5",
    "Via: SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds",
    "Warning: 307 isi.edu \"Session parameter 'foo' not understood\"",
    "WWW-Authenticate: Digest realm=\"atlanta.com\", nonce=\"84a4cc6f3082121f32b42a2187831a9e\", qop=\"auth\"",
];

#[test]
fn test_every_header_round_trips() {
    let mut kinds = HashSet::new();

    for text in CANONICAL {
        let hdr = parse_header(text).unwrap_or_else(|err| panic!("{text}: {err}"));

        assert_eq!(&hdr.to_string(), text);
        assert_eq!(parse_header(&hdr.to_string()).unwrap(), hdr);
        assert!(hdr.matches(&hdr), "{text}");
        kinds.insert(hdr.kind().unwrap());
    }

    assert_eq!(kinds.len(), HeaderKind::ALL.len());
}

#[test]
fn test_compact_and_long_names_are_equivalent() {
    let pairs = [
        ("f: <sip:a@atlanta.com>;tag=1", "From: <sip:a@atlanta.com>;tag=1"),
        ("t: <sip:b@biloxi.com>", "To: <sip:b@biloxi.com>"),
        ("i: a84b4c76e66710", "Call-ID: a84b4c76e66710"),
        ("m: <sip:a@10.0.0.1>", "Contact: <sip:a@10.0.0.1>"),
        ("l: 0", "Content-Length: 0"),
        ("c: text/plain", "Content-Type: text/plain"),
        ("e: gzip", "Content-Encoding: gzip"),
        ("s: hello", "Subject: hello"),
        ("k: 100rel", "Supported: 100rel"),
        ("v: SIP/2.0/UDP host.example.com", "Via: SIP/2.0/UDP host.example.com"),
        ("o: presence", "Event: presence"),
        ("u: presence", "Allow-Events: presence"),
    ];

    for (compact, long) in pairs {
        assert_eq!(parse_header(compact).unwrap(), parse_header(long).unwrap(), "{compact}");
    }
}

#[test]
fn test_names_are_case_insensitive() {
    let hdr = parse_header("cseq:17 INVITE").unwrap();

    assert_eq!(hdr.to_string(), "CSeq: 17 INVITE");
    assert_eq!(parse_header("CONTENT-LENGTH :\t10  ").unwrap().to_string(), "Content-Length: 10");
}

#[test]
fn test_allow_events() {
    let hdr = parse_header("Allow-Events: pack1.pack2, pack3 , pack4").unwrap();
    let events = hdr.as_allow_events().unwrap();

    assert_eq!(events.iter().collect::<Vec<_>>(), ["pack1.pack2", "pack3", "pack4"]);
}

#[test]
fn test_expires() {
    let hdr = parse_header("Expires: 1000").unwrap();
    assert_eq!(hdr.as_expires().map(|e| e.value()), Some(1000));
    let hdr = parse_header("Expires: 4294967296").unwrap();
    assert_eq!(hdr.as_expires().map(|e| e.value()), Some(4_294_967_296));

    assert_matches!(parse_header("Expires: -1"), Err(Error::MalformedHeader { name, .. }) => {
        assert_eq!(name, "Expires");
    });
    assert_matches!(parse_header("Expires: abc"), Err(Error::MalformedHeader { text, offset, .. }) => {
        assert_eq!(text, "abc");
        assert_eq!(offset, 9);
    });
    assert_matches!(parse_header("Expires: 10 minutes"), Err(Error::MalformedHeader { text, .. }) => {
        assert_eq!(text, "minutes");
    });
}

#[test]
fn test_cseq() {
    let hdr = parse_header("CSeq: 17 INVITE").unwrap();

    assert_matches!(hdr, Header::CSeq(cseq) => {
        assert_eq!(cseq.cseq(), 17);
        assert_eq!(cseq.method().as_str(), "INVITE");
    });
}

#[test]
fn test_folded_header() {
    let hdr = parse_header("Subject: I know\r\n you\r\n").unwrap();

    assert_eq!(hdr.as_subject().map(|s| s.as_str()), Some("I know you"));
}

#[test]
fn test_unknown_header_keeps_raw_text() {
    let hdr = parse_header("X-Foo: bar").unwrap();

    assert_matches!(&hdr, Header::Extension(ext) => {
        assert_eq!(ext.name(), "X-Foo");
        assert_eq!(ext.value(), "bar");
    });
    assert_eq!(hdr.to_string(), "X-Foo: bar");

    let hdr = parse_header("P-Asserted-Identity:   <sip:alice@atlanta.com>").unwrap();
    assert_eq!(hdr.to_string(), "P-Asserted-Identity:   <sip:alice@atlanta.com>");
}

#[test]
fn test_missing_colon() {
    assert_matches!(parse_header("Expires 10"), Err(Error::MalformedHeader { .. }));
    assert_matches!(parse_header(": 10"), Err(Error::MalformedHeader { .. }));
}

#[test]
fn test_uri_failure_is_source_of_header_error() {
    assert_matches!(parse_header("To: <sip:bob@biloxi.com:99999>"), Err(Error::MalformedHeader { name, source, .. }) => {
        assert_eq!(name, "To");
        assert_matches!(*source, Error::MalformedAddress { .. } | Error::MalformedUri { .. });
    });
}

#[test]
fn test_template_matching() {
    let hdr = parse_header("Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds;rport").unwrap();
    let template = parse_header("Via: SIP/2.0/udp pc33.atlanta.com;branch=z9hG4bK776asdhds").unwrap();
    let other = parse_header("Via: SIP/2.0/TCP pc33.atlanta.com").unwrap();

    assert!(hdr.matches(&template));
    assert!(!hdr.matches(&other));
}
