use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use sipparse::config::ParserConfig;
use sipparse::headers::Header;
use sipparse::parser::MessageParser;
use sipparse::{find_map_header, parse_message, Error};

const INVITE: &[u8] = b"INVITE sip:bob@biloxi.com SIP/2.0\r\n\
    Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds\r\n\
    Max-Forwards: 70\r\n\
    To: Bob <sip:bob@biloxi.com>\r\n\
    From: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
    Call-ID: a84b4c76e66710@pc33.atlanta.com\r\n\
    CSeq: 314159 INVITE\r\n\
    Contact: <sip:alice@pc33.atlanta.com>\r\n\
    Content-Type: application/sdp\r\n\
    Content-Length: 4\r\n\
    \r\n\
    v=0\n";

const BAD_EXPIRES: &[u8] = b"REGISTER sip:registrar.biloxi.com SIP/2.0\r\n\
    Via: SIP/2.0/UDP bobspc.biloxi.com:5060;branch=z9hG4bKnashds7\r\n\
    Expires: abc\r\n\
    Call-ID: 843817637684230@998sdasdh09\r\n\
    \r\n";

#[test]
fn test_parse_request() {
    let msg = parse_message(INVITE).unwrap().unwrap();
    let req = msg.request().unwrap();

    assert!(msg.is_request());
    assert!(req.method().is_invite());
    assert_eq!(req.uri().to_string(), "sip:bob@biloxi.com");
    assert_eq!(msg.headers().len(), 9);
    assert_eq!(&msg.body()[..], b"v=0\n");
    assert!(msg.header_errors().is_empty());

    let from = find_map_header!(msg.headers(), From).unwrap();
    assert_eq!(from.tag(), Some("1928301774"));
    assert_eq!(from.address().display(), Some("Alice"));
}

#[test]
fn test_message_round_trip() {
    let msg = parse_message(INVITE).unwrap().unwrap();
    let encoded = msg.to_bytes();
    let reparsed = parse_message(&encoded).unwrap().unwrap();

    assert_eq!(reparsed.headers(), msg.headers());
    assert_eq!(reparsed.body(), msg.body());
    assert_eq!(reparsed.to_bytes(), encoded);
}

#[test]
fn test_parse_response() {
    let msg = parse_message(
        b"SIP/2.0 180 Ringing\r\n\
          Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds;received=192.0.2.1\r\n\
          To: Bob <sip:bob@biloxi.com>;tag=a6c85cf\r\n\
          CSeq: 314159 INVITE\r\n\
          Content-Length: 0\r\n\r\n",
    )
    .unwrap()
    .unwrap();
    let res = msg.response().unwrap();

    assert!(msg.is_response());
    assert_eq!(res.code().as_u16(), 180);
    assert_eq!(res.reason(), "Ringing");
    assert!(msg.body().is_empty());
}

#[test]
fn test_lowercase_version_is_a_response() {
    let msg = parse_message(b"sip/2.0 200 OK\r\n\r\n").unwrap().unwrap();

    assert!(msg.is_response());
}

#[test]
fn test_compact_form_message() {
    let msg = parse_message(
        b"BYE sip:alice@pc33.atlanta.com SIP/2.0\r\n\
          v: SIP/2.0/UDP 192.0.2.4;branch=z9hG4bKnashds10\r\n\
          f: Bob <sip:bob@biloxi.com>;tag=a6c85cf\r\n\
          t: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
          i: a84b4c76e66710\r\n\
          l: 0\r\n\r\n",
    )
    .unwrap()
    .unwrap();
    let names: Vec<_> = msg.headers().iter().map(Header::name).collect();

    assert_eq!(names, ["Via", "From", "To", "Call-ID", "Content-Length"]);
}

#[test]
fn test_both_address_forms() {
    let msg = parse_message(
        b"REGISTER sip:registrar.biloxi.com SIP/2.0\r\n\
          To: sip:bob@biloxi.com\r\n\
          From: \"Bob \\\"B\\\"\" <sip:bob@biloxi.com>;tag=456248\r\n\
          Contact: <sip:bob@192.0.2.4>;expires=7200, sip:bob@192.0.2.5;q=0.5\r\n\r\n",
    )
    .unwrap()
    .unwrap();
    let headers = msg.headers();

    let to = find_map_header!(headers, To).unwrap();
    assert_eq!(to.address().display(), None);
    assert_eq!(to.address().uri().to_string(), "sip:bob@biloxi.com");

    let from = find_map_header!(headers, From).unwrap();
    assert_eq!(from.address().display(), Some("Bob \"B\""));
    assert_eq!(from.tag(), Some("456248"));

    let contact = find_map_header!(headers, Contact).unwrap();
    let addrs = contact.addresses();
    assert_eq!(addrs.len(), 2);
    assert_eq!(contact.expires(), Some(7200));
    assert_eq!(addrs[1].param("q"), Some("0.5"));
}

#[test]
fn test_folded_lines() {
    let msg = parse_message(
        b"MESSAGE sip:user2@domain.com SIP/2.0\r\n\
          Subject: I know\r\n you\r\n\
          Route: <sip:p1.example.com;lr>,\r\n\t<sip:p2.domain.com;lr>\r\n\r\n",
    )
    .unwrap()
    .unwrap();

    let subject = find_map_header!(msg.headers(), Subject).unwrap();
    assert_eq!(subject.as_str(), "I know you");

    let route = find_map_header!(msg.headers(), Route).unwrap();
    assert_eq!(route.to_string(), "Route: <sip:p1.example.com;lr>, <sip:p2.domain.com;lr>");
}

#[test]
fn test_extension_header_in_message() {
    let msg = parse_message(b"OPTIONS sip:carol@chicago.com SIP/2.0\r\nX-Foo: bar\r\n\r\n")
        .unwrap()
        .unwrap();

    assert_matches!(&msg.headers()[0], Header::Extension(ext) => {
        assert_eq!(ext.as_str(), "X-Foo: bar");
    });
    assert_eq!(msg.headers().get("x-foo").map(Header::to_string).as_deref(), Some("X-Foo: bar"));
}

#[test_log::test]
fn test_body_is_clamped_to_available_bytes() {
    let mut src = b"MESSAGE sip:user2@domain.com SIP/2.0\r\nContent-Length: 500\r\n\r\n".to_vec();
    src.extend_from_slice(b"0123456789");

    let msg = parse_message(&src).unwrap().unwrap();

    assert_eq!(&msg.body()[..], b"0123456789");
}

#[test]
fn test_body_stops_at_content_length() {
    let msg = parse_message(b"MESSAGE sip:a@b.com SIP/2.0\r\nl: 5\r\n\r\nHello, world")
        .unwrap()
        .unwrap();

    assert_eq!(&msg.body()[..], b"Hello");
}

#[test]
fn test_body_without_content_length_is_empty() {
    let msg = parse_message(b"MESSAGE sip:a@b.com SIP/2.0\r\n\r\nHello").unwrap().unwrap();

    assert!(msg.body().is_empty());
}

#[test]
fn test_read_body_disabled() {
    let parser = MessageParser::with_config(ParserConfig::builder().with_read_body(false).build());
    let msg = parser.parse(INVITE).unwrap().unwrap();

    assert!(msg.body().is_empty());
    assert_eq!(msg.headers().len(), 9);
}

#[test]
fn test_keep_alive() {
    assert_matches!(parse_message(b"\r\n\r\n"), Ok(None));
    assert_matches!(parse_message(b"\0\0\0\0"), Ok(None));
    assert_matches!(parse_message(b""), Ok(None));
}

#[test]
fn test_malformed_message() {
    assert_matches!(
        parse_message(b"OPTIONS sip:carol@chicago.com SIP/2.0\r\nMax-Forwards: 70\r\n"),
        Err(Error::MalformedMessage(_))
    );
    assert_matches!(parse_message(b"HELLO\r\n\r\n"), Err(Error::MalformedMessage(_)));
    assert_matches!(parse_message(b"SIP/2.0 abc OK\r\n\r\n"), Err(Error::MalformedMessage(_)));
}

#[test_log::test]
fn test_lenient_mode_records_header_errors() {
    let msg = parse_message(BAD_EXPIRES).unwrap().unwrap();
    let errors = msg.header_errors();

    assert_eq!(msg.headers().len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 2);
    assert_eq!(errors[0].name, "Expires");
    assert_eq!(errors[0].text, "Expires: abc");
    assert_matches!(&errors[0].error, Error::MalformedHeader { name, .. } => {
        assert_eq!(name, "Expires");
    });
}

#[test_log::test]
fn test_strict_mode_fails_the_message() {
    let parser = MessageParser::with_config(ParserConfig::builder().with_strict(true).build());

    assert_matches!(parser.parse(BAD_EXPIRES), Err(Error::MalformedHeader { name, text, .. }) => {
        assert_eq!(name, "Expires");
        assert_eq!(text, "abc");
    });
}

#[test]
fn test_error_listener_is_called() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let config = ParserConfig::builder()
        .with_error_listener(move |err| {
            assert_eq!(err.name, "Expires");
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    let parser = MessageParser::with_config(config);

    parser.parse(BAD_EXPIRES).unwrap();
    parser.parse(INVITE).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_error_listener_runs_before_strict_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let config = ParserConfig::builder()
        .with_strict(true)
        .with_error_listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    assert!(MessageParser::with_config(config).parse(BAD_EXPIRES).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_parser_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MessageParser>();

    let errors = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&errors);
    let parser = MessageParser::with_config(
        ParserConfig::builder()
            .with_error_listener(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(),
    );

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..25 {
                    let msg = parser.parse(INVITE).unwrap().unwrap();
                    assert_eq!(msg.headers().len(), 9);
                    assert_eq!(&msg.body()[..], b"v=0\n");

                    let msg = parser.parse(BAD_EXPIRES).unwrap().unwrap();
                    assert_eq!(msg.header_errors().len(), 1);
                }
            });
        }
    });

    assert_eq!(errors.load(Ordering::SeqCst), 100);
}
