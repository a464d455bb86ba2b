//! HttpGenerator against a local chat-completion stub
#![cfg(feature = "http")]

use std::io::Read;
use std::sync::Once;

use cardposter::{generate_card, CardType, Error, GeneratorConfig, HttpGenerator, ValidationError};
use serde_json::{json, Value};
use tiny_http::{Header, Response, Server};

static INIT: Once = Once::new();
const ADDR: &str = "127.0.0.1:18093";

fn completion(content: &str) -> String {
    json!({
        "id": "cmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

fn start_stub_server() -> String {
    INIT.call_once(|| {
        std::thread::spawn(|| {
            let server = Server::http(ADDR).unwrap();
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let sent: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
                let authorized = request
                    .headers()
                    .iter()
                    .any(|h| h.field.equiv("Authorization") && h.value.as_str() == "Bearer secret");

                let json_header = "Content-Type: application/json".parse::<Header>().unwrap();
                let resp = match request.url() {
                    "/ok" => {
                        let card = json!({
                            "type": "steps",
                            "title": sent["messages"][1]["content"],
                            "items": [{"id": 1, "type": "step", "title": "A", "description": "d", "actionStep": "s"}]
                        });
                        Response::from_string(completion(&format!("```json\n{}\n```", card)))
                            .with_header(json_header)
                    }
                    "/auth" if !authorized => Response::from_string("denied").with_status_code(401),
                    "/auth" => Response::from_string(completion(
                        r#"{"type":"basic","title":"ok","items":[]}"#,
                    ))
                    .with_header(json_header),
                    "/invalid" => Response::from_string(completion(r#"{"type":"poster","title":"x","items":[]}"#))
                        .with_header(json_header),
                    "/chatty" => Response::from_string(completion(
                        "Here you go:\n```json {\"type\":\"basic\",\"title\":\"chatty\",\"items\":[]}```\nAnything else?",
                    ))
                    .with_header(json_header),
                    "/prose" => Response::from_string(completion("Sorry, I can't do that."))
                        .with_header(json_header),
                    _ => Response::from_string("boom").with_status_code(500),
                };
                let _ = request.respond(resp);
            }
        });
        std::thread::sleep(std::time::Duration::from_millis(100));
    });

    format!("http://{}", ADDR)
}

fn generator(path: &str) -> HttpGenerator {
    let config = GeneratorConfig {
        endpoint: format!("{}{}", start_stub_server(), path),
        timeout_ms: 5000,
        ..Default::default()
    };
    HttpGenerator::new(config).expect("client")
}

#[test]
fn fenced_reply_becomes_a_card() {
    let card = generate_card(&generator("/ok").with_card_type(CardType::Steps), "Make tea").unwrap();
    assert_eq!(card.card_type(), CardType::Steps);
    assert_eq!(card.title, "Make tea");
}

#[test]
fn server_error_is_network_error() {
    let err = generate_card(&generator("/broken"), "x").unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{:?}", err);
}

#[test]
fn api_key_is_sent_as_bearer_token() {
    assert!(matches!(generate_card(&generator("/auth"), "x"), Err(Error::Network(_))));

    let config = GeneratorConfig {
        endpoint: format!("{}/auth", start_stub_server()),
        api_key: "secret".to_string(),
        ..Default::default()
    };
    let card = generate_card(&HttpGenerator::new(config).unwrap(), "x").unwrap();
    assert!(card.is_empty());
}

#[test]
fn invalid_card_is_validation_error() {
    let err = generate_card(&generator("/invalid"), "x").unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::UnknownVariant { .. })));
}

#[test]
fn fence_inside_prose_becomes_a_card() {
    let card = generate_card(&generator("/chatty"), "x").unwrap();
    assert_eq!(card.title, "chatty");
    assert!(card.is_empty());
}

#[test]
fn prose_reply_is_generation_error() {
    let err = generate_card(&generator("/prose"), "x").unwrap_err();
    assert!(matches!(err, Error::Generation(_)));
}

#[test]
fn unreachable_endpoint_is_network_error() {
    let config = GeneratorConfig {
        endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        timeout_ms: 500,
        ..Default::default()
    };
    let err = generate_card(&HttpGenerator::new(config).unwrap(), "x").unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}
