//! Test doubles shared by the integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use async_trait::async_trait;
use itl_cli::translation::{TargetLanguage, TranslationError, Translator};
use tokio::sync::Semaphore;

/// One observable step of a call to [`ScriptedTranslator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Started(TargetLanguage),
    Finished(TargetLanguage),
}

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    NetworkError,
    Malformed,
}

/// Translator that answers from a script and records call order.
///
/// With a gate, every call waits for one permit before answering, so a test
/// can look at the view while calls are in flight.
#[derive(Default)]
pub struct ScriptedTranslator {
    scripts: RefCell<HashMap<TargetLanguage, Script>>,
    events: RefCell<Vec<Event>>,
    gate: Option<Semaphore>,
}

impl ScriptedTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, target: TargetLanguage, text: &str) -> Self {
        self.set_reply(target, text);
        self
    }

    pub fn network_error(self, target: TargetLanguage) -> Self {
        self.set_network_error(target);
        self
    }

    pub fn malformed(self, target: TargetLanguage) -> Self {
        self.set_malformed(target);
        self
    }

    /// Changes the answer for later calls.
    pub fn set_reply(&self, target: TargetLanguage, text: &str) {
        self.scripts
            .borrow_mut()
            .insert(target, Script::Reply(text.to_string()));
    }

    pub fn set_network_error(&self, target: TargetLanguage) {
        self.scripts.borrow_mut().insert(target, Script::NetworkError);
    }

    pub fn set_malformed(&self, target: TargetLanguage) {
        self.scripts.borrow_mut().insert(target, Script::Malformed);
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    /// Lets `n` gated calls answer.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn started(&self) -> Vec<TargetLanguage> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Started(target) => Some(*target),
                Event::Finished(_) => None,
            })
            .collect()
    }
}

/// A real `reqwest::Error`, built without touching the network.
pub fn reqwest_error() -> reqwest::Error {
    reqwest::Client::new().get("not a url").build().unwrap_err()
}

#[async_trait(?Send)]
impl Translator for ScriptedTranslator {
    async fn translate(
        &self,
        _text: &str,
        target: TargetLanguage,
    ) -> Result<String, TranslationError> {
        self.events.borrow_mut().push(Event::Started(target));

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        self.events.borrow_mut().push(Event::Finished(target));

        let script = self.scripts.borrow().get(&target).cloned();
        match script {
            Some(Script::Reply(text)) => Ok(text),
            Some(Script::NetworkError) => Err(TranslationError::Network {
                url: "http://translate.test/get".to_string(),
                source: reqwest_error(),
            }),
            Some(Script::Malformed) | None => Err(TranslationError::MalformedResponse {
                status: 200,
                detail: "missing responseData.translatedText".to_string(),
            }),
        }
    }
}

/// Minimal HTTP server answering one scripted response per connection.
pub struct CannedServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Serves `responses` in order, e.g. `("200 OK", body)`.
    pub fn start(responses: Vec<(&'static str, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/get", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                seen.lock().unwrap().push(read_request_head(&mut stream));
                let response = format!(
                    "HTTP/1.1 {status}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { url, requests }
    }

    /// First line of every request received so far.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.lines().next().unwrap_or_default().to_string())
            .collect()
    }
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// A MyMemory response envelope carrying `text`.
pub fn envelope(text: &str) -> String {
    serde_json::json!({
        "responseData": { "translatedText": text, "match": 1 },
        "responseStatus": 200
    })
    .to_string()
}

/// An address nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/get")
}
