use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
    TokenizerResult,
};
use std::cell::RefCell;
use std::io::{self, Read};

pub(crate) mod game_page;
pub(crate) mod score;
pub(crate) mod search_results;

pub use game_page::{extract_game, GamePageScanner};
pub use score::{parse_metascore, parse_user_score, Score};
pub use search_results::{extract_links, SearchResultScanner};

const CHUNK_SIZE: usize = 8 * 1024;

/// A flat view of the markup token stream. Comments, doctypes and parse
/// errors never reach a scanner.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    Start(&'a Tag),
    End(&'a Tag),
    Text(&'a str),
}

/// A single-pass state machine over `ScanEvent`s.
pub trait PageScanner {
    type Output;

    fn on_event(&mut self, event: ScanEvent<'_>);

    /// Once true, the rest of the input is not read.
    fn is_done(&self) -> bool {
        false
    }

    fn finish(&mut self) -> Self::Output;
}

struct ScanSink<S> {
    scanner: RefCell<S>,
}

impl<S: PageScanner> TokenSink for ScanSink<S> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut scanner = self.scanner.borrow_mut();
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    scanner.on_event(ScanEvent::Start(&tag));
                    if let Some(kind) = raw_kind(&tag) {
                        return TokenSinkResult::RawData(kind);
                    }
                }
                TagKind::EndTag => scanner.on_event(ScanEvent::End(&tag)),
            },
            Token::CharacterTokens(text) => scanner.on_event(ScanEvent::Text(&text)),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Without a tree builder nobody tells the tokenizer that script or style
/// bodies are raw text, so the sink does it.
fn raw_kind(tag: &Tag) -> Option<RawKind> {
    match &*tag.name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// Runs `scanner` over the markup read from `reader`, chunk by chunk.
pub fn scan<S: PageScanner, R: Read>(scanner: S, mut reader: R) -> io::Result<S::Output> {
    let tokenizer = Tokenizer::new(
        ScanSink {
            scanner: RefCell::new(scanner),
        },
        TokenizerOpts::default(),
    );
    let input = BufferQueue::default();
    let mut decoder = Utf8Decoder::default();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut stopped_early = false;

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        let text = decoder.decode(&buf[..read]);
        if !text.is_empty() {
            input.push_back(StrTendril::from(text));
            feed(&tokenizer, &input);
        }

        if tokenizer.sink.scanner.borrow().is_done() {
            stopped_early = true;
            break;
        }
    }

    if !stopped_early {
        let rest = decoder.flush();
        if !rest.is_empty() {
            input.push_back(StrTendril::from(rest));
            feed(&tokenizer, &input);
        }
        tokenizer.end();
    }

    let output = tokenizer.sink.scanner.borrow_mut().finish();
    Ok(output)
}

/// Drains `input` into the tokenizer. The sink never hands back a script to
/// run, so the first call already returns `Done`.
fn feed<S: TokenSink>(tokenizer: &Tokenizer<S>, input: &BufferQueue) {
    while let TokenizerResult::Script(_) = tokenizer.feed(input) {}
}

/// Decodes UTF-8 that may be split at arbitrary byte offsets. Incomplete
/// sequences at the end of a chunk wait for the next one; invalid bytes
/// become U+FFFD.
#[derive(Debug, Default)]
struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::with_capacity(self.pending.len());
        let mut rest: &[u8] = &self.pending;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        let consumed = self.pending.len() - rest.len();
        self.pending.drain(..consumed);
        out
    }

    fn flush(&mut self) -> String {
        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        rest
    }
}

pub(crate) fn attr<'a>(tag: &'a Tag, name: &str) -> Option<&'a str> {
    tag.attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| &*a.value)
}

/// True when the tag's class list contains every one of `classes`.
pub(crate) fn has_classes(tag: &Tag, classes: &[&str]) -> bool {
    attr(tag, "class").is_some_and(|value| {
        let present: Vec<&str> = value.split_ascii_whitespace().collect();
        classes.iter().all(|class| present.contains(class))
    })
}

pub(crate) fn is_tag(tag: &Tag, name: &str) -> bool {
    &*tag.name == name
}
