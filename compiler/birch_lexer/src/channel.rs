//! Lexing on a producer thread.
//!
//! [`spawn_lexer`] moves the source onto a worker thread that lexes and
//! sends tokens through a bounded crossbeam channel. The parser pulls from
//! the receiving end through [`ChannelSource`], which implements
//! [`TokenSource`]. A closed channel reads as end of input.

use std::thread::JoinHandle;

use birch_ir::{Position, Token, TokenKind, TokenSource};
use crossbeam::channel::{self, Receiver};
use tracing::debug;

use crate::{LexError, Lexer};

/// Tokens buffered between producer and parser.
pub const CHANNEL_CAPACITY: usize = 256;

/// Receiving end of a token channel.
pub struct ChannelSource {
    rx: Receiver<Token>,
    eof: Option<Token>,
    last_pos: Position,
    producer: Option<JoinHandle<Vec<LexError>>>,
}

impl ChannelSource {
    /// Wrap a receiver fed by some other producer.
    pub fn from_receiver(rx: Receiver<Token>) -> Self {
        ChannelSource {
            rx,
            eof: None,
            last_pos: Position::START,
            producer: None,
        }
    }

    /// Hang up and collect the producer's lex errors.
    ///
    /// Safe to call before the producer has sent everything: dropping the
    /// receiver first makes its next send fail, so the join cannot block.
    pub fn finish(self) -> Vec<LexError> {
        let ChannelSource { rx, producer, .. } = self;
        drop(rx);
        producer
            .map(|handle| handle.join().unwrap_or_default())
            .unwrap_or_default()
    }
}

impl TokenSource for ChannelSource {
    fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }
        match self.rx.recv() {
            Ok(token) => {
                self.last_pos = token.pos;
                if token.is(TokenKind::Eof) {
                    self.eof = Some(token.clone());
                }
                token
            }
            Err(_) => {
                debug!(pos = %self.last_pos, "token channel closed");
                let eof = Token::eof(self.last_pos);
                self.eof = Some(eof.clone());
                eof
            }
        }
    }
}

/// Lex `source` on a new thread and return the channel it feeds.
pub fn spawn_lexer(source: String) -> ChannelSource {
    let (tx, rx) = channel::bounded(CHANNEL_CAPACITY);
    let producer = std::thread::spawn(move || {
        let mut lexer = Lexer::new(&source);
        for token in lexer.by_ref() {
            if tx.send(token).is_err() {
                debug!("token consumer hung up");
                break;
            }
        }
        lexer.into_errors()
    });
    ChannelSource {
        rx,
        eof: None,
        last_pos: Position::START,
        producer: Some(producer),
    }
}
