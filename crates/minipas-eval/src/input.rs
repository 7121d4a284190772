//! Integer token reader backing `readln`.

use std::io::BufRead;

use crate::error::{EvalError, EvalResult};

/// Reads whitespace-separated integers from a buffered stream.
///
/// Tokens may span several per line or one per line; the reader only
/// consumes what it needs, so the rest of the stream stays available
/// to later reads.
pub(crate) struct InputReader<R> {
    reader: R,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next token and parse it as a signed decimal integer.
    pub fn read_int(&mut self) -> EvalResult<i64> {
        let token = self
            .next_token()?
            .ok_or_else(|| EvalError::InvalidInput("unexpected end of input".into()))?;
        token
            .parse()
            .map_err(|_| EvalError::InvalidInput(format!("expected an integer, got '{token}'")))
    }

    fn next_token(&mut self) -> EvalResult<Option<String>> {
        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(b);
                }
                used += 1;
            }
            self.reader.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }
}
