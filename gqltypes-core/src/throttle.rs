//! Rate-limited console logging for generator output.
//!
//! The generator tends to print the same progress line many times in a row.
//! A [`Throttle`] sits between the generator and the console and collapses
//! such runs into one visible line plus a repeat count.

/// Destination for throttled messages.
pub trait LogSink {
    fn emit(&mut self, message: &str);
}

/// Sink that forwards every message to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&mut self, message: &str) {
        tracing::info!(target: "generator", "{}", message);
    }
}

/// In-memory sink, handy for capturing what would have been printed.
impl LogSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Collapses consecutive duplicate messages before they reach a [`LogSink`].
///
/// One instance is created per run and handed to whatever produces output.
#[derive(Debug)]
pub struct Throttle<S: LogSink> {
    sink: S,
    last: Option<String>,
    pending_repeats: usize,
    suppressed: usize,
}

impl<S: LogSink> Throttle<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            last: None,
            pending_repeats: 0,
            suppressed: 0,
        }
    }

    /// Log one chunk of output.
    ///
    /// Trailing whitespace is ignored when comparing against the previous
    /// message, and blank chunks are dropped.
    pub fn log(&mut self, chunk: &str) {
        let message = chunk.trim_end();
        if message.is_empty() {
            return;
        }

        if self.last.as_deref() == Some(message) {
            self.pending_repeats += 1;
            self.suppressed += 1;
            return;
        }

        self.flush();
        self.sink.emit(message);
        self.last = Some(message.to_string());
    }

    /// Emit the repeat count for the current run of duplicates, if any.
    pub fn flush(&mut self) {
        if self.pending_repeats > 0 {
            let note = format!(
                "(previous message repeated {} times)",
                self.pending_repeats
            );
            self.sink.emit(&note);
            self.pending_repeats = 0;
        }
    }

    /// Total number of messages swallowed so far.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Flush and hand back the sink.
    pub fn into_sink(mut self) -> S {
        self.flush();
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_messages_pass_through() {
        let mut throttle = Throttle::new(Vec::new());
        throttle.log("one");
        throttle.log("two");

        assert_eq!(throttle.into_sink(), ["one", "two"]);
    }

    #[test]
    fn test_duplicates_collapse_with_count() {
        let mut throttle = Throttle::new(Vec::new());
        throttle.log("Loading Apollo Project\n");
        throttle.log("Loading Apollo Project");
        throttle.log("Loading Apollo Project  \n");
        throttle.log("Generating query files");

        assert_eq!(throttle.suppressed(), 2);
        assert_eq!(
            throttle.into_sink(),
            [
                "Loading Apollo Project",
                "(previous message repeated 2 times)",
                "Generating query files",
            ]
        );
    }

    #[test]
    fn test_flush_emits_trailing_repeats_once() {
        let mut throttle = Throttle::new(Vec::new());
        throttle.log("done");
        throttle.log("done");
        throttle.flush();
        throttle.flush();

        assert_eq!(
            throttle.sink(),
            &["done", "(previous message repeated 1 times)"]
        );
    }

    #[test]
    fn test_blank_chunks_are_dropped() {
        let mut throttle = Throttle::new(Vec::new());
        throttle.log("\n");
        throttle.log("   ");
        throttle.log("");

        assert!(throttle.into_sink().is_empty());
    }

    #[test]
    fn test_repeat_after_other_message_is_shown() {
        let mut throttle = Throttle::new(Vec::new());
        throttle.log("a");
        throttle.log("b");
        throttle.log("a");

        assert_eq!(throttle.suppressed(), 0);
        assert_eq!(throttle.into_sink(), ["a", "b", "a"]);
    }
}
