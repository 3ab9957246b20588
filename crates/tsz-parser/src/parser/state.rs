//! Parser state: token plumbing, backtracking and failure tracking.
//!
//! Productions never report errors eagerly. A failing production records why
//! it failed via `fail`, and only the failure that got furthest into the
//! source survives. When the entry point gives up, that one failure becomes
//! the diagnostic.

use tracing::{debug, trace};
use tsz_common::diagnostics::{Diagnostic, DiagnosticMessage, diagnostic_messages};
use tsz_common::limits::MAX_JSDOC_TYPE_NESTING_DEPTH;
use tsz_scanner::{ScannerState, SyntaxKind, punctuation_to_text};

/// The furthest point a production reached before failing.
#[derive(Clone, Debug)]
struct PendingFailure {
    start: u32,
    length: u32,
    message: &'static DiagnosticMessage,
    arg: Option<String>,
}

/// Saved parser cursor: the scanner snapshot plus the cached current token.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParserSnapshot {
    scanner: tsz_scanner::ScannerSnapshot,
    current_token: SyntaxKind,
}

/// A single-threaded, reusable JSDoc type-expression parser over one source
/// text.
pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) current_token: SyntaxKind,
    file_name: String,
    nesting_depth: u32,
    furthest_failure: Option<PendingFailure>,
    parse_diagnostics: Vec<Diagnostic>,
}

impl ParserState {
    pub fn new(file_name: String, source_text: String) -> ParserState {
        ParserState {
            scanner: ScannerState::new(source_text, true),
            current_token: SyntaxKind::Unknown,
            file_name,
            nesting_depth: 0,
            furthest_failure: None,
            parse_diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[inline]
    pub fn source_text(&self) -> &str {
        self.scanner.source_text()
    }

    /// Diagnostics from the most recent parse: empty after a success, exactly
    /// one after a failure.
    #[inline]
    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.parse_diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.parse_diagnostics)
    }

    /// Reset per-parse state and position the cursor on the first token at
    /// `start`, limiting the visible text to `length` bytes when given.
    pub(crate) fn begin_parse(&mut self, start: u32, length: Option<u32>) {
        self.parse_diagnostics.clear();
        self.furthest_failure = None;
        self.nesting_depth = 0;

        let end = match length {
            Some(length) => start.saturating_add(length),
            None => self.scanner.text_len(),
        };
        self.scanner.set_text_end(end);
        self.scanner.reset_token_state(start);
        self.next_token();
    }

    // =========================================================================
    // Token access
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.scan();
        self.current_token
    }

    /// Full start of the current token: where a node beginning here starts.
    #[inline]
    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.get_token_full_start()
    }

    #[inline]
    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.get_token_end()
    }

    /// End of the last consumed token. Trivia is only ever skipped in front
    /// of a token, so this is the full start of the current one.
    #[inline]
    pub(crate) fn node_end(&self) -> u32 {
        self.scanner.get_token_full_start()
    }

    #[inline]
    pub(crate) fn token_value(&self) -> &str {
        self.scanner.get_token_value_ref()
    }

    /// Identifiers plus keywords that are not reserved words.
    #[inline]
    pub(crate) fn is_identifier(&self) -> bool {
        self.scanner.is_identifier()
    }

    #[inline]
    pub(crate) fn is_reserved_word(&self) -> bool {
        self.scanner.is_reserved_word()
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with `'<kind>' expected.`.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> Option<()> {
        if self.parse_optional(kind) {
            return Some(());
        }
        let text = punctuation_to_text(kind).unwrap_or("token");
        self.fail(&diagnostic_messages::EXPECTED, Some(text))
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    #[inline]
    pub(crate) fn save_state(&self) -> ParserSnapshot {
        ParserSnapshot {
            scanner: self.scanner.save_state(),
            current_token: self.current_token,
        }
    }

    #[inline]
    pub(crate) fn restore_state(&mut self, snapshot: ParserSnapshot) {
        self.scanner.restore_state(snapshot.scanner);
        self.current_token = snapshot.current_token;
    }

    /// Run `parse`, rewinding the cursor to where it started if it fails.
    pub(crate) fn try_parse<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.save_state();
        let result = parse(self);
        if result.is_none() {
            trace!(
                pos = snapshot.scanner.token_full_start(),
                "backtracking"
            );
            self.restore_state(snapshot);
        }
        result
    }

    /// Run `parse` one nesting level deeper, failing once the nesting limit
    /// is reached.
    pub(crate) fn with_nesting<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        if self.nesting_depth >= MAX_JSDOC_TYPE_NESTING_DEPTH {
            debug!(
                depth = self.nesting_depth,
                pos = self.token_pos(),
                "type nesting limit reached"
            );
            return self.fail(&diagnostic_messages::UNEXPECTED_TOKEN, None);
        }
        self.nesting_depth += 1;
        let result = parse(self);
        self.nesting_depth -= 1;
        result
    }

    // =========================================================================
    // Failure tracking
    // =========================================================================

    /// Record a failure at the current token and return `None`.
    ///
    /// Only the furthest failure is kept; on a tie the first one wins.
    pub(crate) fn fail<T>(
        &mut self,
        message: &'static DiagnosticMessage,
        arg: Option<&str>,
    ) -> Option<T> {
        let start = self.scanner.get_token_start();
        let is_further = self
            .furthest_failure
            .as_ref()
            .is_none_or(|failure| start > failure.start);
        if is_further {
            self.furthest_failure = Some(PendingFailure {
                start,
                length: self.token_end().saturating_sub(start),
                message,
                arg: arg.map(str::to_string),
            });
        }
        None
    }

    /// Fail on a token that should have been an identifier.
    pub(crate) fn fail_identifier_expected<T>(&mut self) -> Option<T> {
        if self.is_reserved_word() {
            let text = self.scanner.get_token_text().to_string();
            return self.fail(
                &diagnostic_messages::IDENTIFIER_EXPECTED_IS_A_RESERVED_WORD_THAT_CANNOT_BE_USED_HERE,
                Some(text.as_str()),
            );
        }
        self.fail(&diagnostic_messages::IDENTIFIER_EXPECTED, None)
    }

    /// Turn the furthest recorded failure into this parse's diagnostic.
    pub(crate) fn report_furthest_failure(&mut self) {
        let failure = match self.furthest_failure.take() {
            Some(failure) => failure,
            None => PendingFailure {
                start: self.scanner.get_token_start(),
                length: self
                    .token_end()
                    .saturating_sub(self.scanner.get_token_start()),
                message: &diagnostic_messages::UNEXPECTED_TOKEN,
                arg: None,
            },
        };
        debug!(
            file = %self.file_name,
            start = failure.start,
            code = failure.message.code,
            "rejected JSDoc type expression"
        );
        let args: Vec<&str> = failure.arg.as_deref().into_iter().collect();
        self.parse_diagnostics.push(Diagnostic::from_message(
            self.file_name.clone(),
            failure.start,
            failure.length,
            failure.message,
            &args,
        ));
    }
}
