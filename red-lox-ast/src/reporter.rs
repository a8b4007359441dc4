use crate::error::RuntimeError;

/// Sink for diagnostics raised while printing a tree. Implementations must not
/// fail: a reporter is the end of the line for an error.
pub trait Reporter {
    fn report(&mut self, error: &RuntimeError);
}

/// Keeps every reported error, in reporting order.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<RuntimeError>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuntimeError> {
        self.errors.iter()
    }

    pub fn into_inner(self) -> Vec<RuntimeError> {
        self.errors
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: &RuntimeError) {
        log::debug!("collected diagnostic: {}", error);
        self.errors.push(error.clone());
    }
}

/// Writes one `[line N] Error at 'lexeme': message` line per reported error.
pub struct WriteReporter<W: std::io::Write> {
    out: W,
    reported: usize,
}

impl<W: std::io::Write> WriteReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, reported: 0 }
    }

    /// Number of errors reported so far, including ones that could not be written.
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: std::io::Write> Reporter for WriteReporter<W> {
    fn report(&mut self, error: &RuntimeError) {
        self.reported += 1;
        log::debug!("reporting diagnostic: {}", error);
        if let Err(e) = writeln!(
            self.out,
            "[line {}] Error at '{}': {}",
            error.token.line, error.token.lexeme, error.message
        ) {
            log::warn!("failed to write diagnostic ({}): {}", error, e);
        }
    }
}
