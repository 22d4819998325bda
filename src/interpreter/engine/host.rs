use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

use rand::{SeedableRng, rngs::StdRng};

/// The outside world as seen by natives.
///
/// Output and input are boxed so the same interpreter can run against the
/// process's standard streams or against in-memory buffers.
pub struct Host {
    output: Box<dyn Write>,
    input:  Box<dyn BufRead>,
    rng:    StdRng,
}

impl Host {
    /// Creates a host over arbitrary streams, with an OS-seeded generator.
    pub fn new(output: impl Write + 'static, input: impl BufRead + 'static) -> Self {
        Self { output: Box::new(output),
               input:  Box::new(input),
               rng:    StdRng::from_entropy(), }
    }

    /// Creates a host over the process's standard output and input.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::BufReader::new(io::stdin()))
    }

    /// Replaces the random generator with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// The output stream.
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Reads one line of input without its line break.
    ///
    /// # Returns
    /// - `Ok(Some(String))`: The line.
    /// - `Ok(None)`: End of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
        buffer.truncate(trimmed);
        Ok(Some(buffer))
    }

    /// The random generator.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}

/// A cloneable in-memory output sink.
///
/// Hand one clone to a [`Host`] and keep the other to read what was written.
///
/// # Example
/// ```
/// use std::io::Write;
///
/// use linterp::interpreter::engine::host::SharedBuffer;
///
/// let buffer = SharedBuffer::default();
/// let mut sink = buffer.clone();
/// write!(sink, "hi").unwrap();
///
/// assert_eq!(buffer.contents(), "hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
