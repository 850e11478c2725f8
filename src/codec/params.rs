// src/codec/params.rs

/// Tunables shared by the encoder and decoder.
///
/// None of these affect the bytes produced; they only control buffering and
/// how often progress observers are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParams {
    /// Units (input bytes when encoding, output bytes when decoding) between
    /// progress reports. 0 disables periodic reports.
    pub progress_interval: u64,
    /// Capacity of the buffered readers and writers used for file I/O.
    pub buffer_size: usize,
}

impl Default for CodecParams {
    fn default() -> Self {
        Self {
            progress_interval: 100_000,
            buffer_size: 64 * 1024,
        }
    }
}

impl CodecParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Sets the I/O buffer size. Values below 1 are clamped to 1.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }
}
