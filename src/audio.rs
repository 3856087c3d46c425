use std::fmt;
use std::io;
use std::time::Duration;

use super::errors::Error;
use super::fmt::{WAVE_FORMAT_EXTENSIBLE, WAVE_FORMAT_PCM};

/// An in-memory WAVE audio stream.
///
/// Holds the `fmt ` header fields alongside the raw `data` chunk payload,
/// byte-exact and channel-interleaved at its native bit depth. A buffer is
/// either created empty from format parameters with [`AudioBuffer::new`] or
/// populated from a byte stream with [`AudioBuffer::decode`].
///
/// The payload can be consumed sequentially through the [`io::Read`] impl
/// and appended to through the [`io::Write`] impl. Reading never mutates
/// the payload; it only advances an internal cursor that starts at zero
/// when the buffer is constructed.
#[derive(Debug, Default, Clone)]
pub struct AudioBuffer {
    pub(crate) format_tag: u16,
    pub(crate) channels: u16,
    pub(crate) samples_per_sec: u32,
    pub(crate) avg_bytes_per_sec: u32,
    pub(crate) block_align: u16,
    pub(crate) bits_per_sample: u16,
    pub(crate) length: u32,
    pub(crate) data: Vec<u8>,
    pub(crate) read_cursor: usize,
}

impl AudioBuffer {
    /// Create an empty audio buffer from format parameters.
    ///
    /// `bits_per_sample` must be a whole number of octets or
    /// `Error::InvalidBitsPerSample` is returned. Sample sizes above 16
    /// bits select the extensible header layout, everything else the
    /// plain PCM layout.
    pub fn new(samples_per_sec: u32, bits_per_sample: u16, channels: u16) -> Result<Self, Error> {
        if bits_per_sample % 8 != 0 {
            return Err(Error::InvalidBitsPerSample {
                bits: bits_per_sample,
            });
        }

        let format_tag = if bits_per_sample > 16 {
            WAVE_FORMAT_EXTENSIBLE
        } else {
            WAVE_FORMAT_PCM
        };

        let block_align = channels * bits_per_sample / 8;

        Ok(AudioBuffer {
            format_tag,
            channels,
            samples_per_sec,
            avg_bytes_per_sec: samples_per_sec * block_align as u32,
            block_align,
            bits_per_sample,
            length: 0,
            data: vec![],
            read_cursor: 0,
        })
    }

    /// Codec tag of the stream, either [`WAVE_FORMAT_PCM`] or
    /// [`WAVE_FORMAT_EXTENSIBLE`].
    pub fn format_tag(&self) -> u16 {
        self.format_tag
    }

    /// Count of interleaved channels in each frame.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate of the audio data.
    ///
    /// For example, CD quality audio is 44100 samples per second.
    pub fn samples_per_sec(&self) -> u32 {
        self.samples_per_sec
    }

    /// Count of bytes per second
    ///
    /// By rule, this is `block_align * samples_per_sec`.
    pub fn avg_bytes_per_sec(&self) -> u32 {
        self.avg_bytes_per_sec
    }

    /// Count of bytes per audio frame
    ///
    /// By rule, this is `channels * bits_per_sample / 8`.
    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    /// Count of bits stored per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Size of the sample payload in bytes, headers excluded.
    ///
    /// Same as `bytes().len()`.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The raw sample payload.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Total count of scalar samples the payload contains.
    ///
    /// Counts samples across all channels, not frames. Ten seconds of
    /// stereo 16 bit / 44.1 kHz audio contains 882000 samples.
    pub fn samples(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        let bytes_per_sample = (self.block_align / self.channels) as usize;
        if bytes_per_sample == 0 {
            return 0;
        }
        self.length as usize / bytes_per_sample
    }

    /// Playback time of the stream.
    pub fn duration(&self) -> Duration {
        if self.samples_per_sec == 0 {
            return Duration::from_secs(0);
        }
        Duration::from_secs_f64(self.frame_count() as f64 / self.samples_per_sec as f64)
    }

    /// Count of multichannel sample frames in the payload.
    ///
    /// A zero `block_align` from a hostile stream yields zero frames
    /// rather than a division panic.
    pub(crate) fn frame_count(&self) -> u32 {
        if self.block_align == 0 {
            return 0;
        }
        self.length / self.block_align as u32
    }
}

impl fmt::Display for AudioBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz / {} bit {} channel(s)",
            self.samples_per_sec, self.bits_per_sample, self.channels
        )
    }
}

/// Sequential consumption of the sample payload.
///
/// Returns `Ok(0)` once exactly `length()` bytes have been handed out.
impl io::Read for AudioBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let at = self.read_cursor.min(self.data.len());
        let remaining = &self.data[at..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.read_cursor = at + n;
        Ok(n)
    }
}

/// Sequential appends to the sample payload.
///
/// Every written byte grows `length()` by one.
impl io::Write for AudioBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        self.length += buf.len() as u32;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
