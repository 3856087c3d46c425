use dasp_sample::{Sample, I24};

use super::audio::AudioBuffer;

// Widen a little-endian 3-byte signed value. The top bit of the third
// byte carries the sign and must fill the missing high byte.
fn sign_extend_24(bytes: &[u8]) -> i32 {
    (i32::from(bytes[2] as i8) << 16) | (i32::from(bytes[1]) << 8) | i32::from(bytes[0])
}

impl AudioBuffer {
    /// The payload reinterpreted as signed 32-bit samples.
    ///
    /// Samples are scaled up to full 32-bit amplitude, so a sample shorter
    /// than 32 bits lands in the high-order bits of its word: 8-bit
    /// samples are scaled by 2^24, 16-bit by 2^16, 24-bit by 2^8 and
    /// 32-bit samples pass through verbatim.
    ///
    /// Any other bit depth yields an empty vector rather than an error;
    /// validate the depth upstream if you need to tell the cases apart.
    /// The payload itself is never mutated.
    pub fn to_i32_samples(&self) -> Vec<i32> {
        match self.bits_per_sample {
            8 => self.data.iter().map(|&b| (b as i8).to_sample()).collect(),
            16 => self
                .data
                .chunks_exact(2)
                .map(|b| i16::from_le_bytes([b[0], b[1]]).to_sample())
                .collect(),
            24 => self
                .data
                .chunks_exact(3)
                .map(|b| I24::from(sign_extend_24(b)).to_sample())
                .collect(),
            32 => self
                .data
                .chunks_exact(4)
                .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect(),
            _ => vec![],
        }
    }

    /// The payload reinterpreted as floating point samples in [-1.0, 1.0).
    ///
    /// Each 32-bit sample from [`AudioBuffer::to_i32_samples`] divided by
    /// 2^31, so the lenient empty result for unknown bit depths carries
    /// over.
    pub fn to_f64_samples(&self) -> Vec<f64> {
        self.to_i32_samples()
            .into_iter()
            .map(Sample::to_sample)
            .collect()
    }
}
