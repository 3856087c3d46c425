use std::io::{Cursor, Write};

use byteorder::LittleEndian;
use byteorder::{ReadBytesExt, WriteBytesExt};

use super::audio::AudioBuffer;
use super::errors::Error;
use super::fmt::{channel_mask, SUBFORMAT_PCM, WAVE_FORMAT_EXTENSIBLE, WAVE_FORMAT_PCM};
use super::fourcc::{WriteFourCC, DATA_SIG, FACT_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};

// Fixed layout of the supported profile: a RIFF/WAVE header with `fmt `
// at offset 12 and `data` immediately after it (after the trailing `fact`
// chunk for extensible streams).

/// Byte offset of the codec tag, the first `fmt ` content field.
const FORMAT_TAG_AT: u64 = 20;

/// Byte offset of the `data` chunk size field for each header layout.
const PCM_DATA_SIZE_AT: u64 = 40;
const EXTENSIBLE_DATA_SIZE_AT: u64 = 76;

/// RIFF form size in excess of the payload for each header layout,
/// everything after the form size field itself.
const PCM_FORM_OVERHEAD: u32 = 36;
const EXTENSIBLE_FORM_OVERHEAD: u32 = 72;

/// `fmt ` chunk content size for each header layout.
const PCM_FMT_SIZE: u32 = 16;
const EXTENSIBLE_FMT_SIZE: u32 = 40;

/// Size of the extension fields trailing the basic `fmt ` record.
const EXTENSIBLE_CB_SIZE: u16 = 22;

impl AudioBuffer {
    /// Parse a WAVE stream laid out in the fixed profile.
    ///
    /// Header fields are read at fixed byte offsets rather than by walking
    /// the chunk list, so the stream must carry `fmt ` as its first chunk
    /// and `data` directly after the format record. The codec tag is
    /// validated; every other header field is taken from the stream
    /// verbatim, including a `bits_per_sample` that [`AudioBuffer::new`]
    /// would reject.
    ///
    /// A stream shorter than its declared payload size yields a truncated
    /// payload, not an error. A stream too short to hold the header fails
    /// with `Error::IOError`.
    pub fn decode(stream: &[u8]) -> Result<AudioBuffer, Error> {
        let mut rdr = Cursor::new(stream);

        rdr.set_position(FORMAT_TAG_AT);
        let format_tag = rdr.read_u16::<LittleEndian>()?;

        if !(format_tag == WAVE_FORMAT_PCM || format_tag == WAVE_FORMAT_EXTENSIBLE) {
            return Err(Error::UnsupportedFormatTag { tag: format_tag });
        }

        let channels = rdr.read_u16::<LittleEndian>()?;
        let samples_per_sec = rdr.read_u32::<LittleEndian>()?;
        let avg_bytes_per_sec = rdr.read_u32::<LittleEndian>()?;
        let block_align = rdr.read_u16::<LittleEndian>()?;
        let bits_per_sample = rdr.read_u16::<LittleEndian>()?;

        let size_at = if format_tag == WAVE_FORMAT_PCM {
            PCM_DATA_SIZE_AT
        } else {
            EXTENSIBLE_DATA_SIZE_AT
        };

        rdr.set_position(size_at);
        let declared = rdr.read_u32::<LittleEndian>()? as usize;

        let start = (size_at + 4) as usize;
        let end = (start + declared).min(stream.len());
        let data = if start < end {
            stream[start..end].to_vec()
        } else {
            vec![]
        };

        Ok(AudioBuffer {
            format_tag,
            channels,
            samples_per_sec,
            avg_bytes_per_sec,
            block_align,
            bits_per_sample,
            length: data.len() as u32,
            data,
            read_cursor: 0,
        })
    }

    /// Serialize the buffer into a byte-exact RIFF/WAVE stream.
    ///
    /// Streams with the extensible codec tag additionally carry the
    /// `WAVEFORMATEXTENSIBLE` extension fields, the integer PCM sub-format
    /// GUID and a `fact` chunk holding the frame count.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut out: Vec<u8> = Vec::with_capacity(self.data.len() + 80);

        out.write_fourcc(RIFF_SIG)?;
        match self.format_tag {
            WAVE_FORMAT_PCM => out.write_u32::<LittleEndian>(self.length + PCM_FORM_OVERHEAD)?,
            WAVE_FORMAT_EXTENSIBLE => {
                out.write_u32::<LittleEndian>(self.length + EXTENSIBLE_FORM_OVERHEAD)?
            }
            tag => return Err(Error::InvalidFormatTag { tag }),
        }
        out.write_fourcc(WAVE_SIG)?;

        out.write_fourcc(FMT__SIG)?;
        if self.format_tag == WAVE_FORMAT_PCM {
            out.write_u32::<LittleEndian>(PCM_FMT_SIZE)?;
        } else {
            out.write_u32::<LittleEndian>(EXTENSIBLE_FMT_SIZE)?;
        }

        out.write_u16::<LittleEndian>(self.format_tag)?;
        out.write_u16::<LittleEndian>(self.channels)?;
        out.write_u32::<LittleEndian>(self.samples_per_sec)?;
        out.write_u32::<LittleEndian>(self.avg_bytes_per_sec)?;
        out.write_u16::<LittleEndian>(self.block_align)?;
        out.write_u16::<LittleEndian>(self.bits_per_sample)?;

        if self.format_tag == WAVE_FORMAT_EXTENSIBLE {
            out.write_u16::<LittleEndian>(EXTENSIBLE_CB_SIZE)?;
            // wValidBitsPerSample, all container bits carry audio
            out.write_u16::<LittleEndian>(self.bits_per_sample)?;
            out.write_u32::<LittleEndian>(channel_mask(self.channels))?;
            out.write_all(SUBFORMAT_PCM.as_bytes())?;

            out.write_fourcc(FACT_SIG)?;
            out.write_u32::<LittleEndian>(4)?;
            out.write_u32::<LittleEndian>(self.frame_count())?;
        }

        out.write_fourcc(DATA_SIG)?;
        out.write_u32::<LittleEndian>(self.length)?;
        out.extend_from_slice(&self.data);

        Ok(out)
    }
}
