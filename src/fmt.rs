use uuid::Uuid;

/// Integer linear PCM, the basic `WAVEFORMATEX` codec tag.
pub const WAVE_FORMAT_PCM: u16 = 0x0001;

/// `WAVEFORMATEXTENSIBLE` marker tag.
///
/// The codec proper is named by a sub-format GUID trailing the basic
/// header fields.
pub const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/* RFC 2361 §4:

 WAVE Format IDs are converted to GUIDs by inserting the hexadecimal
   value of the WAVE Format ID into the XXXXXXXX part of the following
   template: {XXXXXXXX-0000-0010-8000-00AA00389B71}. For example, a WAVE
   Format ID of 123 has the GUID value of {00000123-0000-0010-8000-
   00AA00389B71}.

*/

/// Sub-format GUID for integer linear PCM inside an extensible header.
pub const SUBFORMAT_PCM: Uuid = Uuid::from_bytes([
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
]);

/// Speaker assignment mask written into an extensible header.
///
/// Channel counts with a conventional loudspeaker layout map to the
/// matching `dwChannelMask` bits; any other count makes no layout claim
/// and maps to zero.
pub fn channel_mask(channels: u16) -> u32 {
    match channels {
        1 => 0x4,   // FC
        2 => 0x3,   // FL | FR
        4 => 0x33,  // FL | FR | BL | BR
        6 => 0x3f,  // 5.1
        8 => 0x63f, // 7.1
        _ => 0x0,
    }
}
