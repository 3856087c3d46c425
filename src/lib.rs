/*!
# wavbuf

In-memory WAVE (.wav) buffer codec with sample bit-depth conversion.

This crate parses a complete RIFF/WAVE byte buffer into an [`AudioBuffer`]
and serializes an `AudioBuffer` back into a byte-exact stream. It handles
the two integer PCM header layouts you will meet in practice: the classic
16-byte `WAVEFORMATEX` header (format tag 0x0001) and the 40-byte
`WAVEFORMATEXTENSIBLE` header (format tag 0xFFFE) with its `fact` chunk.

The raw sample payload is kept verbatim at its native bit depth. On demand
it can be reinterpreted as normalized `i32` or `f64` sample sequences for
8, 16, 24 and 32-bit signed integer audio.

```
use wavbuf::AudioBuffer;
use std::io::Write;

let mut audio = AudioBuffer::new(44100, 16, 2).unwrap();
audio.write(&[0x00, 0x01, 0x00, 0xff]).unwrap();

let stream = audio.encode().unwrap();
let parsed = AudioBuffer::decode(&stream).unwrap();

assert_eq!(parsed.encode().unwrap(), stream);
```

Things that are _not_ in the scope of this crate:

- Compressed wave codecs (ADPCM, MPEG-in-WAV and friends). Only integer
  linear PCM is read and written.
- Streaming or incremental parsing. The whole file is assumed to fit in
  memory; file I/O belongs to the caller.
- Chunks other than `fmt `, `fact` and `data`. Metadata planes such as
  `bext`, `cue ` or `LIST` are passed over entirely.

## Resources

- [MSDN WAVEFORMATEX](https://docs.microsoft.com/en-us/windows/win32/api/mmeapi/ns-mmeapi-waveformatex)
- [MSDN WAVEFORMATEXTENSIBLE](https://docs.microsoft.com/en-us/windows/win32/api/mmreg/ns-mmreg-waveformatextensible)
- [RFC 2361](https://tools.ietf.org/html/rfc2361) (June 1998) "WAVE and AVI Codec Registries"
- [Peter Kabal, McGill University](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/WAVE.html)
- [Multimedia Programming Interface and Data Specifications 1.0](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/Docs/riffmci.pdf)
  (August 1991), IBM Corporation and Microsoft Corporation
*/

extern crate byteorder;
extern crate dasp_sample;
extern crate uuid;

mod fourcc;
mod errors;
mod fmt;

mod audio;
mod codec;
mod convert;

pub use audio::AudioBuffer;
pub use errors::Error;
pub use fmt::{channel_mask, SUBFORMAT_PCM, WAVE_FORMAT_EXTENSIBLE, WAVE_FORMAT_PCM};
