extern crate wavbuf;

use std::io::{Read, Write};

use wavbuf::{AudioBuffer, Error, WAVE_FORMAT_EXTENSIBLE, WAVE_FORMAT_PCM};

/// A one-period 16-bit mono sawtooth, handy because every byte differs.
fn sawtooth_payload() -> Vec<u8> {
    (-64i16..64)
        .flat_map(|s| (s * 512).to_le_bytes().to_vec())
        .collect()
}

fn sawtooth_stream() -> Vec<u8> {
    let mut audio = AudioBuffer::new(44100, 16, 1).unwrap();
    audio.write(&sawtooth_payload()).unwrap();
    audio.encode().unwrap()
}

#[test]
fn test_end_to_end_stereo_cd_quality() -> Result<(), Error> {
    let mut source = AudioBuffer::new(44100, 16, 2)?;
    source.write(&[0u8; 4 * 100]).map_err(Error::IOError)?;

    let audio = AudioBuffer::decode(&source.encode()?)?;

    assert_eq!(audio.samples_per_sec(), 44100);
    assert_eq!(audio.bits_per_sample(), 16);
    assert_eq!(audio.channels(), 2);
    assert_eq!(audio.format_tag(), WAVE_FORMAT_PCM);
    assert_eq!(audio.block_align(), 4);
    assert_eq!(audio.avg_bytes_per_sec(), 44100 * 4);
    assert_eq!(audio.length(), 400);
    assert_eq!(audio.samples(), 200);
    Ok(())
}

#[test]
fn test_byte_exact_round_trip() -> Result<(), Error> {
    let stream = sawtooth_stream();
    let audio = AudioBuffer::decode(&stream)?;
    assert_eq!(audio.encode()?, stream);
    Ok(())
}

#[test]
fn test_extensible_round_trip_keeps_header_verbatim() -> Result<(), Error> {
    let mut audio = AudioBuffer::new(96000, 24, 6)?;
    audio.write(&[0x11u8; 18 * 4]).map_err(Error::IOError)?;
    assert_eq!(audio.format_tag(), WAVE_FORMAT_EXTENSIBLE);

    let stream = audio.encode()?;
    let parsed = AudioBuffer::decode(&stream)?;

    assert_eq!(parsed.format_tag(), WAVE_FORMAT_EXTENSIBLE);
    assert_eq!(parsed.channels(), 6);
    assert_eq!(parsed.bits_per_sample(), 24);
    assert_eq!(parsed.encode()?, stream);
    Ok(())
}

#[test]
fn test_decoded_payload_reads_back_in_order() -> Result<(), Error> {
    let expected = sawtooth_payload();
    let mut audio = AudioBuffer::decode(&sawtooth_stream())?;

    let mut consumed: Vec<u8> = vec![];
    audio.read_to_end(&mut consumed).map_err(Error::IOError)?;

    assert_eq!(consumed, expected);
    assert_eq!(AudioBuffer::bytes(&audio), expected.as_slice());
    Ok(())
}

#[test]
fn test_copy_between_buffers() -> Result<(), Error> {
    let mut src = AudioBuffer::decode(&sawtooth_stream())?;
    let mut dest = AudioBuffer::new(src.samples_per_sec(), src.bits_per_sample(), src.channels())?;

    let copied = std::io::copy(&mut src, &mut dest)?;

    assert_eq!(copied, src.length() as u64);
    assert_eq!(dest.length(), src.length());
    assert_eq!(AudioBuffer::bytes(&dest), AudioBuffer::bytes(&src));
    Ok(())
}

#[test]
fn test_sample_export() -> Result<(), Error> {
    let audio = AudioBuffer::decode(&sawtooth_stream())?;

    let ints = audio.to_i32_samples();
    assert_eq!(ints.len(), audio.samples());
    assert_eq!(ints[0], -32768 << 16);
    assert_eq!(ints[64], 0);

    let floats = audio.to_f64_samples();
    assert_eq!(floats.len(), ints.len());
    assert!(floats[0] < -0.999 && floats[0] >= -1.0);
    assert_eq!(floats[64], 0.0);
    Ok(())
}
