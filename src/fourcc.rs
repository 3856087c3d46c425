use std::fmt::Debug;
use std::io;

/// A Four-character Code
///
/// For identifying chunks and structured segments within a WAV file.
#[derive(Eq, PartialEq, Hash, Copy, Clone)]
pub struct FourCC([u8; 4]);

impl FourCC {
    pub const fn make(s: &[u8; 4]) -> Self {
        Self(*s)
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        FourCC(bytes)
    }
}

impl From<FourCC> for [u8; 4] {
    fn from(fourcc: FourCC) -> Self {
        fourcc.0
    }
}

impl From<&FourCC> for String {
    fn from(f: &FourCC) -> Self {
        f.0.iter().map(|b| *b as char).collect::<String>()
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let s: String = self.into();
        write!(f, "FourCC({})", s)
    }
}

pub trait ReadFourCC: io::Read {
    fn read_fourcc(&mut self) -> Result<FourCC, io::Error>;
}

pub trait WriteFourCC: io::Write {
    fn write_fourcc(&mut self, fourcc: FourCC) -> Result<(), io::Error>;
}

impl<T> ReadFourCC for T
where
    T: io::Read,
{
    fn read_fourcc(&mut self) -> Result<FourCC, io::Error> {
        let mut buf: [u8; 4] = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(FourCC::from(buf))
    }
}

impl<T> WriteFourCC for T
where
    T: io::Write,
{
    fn write_fourcc(&mut self, fourcc: FourCC) -> Result<(), io::Error> {
        let buf: [u8; 4] = fourcc.into();
        self.write_all(&buf)?;
        Ok(())
    }
}

pub const RIFF_SIG: FourCC = FourCC::make(b"RIFF");
pub const WAVE_SIG: FourCC = FourCC::make(b"WAVE");

pub const FMT__SIG: FourCC = FourCC::make(b"fmt ");
pub const FACT_SIG: FourCC = FourCC::make(b"fact");
pub const DATA_SIG: FourCC = FourCC::make(b"data");
