pub mod crypt;
pub mod error;


use byteorder::{ByteOrder, LittleEndian};

use crate::error::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Exact size of a film table file (in bytes)
pub const FILM_TABLE_SIZE: usize = 1132;
/// Size of the film table header (in bytes)
pub const HEADER_SIZE: usize = 108;
/// Size of the table name field (in bytes)
pub const NAME_SIZE: usize = 24;
/// Number of entries in each gain table
pub const GAIN_TABLE_LEN: usize = 8;
/// Number of entries in the colour LUT
pub const LUT_LEN: usize = 256;

const NAME_OFFSET: usize = 0;
const CAMERA_TYPE_OFFSET: usize = 24;
const FLAGS_OFFSET: usize = 25;
const ASPECT_WIDE_OFFSET: usize = 26;
const ASPECT_TALL_OFFSET: usize = 27;
const GAIN_OFFSET: usize = 28;
const MAGIC_OFFSET: usize = 76;
const LUT_OFFSET: usize = HEADER_SIZE;

/// Camera type stored in the film table header
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CameraType {
    /// Instant "pack" film
    PackFilm,
    /// 35mm film
    Film35mm,
    /// Instant "auto" (integral) film
    AutoFilm,
    /// 4x5 sheet film
    Sheet4x5,
    /// 6x7 roll film
    Roll6x7,
    /// 6x8 roll film
    Roll6x8,
    /// Raw value outside the known range, preserved verbatim
    Unknown(u8),
}

impl CameraType {
    /// Map a raw header byte to a camera type; never fails
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::PackFilm,
            1 => Self::Film35mm,
            2 => Self::AutoFilm,
            3 => Self::Sheet4x5,
            4 => Self::Roll6x7,
            5 => Self::Roll6x8,
            other => Self::Unknown(other),
        }
    }

    /// Get the raw header byte for this camera type
    pub fn as_raw(self) -> u8 {
        match self {
            Self::PackFilm => 0,
            Self::Film35mm => 1,
            Self::AutoFilm => 2,
            Self::Sheet4x5 => 3,
            Self::Roll6x7 => 4,
            Self::Roll6x8 => 5,
            Self::Unknown(raw) => raw,
        }
    }
}

impl core::fmt::Display for CameraType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PackFilm => write!(f, "pack-film"),
            Self::Film35mm => write!(f, "35mm"),
            Self::AutoFilm => write!(f, "auto-film"),
            Self::Sheet4x5 => write!(f, "4x5"),
            Self::Roll6x7 => write!(f, "6x7"),
            Self::Roll6x8 => write!(f, "6x8"),
            Self::Unknown(raw) => write!(f, "unknown({raw})"),
        }
    }
}

/// One entry of the channel gain table (meaning undocumented upstream)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GainTriad {
    pub a: u16,
    pub b: u16,
    pub c: u16,
}

/// One entry of the width/correction pair table (meaning undocumented upstream)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MagicPair {
    pub a: u16,
    pub b: u16,
}

/// One colour LUT entry, fields named after byte positions 0..3.
/// The channel order is unresolved upstream; the raw per-position
/// order is preserved as-is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LutEntry {
    pub delta_r: u8,
    pub delta_g: u8,
    pub delta_b: u8,
    pub dummy: u8,
}

impl LutEntry {
    /// Channel bytes in their raw on-disk order
    pub fn to_bytes(self) -> [u8; 4] {
        [self.delta_r, self.delta_g, self.delta_b, self.dummy]
    }
}

/// Film table header (first 108 bytes of the file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Table name; not guaranteed NUL-terminated, may carry trailing garbage
    pub name: [u8; NAME_SIZE],
    pub camera_type: CameraType,
    /// Film flags, semantics unknown
    pub flags: u8,
    pub aspect_wide: u8,
    pub aspect_tall: u8,
    pub gains: [GainTriad; GAIN_TABLE_LEN],
    pub magic: [MagicPair; GAIN_TABLE_LEN],
}

impl Header {
    /// Get the table name as text, truncated at the first NUL byte
    pub fn display_name(&self) -> String {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }
}

/// Decoded film table: header plus 256-entry colour LUT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilmTable {
    pub header: Header,
    pub lut: [LutEntry; LUT_LEN],
}

/// Decode a flat (already decrypted) buffer into a film table
pub fn decode(data: &[u8]) -> Result<FilmTable> {
    if data.len() != FILM_TABLE_SIZE {
        return Err(Error::IncorrectSizeTable {
            expected: FILM_TABLE_SIZE,
            received: data.len(),
        });
    }

    let mut name = [0u8; NAME_SIZE];
    name.copy_from_slice(&data[NAME_OFFSET..NAME_OFFSET + NAME_SIZE]);

    let camera_type = CameraType::from_raw(data[CAMERA_TYPE_OFFSET]);
    if let CameraType::Unknown(raw) = camera_type {
        log::debug!("camera type {raw} is outside the known range, passing through");
    }

    let mut gains = [GainTriad::default(); GAIN_TABLE_LEN];
    for (index, triad) in gains.iter_mut().enumerate() {
        let offset = GAIN_OFFSET + index * 6;
        *triad = GainTriad {
            a: LittleEndian::read_u16(&data[offset..offset + 2]),
            b: LittleEndian::read_u16(&data[offset + 2..offset + 4]),
            c: LittleEndian::read_u16(&data[offset + 4..offset + 6]),
        };
    }

    let mut magic = [MagicPair::default(); GAIN_TABLE_LEN];
    for (index, pair) in magic.iter_mut().enumerate() {
        let offset = MAGIC_OFFSET + index * 4;
        *pair = MagicPair {
            a: LittleEndian::read_u16(&data[offset..offset + 2]),
            b: LittleEndian::read_u16(&data[offset + 2..offset + 4]),
        };
    }

    let mut lut = [LutEntry::default(); LUT_LEN];
    for (index, entry) in lut.iter_mut().enumerate() {
        let offset = LUT_OFFSET + index * 4;
        *entry = LutEntry {
            delta_r: data[offset],
            delta_g: data[offset + 1],
            delta_b: data[offset + 2],
            dummy: data[offset + 3],
        };
    }

    Ok(FilmTable {
        header: Header {
            name,
            camera_type,
            flags: data[FLAGS_OFFSET],
            aspect_wide: data[ASPECT_WIDE_OFFSET],
            aspect_tall: data[ASPECT_TALL_OFFSET],
            gains,
            magic,
        },
        lut,
    })
}

/// Encode a film table back into its flat 1132-byte form
pub fn encode(table: &FilmTable) -> Vec<u8> {
    let mut buffer = vec![0u8; FILM_TABLE_SIZE];

    buffer[NAME_OFFSET..NAME_OFFSET + NAME_SIZE].copy_from_slice(&table.header.name);
    buffer[CAMERA_TYPE_OFFSET] = table.header.camera_type.as_raw();
    buffer[FLAGS_OFFSET] = table.header.flags;
    buffer[ASPECT_WIDE_OFFSET] = table.header.aspect_wide;
    buffer[ASPECT_TALL_OFFSET] = table.header.aspect_tall;

    for (index, triad) in table.header.gains.iter().enumerate() {
        let offset = GAIN_OFFSET + index * 6;
        LittleEndian::write_u16(&mut buffer[offset..offset + 2], triad.a);
        LittleEndian::write_u16(&mut buffer[offset + 2..offset + 4], triad.b);
        LittleEndian::write_u16(&mut buffer[offset + 4..offset + 6], triad.c);
    }

    for (index, pair) in table.header.magic.iter().enumerate() {
        let offset = MAGIC_OFFSET + index * 4;
        LittleEndian::write_u16(&mut buffer[offset..offset + 2], pair.a);
        LittleEndian::write_u16(&mut buffer[offset + 2..offset + 4], pair.b);
    }

    for (index, entry) in table.lut.iter().enumerate() {
        let offset = LUT_OFFSET + index * 4;
        buffer[offset..offset + 4].copy_from_slice(&entry.to_bytes());
    }

    buffer
}
