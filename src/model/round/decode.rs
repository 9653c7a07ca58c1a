use std::{io::Error as IoError, num::ParseIntError, str::Utf8Error};

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
use std::{fs::File, io::Read, path::Path};

#[cfg(feature = "async_tokio")]
use {std::path::Path, tokio::fs::File, tokio::io::AsyncRead};

#[cfg(feature = "async_std")]
use async_std::{fs::File, io::Read, path::Path};

use super::{
    reader::FileReader, ArrowCount, DistanceUnit, Location, RoundDistance, RoundGeometry,
    RoundSubType, Scoring,
};

/// Latest version of the round definition format that can be decoded.
pub const LATEST_FORMAT_VERSION: u8 = 1;

/// Anything that could go wrong while decoding a [`RoundGeometry`].
#[derive(Debug, thiserror::Error)]
pub enum ParseRoundError {
    #[error("IO error")]
    Io(#[from] IoError),
    #[error("expected `archery round format v` at file begin")]
    IncorrectFileHeader,
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),
    #[error("line {0} is not valid UTF-8")]
    Utf8(usize, #[source] Utf8Error),
    #[error("invalid line {0}")]
    InvalidLine(usize),
    #[error("failed to parse number in line {0}")]
    Number(usize, #[source] ParseIntError),
    #[error("unknown distance unit `{0}`")]
    UnknownUnit(String),
    #[error("unknown location `{0}`")]
    UnknownLocation(String),
    #[error("unknown scoring `{0}`")]
    UnknownScoring(String),
    #[error("missing field `{0}` in [General] section")]
    MissingField(&'static str),
}

/// Anything that could go wrong while decoding a single line.
///
/// The line number is attached by the caller.
#[derive(Debug)]
enum LineError {
    Invalid,
    Number(ParseIntError),
    Unit(String),
    Location(String),
    Scoring(String),
}

impl From<ParseIntError> for LineError {
    fn from(err: ParseIntError) -> Self {
        Self::Number(err)
    }
}

impl LineError {
    fn with_line(self, line_number: usize) -> ParseRoundError {
        match self {
            Self::Invalid => ParseRoundError::InvalidLine(line_number),
            Self::Number(err) => ParseRoundError::Number(line_number, err),
            Self::Unit(unit) => ParseRoundError::UnknownUnit(unit),
            Self::Location(location) => ParseRoundError::UnknownLocation(location),
            Self::Scoring(scoring) => ParseRoundError::UnknownScoring(scoring),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    None,
    General,
    ArrowCounts,
    SubTypes,
    Distances,
}

impl Section {
    fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            b"General" => Self::General,
            b"ArrowCounts" => Self::ArrowCounts,
            b"SubTypes" => Self::SubTypes,
            b"Distances" => Self::Distances,
            _ => Self::None,
        }
    }
}

/// The state of a [`RoundGeometry`] while decoding.
#[derive(Default)]
struct RoundState {
    name: Option<String>,
    unit: Option<DistanceUnit>,
    location: Option<Location>,
    scoring: Option<Scoring>,
    arrow_counts: Vec<ArrowCount>,
    distances: Vec<RoundDistance>,
    sub_types: Vec<RoundSubType>,
}

impl RoundState {
    fn parse_line(&mut self, section: Section, line: &str) -> Result<(), LineError> {
        match section {
            Section::General => self.parse_general(line),
            Section::ArrowCounts => self.parse_arrow_counts(line),
            Section::SubTypes => self.parse_sub_types(line),
            Section::Distances => self.parse_distances(line),
            Section::None => Ok(()),
        }
    }

    fn parse_general(&mut self, line: &str) -> Result<(), LineError> {
        let (key, value) = split_colon(line).ok_or(LineError::Invalid)?;

        match key {
            "Name" => self.name = Some(value.to_owned()),
            "Unit" => {
                let unit = match value {
                    "m" | "Metres" => DistanceUnit::Metres,
                    "yd" | "Yards" => DistanceUnit::Yards,
                    _ => return Err(LineError::Unit(value.to_owned())),
                };

                self.unit = Some(unit);
            }
            "Location" => {
                let location = match value {
                    "Indoor" => Location::Indoor,
                    "Outdoor" => Location::Outdoor,
                    _ => return Err(LineError::Location(value.to_owned())),
                };

                self.location = Some(location);
            }
            "Scoring" => {
                let scoring = match value {
                    "TenZone" => Scoring::TenZone,
                    "FiveZone" => Scoring::FiveZone,
                    "Worcester" => Scoring::Worcester,
                    _ => return Err(LineError::Scoring(value.to_owned())),
                };

                self.scoring = Some(scoring);
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(key, "Skipping unknown key in [General] section");
            }
        }

        Ok(())
    }

    fn parse_arrow_counts(&mut self, line: &str) -> Result<(), LineError> {
        let [distance_number, face_size_cm, arrow_count] = split_numbers(line)?;

        self.arrow_counts.push(ArrowCount {
            distance_number,
            face_size_cm,
            arrow_count,
        });

        Ok(())
    }

    fn parse_sub_types(&mut self, line: &str) -> Result<(), LineError> {
        let (id, name) = line.split_once(',').ok_or(LineError::Invalid)?;

        self.sub_types.push(RoundSubType {
            id: id.trim().parse()?,
            name: name.trim().to_owned(),
        });

        Ok(())
    }

    fn parse_distances(&mut self, line: &str) -> Result<(), LineError> {
        let [distance_number, sub_type, distance] = split_numbers(line)?;

        self.distances.push(RoundDistance {
            distance_number,
            sub_type,
            distance,
        });

        Ok(())
    }

    fn into_round(self) -> Result<RoundGeometry, ParseRoundError> {
        let Self {
            name,
            unit,
            location,
            scoring,
            arrow_counts,
            distances,
            sub_types,
        } = self;

        Ok(RoundGeometry {
            name: name.ok_or(ParseRoundError::MissingField("Name"))?,
            unit: unit.ok_or(ParseRoundError::MissingField("Unit"))?,
            location: location.unwrap_or_default(),
            scoring: scoring.unwrap_or_default(),
            arrow_counts,
            distances,
            sub_types,
        })
    }
}

fn split_colon(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;

    Some((key.trim(), value.trim()))
}

fn split_numbers<const N: usize>(line: &str) -> Result<[u32; N], LineError> {
    let mut numbers = [0; N];
    let mut split = line.split(',');

    for number in numbers.iter_mut() {
        *number = split.next().ok_or(LineError::Invalid)?.trim().parse()?;
    }

    if split.next().is_some() {
        return Err(LineError::Invalid);
    }

    Ok(numbers)
}

fn check_header<R>(reader: &FileReader<R>) -> Result<(), ParseRoundError> {
    match reader.version() {
        Some(version) if version <= LATEST_FORMAT_VERSION => Ok(()),
        Some(version) => Err(ParseRoundError::UnsupportedVersion(version)),
        None => Err(ParseRoundError::IncorrectFileHeader),
    }
}

fn process_line<R>(
    reader: &FileReader<R>,
    section: &mut Section,
    state: &mut RoundState,
) -> Result<(), ParseRoundError> {
    if let Some(bytes) = reader.get_section() {
        *section = Section::from_bytes(bytes);

        #[cfg(feature = "tracing")]
        if *section == Section::None {
            tracing::debug!(
                section = %String::from_utf8_lossy(bytes),
                "Skipping unknown section"
            );
        }

        return Ok(());
    }

    let line_number = reader.line_number();

    let line = reader
        .get_line()
        .map_err(|err| ParseRoundError::Utf8(line_number, err))?;

    if line.is_empty() {
        return Ok(());
    }

    state.parse_line(*section, line).map_err(|err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(line_number, line, ?err, "Failed to decode round definition");

        err.with_line(line_number)
    })
}

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
impl RoundGeometry {
    /// Decode a [`RoundGeometry`] from the content of a round definition.
    pub fn parse<R: Read>(src: R) -> Result<Self, ParseRoundError> {
        let mut reader = FileReader::new(src);

        if reader.next_line()? == 0 {
            return Err(ParseRoundError::IncorrectFileHeader);
        }

        check_header(&reader)?;

        let mut section = Section::None;
        let mut state = RoundState::default();

        while reader.next_line()? != 0 {
            process_line(&reader, &mut section, &mut state)?;
        }

        state.into_round()
    }

    /// Decode a [`RoundGeometry`] by providing a path to a round definition.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseRoundError> {
        Self::parse(File::open(path)?)
    }

    /// Decode a [`RoundGeometry`] by providing the content of a round
    /// definition as a slice of bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseRoundError> {
        Self::parse(bytes)
    }
}

#[cfg(feature = "async_tokio")]
impl RoundGeometry {
    /// Decode a [`RoundGeometry`] from the content of a round definition.
    pub async fn parse<R: AsyncRead + Unpin>(src: R) -> Result<Self, ParseRoundError> {
        let mut reader = FileReader::new(src);

        if reader.next_line().await? == 0 {
            return Err(ParseRoundError::IncorrectFileHeader);
        }

        check_header(&reader)?;

        let mut section = Section::None;
        let mut state = RoundState::default();

        while reader.next_line().await? != 0 {
            process_line(&reader, &mut section, &mut state)?;
        }

        state.into_round()
    }

    /// Decode a [`RoundGeometry`] by providing a path to a round definition.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseRoundError> {
        Self::parse(File::open(path).await?).await
    }

    /// Decode a [`RoundGeometry`] by providing the content of a round
    /// definition as a slice of bytes.
    pub async fn from_bytes(bytes: &[u8]) -> Result<Self, ParseRoundError> {
        Self::parse(bytes).await
    }
}

#[cfg(feature = "async_std")]
impl RoundGeometry {
    /// Decode a [`RoundGeometry`] from the content of a round definition.
    pub async fn parse<R: Read + Unpin>(src: R) -> Result<Self, ParseRoundError> {
        let mut reader = FileReader::new(src);

        if reader.next_line().await? == 0 {
            return Err(ParseRoundError::IncorrectFileHeader);
        }

        check_header(&reader)?;

        let mut section = Section::None;
        let mut state = RoundState::default();

        while reader.next_line().await? != 0 {
            process_line(&reader, &mut section, &mut state)?;
        }

        state.into_round()
    }

    /// Decode a [`RoundGeometry`] by providing a path to a round definition.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseRoundError> {
        Self::parse(File::open(path.as_ref()).await?).await
    }

    /// Decode a [`RoundGeometry`] by providing the content of a round
    /// definition as a slice of bytes.
    pub async fn from_bytes(bytes: &[u8]) -> Result<Self, ParseRoundError> {
        Self::parse(bytes).await
    }
}
