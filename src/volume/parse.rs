use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use super::{Volume, VolumeError};

#[allow(clippy::expect_used)]
static VOLUME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*(?:
            \#(?P<raw>\d+)
          | (?P<silent>mute|muted|-inf\s*db)
          | (?P<number>[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?)\s*(?P<unit>%|db)?
        )\s*$",
    )
    .expect("volume pattern is valid")
});

/// Parses the textual volume forms accepted on the command line:
/// - `50%` - percentage of the raw `NORM` value
/// - `-6dB`, `-6 dB`, `-inf dB` - decibels
/// - `0.5` - linear amplitude factor
/// - `#65536` - raw fixed-point value
/// - `mute` - silence
impl FromStr for Volume {
    type Err = VolumeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let syntax_error = || VolumeError::InvalidVolumeSyntax {
            input: input.to_string(),
        };

        let captures = VOLUME_PATTERN.captures(input).ok_or_else(syntax_error)?;

        if let Some(raw) = captures.name("raw") {
            let raw = raw.as_str().parse::<u32>().map_err(|_| syntax_error())?;
            return Volume::new(raw);
        }

        if captures.name("silent").is_some() {
            return Ok(Volume::MUTED);
        }

        let number = captures
            .name("number")
            .ok_or_else(syntax_error)?
            .as_str()
            .parse::<f64>()
            .map_err(|_| syntax_error())?;

        match captures.name("unit").map(|unit| unit.as_str().to_ascii_lowercase()) {
            Some(unit) if unit == "%" => Volume::from_percent(number),
            Some(_) => Volume::try_from_db(number),
            None => Volume::try_from_linear(number),
        }
    }
}
