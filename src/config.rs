//! Startup configuration
//!
//! The saber reads `/config.json` once at boot:
//!
//! ```json
//! { "hostname": "saber", "port": 8080, "color": "green", "brightness": 40 }
//! ```
//!
//! Every field is optional. A missing or malformed file is never fatal; see
//! [`SaberConfig::load_or_default`].

use core::fmt;

use heapless::String;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::audio::ClipSet;
use crate::color::{Rgb, blade_color};
use crate::easing::{EasingCurve, ease_sqrt};
use crate::error::ConfigError;
use crate::logging::{info, warning};
use crate::session::SessionTimings;

/// Path of the configuration file on the flash filesystem
pub const CONFIG_PATH: &str = "/config.json";

const DEFAULT_HOSTNAME: &str = "hbonet.ch";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_COLOR: &str = "red";
const DEFAULT_BRIGHTNESS: u8 = 20;

/// Longest unescaped string the parser can hold, for any field
const UNESCAPE_BUFFER_SIZE: usize = 256;

/// Persisted saber settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaberConfig {
    pub hostname: String<63>,
    pub port: u16,
    /// Color name, only the first letter is significant
    pub color: String<5>,
    pub brightness: u8,
}

/// String fields of `/config.json`
#[derive(Deserialize, Default)]
#[serde(default)]
struct TextFields {
    hostname: TextSetting<63>,
    color: TextSetting<5>,
}

/// Numeric fields of `/config.json`, parsed one at a time so a bad value
/// only costs its own field
#[derive(Deserialize, Default)]
#[serde(default)]
struct PortField {
    port: Option<f64>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct BrightnessField {
    brightness: Option<f64>,
}

/// String setting that reads as unset when the value is not a string
#[derive(Default)]
struct TextSetting<const N: usize>(Option<String<N>>);

impl<'de, const N: usize> Deserialize<'de> for TextSetting<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The ignored-any path accepts every json value without knowing its type
        deserializer.deserialize_ignored_any(TextVisitor::<N>)
    }
}

struct TextVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for TextVisitor<N> {
    type Value = TextSetting<N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(TextSetting(Some(truncated(value))))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TextSetting(None))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(TextSetting(None))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(TextSetting(None))
    }
}

impl Default for SaberConfig {
    fn default() -> Self {
        Self {
            hostname: truncated(DEFAULT_HOSTNAME),
            port: DEFAULT_PORT,
            color: truncated(DEFAULT_COLOR),
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl SaberConfig {
    /// Parse a json document
    ///
    /// Only a document that is not json at all is rejected. Each field that
    /// is absent, of the wrong type or out of range keeps its default on its
    /// own. Fractional numbers are truncated. Strings are unescaped, then cut
    /// at a character boundary when longer than the field capacity.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let mut scratch = [0u8; UNESCAPE_BUFFER_SIZE];
        let (text, _) = serde_json_core::from_slice_escaped::<TextFields>(bytes, &mut scratch)
            .map_err(|_| ConfigError::Malformed)?;
        let port = serde_json_core::from_slice::<PortField>(bytes)
            .ok()
            .and_then(|(field, _)| whole_number(field.port?));
        let brightness = serde_json_core::from_slice::<BrightnessField>(bytes)
            .ok()
            .and_then(|(field, _)| whole_number(field.brightness?));

        let defaults = Self::default();
        Ok(Self {
            hostname: text.hostname.0.unwrap_or(defaults.hostname),
            port: port.unwrap_or(defaults.port),
            color: text.color.0.unwrap_or(defaults.color),
            brightness: brightness.unwrap_or(defaults.brightness),
        })
    }

    /// Read the configuration, falling back to defaults on any error
    pub fn load_or_default<P: ConfigProvider>(provider: &mut P) -> Self {
        match provider.read() {
            Ok(config) => {
                info!(
                    "config loaded: color {} brightness {}",
                    config.color.as_str(),
                    config.brightness
                );
                config
            }
            Err(error) => {
                warning!("{}, using default configuration", error);
                Self::default()
            }
        }
    }

    /// Blade color derived from the color name and brightness
    pub fn blade_color(&self) -> Rgb {
        blade_color(&self.color, self.brightness)
    }
}

/// Source of the startup configuration
pub trait ConfigProvider {
    fn read(&mut self) -> Result<SaberConfig, ConfigError>;
}

/// Provider over the raw bytes of the configuration file
///
/// `None` means the file does not exist.
#[derive(Debug, Clone, Copy)]
pub struct JsonConfig<'a>(pub Option<&'a [u8]>);

impl ConfigProvider for JsonConfig<'_> {
    fn read(&mut self) -> Result<SaberConfig, ConfigError> {
        let bytes = self.0.ok_or(ConfigError::Missing)?;
        SaberConfig::from_json(bytes)
    }
}

/// Everything the animator needs to run sessions
#[derive(Debug, Clone, Copy)]
pub struct BladeConfig {
    /// Color of lit pixels
    pub color: Rgb,
    pub timings: SessionTimings,
    pub clips: ClipSet,
    /// Maps time progress to blade length
    pub easing: EasingCurve,
}

impl BladeConfig {
    /// Build the animator settings from the persisted configuration
    pub fn from_settings(settings: &SaberConfig) -> Self {
        Self {
            color: settings.blade_color(),
            ..Self::default()
        }
    }
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            color: SaberConfig::default().blade_color(),
            timings: SessionTimings::DEFAULT,
            clips: ClipSet::DEFAULT,
            easing: ease_sqrt,
        }
    }
}

/// Integer part of `value` if it fits `T`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number<T: TryFrom<u32>>(value: f64) -> Option<T> {
    let whole = libm::trunc(value);
    if !(0.0..=f64::from(u32::MAX)).contains(&whole) {
        return None;
    }
    T::try_from(whole as u32).ok()
}

/// Copy as much of `value` as fits
fn truncated<const N: usize>(value: &str) -> String<N> {
    let mut out = String::new();
    for ch in value.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_respects_char_boundaries() {
        let cut: String<4> = truncated("abé!");
        assert_eq!(cut.as_str(), "abé");

        let cut: String<3> = truncated("abé");
        assert_eq!(cut.as_str(), "ab");
    }

    #[test]
    fn whole_number_range() {
        assert_eq!(whole_number::<u8>(255.0), Some(255));
        assert_eq!(whole_number::<u8>(12.7), Some(12));
        assert_eq!(whole_number::<u8>(256.0), None);
        assert_eq!(whole_number::<u16>(-1.0), None);
        assert_eq!(whole_number::<u16>(f64::NAN), None);
    }
}
