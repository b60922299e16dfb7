//! HTTP/2 fingerprint configuration (Akamai format).
//!
//! `SETTINGS|WINDOW_UPDATE|PRIORITY|pseudo-header order`, e.g.
//! `1:65536;2:0;4:6291456;6:262144|15663105|0|m,a,s,p`. Older captures join
//! settings with `,`; both separators are accepted.

use std::fmt;

use crate::error::{Error, Result};

pub const SETTINGS_HEADER_TABLE_SIZE: u16 = 0x1;
pub const SETTINGS_ENABLE_PUSH: u16 = 0x2;
pub const SETTINGS_MAX_CONCURRENT_STREAMS: u16 = 0x3;
pub const SETTINGS_INITIAL_WINDOW_SIZE: u16 = 0x4;
pub const SETTINGS_MAX_FRAME_SIZE: u16 = 0x5;
pub const SETTINGS_MAX_HEADER_LIST_SIZE: u16 = 0x6;
pub const SETTINGS_NO_RFC7540_PRIORITIES: u16 = 0x9;

/// Pseudo-header ordering for HTTP/2 fingerprinting.
///
/// Different browsers send pseudo-headers in different orders. This order is
/// visible in the Akamai HTTP/2 fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PseudoHeaderOrder {
    /// Chrome order: :method, :scheme, :authority, :path (m,s,a,p)
    ///
    /// The bundled Chromium captures send `m,a,s,p` and parse as [`Standard`](Self::Standard).
    #[default]
    Chrome,
    /// Firefox order: :method, :path, :authority, :scheme (m,p,a,s)
    Firefox,
    /// Safari order: :method, :scheme, :path, :authority (m,s,p,a)
    Safari,
    /// :method, :authority, :scheme, :path (m,a,s,p); bundled Chromium data.
    Standard,
    /// Any other permutation, as Akamai letters.
    Custom([u8; 4]),
}

impl PseudoHeaderOrder {
    /// Parse Akamai letters (`m,s,a,p`).
    pub fn parse(field: &str) -> Result<Self> {
        let letters: Vec<&str> = field.split(',').map(str::trim).collect();
        let mut order = [0u8; 4];
        if letters.len() != 4 {
            return Err(Error::invalid_akamai(format!(
                "pseudo-header order needs 4 letters, got '{}'",
                field
            )));
        }
        for (slot, letter) in order.iter_mut().zip(&letters) {
            *slot = match *letter {
                "m" | "a" | "s" | "p" => letter.as_bytes()[0],
                other => {
                    return Err(Error::invalid_akamai(format!(
                        "unknown pseudo-header letter '{}'",
                        other
                    )))
                }
            };
        }
        let mut seen = order;
        seen.sort_unstable();
        if seen != *b"amps" {
            return Err(Error::invalid_akamai(format!(
                "pseudo-header order repeats a letter: '{}'",
                field
            )));
        }

        Ok(match &order {
            b"msap" => Self::Chrome,
            b"mpas" => Self::Firefox,
            b"mspa" => Self::Safari,
            b"masp" => Self::Standard,
            _ => Self::Custom(order),
        })
    }

    /// Akamai letters in order.
    pub fn letters(&self) -> [u8; 4] {
        match self {
            Self::Chrome => *b"msap",
            Self::Firefox => *b"mpas",
            Self::Safari => *b"mspa",
            Self::Standard => *b"masp",
            Self::Custom(order) => *order,
        }
    }

    /// Get the Akamai fingerprint string for this order.
    pub fn akamai_string(&self) -> String {
        self.letters()
            .iter()
            .map(|&b| (b as char).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Pseudo-header names in send order.
    pub fn header_names(&self) -> [&'static str; 4] {
        self.letters().map(|b| match b {
            b'm' => ":method",
            b'a' => ":authority",
            b's' => ":scheme",
            _ => ":path",
        })
    }
}

/// One PRIORITY frame: `stream:exclusive:dependency:weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFrame {
    pub stream_id: u32,
    pub exclusive: bool,
    pub depends_on: u32,
    pub weight: u16,
}

impl fmt::Display for PriorityFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.stream_id, self.exclusive as u8, self.depends_on, self.weight
        )
    }
}

/// Parsed Akamai HTTP/2 fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Http2Settings {
    /// SETTINGS pairs in send order.
    pub settings: Vec<(u16, u32)>,
    /// Connection-level WINDOW_UPDATE increment (0 when none is sent).
    pub initial_window_update: u32,
    /// PRIORITY frames sent after the preface.
    pub priorities: Vec<PriorityFrame>,
    pub pseudo_order: PseudoHeaderOrder,
}

impl Default for Http2Settings {
    fn default() -> Self {
        // Chrome 137+ capture; its m,a,s,p order is `Standard`
        Self {
            settings: vec![
                (SETTINGS_HEADER_TABLE_SIZE, 65536),
                (SETTINGS_ENABLE_PUSH, 0),
                (SETTINGS_INITIAL_WINDOW_SIZE, 6291456),
                (SETTINGS_MAX_HEADER_LIST_SIZE, 262144),
            ],
            initial_window_update: 15663105,
            priorities: Vec::new(),
            pseudo_order: PseudoHeaderOrder::Standard,
        }
    }
}

impl Http2Settings {
    /// Parse an Akamai fingerprint string.
    pub fn parse(akamai: &str) -> Result<Self> {
        let fields: Vec<&str> = akamai.trim().split('|').collect();
        if fields.len() != 4 {
            return Err(Error::invalid_akamai(format!(
                "expected 4 pipe-separated fields, found {} in '{}'",
                fields.len(),
                akamai
            )));
        }

        let initial_window_update = fields[1].trim().parse::<u32>().map_err(|_| {
            Error::invalid_akamai(format!("bad window update '{}'", fields[1]))
        })?;

        Ok(Self {
            settings: parse_settings(fields[0])?,
            initial_window_update,
            priorities: parse_priorities(fields[2])?,
            pseudo_order: PseudoHeaderOrder::parse(fields[3])?,
        })
    }

    /// Render in canonical form (`;` between settings).
    pub fn akamai_string(&self) -> String {
        let settings = if self.settings.is_empty() {
            "0".to_string()
        } else {
            self.settings
                .iter()
                .map(|(id, value)| format!("{}:{}", id, value))
                .collect::<Vec<_>>()
                .join(";")
        };
        let priorities = if self.priorities.is_empty() {
            "0".to_string()
        } else {
            self.priorities
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        format!(
            "{}|{}|{}|{}",
            settings,
            self.initial_window_update,
            priorities,
            self.pseudo_order.akamai_string()
        )
    }

    /// Value of a SETTINGS id, if sent.
    pub fn setting(&self, id: u16) -> Option<u32> {
        self.settings
            .iter()
            .find(|(setting, _)| *setting == id)
            .map(|&(_, value)| value)
    }

    pub fn header_table_size(&self) -> Option<u32> {
        self.setting(SETTINGS_HEADER_TABLE_SIZE)
    }

    pub fn enable_push(&self) -> Option<bool> {
        self.setting(SETTINGS_ENABLE_PUSH).map(|v| v != 0)
    }

    pub fn max_concurrent_streams(&self) -> Option<u32> {
        self.setting(SETTINGS_MAX_CONCURRENT_STREAMS)
    }

    pub fn initial_window_size(&self) -> Option<u32> {
        self.setting(SETTINGS_INITIAL_WINDOW_SIZE)
    }

    pub fn max_frame_size(&self) -> Option<u32> {
        self.setting(SETTINGS_MAX_FRAME_SIZE)
    }

    pub fn max_header_list_size(&self) -> Option<u32> {
        self.setting(SETTINGS_MAX_HEADER_LIST_SIZE)
    }
}

fn parse_settings(field: &str) -> Result<Vec<(u16, u32)>> {
    let field = field.trim();
    if field.is_empty() || field == "0" {
        return Ok(Vec::new());
    }
    field
        .split([';', ','])
        .map(|pair| {
            let bad = || Error::invalid_akamai(format!("bad setting '{}'", pair));
            let (id, value) = pair.split_once(':').ok_or_else(bad)?;
            Ok((
                id.trim().parse::<u16>().map_err(|_| bad())?,
                value.trim().parse::<u32>().map_err(|_| bad())?,
            ))
        })
        .collect()
}

fn parse_priorities(field: &str) -> Result<Vec<PriorityFrame>> {
    let field = field.trim();
    if field.is_empty() || field == "0" {
        return Ok(Vec::new());
    }
    field
        .split(',')
        .map(|frame| {
            let bad = || Error::invalid_akamai(format!("bad priority frame '{}'", frame));
            let parts: Vec<&str> = frame.trim().split(':').collect();
            if parts.len() != 4 {
                return Err(bad());
            }
            let exclusive = match parts[1] {
                "0" => false,
                "1" => true,
                _ => return Err(bad()),
            };
            Ok(PriorityFrame {
                stream_id: parts[0].parse().map_err(|_| bad())?,
                exclusive,
                depends_on: parts[2].parse().map_err(|_| bad())?,
                weight: parts[3].parse().map_err(|_| bad())?,
            })
        })
        .collect()
}
