//! TLS extension order randomization.
//!
//! Chrome has permuted its ClientHello extensions since v110, so a fixed
//! order is itself a tell. Randomized orders here keep the exact multiset of
//! extension ids; only ids not anchored to the head or tail move.

use rand::seq::SliceRandom;
use rand::Rng;

/// Where an extension id may appear in a randomized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionClass {
    /// Kept before every free id, in canonical relative order.
    Head,
    /// Kept after every free id, in canonical relative order.
    Tail,
    /// Permuted.
    #[default]
    Free,
}

/// Position constraint for one extension id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub extension: u16,
    pub class: PositionClass,
}

impl Anchor {
    pub const fn new(extension: u16, class: PositionClass) -> Self {
        Self { extension, class }
    }

    pub const fn head(extension: u16) -> Self {
        Self::new(extension, PositionClass::Head)
    }

    pub const fn tail(extension: u16) -> Self {
        Self::new(extension, PositionClass::Tail)
    }
}

/// Whether and how to randomize extension order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomizationPolicy {
    pub enabled: bool,
    /// First anchor listed for an id wins.
    pub anchors: Vec<Anchor>,
}

impl Default for RandomizationPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            anchors: Vec::new(),
        }
    }
}

impl RandomizationPolicy {
    /// Randomize with the given anchors.
    pub fn randomized(anchors: impl Into<Vec<Anchor>>) -> Self {
        Self {
            enabled: true,
            anchors: anchors.into(),
        }
    }

    /// Keep the canonical order exactly.
    pub fn fixed() -> Self {
        Self {
            enabled: false,
            anchors: Vec::new(),
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    /// Position class for an id.
    pub fn class_of(&self, extension: u16) -> PositionClass {
        self.anchors
            .iter()
            .find(|a| a.extension == extension)
            .map(|a| a.class)
            .unwrap_or_default()
    }

    /// Order `canonical` using thread-local randomness.
    pub fn order(&self, canonical: &[u16]) -> Vec<u16> {
        self.order_with_rng(canonical, &mut rand::thread_rng())
    }

    /// Order `canonical` drawing from `rng`.
    ///
    /// Disabled policies return `canonical` unchanged. Enabled policies return
    /// `head ++ shuffle(free) ++ tail`.
    pub fn order_with_rng<R: Rng + ?Sized>(&self, canonical: &[u16], rng: &mut R) -> Vec<u16> {
        if !self.enabled {
            return canonical.to_vec();
        }

        let mut head = Vec::new();
        let mut free = Vec::with_capacity(canonical.len());
        let mut tail = Vec::new();
        for &id in canonical {
            match self.class_of(id) {
                PositionClass::Head => head.push(id),
                PositionClass::Tail => tail.push(id),
                PositionClass::Free => free.push(id),
            }
        }

        free.shuffle(rng);

        head.extend(free);
        head.extend(tail);
        head
    }
}

/// IANA TLS extension names accepted by the profile builder.
const EXTENSION_NAMES: &[(&str, u16)] = &[
    ("server_name", 0),
    ("max_fragment_length", 1),
    ("status_request", 5),
    ("supported_groups", 10),
    ("ec_point_formats", 11),
    ("signature_algorithms", 13),
    ("use_srtp", 14),
    ("heartbeat", 15),
    ("application_layer_protocol_negotiation", 16),
    ("signed_certificate_timestamp", 18),
    ("padding", 21),
    ("encrypt_then_mac", 22),
    ("extended_master_secret", 23),
    ("compress_certificate", 27),
    ("record_size_limit", 28),
    ("delegated_credentials", 34),
    ("session_ticket", 35),
    ("pre_shared_key", 41),
    ("early_data", 42),
    ("supported_versions", 43),
    ("cookie", 44),
    ("psk_key_exchange_modes", 45),
    ("certificate_authorities", 47),
    ("post_handshake_auth", 49),
    ("signature_algorithms_cert", 50),
    ("key_share", 51),
    ("application_settings_old", 17513),
    ("application_settings", 17613),
    ("encrypted_client_hello", 65037),
    ("renegotiation_info", 65281),
];

/// Extension id for an IANA name.
pub fn extension_id(name: &str) -> Option<u16> {
    EXTENSION_NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, id)| id)
}

/// IANA name for an extension id.
pub fn extension_name(id: u16) -> Option<&'static str> {
    EXTENSION_NAMES
        .iter()
        .find(|&&(_, i)| i == id)
        .map(|&(n, _)| n)
}

/// GREASE values have the form `0x?A?A` with equal bytes (RFC 8701).
pub fn is_grease(id: u16) -> bool {
    (id & 0x0f0f) == 0x0a0a && (id >> 8) == (id & 0xff)
}
