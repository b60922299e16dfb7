//! Bundled fingerprint tables.
//!
//! Tables are declared newest range first; nearest-match ties resolve to the
//! more recent fingerprint. Some adjacent ranges overlap by a version or two;
//! the earlier declaration wins.

use super::range::{VersionRange, VersionRangeTable};

// TLS: record version, ciphers, extensions, groups, point formats.

/// Chromium TLS fragments (all platforms).
pub static CHROME_TLS: VersionRangeTable = VersionRangeTable::from_static(CHROME_TLS_RANGES);

const CHROME_TLS_RANGES: &[VersionRange] = &[
    VersionRange::single(
        141,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,10-5-51-35-13-16-18-65281-45-27-0-23-43-65037-11-17613,4588-29-23-24,0",
    ),
    VersionRange::new(
        137,
        140,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,13-51-17613-5-0-65281-16-11-23-35-27-43-65037-18-10-45,4588-29-23-24,0",
    ),
    VersionRange::new(
        133,
        136,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513-21,29-23-24-25,0",
    ),
    VersionRange::new(
        131,
        132,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513-21,29-23-24-25,0",
    ),
    VersionRange::new(
        124,
        130,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513-21,29-23-24-25,0",
    ),
    VersionRange::new(
        120,
        123,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513-21,29-23-24-25,0",
    ),
    VersionRange::new(
        116,
        119,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24-25,0",
    ),
    VersionRange::new(
        110,
        115,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24,0",
    ),
    VersionRange::new(
        104,
        109,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24,0",
    ),
    VersionRange::new(
        100,
        103,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24,0",
    ),
    VersionRange::single(
        99,
        "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24,0",
    ),
    VersionRange::new(
        83,
        98,
        "772,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-17513,29-23-24,0",
    ),
    VersionRange::new(
        73,
        82,
        "772,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53-10,0-23-65281-10-11-35-16-5-13-18-51-45-43-27,29-23-24,0",
    ),
];

/// Firefox TLS fragments (all platforms).
pub static FIREFOX_TLS: VersionRangeTable = VersionRangeTable::from_static(FIREFOX_TLS_RANGES);

const FIREFOX_TLS_RANGES: &[VersionRange] = &[
    VersionRange::new(
        136,
        143,
        "771,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-34-18-51-43-13-45-28-27-65037,4588-29-23-24-25-256-257,0",
    ),
    VersionRange::new(
        133,
        135,
        "771,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53,0-23-65281-10-11-16-5-34-18-51-43-13-28-27-65037,4588-29-23-24-25-256-257,0",
    ),
    VersionRange::new(
        120,
        132,
        "772,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-34-51-43-13-45-28,29-23-24-25-256-257,0",
    ),
    VersionRange::new(
        114,
        119,
        "772,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-34-51-43-13-45-28,29-23-24-25-256-257,0",
    ),
    VersionRange::new(
        89,
        113,
        "772,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-34-51-43-13-45-28,29-23-24-25-256-257,0",
    ),
    VersionRange::new(
        75,
        88,
        "772,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-156-157-47-53-10,0-23-65281-10-11-35-16-5-51-43-13-45-28,29-23-24-25-256-257,0",
    ),
    VersionRange::new(
        65,
        74,
        "772,4865-4867-4866-49195-49199-52393-52392-49196-49200-49162-49161-49171-49172-51-57-47-53-10,0-23-65281-10-11-35-16-5-51-43-13-45-28,29-23-24-25-256-257,0",
    ),
];

/// WebKit TLS fragments, keyed by Safari / iOS major.
pub static SAFARI_TLS: VersionRangeTable = VersionRangeTable::from_static(SAFARI_TLS_RANGES);

const SAFARI_TLS_RANGES: &[VersionRange] = &[
    VersionRange::single(
        26,
        "771,4866-4867-4865-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-30-24-25,0",
    ),
    VersionRange::new(
        18,
        25,
        "771,4866-4867-4865-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-30-24-25,0",
    ),
    VersionRange::new(
        17,
        18,
        "771,4866-4867-4865-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-30-24-25,0",
    ),
    VersionRange::single(
        17,
        "771,4865-4866-4867-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-24-25,0",
    ),
    VersionRange::new(
        15,
        16,
        "771,4865-4866-4867-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-24-25,0",
    ),
    VersionRange::single(
        15,
        "771,4865-4866-4867-49196-49195-52393-49200-49199-52392-49162-49161-49172-49171-157-156-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-24-25,0",
    ),
    VersionRange::single(
        14,
        "771,4865-4866-4867-49196-49195-52393-49200-49199-52392-49188-49187-49162-49161-49192-49191-49172-49171-157-156-61-60-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-24-25,0",
    ),
    VersionRange::single(
        13,
        "771,4865-4866-4867-49196-49195-49188-49187-49162-49161-52393-49200-49199-49192-49191-49172-49171-52392-157-156-61-60-53-47-49160-49170-10,0-23-65281-10-11-16-5-13-18-51-45-43-27-21,29-23-24-25,0",
    ),
];

// HTTP/2: settings | window update | priority frames | pseudo-header order.

/// Chromium desktop HTTP/2 fragments.
pub static CHROMIUM_DESKTOP_H2: VersionRangeTable =
    VersionRangeTable::from_static(CHROMIUM_DESKTOP_H2_RANGES);

const CHROMIUM_DESKTOP_H2_RANGES: &[VersionRange] = &[
    VersionRange::new(
        137,
        141,
        "1:65536;2:0;4:6291456;6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        130,
        136,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        120,
        131,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        115,
        119,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        106,
        114,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        99,
        105,
        "1:65536,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        80,
        98,
        "1:65536,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        73,
        79,
        "1:65536,3:1000,4:6291456|15663105|0|m,a,s,p",
    ),
];

/// Chromium Android HTTP/2 fragments.
pub static CHROMIUM_ANDROID_H2: VersionRangeTable =
    VersionRangeTable::from_static(CHROMIUM_ANDROID_H2_RANGES);

const CHROMIUM_ANDROID_H2_RANGES: &[VersionRange] = &[
    VersionRange::new(
        137,
        141,
        "1:65536;2:0;4:6291456;6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        130,
        136,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        120,
        131,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        115,
        119,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        106,
        114,
        "1:65536,2:0,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        99,
        105,
        "1:65536,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        80,
        98,
        "1:65536,3:1000,4:6291456,6:262144|15663105|0|m,a,s,p",
    ),
    VersionRange::new(
        73,
        79,
        "1:65536,3:1000,4:6291456|15663105|0|m,a,s,p",
    ),
];

/// Firefox desktop HTTP/2 fragments.
pub static FIREFOX_DESKTOP_H2: VersionRangeTable =
    VersionRangeTable::from_static(FIREFOX_DESKTOP_H2_RANGES);

const FIREFOX_DESKTOP_H2_RANGES: &[VersionRange] = &[
    VersionRange::new(
        136,
        143,
        "1:65536;2:0;4:131072;5:16384|12517377|0|m,p,a,s",
    ),
    VersionRange::new(
        133,
        135,
        "1:65536,4:131072,5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s",
    ),
    VersionRange::new(
        120,
        132,
        "1:65536,4:131072,5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s",
    ),
    VersionRange::new(
        65,
        119,
        "1:65536,4:131072,5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s",
    ),
];

/// Firefox Android HTTP/2 fragments.
pub static FIREFOX_ANDROID_H2: VersionRangeTable =
    VersionRangeTable::from_static(FIREFOX_ANDROID_H2_RANGES);

const FIREFOX_ANDROID_H2_RANGES: &[VersionRange] = &[
    VersionRange::new(
        136,
        143,
        "1:4096;2:0;4:32768;5:16384|12517377|0|m,p,a,s",
    ),
    VersionRange::new(
        133,
        135,
        "1:4096,4:32768,5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s",
    ),
    VersionRange::new(
        120,
        132,
        "1:4096,4:32768,5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s",
    ),
    VersionRange::new(
        65,
        119,
        "1:4096,4:32768,5:16384|12517377|3:0:0:201,5:0:0:101,7:0:0:1,9:0:7:1,11:0:3:1,13:0:0:241|m,p,a,s",
    ),
];

/// Safari macOS HTTP/2 fragments.
pub static SAFARI_DESKTOP_H2: VersionRangeTable =
    VersionRangeTable::from_static(SAFARI_DESKTOP_H2_RANGES);

const SAFARI_DESKTOP_H2_RANGES: &[VersionRange] = &[
    VersionRange::new(
        18,
        26,
        "2:0;3:100;4:2097152;9:1|10420225|0|m,s,a,p",
    ),
    VersionRange::single(
        17,
        "4:4194304,3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::new(
        15,
        16,
        "4:4194304,3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::single(
        14,
        "4:4194304,3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::single(
        13,
        "4:1048576,3:100|10485760|0|m,s,p,a",
    ),
];

/// WebKit mobile HTTP/2 fragments.
pub static SAFARI_MOBILE_H2: VersionRangeTable =
    VersionRangeTable::from_static(SAFARI_MOBILE_H2_RANGES);

const SAFARI_MOBILE_H2_RANGES: &[VersionRange] = &[
    VersionRange::single(
        26,
        "2:0;3:100;4:2097152;9:1|10420225|0|m,s,a,p",
    ),
    VersionRange::new(
        18,
        25,
        "2:0;4:2097152;3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::new(
        17,
        18,
        "2:0;4:2097152;3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::new(
        15,
        16,
        "4:2097152,3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::single(
        14,
        "4:2097152,3:100|10485760|0|m,s,p,a",
    ),
    VersionRange::single(
        13,
        "4:1048576,3:100|10485760|0|m,s,p,a",
    ),
];
