//! ICNS container packer.
//!
//! An ICNS file is an 8-byte header (`"icns"` magic plus a big-endian u32
//! total length) followed by a sequence of icon elements. Each element is a
//! 4-byte OSType tag, a big-endian u32 length, and a PNG payload. Both the
//! element length and the file length include their own 8-byte headers.
//!
//! [`pack`] is a pure function: no I/O, deterministic output for a given
//! entry slice, elements emitted in slice order.

/// ICNS file magic.
pub const MAGIC: &[u8; 4] = b"icns";

/// Bytes occupied by a type tag plus its length field.
const ELEMENT_HEADER_LEN: u32 = 8;

/// Pixel size to OSType mapping for PNG-payload icon elements.
const ICON_TYPES: &[(u32, &[u8; 4])] = &[
    (16, b"icp4"),
    (32, b"icp5"),
    (64, b"icp6"),
    (128, b"ic07"),
    (256, b"ic08"),
    (512, b"ic09"),
    (1024, b"ic10"),
];

/// Look up the OSType tag for a pixel size.
///
/// Returns `None` for sizes outside the standard table.
pub fn type_for_size(size: u32) -> Option<&'static [u8; 4]> {
    ICON_TYPES
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, tag)| *tag)
}

/// Assemble size-tagged PNG payloads into an ICNS container.
///
/// Entries are `(pixel_size, png_bytes)` pairs; elements are emitted in the
/// order given. Entries whose size has no OSType in the standard table are
/// skipped. The standard size-generation step only produces table-covered
/// sizes, so in practice nothing is dropped.
///
/// # Example
///
/// ```
/// use fileconv::icon::icns;
///
/// let png = vec![0u8; 100];
/// let data = icns::pack(&[(16, &png)]);
/// assert_eq!(&data[..4], b"icns");
/// assert_eq!(data.len(), 8 + 100 + 8);
/// ```
pub fn pack<B: AsRef<[u8]>>(entries: &[(u32, B)]) -> Vec<u8> {
    let mut elements = Vec::new();
    for (size, payload) in entries {
        let Some(tag) = type_for_size(*size) else {
            log::debug!("No ICNS element type for {}px, skipping", size);
            continue;
        };
        let payload = payload.as_ref();
        let element_len = payload.len() as u32 + ELEMENT_HEADER_LEN;
        elements.extend_from_slice(tag);
        elements.extend_from_slice(&element_len.to_be_bytes());
        elements.extend_from_slice(payload);
    }

    let total_len = elements.len() as u32 + ELEMENT_HEADER_LEN;
    let mut out = Vec::with_capacity(total_len as usize);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&total_len.to_be_bytes());
    out.extend_from_slice(&elements);
    out
}
