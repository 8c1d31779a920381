use crate::domain::ports::RandomSource;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
pub const REQUEST_ID_LEN: usize = 9;

/// Builds a short, lowercase base-36 request identifier.
///
/// Identifiers are not unique across requests; they only help correlate a
/// response body with its `X-Request-ID` header and server logs.
pub fn request_id(random: &dyn RandomSource) -> String {
    let mut value = random.next_u64();
    let mut id = [b'0'; REQUEST_ID_LEN];

    for slot in id.iter_mut().rev() {
        *slot = ALPHABET[(value % 36) as usize];
        value /= 36;
    }

    id.iter().map(|byte| char::from(*byte)).collect()
}
