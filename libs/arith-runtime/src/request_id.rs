use rand::TryRngCore;
use rand::rngs::OsRng;

/// Number of random bytes in a request id.
pub const REQUEST_ID_BYTES: usize = 8;

/// Generate a request id: 16 lowercase hex characters.
///
/// Returns an empty string when the OS randomness source fails; callers
/// treat that as "no id" and simply omit it.
#[must_use]
pub fn new_request_id() -> String {
    request_id_from(&mut OsRng)
}

fn request_id_from<R: TryRngCore>(rng: &mut R) -> String {
    let mut bytes = [0u8; REQUEST_ID_BYTES];
    match rng.try_fill_bytes(&mut bytes) {
        Ok(()) => hex::encode(bytes),
        Err(_) => String::new(),
    }
}
