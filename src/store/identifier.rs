use uuid::Uuid;

/// Opaque record identifier; travels over the wire as a hyphenated string.
pub type RecordId = Uuid;

/// Random (v4) so ids never repeat, not even across restarts.
pub fn new_id() -> RecordId {
    Uuid::new_v4()
}
