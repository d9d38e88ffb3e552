pub mod trip;
pub mod itinerary;
pub mod accommodation;
pub mod transportation;
pub mod meal;
pub mod companion;
pub mod document;
pub mod album;

pub use trip::*;
pub use itinerary::*;
pub use accommodation::*;
pub use transportation::*;
pub use meal::*;
pub use companion::*;
pub use document::*;
pub use album::*;

/// Gemensamma fält för alla lagrade poster: id och tidsstämplar.
/// Repositoryerna sätter dem vid skrivning; modellerna rör dem aldrig själva.
pub trait StoredRecord {
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
    fn created_at(&self) -> Option<&str>;
    fn set_created_at(&mut self, ts: String);
    fn set_updated_at(&mut self, ts: String);
}

macro_rules! impl_stored_record {
    ($($ty:ty),+ $(,)?) => {$(
        impl StoredRecord for $ty {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
            fn set_id(&mut self, id: String) {
                self.id = Some(id);
            }
            fn created_at(&self) -> Option<&str> {
                self.created_at.as_deref()
            }
            fn set_created_at(&mut self, ts: String) {
                self.created_at = Some(ts);
            }
            fn set_updated_at(&mut self, ts: String) {
                self.updated_at = Some(ts);
            }
        }
    )+};
}

impl_stored_record!(
    Trip,
    ItineraryDay,
    Accommodation,
    Transportation,
    Meal,
    Companion,
    PersonalDocument,
    TravelVisa,
    Album,
    Media,
);
